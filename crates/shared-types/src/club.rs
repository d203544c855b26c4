use serde::{Deserialize, Serialize};

use crate::models::StateRef;
use crate::player::default_status;

/// An affiliated club.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Club {
    pub id: i64,
    pub name: String,
    /// Mexican tax id (RFC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rfc: Option<String>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub president_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<i32>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateRef>,
}
