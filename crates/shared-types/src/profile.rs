use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::AppError;
use crate::models::Role;

// Each request is a partial record: `None` fields are omitted from the PUT
// body and leave the stored value untouched. `Some("")` clears the field and
// goes out as `null`; required fields reject it.

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct AdminProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct PlayerProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_phone"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_image_url"))]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct CoachProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Last name cannot be empty"))]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_phone"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0, max = 80, message = "Years of experience must be between 0 and 80"))]
    pub years_experience: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_image_url"))]
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct ClubProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Club name cannot be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_rfc"))]
    pub rfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_phone"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_website"))]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub president_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_image_url"))]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct PartnerProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Company name cannot be empty"))]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_phone"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_rfc"))]
    pub rfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_website"))]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_image_url"))]
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
#[serde(default)]
pub struct StateProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "Committee name cannot be empty"))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub president_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_phone"))]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_rfc"))]
    pub rfc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_website"))]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "crate::validation::validate_image_url"))]
    pub logo_url: Option<String>,
}

/// A partial profile record for one role.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileUpdate {
    Admin(AdminProfileUpdate),
    Player(PlayerProfileUpdate),
    Coach(CoachProfileUpdate),
    Club(ClubProfileUpdate),
    Partner(PartnerProfileUpdate),
    State(StateProfileUpdate),
}

impl ProfileUpdate {
    pub fn role(&self) -> Role {
        match self {
            ProfileUpdate::Admin(_) => Role::Admin,
            ProfileUpdate::Player(_) => Role::Player,
            ProfileUpdate::Coach(_) => Role::Coach,
            ProfileUpdate::Club(_) => Role::Club,
            ProfileUpdate::Partner(_) => Role::Partner,
            ProfileUpdate::State(_) => Role::State,
        }
    }

    /// Run the field rules. Field errors are keyed by field name.
    pub fn validate(&self) -> Result<(), AppError> {
        let result = match self {
            ProfileUpdate::Admin(u) => u.validate(),
            ProfileUpdate::Player(u) => u.validate(),
            ProfileUpdate::Coach(u) => u.validate(),
            ProfileUpdate::Club(u) => u.validate(),
            ProfileUpdate::Partner(u) => u.validate(),
            ProfileUpdate::State(u) => u.validate(),
        };
        result.map_err(AppError::from)
    }

    /// The PUT body. Empty strings become `null` so the backend clears them.
    pub fn to_json(&self) -> Result<serde_json::Value, AppError> {
        let result = match self {
            ProfileUpdate::Admin(u) => serde_json::to_value(u),
            ProfileUpdate::Player(u) => serde_json::to_value(u),
            ProfileUpdate::Coach(u) => serde_json::to_value(u),
            ProfileUpdate::Club(u) => serde_json::to_value(u),
            ProfileUpdate::Partner(u) => serde_json::to_value(u),
            ProfileUpdate::State(u) => serde_json::to_value(u),
        };
        let mut body = result
            .map_err(|e| AppError::decode(format!("Could not encode profile update: {}", e)))?;
        if let Some(fields) = body.as_object_mut() {
            for value in fields.values_mut() {
                if value.as_str().is_some_and(str::is_empty) {
                    *value = serde_json::Value::Null;
                }
            }
        }
        Ok(body)
    }
}
