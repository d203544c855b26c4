use serde::{Deserialize, Serialize};
use validator::Validate;

/// Platform role. Every authenticated user has exactly one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Player,
    Coach,
    Club,
    Partner,
    /// State committee.
    #[serde(alias = "state_committee")]
    State,
}

impl Role {
    /// All roles in sidebar/display order.
    pub const ALL: [Role; 6] = [
        Role::Admin,
        Role::Player,
        Role::Coach,
        Role::Club,
        Role::Partner,
        Role::State,
    ];

    /// Lowercase path segment used in REST endpoints and routes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Player => "player",
            Role::Coach => "coach",
            Role::Club => "club",
            Role::Partner => "partner",
            Role::State => "state",
        }
    }

    /// Parse a role claim or path segment. Unknown values yield `None`.
    pub fn from_str_opt(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "player" => Some(Role::Player),
            "coach" => Some(Role::Coach),
            "club" => Some(Role::Club),
            "partner" => Some(Role::Partner),
            "state" | "state_committee" => Some(Role::State),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Player => "Player",
            Role::Coach => "Coach",
            Role::Club => "Club",
            Role::Partner => "Partner",
            Role::State => "State Committee",
        }
    }

    /// `GET` endpoint returning this role's dashboard payload.
    pub fn dashboard_endpoint(&self) -> String {
        format!("/api/{}/dashboard", self.as_str())
    }

    /// `PUT` endpoint accepting this role's partial profile record.
    pub fn profile_endpoint(&self) -> String {
        format!("/api/{}/profile", self.as_str())
    }
}

/// Optional nested reference to the state an entity belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StateRef {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub abbreviation: Option<String>,
}

/// An authenticated platform account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<StateRef>,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

fn default_true() -> bool {
    true
}

/// Login request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Successful login: the bearer token plus the account it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Which asset slot an uploaded image fills.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// Club, partner and state committee logos.
    Logo,
    /// Player and coach portraits.
    Photo,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageKind::Logo => "logo",
            ImageKind::Photo => "photo",
        }
    }
}

/// Hosted location of an image accepted by the upload service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadedImage {
    pub url: String,
}
