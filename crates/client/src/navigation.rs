//! Role-based routing decisions.

use shared_types::Role;

use crate::store::AuthSlice;

pub const LOGIN_PATH: &str = "/login";

/// Landing page for a role's dashboard.
pub fn home_path(role: Role) -> String {
    format!("/{}", role.as_str())
}

pub fn profile_path(role: Role) -> String {
    format!("/{}/profile", role.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectTo(String),
}

/// Decide whether the current session may open a view restricted to
/// `required`. `None` means any signed-in user. Role endpoints only serve
/// the caller's own record, so every role, admin included, is kept to its
/// own views and sent to its own dashboard otherwise.
pub fn guard(required: Option<Role>, auth: &AuthSlice) -> GuardDecision {
    let Some(role) = auth.role() else {
        return GuardDecision::RedirectToLogin;
    };
    match required {
        None => GuardDecision::Allow,
        Some(required) if required == role => GuardDecision::Allow,
        Some(_) => GuardDecision::RedirectTo(home_path(role)),
    }
}
