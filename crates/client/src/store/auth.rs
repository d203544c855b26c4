use shared_types::{Role, User};

/// Who is signed in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthSlice {
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
    /// Set when the backend rejected the stored token. Cleared by the next
    /// successful login.
    pub expired: bool,
}

impl AuthSlice {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
        self.error = None;
        self.expired = false;
    }

    pub fn fail(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|u| u.role)
    }
}
