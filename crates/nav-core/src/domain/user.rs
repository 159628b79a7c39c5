//! Session user and injected read-only context

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::Role;

/// Signed-in user as handed over by the session collaborator.
///
/// `role` is the raw role code; it is never validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub role: String,
}

impl User {
    pub fn new(display_name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self::with_role_code(display_name, email, role.as_str())
    }

    /// Takes the role code exactly as the session collaborator supplied it
    pub fn with_role_code(
        display_name: impl Into<String>,
        email: impl Into<String>,
        role_code: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            email: email.into(),
            role: role_code.into(),
        }
    }

    /// `None` when the role code is not one of the known roles
    pub fn access_role(&self) -> Option<Role> {
        Role::from_str(&self.role)
    }
}

/// Read-only context injected into the navigation shell for one session
#[derive(Debug, Clone)]
pub struct SessionContext {
    user: User,
}

impl SessionContext {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Option<Role> {
        self.user.access_role()
    }
}
