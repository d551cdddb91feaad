//! Wire DTOs for the auth and admin endpoints.
//!
//! DESIGN
//! ======
//! Field names follow the server's camelCase JSON. Profile fields beyond
//! `id` and `userType` are optional so older or partial user records still
//! decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Account flavour chosen by the visitor, either before or after sign-in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Personal,
    Enterprise,
}

impl UserType {
    /// Wire and storage representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Enterprise => "enterprise",
        }
    }

    /// Parse a raw stored value. Only the exact lowercase names are accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "personal" => Some(Self::Personal),
            "enterprise" => Some(Self::Enterprise),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in end user as returned by `GET /api/auth/user`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// `None` when the account has never chosen a type.
    #[serde(default)]
    pub user_type: Option<UserType>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
}

impl User {
    /// Best human-readable name: full name, then email, then id.
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();
        if !parts.is_empty() {
            return parts.join(" ");
        }
        self.email
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .map_or_else(|| self.id.clone(), str::to_owned)
    }
}

/// Body of `PATCH /api/auth/user/type`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserTypeRequest {
    pub user_type: UserType,
}

/// Response of `GET /api/admin/session`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSession {
    pub authenticated: bool,
    #[serde(default)]
    pub email: Option<String>,
}

/// Body of `POST /api/admin/login`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
