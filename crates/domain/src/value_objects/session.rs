//! Simulated login state
//!
//! Login writes a role name under the `loggedInUser` storage key; there is
//! no credential check behind it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Role name stored for the logged-in user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    User,
    /// Any other stored name, kept verbatim
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
            Self::Other(name) => name,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

impl From<String> for UserRole {
    fn from(s: String) -> Self {
        match s.as_str() {
            "admin" => Self::Admin,
            "user" => Self::User,
            _ => Self::Other(s),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> String {
        match role {
            UserRole::Other(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

/// Who, if anyone, is logged in
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user: Option<UserRole>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self::default()
    }

    pub fn logged_in(role: UserRole) -> Self {
        Self { user: Some(role) }
    }

    /// Build from the raw `loggedInUser` value. An empty string counts as
    /// logged out.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(name) if !name.is_empty() => Self::logged_in(UserRole::from(name.to_string())),
            _ => Self::logged_out(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<&UserRole> {
        self.user.as_ref()
    }

    /// Add/delete controls are offered to any logged-in user.
    pub fn can_edit(&self) -> bool {
        self.is_logged_in()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_parse() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("user".parse::<UserRole>(), Ok(UserRole::User));
    }

    #[test]
    fn unknown_role_is_kept_verbatim() {
        let role: UserRole = "Nobita".parse().unwrap_or(UserRole::User);
        assert_eq!(role, UserRole::Other("Nobita".to_string()));
        assert_eq!(String::from(role), "Nobita");
    }

    #[test]
    fn session_from_stored_value() {
        let session = Session::from_stored(Some("admin"));
        assert!(session.is_logged_in());
        assert!(session.can_edit());
        assert!(session.role().is_some_and(UserRole::is_admin));

        assert!(!Session::from_stored(None).is_logged_in());
        assert!(!Session::from_stored(Some("")).can_edit());
    }

    #[test]
    fn role_serializes_as_plain_string() {
        let json = serde_json::to_string(&UserRole::Admin).expect("serialize");
        assert_eq!(json, "\"admin\"");
    }
}
