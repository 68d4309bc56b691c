use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role assigned to a user account. Defaults to `User` on registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid user role: {0}")]
pub struct InvalidRoleError(String);

impl FromStr for UserRole {
    type Err = InvalidRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            other => Err(InvalidRoleError(other.to_string())),
        }
    }
}

/// A registered user. The credential is stored only as a salted hash; the
/// plaintext never reaches this type.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user stamped with the current time. The id stays 0 until
    /// the storage layer assigns one.
    pub fn create(
        username: String,
        email: String,
        password_hash: String,
        role: Option<UserRole>,
    ) -> Self {
        Self {
            id: 0,
            username,
            email,
            password_hash,
            role: role.unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    /// Copy-on-write update. Omitted fields keep their previous value; the
    /// id, credential and creation timestamp never change through this path.
    pub fn update(
        &self,
        username: Option<String>,
        email: Option<String>,
        role: Option<UserRole>,
    ) -> Self {
        Self {
            id: self.id,
            username: username.unwrap_or_else(|| self.username.clone()),
            email: email.unwrap_or_else(|| self.email.clone()),
            password_hash: self.password_hash.clone(),
            role: role.unwrap_or(self.role),
            created_at: self.created_at,
        }
    }

    /// Storage adapters use this to attach the identity assigned on insert.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        User::create(
            "alice".into(),
            "alice@example.com".into(),
            "$argon2$fake".into(),
            None,
        )
    }

    #[test]
    fn create_defaults_role_to_user() {
        let user = sample();
        assert_eq!(user.role, UserRole::User);
        assert_eq!(user.id, 0);
    }

    #[test]
    fn update_with_all_fields_omitted_is_identity() {
        let user = sample();
        assert_eq!(user.update(None, None, None), user);
    }

    #[test]
    fn update_merges_only_provided_fields() {
        let user = sample();
        let updated = user.update(None, Some("new@example.com".into()), Some(UserRole::Admin));
        assert_eq!(updated.username, "alice");
        assert_eq!(updated.email, "new@example.com");
        assert_eq!(updated.role, UserRole::Admin);
        assert_eq!(updated.password_hash, user.password_hash);
        assert_eq!(updated.created_at, user.created_at);
    }

    #[test]
    fn role_round_trips_through_str() {
        assert_eq!("admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!(UserRole::User.to_string(), "user");
        assert!("root".parse::<UserRole>().is_err());
    }
}
