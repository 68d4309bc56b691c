// Session authentication: credential checks against the user repository and
// HS256 JWTs for the HTTP layer. Token verification lives here; attaching the
// caller to a request is `crate::middleware::auth`'s job.

pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::SecurityConfig;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::repository::UserRepository;
use crate::domain::user::{User, UserRole};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user's id.
    pub sub: i64,
    pub email: String,
    pub role: UserRole,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(user: &User, expiry_hours: u64) -> Self {
        let now = Utc::now();
        Self {
            sub: user.id,
            email: user.email.clone(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours as i64)).timestamp(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

pub struct AuthService {
    users: Arc<dyn UserRepository>,
    security: SecurityConfig,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserRepository>, security: SecurityConfig) -> Self {
        Self { users, security }
    }

    /// Check an email/password pair. The failure message never reveals
    /// whether the email or the password was wrong.
    pub async fn validate_user(&self, email: &str, pass: &str) -> DomainResult<User> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::unauthorized("invalid credentials"))?;

        let matches = password::verify(pass.to_string(), user.password_hash.clone()).await?;
        if !matches {
            return Err(DomainError::unauthorized("invalid credentials"));
        }

        Ok(user)
    }

    /// Issue a signed token for an already-validated user.
    pub fn login(&self, user: &User) -> DomainResult<TokenResponse> {
        let claims = Claims::new(user, self.security.jwt_expiry_hours);
        let key = EncodingKey::from_secret(self.security.jwt_secret.as_bytes());
        let access_token = encode(&Header::default(), &claims, &key)
            .map_err(|err| DomainError::unexpected(format!("token generation failed: {err}")))?;
        Ok(TokenResponse { access_token })
    }

    /// Decode and validate a bearer token, including its expiry.
    pub fn verify_token(&self, token: &str) -> DomainResult<Claims> {
        let key = DecodingKey::from_secret(self.security.jwt_secret.as_bytes());
        decode::<Claims>(token, &key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| DomainError::unauthorized("invalid or expired token"))
    }
}
