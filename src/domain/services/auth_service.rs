use crate::config::Config;
use crate::domain::models::user::User;
use crate::error::AppError;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::Argon2;
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

pub struct AuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthService {
    pub fn new(config: &Config) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        }
    }

    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id,
            role: user.role.clone(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("JWT encoding failed: {}", e);
            AppError::Internal
        })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Authentication required".into()))
    }

    pub fn hash_password(&self, password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| AppError::Internal)
    }

    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(hash) else {
            return false;
        };
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn service() -> AuthService {
        AuthService::new(&Config {
            database_url: "sqlite://unused.db".into(),
            port: 0,
            jwt_secret: "test-secret".into(),
        })
    }

    fn user(role: &str) -> User {
        User {
            id: 7,
            email: "admin@lumina.com".into(),
            password_hash: String::new(),
            role: role.into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn round_trips_claims() {
        let svc = service();
        let token = svc.issue_token(&user("ADMIN")).unwrap();
        let claims = svc.verify_token(&token).unwrap();
        assert_eq!(claims.sub, 7);
        assert_eq!(claims.role, "ADMIN");
    }

    #[test]
    fn rejects_garbage_tokens() {
        let svc = service();
        assert!(svc.verify_token("not.a.jwt").is_err());
    }

    #[test]
    fn password_hash_verifies_and_rejects() {
        let svc = service();
        let hash = svc.hash_password("Admin@123").unwrap();
        assert!(svc.verify_password("Admin@123", &hash));
        assert!(!svc.verify_password("wrong", &hash));
        assert!(!svc.verify_password("Admin@123", "not-a-phc-string"));
    }
}
