use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT configuration: shared secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_ttl_secs: u64,
}

impl JwtConfig {
    /// Load from `JWT_SECRET` / `JWT_ACCESS_TTL_SECS`.
    ///
    /// The secret falls back to a dev-only value so local setups work
    /// out of the box; production deployments must set `JWT_SECRET`.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "sitelog-dev-secret-do-not-use-in-prod".into());
        let access_ttl_secs: u64 = std::env::var("JWT_ACCESS_TTL_SECS")
            .unwrap_or_else(|_| "3600".into())
            .parse()
            .expect("JWT_ACCESS_TTL_SECS must be a valid u64");
        Self {
            secret,
            access_ttl_secs,
        }
    }
}

/// Claims carried by an access token. `sub` is the actor id; the role is
/// deliberately absent — it is re-read from `profiles` on every
/// authorization decision so revocations take effect immediately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Validate a token and return its claims.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// Mint a token for an actor id.
///
/// In production this is the identity service's job; the helper exists
/// for the test harness and ops tooling that share the secret.
pub fn encode_token(user_id: Uuid, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        iat: now,
        exp: now + config.access_ttl_secs as i64,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "unit-test-secret".into(),
            access_ttl_secs: 60,
        }
    }

    #[test]
    fn test_round_trip() {
        let config = test_config();
        let id = Uuid::new_v4();
        let token = encode_token(id, &config).unwrap();
        let claims = validate_token(&token, &config).unwrap();
        assert_eq!(claims.sub, id);
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let config = test_config();
        let token = encode_token(Uuid::new_v4(), &config).unwrap();
        let other = JwtConfig {
            secret: "different-secret".into(),
            access_ttl_secs: 60,
        };
        assert!(validate_token(&token, &other).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(validate_token("not.a.jwt", &test_config()).is_err());
    }
}
