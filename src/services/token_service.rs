//! Token service - issues and verifies signed tokens for one signing domain.
//!
//! A signing domain is the pair (secret, claim shape). The admin and user
//! domains are two instances of the same `TokenService`, differing only
//! in their secret and in the `DomainClaims` implementation they use.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::marker::PhantomData;
use uuid::Uuid;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Claim shape of a signing domain.
pub trait DomainClaims: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// What the authorization gate attaches to the request on success
    type Identity: Clone + Send + Sync + 'static;

    /// Domain name used in logs
    const DOMAIN: &'static str;

    fn new(subject: Uuid, iat: i64, exp: i64) -> Self;

    fn exp(&self) -> i64;

    fn iat(&self) -> i64;

    /// Account id carried by the token
    fn subject(&self) -> Uuid;

    /// Extraction rule applied by the gate
    fn into_identity(self) -> Self::Identity;
}

/// Admin token payload: `{ "userId": ..., "iat": ..., "exp": ... }`.
///
/// The gate attaches the whole payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminClaims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub iat: i64,
    pub exp: i64,
}

/// Identity nested in user tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
}

/// User token payload: `{ "user": { "id": ... }, "iat": ..., "exp": ... }`.
///
/// The gate attaches only the nested `user` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserClaims {
    pub user: UserIdentity,
    pub iat: i64,
    pub exp: i64,
}

impl DomainClaims for AdminClaims {
    type Identity = AdminClaims;

    const DOMAIN: &'static str = "admin";

    fn new(subject: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            user_id: subject,
            iat,
            exp,
        }
    }

    fn exp(&self) -> i64 {
        self.exp
    }

    fn iat(&self) -> i64 {
        self.iat
    }

    fn subject(&self) -> Uuid {
        self.user_id
    }

    fn into_identity(self) -> Self::Identity {
        self
    }
}

impl DomainClaims for UserClaims {
    type Identity = UserIdentity;

    const DOMAIN: &'static str = "user";

    fn new(subject: Uuid, iat: i64, exp: i64) -> Self {
        Self {
            user: UserIdentity { id: subject },
            iat,
            exp,
        }
    }

    fn exp(&self) -> i64 {
        self.exp
    }

    fn iat(&self) -> i64 {
        self.iat
    }

    fn subject(&self) -> Uuid {
        self.user.id
    }

    fn into_identity(self) -> Self::Identity {
        self.user
    }
}

/// HS256 token issuer/verifier bound to one secret and claim shape
pub struct TokenService<C: DomainClaims> {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiration_hours: i64,
    _claims: PhantomData<fn() -> C>,
}

impl<C: DomainClaims> TokenService<C> {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        let mut validation = Validation::default();
        // Expired means expired: no grace period
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            expiration_hours,
            _claims: PhantomData,
        }
    }

    /// Issue a token for `subject`, valid for the configured lifetime
    pub fn issue(&self, subject: Uuid) -> AppResult<String> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiration_hours);
        let claims = C::new(subject, now.timestamp(), expires_at.timestamp());

        Ok(encode(&Header::default(), &claims, &self.encoding_key)?)
    }

    /// Verify signature, expiry and claim shape.
    ///
    /// Every failure maps to `Forbidden`; the cause is only logged.
    pub fn verify(&self, token: &str) -> AppResult<C> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::warn!(domain = C::DOMAIN, "Token verification failed: {}", e);
                AppError::Forbidden
            })
    }
}

impl TokenService<AdminClaims> {
    /// Admin signing domain from configuration
    pub fn admin(config: &Config) -> Self {
        Self::new(config.admin_secret_bytes(), config.token_expiration_hours)
    }
}

impl TokenService<UserClaims> {
    /// User signing domain from configuration
    pub fn user(config: &Config) -> Self {
        Self::new(config.user_secret_bytes(), config.token_expiration_hours)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SECONDS_PER_HOUR;

    const ADMIN_SECRET: &[u8] = b"admin-secret-for-tests-0123456789abcdef";
    const USER_SECRET: &[u8] = b"user-secret-for-tests-0123456789abcdefg";

    #[test]
    fn test_issue_and_verify_user_token() {
        let tokens = TokenService::<UserClaims>::new(USER_SECRET, 3);
        let id = Uuid::new_v4();

        let claims = tokens.verify(&tokens.issue(id).unwrap()).unwrap();
        assert_eq!(claims.subject(), id);
        assert_eq!(claims.clone().into_identity(), UserIdentity { id });
        assert_eq!(claims.exp() - claims.iat(), 3 * SECONDS_PER_HOUR);
    }

    #[test]
    fn test_admin_token_keeps_full_payload() {
        let tokens = TokenService::<AdminClaims>::new(ADMIN_SECRET, 3);
        let id = Uuid::new_v4();

        let identity = tokens.verify(&tokens.issue(id).unwrap()).unwrap().into_identity();
        assert_eq!(identity.user_id, id);
        assert_eq!(identity.exp - identity.iat, 3 * SECONDS_PER_HOUR);
    }

    #[test]
    fn test_domains_do_not_cross_verify() {
        let admin = TokenService::<AdminClaims>::new(ADMIN_SECRET, 3);
        let user = TokenService::<UserClaims>::new(USER_SECRET, 3);
        let id = Uuid::new_v4();

        let admin_token = admin.issue(id).unwrap();
        let user_token = user.issue(id).unwrap();

        assert!(matches!(user.verify(&admin_token), Err(AppError::Forbidden)));
        assert!(matches!(admin.verify(&user_token), Err(AppError::Forbidden)));
    }

    #[test]
    fn test_claim_shape_alone_separates_domains() {
        // Same secret, different claim shapes
        let admin = TokenService::<AdminClaims>::new(USER_SECRET, 3);
        let user = TokenService::<UserClaims>::new(USER_SECRET, 3);

        let admin_token = admin.issue(Uuid::new_v4()).unwrap();
        assert!(matches!(user.verify(&admin_token), Err(AppError::Forbidden)));
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = TokenService::<UserClaims>::new(USER_SECRET, 3);
        let now = Utc::now().timestamp();
        let claims = UserClaims::new(Uuid::new_v4(), now - 4 * SECONDS_PER_HOUR, now - 5);
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(USER_SECRET),
        )
        .unwrap();

        assert!(matches!(tokens.verify(&token), Err(AppError::Forbidden)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let tokens = TokenService::<AdminClaims>::new(ADMIN_SECRET, 3);
        assert!(matches!(tokens.verify("not.a.token"), Err(AppError::Forbidden)));
    }

    #[test]
    fn test_user_token_wire_shape() {
        let tokens = TokenService::<UserClaims>::new(USER_SECRET, 3);
        let id = Uuid::new_v4();
        let token = tokens.issue(id).unwrap();

        let mut validation = Validation::default();
        validation.leeway = 0;
        let raw = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(USER_SECRET),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(raw["user"]["id"], id.to_string());
        assert!(raw.get("userId").is_none());
    }
}
