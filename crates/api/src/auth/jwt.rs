//! Session token issuing and verification.
//!
//! Tokens are HS256-signed JWTs whose claims are the caller's identity
//! payload plus `iat` and `exp`. Nothing is stored server-side: a token is
//! valid exactly as long as its signature checks out and `exp` has not
//! passed, so clearing the cookie on logout does not invalidate a copy of
//! the token held elsewhere.

use std::fmt;

use blogsphere_core::document::Document;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::{parse_var, ConfigError};

/// Claim names set by the server; payload fields with these names are replaced.
pub const RESERVED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// Default session lifetime in days.
const DEFAULT_SESSION_TTL_DAYS: i64 = 365;

/// Longest accepted session lifetime in days.
pub const MAX_SESSION_TTL_DAYS: i64 = 3650;

const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Claims carried by every session token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    /// Whatever identity fields the client supplied at login.
    #[serde(flatten)]
    pub identity: Document,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for session token signing and validation.
#[derive(Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token (and cookie) lifetime in days (default: 365).
    pub session_ttl_days: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("session_ttl_days", &self.session_ttl_days)
            .finish()
    }
}

impl JwtConfig {
    /// | Env Var               | Required | Default |
    /// |-----------------------|----------|---------|
    /// | `ACCESS_TOKEN_SECRET` | **yes**  | --      |
    /// | `SESSION_TTL_DAYS`    | no       | `365`   |
    ///
    /// `SESSION_TTL_DAYS` must be between 1 and [`MAX_SESSION_TTL_DAYS`].
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let secret = lookup("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::Missing("ACCESS_TOKEN_SECRET"))?;

        let session_ttl_days = parse_var(
            lookup,
            "SESSION_TTL_DAYS",
            DEFAULT_SESSION_TTL_DAYS,
            "a number of days",
        )?;
        if !(1..=MAX_SESSION_TTL_DAYS).contains(&session_ttl_days) {
            return Err(ConfigError::Invalid {
                name: "SESSION_TTL_DAYS",
                value: session_ttl_days.to_string(),
                expected: "a number of days between 1 and 3650",
            });
        }

        Ok(Self {
            secret,
            session_ttl_days,
        })
    }

    /// Session lifetime in seconds, as used for `exp` and the cookie `Max-Age`.
    ///
    /// Saturates instead of overflowing for hand-built configs outside the
    /// range accepted by [`JwtConfig::from_lookup`].
    pub fn session_ttl_secs(&self) -> i64 {
        self.session_ttl_days.saturating_mul(SECS_PER_DAY)
    }
}

/// Sign a session token for `identity`, valid for the configured lifetime.
pub fn issue_token(identity: &Document, config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    sign(identity, now, now.saturating_add(config.session_ttl_secs()), config)
}

/// Verify a token's signature and expiry and return the identity payload.
pub fn verify_token(token: &str, config: &JwtConfig) -> Result<Document, jsonwebtoken::errors::Error> {
    // Identity payloads are arbitrary; an `aud` field must not be rejected
    // for want of an expected audience.
    let mut validation = Validation::default(); // HS256, validates exp
    validation.validate_aud = false;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims.identity)
}

fn sign(
    identity: &Document,
    iat: i64,
    exp: i64,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let mut identity = identity.clone();
    for claim in RESERVED_CLAIMS {
        identity.remove(claim);
    }

    let claims = SessionClaims { identity, iat, exp };
    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}
