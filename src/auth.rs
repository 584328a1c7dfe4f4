// ABOUTME: Identity verification for account-scoped favorites using HS256 bearer tokens
// ABOUTME: Provides the IdentityVerifier seam and an axum extractor that rejects with 401
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

//! # Identity
//!
//! Token issuance, passwords, and user storage live outside this service. Here
//! a bearer token is only turned into a verified user id.

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::{header::AUTHORIZATION, request::Parts, HeaderMap};
use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

/// Claims carried by identity tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityClaims {
    /// Verified user id
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Expiry as a unix timestamp
    pub exp: i64,
}

/// Turns a bearer token into a verified user id
pub trait IdentityVerifier: Send + Sync {
    /// Verify `token` and return the user id it was issued for
    ///
    /// # Errors
    ///
    /// Returns `AuthInvalid` when the token is malformed, forged, or expired
    fn verify(&self, token: &str) -> AppResult<String>;
}

/// HS256 JWT verifier
pub struct JwtIdentityVerifier {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityVerifier {
    /// Verifier for tokens signed with `secret`
    #[must_use]
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp"]);
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Sign a token for `user_id` valid for `ttl` (development and test tooling)
    ///
    /// # Errors
    ///
    /// Returns an internal error if signing fails
    pub fn issue(&self, user_id: &str, ttl: Duration) -> AppResult<String> {
        let claims = IdentityClaims {
            user_id: user_id.to_owned(),
            exp: (Utc::now() + ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign identity token: {e}")))
    }
}

impl IdentityVerifier for JwtIdentityVerifier {
    fn verify(&self, token: &str) -> AppResult<String> {
        let data = decode::<IdentityClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| {
                let reason = match e.kind() {
                    ErrorKind::ExpiredSignature => "Token has expired",
                    ErrorKind::InvalidSignature => "Token signature verification failed",
                    _ => "Token is malformed",
                };
                warn!(error = %e, "Identity token rejected");
                AppError::auth_invalid(reason)
            })?;

        let user_id = data.claims.user_id.trim();
        if user_id.is_empty() {
            return Err(AppError::auth_invalid("Token carries no user id"));
        }
        Ok(user_id.to_owned())
    }
}

/// Bearer token from the `Authorization` header
///
/// # Errors
///
/// Returns `AuthRequired` when the header is missing and `AuthInvalid` when
/// it is not a bearer token
pub fn bearer_token(headers: &HeaderMap) -> AppResult<&str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or_else(AppError::auth_required)?
        .to_str()
        .map_err(|_| AppError::auth_invalid("Authorization header is not valid text"))?;

    let (scheme, token) = value
        .split_once(' ')
        .ok_or_else(|| AppError::auth_invalid("Authorization header must be 'Bearer <token>'"))?;
    if !scheme.eq_ignore_ascii_case("bearer") || token.trim().is_empty() {
        return Err(AppError::auth_invalid(
            "Authorization header must be 'Bearer <token>'",
        ));
    }
    Ok(token.trim())
}

/// Verified caller identity, extracted from the bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Verified user id
    pub user_id: String,
}

#[async_trait]
impl FromRequestParts<Arc<ServerResources>> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        resources: &Arc<ServerResources>,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)?;
        let user_id = resources.identity.verify(token)?;
        Ok(Self { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;
    use axum::http::HeaderValue;

    #[test]
    fn test_issue_and_verify_round_trip() {
        let verifier = JwtIdentityVerifier::new("secret");
        let token = verifier.issue("user-1", Duration::hours(1)).unwrap();
        assert_eq!(verifier.verify(&token).unwrap(), "user-1");
    }

    #[test]
    fn test_wrong_secret_and_expired_tokens_are_rejected() {
        let issuer = JwtIdentityVerifier::new("one");
        let verifier = JwtIdentityVerifier::new("two");
        let token = issuer.issue("user-1", Duration::hours(1)).unwrap();
        assert_eq!(verifier.verify(&token).unwrap_err().code, ErrorCode::AuthInvalid);

        let expired = issuer.issue("user-1", Duration::hours(-2)).unwrap();
        assert_eq!(issuer.verify(&expired).unwrap_err().code, ErrorCode::AuthInvalid);
        assert!(issuer.verify("not-a-token").is_err());
    }

    #[test]
    fn test_bearer_token_parsing() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers).unwrap_err().code, ErrorCode::AuthRequired);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers).unwrap_err().code, ErrorCode::AuthInvalid);

        headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc.def.ghi"));
        assert_eq!(bearer_token(&headers).unwrap(), "abc.def.ghi");
    }
}
