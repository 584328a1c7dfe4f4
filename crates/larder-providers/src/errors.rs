// ABOUTME: Structured error type for recipe provider calls with transient/permanent classification
// ABOUTME: Resolvers never surface these; they decide log severity and cacheability
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Larder Contributors

use larder_core::errors::{AppError, ErrorCode};
use thiserror::Error;

/// Failure of a single provider call
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Credentials are missing, the tier is skipped without a request
    #[error("provider credentials are not configured")]
    NotConfigured,

    /// Search was attempted with no tokens
    #[error("provider query is empty")]
    EmptyQuery,

    /// The call exceeded its timeout
    #[error("provider request timed out")]
    Timeout,

    /// Network-level failure (DNS, connect, TLS, reset)
    #[error("provider transport error: {0}")]
    Transport(String),

    /// Provider answered with a non-success status
    #[error("provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body excerpt
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("provider response could not be decoded: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Whether the same call might succeed later (timeouts, 5xx, 429, network)
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Timeout | Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::NotConfigured | Self::EmptyQuery | Self::Decode(_) => false,
        }
    }

    /// Classify a reqwest error
    #[must_use]
    pub fn from_reqwest(error: &reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl From<ProviderError> for AppError {
    fn from(error: ProviderError) -> Self {
        let code = if error.is_transient() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(ProviderError::Timeout.is_transient());
        assert!(ProviderError::Transport("reset".into()).is_transient());
        assert!(ProviderError::Status {
            status: 503,
            body: String::new()
        }
        .is_transient());
        assert!(ProviderError::Status {
            status: 429,
            body: String::new()
        }
        .is_transient());
        assert!(!ProviderError::Status {
            status: 401,
            body: String::new()
        }
        .is_transient());
        assert!(!ProviderError::NotConfigured.is_transient());
    }

    #[test]
    fn test_app_error_conversion() {
        let error: AppError = ProviderError::Timeout.into();
        assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);

        let error: AppError = ProviderError::Decode("bad".into()).into();
        assert_eq!(error.code, ErrorCode::ExternalServiceError);
    }
}
