//! Shared-secret authorization gate
//!
//! Every entity route sits behind [`require_token`], which asks an
//! [`AuthProvider`] whether the request may proceed. The shipped provider,
//! [`StaticTokenAuth`], compares the `Authorization` header against one
//! configured token.

use crate::core::error::ApiError;
use async_trait::async_trait;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, header};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

/// Token used when the configuration does not provide one
pub const DEFAULT_TOKEN: &str = "secureToken";

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Decide whether a request carrying these headers is allowed
    async fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiError>;
}

/// Accepts requests whose `Authorization` header equals a fixed token
#[derive(Debug, Clone)]
pub struct StaticTokenAuth {
    token: String,
}

impl StaticTokenAuth {
    /// Create a provider accepting exactly `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Default for StaticTokenAuth {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN)
    }
}

#[async_trait]
impl AuthProvider for StaticTokenAuth {
    async fn authorize(&self, headers: &HeaderMap) -> Result<(), ApiError> {
        match headers.get(header::AUTHORIZATION) {
            Some(value) if value.as_bytes() == self.token.as_bytes() => Ok(()),
            _ => Err(ApiError::Forbidden),
        }
    }
}

/// Default no-auth provider (for development)
pub struct NoAuthProvider;

#[async_trait]
impl AuthProvider for NoAuthProvider {
    async fn authorize(&self, _headers: &HeaderMap) -> Result<(), ApiError> {
        Ok(())
    }
}

/// Middleware rejecting unauthorized requests with 403 before routing
pub async fn require_token(
    State(provider): State<Arc<dyn AuthProvider>>,
    request: Request,
    next: Next,
) -> Response {
    let verdict = provider.authorize(request.headers()).await;
    match verdict {
        Ok(()) => next.run(request).await,
        Err(e) => {
            tracing::warn!(
                method = %request.method(),
                path = %request.uri().path(),
                "rejected request without valid token"
            );
            e.into_response()
        }
    }
}
