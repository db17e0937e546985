//! Trait abstraction for the authentication service to enable mocking in tests

use super::error::ApiError;
use super::types::{Credentials, Registration, SessionData};
use async_trait::async_trait;

/// Remote authentication operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /core/login/` with a JSON body
    async fn login(&self, credentials: &Credentials) -> Result<SessionData, ApiError>;

    /// `POST /core/register/` with a multipart body
    async fn register(&self, registration: &Registration) -> Result<(), ApiError>;
}
