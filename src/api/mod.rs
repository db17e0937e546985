//! HTTP client module for the authentication service

mod client;
mod error;
mod traits;
mod types;

pub use client::{AuthClient, DEFAULT_ADDRESS};
pub use error::ApiError;
pub use traits::AuthApi;
pub use types::{Credentials, Registration, SessionData};

#[cfg(test)]
pub use traits::MockAuthApi;
#[cfg(test)]
pub use types::UserProfile;
