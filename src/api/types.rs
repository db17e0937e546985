//! Request payloads and the typed session contract

use crate::state::ImageAttachment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /core/login/`
#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Fields of the multipart body of `POST /core/register/`
#[derive(Clone)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub image: ImageAttachment,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("phone_number", &self.phone_number)
            .field("password", &"<redacted>")
            .field("image", &self.image)
            .finish()
    }
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, alias = "token", alias = "access")]
    pub access_token: Option<String>,
    #[serde(default, alias = "refresh")]
    pub refresh_token: Option<String>,
    pub user: UserProfile,
}

/// The signed-in user as reported by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl UserProfile {
    pub fn display_name(&self) -> &str {
        if self.full_name.is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}
