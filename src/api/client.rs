//! HTTP client for the authentication service
//!
//! Talks to the two endpoints of the remote service. Responses other than
//! 2xx are reported as rejections and their bodies are ignored.

use super::error::ApiError;
use super::traits::AuthApi;
use super::types::{Credentials, Registration, SessionData};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

/// Default service address
pub const DEFAULT_ADDRESS: &str = "http://127.0.0.1:8000";

const LOGIN_PATH: &str = "/core/login/";
const REGISTER_PATH: &str = "/core/register/";

/// Client for the authentication service
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: reqwest::Client,
    base_url: String,
}

impl AuthClient {
    /// Create a new client rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request.send().await.map_err(|e| ApiError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{url} answered {status}");
            return Err(ApiError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(response)
    }
}

fn registration_form(registration: &Registration) -> Result<Form, ApiError> {
    let image = &registration.image;
    let part = Part::bytes(image.bytes.clone())
        .file_name(image.file_name.clone())
        .mime_str(image.mime_type)
        .map_err(|e| ApiError::Request(e.to_string()))?;

    Ok(Form::new()
        .text("full_name", registration.full_name.clone())
        .text("email", registration.email.clone())
        .text("phone_number", registration.phone_number.clone())
        .text("password", registration.password.clone())
        .part("image", part))
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, credentials: &Credentials) -> Result<SessionData, ApiError> {
        let url = self.endpoint(LOGIN_PATH);
        tracing::debug!("POST {url} for {}", credentials.email);

        let response = self.send(&url, self.http.post(&url).json(credentials)).await?;
        let body = response.bytes().await.map_err(|e| ApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn register(&self, registration: &Registration) -> Result<(), ApiError> {
        let url = self.endpoint(REGISTER_PATH);
        tracing::debug!("POST {url} for {}", registration.email);

        let form = registration_form(registration)?;
        self.send(&url, self.http.post(&url).multipart(form)).await?;
        Ok(())
    }
}
