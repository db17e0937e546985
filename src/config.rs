//! Configuration handling for the TUI

use crate::api::DEFAULT_ADDRESS;
use crate::router::Route;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding the service address
pub const ADDRESS_ENV: &str = "AUTH_API_ADDRESS";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthTuiConfig {
    /// Authentication service address
    pub api_base_url: Option<String>,
    /// Route shown on startup (`/login` or `/register`)
    pub start_route: Option<String>,
    /// Reveal passwords by default
    pub show_passwords: Option<bool>,
}

impl AuthTuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "auth-tui", "auth-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AuthTuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Resolve the service address: environment, then file, then default
    pub fn api_base_url(&self) -> String {
        self.base_url_with_override(std::env::var(ADDRESS_ENV).ok())
    }

    fn base_url_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string())
    }

    /// The first route to show. Home is never a valid start.
    pub fn start_route(&self) -> Route {
        let Some(value) = self.start_route.as_deref() else {
            return Route::Login;
        };
        let route = Route::from_path(value).or_else(|| Route::from_path(&format!("/{value}")));
        match route {
            Some(Route::Register) => Route::Register,
            Some(_) => Route::Login,
            None => {
                tracing::warn!("Unknown start route {value:?}, using /login");
                Route::Login
            }
        }
    }

    pub fn show_passwords(&self) -> bool {
        self.show_passwords.unwrap_or(false)
    }
}
