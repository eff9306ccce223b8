//! CORS configuration.
//!
//! Allowed origins are read from the `CORS_ALLOWED_ORIGINS` environment
//! variable as a comma-separated list. When unset, only the local frontend
//! origin is allowed.

use axum::http::HeaderValue;
use std::env;

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000";

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string());
        Self::from_list(&origins)
    }

    /// Parses a comma-separated origin list, dropping empty entries.
    pub fn from_list(origins: &str) -> Self {
        Self {
            allowed_origins: origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
        }
    }

    /// The allowed origins as header values for the CORS layer. Entries
    /// that are not valid header values are skipped.
    pub fn header_values(&self) -> Vec<HeaderValue> {
        self.allowed_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect()
    }
}
