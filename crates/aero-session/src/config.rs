//! Session configuration from environment.

use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_url: String,
    /// Authority branding stamped onto reports, when configured
    pub authority_name: Option<String>,
    pub authority_logo: Option<String>,
    /// Where the session credential is stored between runs
    pub token_path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            service_url: env::var("AERO_SERVICE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8000".to_string()),
            authority_name: env::var("AERO_AUTHORITY_NAME").ok(),
            authority_logo: env::var("AERO_AUTHORITY_LOGO").ok(),
            token_path: env::var("AERO_TOKEN_PATH").unwrap_or_else(|_| ".aero_token".to_string()),
        }
    }
}
