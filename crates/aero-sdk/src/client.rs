//! Core client: construction, bearer-token plumbing, and auth endpoints.

use crate::error::SdkError;
use aero_core::Account;
use serde::{Deserialize, Serialize};

/// Client for the Aeroplanner service.
#[derive(Clone)]
pub struct AeroClient {
    pub(crate) base_url: String,
    pub(crate) token: Option<String>,
    pub(crate) client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    username: &'a str,
    password: &'a str,
    is_premium: bool,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileUpdateResponse {
    #[serde(flatten)]
    account: Account,
    /// Present when the update rotated the session credential
    #[serde(default)]
    access_token: Option<String>,
}

impl AeroClient {
    /// Create a new client with no session credential (guest mode).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            client: reqwest::Client::new(),
        }
    }

    /// Resume a session from a stored token.
    pub fn with_token(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        let mut client = Self::new(base_url);
        client.token = Some(token.into());
        client
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Drop the session credential (logout).
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Attach the bearer header when a session credential exists.
    pub(crate) fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token.as_deref() {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    pub(crate) fn require_token(&self) -> Result<&str, SdkError> {
        self.token.as_deref().ok_or(SdkError::NotAuthenticated)
    }

    /// Exchange credentials for a bearer token (url-encoded form body).
    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), SdkError> {
        let url = format!("{}/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }

        let token: TokenResponse = response.json().await?;
        self.token = Some(token.access_token);
        tracing::debug!(username, "session token issued");
        Ok(())
    }

    /// Register a new account. Does not log in.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        is_premium: bool,
    ) -> Result<(), SdkError> {
        let url = format!("{}/register", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&RegisterRequest {
                username,
                password,
                is_premium,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(())
    }

    /// Fetch the profile for the current session credential.
    pub async fn me(&self) -> Result<Account, SdkError> {
        self.require_token()?;
        let url = format!("{}/users/me", self.base_url);
        let response = self.authed(self.client.get(&url)).send().await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }
        Ok(response.json().await?)
    }

    /// Update the profile. The service may rotate the session credential;
    /// when it does, the client adopts the new token.
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<Account, SdkError> {
        self.require_token()?;
        let url = format!("{}/users/me", self.base_url);
        let response = self.authed(self.client.put(&url)).json(update).send().await?;

        if !response.status().is_success() {
            return Err(SdkError::from_response(response).await);
        }

        let payload: ProfileUpdateResponse = response.json().await?;
        if let Some(token) = payload.access_token {
            self.token = Some(token);
        }
        Ok(payload.account)
    }
}
