//! Aeroplanner CLI - command line tools for the surface service.
//!
//! Binaries:
//! - define_surface: create a surface and print the stored grouping
//! - analyze_obstacle: single-point analysis with a printed report
//! - batch_analyze: obstacle file in, CSV out

use std::fs;
use std::path::Path;

use aero_sdk::AeroClient;
use aero_session::{Config, Session, SessionError};
use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Standard subscriber for all bins: fmt layer plus RUST_LOG filtering.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aero_session=info".parse()?),
        )
        .init();
    Ok(())
}

/// Load a stored session credential, if one exists.
pub fn load_token(path: &str) -> Option<String> {
    let token = fs::read_to_string(path).ok()?;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Persist the session credential for later runs.
pub fn store_token(path: &str, token: &str) -> Result<()> {
    fs::write(Path::new(path), token)?;
    Ok(())
}

/// Build a client from config and the stored token (guest if none).
pub fn client_from_config(config: &Config) -> AeroClient {
    match load_token(&config.token_path) {
        Some(token) => AeroClient::with_token(config.service_url.clone(), token),
        None => AeroClient::new(config.service_url.clone()),
    }
}

/// Log in when credentials were given, otherwise resume or stay guest.
pub async fn establish_session(
    config: &Config,
    client: &mut AeroClient,
    username: Option<&str>,
    password: Option<&str>,
) -> Result<Session, SessionError> {
    let mut session = Session::new();
    match (username, password) {
        (Some(user), Some(pass)) => {
            session.login(client, user, pass).await?;
            if let Some(token) = client.token() {
                if let Err(err) = store_token(&config.token_path, token) {
                    tracing::warn!("could not persist session token: {}", err);
                }
            }
        }
        _ => {
            if client.token().is_some() {
                // Stored token may have expired; fall back to guest if so
                if let Err(err) = session.load_profile(client).await {
                    tracing::warn!("stored session rejected, continuing as guest: {}", err);
                    client.clear_token();
                }
            }
        }
    }
    Ok(session)
}
