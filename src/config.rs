//! Configuration management for the Spotify playlist manager.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Settings for the public Spotify endpoints and the
//! local callback server fall back to sensible defaults; the client ID of the
//! registered Spotify application has to be provided by the user.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";
pub const DEFAULT_REDIRECT_URI: &str = "http://127.0.0.1:8888/callback";
pub const DEFAULT_SCOPE: &str =
    "user-library-read playlist-read-private playlist-modify-private playlist-modify-public";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up at `spotlistcli/.env` below the platform-specific local
/// data directory:
/// - Linux: `~/.local/share/spotlistcli/.env`
/// - macOS: `~/Library/Application Support/spotlistcli/.env`
/// - Windows: `%LOCALAPPDATA%/spotlistcli/.env`
///
/// Variables already present in the process environment are not overridden.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the `.env`
/// file cannot be read or parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path)
        .map_err(|e| format!("Failed to load {}: {}", path.display(), e))?;
    Ok(())
}

/// Location of the `.env` file read by [`load_env`].
pub fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlistcli/.env");
    path
}

/// Address the local OAuth callback server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    env_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Client ID of the registered Spotify application.
///
/// # Errors
///
/// Fails if `SPOTIFY_API_AUTH_CLIENT_ID` is unset or empty, since neither the
/// authorization flow nor a token refresh can work without it.
pub fn spotify_client_id() -> Result<String, String> {
    match env::var("SPOTIFY_API_AUTH_CLIENT_ID") {
        Ok(id) if !id.trim().is_empty() => Ok(id),
        _ => Err("SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string()),
    }
}

/// Callback URL Spotify redirects to after authorization (`SPOTIFY_API_REDIRECT_URI`).
///
/// Must match one of the redirect URIs registered for the application.
pub fn spotify_redirect_uri() -> String {
    env_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Permissions requested during authorization (`SPOTIFY_API_AUTH_SCOPE`).
pub fn spotify_scope() -> String {
    env_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Spotify authorization endpoint (`SPOTIFY_API_AUTH_URL`).
pub fn spotify_apiauth_url() -> String {
    env_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Base URL of the Spotify Web API (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    env_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}

/// Token exchange endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    env_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
