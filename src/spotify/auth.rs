use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config, error,
    management::TokenManager,
    server::start_api_server,
    success,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Runs the complete OAuth 2.0 PKCE authorization flow with Spotify.
///
/// 1. Generates a code verifier and its SHA256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the default browser
/// 4. Waits up to 60 seconds for the callback to deliver a token
/// 5. Persists the token for later commands
///
/// Browser launch failures only print the URL for manual navigation. A missing
/// client ID, a failed token exchange or a timeout terminate the program.
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) {
    let client_id = match config::spotify_client_id() {
        Ok(id) => id,
        Err(e) => error!("{}", e),
    };

    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    let auth_url = format!(
        "{spotify_auth_url}?client_id={client_id}&response_type=code&redirect_uri={redirect_uri}&code_challenge={code_challenge}&code_challenge_method=S256&scope={scope}",
        spotify_auth_url = &config::spotify_apiauth_url(),
        client_id = client_id,
        redirect_uri = &config::spotify_redirect_uri(),
        code_challenge = code_challenge,
        scope = &config::spotify_scope().replace(' ', "%20")
    );

    // verifier must be in place before the browser can hit the callback
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    match wait_for_token(shared_state).await {
        Some(t) => {
            let token_manager = TokenManager::new(t);
            if let Err(e) = token_manager.persist().await {
                error!("Failed to save token to cache: {}", e);
            }

            success!("Authentication successful!");
        }
        None => {
            error!("Authentication failed or timed out.");
        }
    }
}

/// Polls the shared state once per second for up to 60 seconds until the
/// callback handler has stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a new access token.
///
/// Spotify may or may not rotate the refresh token; when the response carries
/// none, the previous one is kept.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;

    let res = Client::new()
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json = res
        .json::<TokenResponse>()
        .await
        .map_err(|e| e.to_string())?;

    Ok(token_from_response(json, refresh_token))
}

/// Exchanges the authorization code received by the callback for a token,
/// proving possession of the PKCE `verifier`.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri();

    let res = Client::new()
        .post(&config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json = res
        .json::<TokenResponse>()
        .await
        .map_err(|e| e.to_string())?;

    Ok(token_from_response(json, ""))
}

fn token_from_response(json: TokenResponse, previous_refresh_token: &str) -> Token {
    Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .unwrap_or_else(|| previous_refresh_token.to_string()),
        scope: json.scope,
        expires_in: json.expires_in.unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    }
}
