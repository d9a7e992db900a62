//! # API Module
//!
//! HTTP endpoints served by the short-lived local server that runs during
//! `spotlistcli auth`.
//!
//! - [`callback`] - Receives the OAuth redirect from Spotify and exchanges the
//!   authorization code for an access token using the stored PKCE verifier.
//! - [`health`] - Returns status and version, handy to check that the callback
//!   server is reachable on the configured address.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use spotlistcli::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
