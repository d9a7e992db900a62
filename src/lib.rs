//! Spotify Playlist Manager CLI Library
//!
//! This library provides the building blocks of a command-line tool that manipulates
//! playlists through the Spotify Web API: importing tracks listed in a CSV file,
//! exporting a playlist (or its album covers), removing duplicate tracks and sorting
//! a playlist by title, popularity, duration or randomly.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints for the local OAuth callback server
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `management` - Token persistence and CSV file handling
//! - `reconcile` - Playlist reconcilers (dedup, sort, import, export)
//! - `remote` - The remote playlist client abstraction
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use spotlistcli::{config, reconcile, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> spotlistcli::Res<()> {
//!     config::load_env().await?;
//!     let client = SpotifyClient::connect().await?;
//!     let playlist = reconcile::resolve_playlist(&client, "Road Trip").await?;
//!     reconcile::deduplicate(&client, &playlist).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod reconcile;
pub mod remote;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Uses a boxed dynamic error trait object with Send + Sync bounds so that
/// errors from every layer can be propagated with `?` in async contexts.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching tracks of playlist {}", name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Playlist {} sorted", name);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Terminates the process with exit code 1. Only the CLI layer uses this macro;
/// library code returns errors instead.
///
/// # Example
///
/// ```
/// error!("Playlist {} not found.", name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for degraded outcomes that do not abort a command, such as tracks that
/// could not be found or album covers that failed to download.
///
/// # Example
///
/// ```
/// warning!("{} tracks could not be added", count);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
