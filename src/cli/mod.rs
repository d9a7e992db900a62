//! # CLI Module
//!
//! One handler per subcommand. Handlers wire the pieces together: they build
//! the [`SpotifyClient`] from the stored token, resolve the playlist, hand both
//! to the matching reconciler and report the outcome on the console.
//!
//! ## Commands
//!
//! - [`auth`] - OAuth 2.0 PKCE authorization, stores the token
//! - [`import_playlist`] - CSV rows → playlist, with a report of unresolved rows
//! - [`export_playlist`] - playlist → CSV
//! - [`export_playlist_album_covers`] - playlist → one image per album
//! - [`deduplicate_playlist`] - keep only the first occurrence of every track
//! - [`sort_playlist`] - reorder by title, popularity, duration or randomly
//!
//! ## Error Reporting
//!
//! Aborting conditions (unknown playlist, missing input file, API failures)
//! are printed with `error!`, which exits with status 1. Degraded outcomes such
//! as unresolved tracks or failed cover downloads are printed with `warning!`
//! and the command still succeeds.
//!
//! ## Usage
//!
//! ```bash
//! spotlistcli auth
//! spotlistcli import_playlist -i music.csv -p "Road Trip"
//! spotlistcli deduplicate_playlist -p "Road Trip"
//! spotlistcli sort_playlist -p "Road Trip" -s popularity -o desc
//! spotlistcli export_playlist -p "Road Trip" -o road_trip.csv
//! ```

mod auth;
mod covers;
mod dedup;
mod export;
mod import;
mod sort;

pub use auth::auth;
pub use covers::export_playlist_album_covers;
pub use dedup::deduplicate_playlist;
pub use export::export_playlist;
pub use import::import_playlist;
pub use sort::sort_playlist;

use crate::{error, reconcile, spotify::SpotifyClient, types::PlaylistRef};

async fn connect() -> SpotifyClient {
    match SpotifyClient::connect().await {
        Ok(client) => client,
        Err(e) => error!("{}", e),
    }
}

async fn resolve(client: &SpotifyClient, playlist_name: &str) -> PlaylistRef {
    match reconcile::resolve_playlist(client, playlist_name).await {
        Ok(playlist) => playlist,
        Err(e) => error!("{}", e),
    }
}
