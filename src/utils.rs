use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Local, TimeZone};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

pub fn generate_code_verifier() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(128)
        .map(char::from)
        .collect()
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Compact timestamp used in generated playlist and report names, e.g. `20240131235959`.
pub fn timestamp_string<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y%m%d%H%M%S").to_string()
}

pub fn now_timestamp() -> String {
    timestamp_string(&Local::now())
}

/// Name of the playlist created when importing without a playlist name.
pub fn generated_playlist_name(timestamp: &str) -> String {
    format!("csv_playlist_{}", timestamp)
}

/// File name of the report listing rows that could not be imported.
pub fn unresolved_report_name(timestamp: &str) -> String {
    format!("not_added_tracks{}.csv", timestamp)
}

/// Keeps alphanumerics, spaces, `_` and `-`, then drops trailing whitespace.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Identifies an album cover file: album names are not unique, ids are.
pub fn album_cover_key(album_name: &str, album_id: &str) -> String {
    format!("{}_spotifyid_{}", album_name, album_id)
}
