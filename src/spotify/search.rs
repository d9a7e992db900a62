use super::SpotifyClient;
use crate::{
    remote::ClientError,
    types::{SearchResponse, TrackQuery},
};

/// Searches for a track and returns the id of the single top result.
pub(super) async fn first_track_id(
    client: &SpotifyClient,
    query: &TrackQuery,
) -> Result<Option<String>, ClientError> {
    let q = query.to_search_string();
    let request = client
        .http
        .get(client.endpoint("/search"))
        .query(&[("q", q.as_str()), ("type", "track"), ("limit", "1")]);

    let response = client.authorized(request).await?;
    let result = response.json::<SearchResponse>().await?;

    Ok(result.tracks.items.into_iter().next().and_then(|t| t.id))
}
