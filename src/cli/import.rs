use std::path::{Path, PathBuf};

use tabled::Table;

use crate::{
    error, info, management, reconcile, success,
    types::{CsvRow, UnresolvedTableRow},
    utils, warning,
};

pub async fn import_playlist(input_file: PathBuf, playlist_name: Option<String>) {
    if !input_file.is_file() {
        error!("File {} does not exist.", input_file.display());
    }

    let sheet = match management::read_track_sheet(&input_file) {
        Ok(sheet) => sheet,
        Err(e) => error!("Failed to read {}: {}", input_file.display(), e),
    };

    if sheet.rows.is_empty() {
        info!("No tracks found in {}", input_file.display());
        return;
    }

    let client = super::connect().await;
    let timestamp = utils::now_timestamp();

    let outcome = match reconcile::import_rows(
        &client,
        &sheet.rows,
        playlist_name.as_deref(),
        &timestamp,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => error!("Import failed: {}", e),
    };

    success!(
        "Added {} tracks to playlist {}",
        outcome.added,
        outcome.playlist.name
    );

    if !outcome.unresolved.is_empty() {
        report_unresolved(&sheet.headers, &outcome.unresolved, &timestamp);
    }
}

fn report_unresolved(headers: &[String], rows: &[CsvRow], timestamp: &str) {
    let report = utils::unresolved_report_name(timestamp);

    let table_rows: Vec<UnresolvedTableRow> = rows
        .iter()
        .map(|r| UnresolvedTableRow {
            artist: r.artist.clone(),
            title: r.title.clone(),
            album: r.album.clone().unwrap_or_default(),
        })
        .collect();
    let table = Table::new(table_rows);
    println!("{}", table);

    match management::write_rows(Path::new(&report), headers, rows) {
        Ok(()) => warning!(
            "{} tracks could not be added to the playlist. Most likely they were not found. See file {} for details.",
            rows.len(),
            report
        ),
        Err(e) => warning!(
            "{} tracks could not be added to the playlist and the report {} could not be written: {}",
            rows.len(),
            report,
            e
        ),
    }
}
