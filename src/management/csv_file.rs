use std::{fmt, io, path::Path};

use csv::{ReaderBuilder, Trim, WriterBuilder};

use crate::types::{CsvRow, Track, TrackSheet};

pub const COLUMN_ARTIST: &str = "artist";
pub const COLUMN_TITLE: &str = "title";
pub const COLUMN_ALBUM: &str = "album";
pub const COLUMN_RELEASE_YEAR: &str = "release_year";

#[derive(Debug)]
pub enum CsvError {
    Io(io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl fmt::Display for CsvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvError::Io(e) => write!(f, "{}", e),
            CsvError::Csv(e) => write!(f, "{}", e),
            CsvError::MissingColumn(column) => write!(f, "missing required column '{}'", column),
        }
    }
}

impl std::error::Error for CsvError {}

impl From<io::Error> for CsvError {
    fn from(err: io::Error) -> Self {
        CsvError::Io(err)
    }
}

impl From<csv::Error> for CsvError {
    fn from(err: csv::Error) -> Self {
        CsvError::Csv(err)
    }
}

/// Reads an import file. Headers are trimmed and lower-cased, so `Artist`,
/// ` TITLE ` and `title` are all accepted; `artist` and `title` are required,
/// `album` and `release_year` are optional. Empty optional values become `None`.
pub fn read_track_sheet(path: &Path) -> Result<TrackSheet, CsvError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_path(path)?;

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect();

    let column = |name: &str| headers.iter().position(|h| h == name);
    let artist_idx = column(COLUMN_ARTIST).ok_or(CsvError::MissingColumn(COLUMN_ARTIST))?;
    let title_idx = column(COLUMN_TITLE).ok_or(CsvError::MissingColumn(COLUMN_TITLE))?;
    let album_idx = column(COLUMN_ALBUM);
    let year_idx = column(COLUMN_RELEASE_YEAR);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let values: Vec<String> = (0..headers.len())
            .map(|i| record.get(i).unwrap_or_default().trim().to_string())
            .collect();

        let optional = |idx: Option<usize>| {
            idx.map(|i| values[i].clone())
                .filter(|value| !value.is_empty())
        };

        rows.push(CsvRow {
            artist: values[artist_idx].clone(),
            title: values[title_idx].clone(),
            album: optional(album_idx),
            release_year: optional(year_idx),
            values: values.clone(),
        });
    }

    Ok(TrackSheet { headers, rows })
}

/// Writes rows back out with the given header, e.g. for the report of tracks
/// that could not be imported.
pub fn write_rows(path: &Path, headers: &[String], rows: &[CsvRow]) -> Result<(), CsvError> {
    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(&row.values)?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes one `artist,title[,album]` row per track, in the given order.
pub fn write_tracks(path: &Path, tracks: &[Track], include_album: bool) -> Result<(), CsvError> {
    let mut writer = WriterBuilder::new().from_path(path)?;

    if include_album {
        writer.write_record([COLUMN_ARTIST, COLUMN_TITLE, COLUMN_ALBUM])?;
    } else {
        writer.write_record([COLUMN_ARTIST, COLUMN_TITLE])?;
    }

    for track in tracks {
        if include_album {
            writer.write_record([
                track.main_artist(),
                track.name.as_str(),
                track.album.name.as_str(),
            ])?;
        } else {
            writer.write_record([track.main_artist(), track.name.as_str()])?;
        }
    }

    writer.flush()?;
    Ok(())
}
