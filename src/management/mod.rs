mod auth;
mod csv_file;

pub use auth::TokenManager;
pub use csv_file::CsvError;
pub use csv_file::read_track_sheet;
pub use csv_file::write_rows;
pub use csv_file::write_tracks;
