use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlistcli::{
    cli, config,
    types::{SortKey, SortOrder},
    warning,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Import tracks from a CSV file to a Spotify playlist
    #[command(name = "import_playlist")]
    ImportPlaylist(ImportOptions),

    /// Export tracks from a Spotify playlist to a CSV file
    #[command(name = "export_playlist")]
    ExportPlaylist(ExportOptions),

    /// Export album covers from a Spotify playlist to a directory
    #[command(name = "export_playlist_album_covers")]
    ExportPlaylistAlbumCovers(AlbumCoversOptions),

    /// Remove duplicate tracks from a Spotify playlist, keeping the first occurrence
    #[command(name = "deduplicate_playlist")]
    DeduplicatePlaylist(DeduplicateOptions),

    /// Sort a playlist by a given field ("random" sorting is the default)
    #[command(name = "sort_playlist")]
    SortPlaylist(SortOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct ImportOptions {
    /// Path to the CSV file; needs at least the columns artist and title
    #[clap(short, long, default_value = "music.csv")]
    pub input_file: PathBuf,

    /// Playlist the tracks are added to; created if missing (default: new timestamped playlist)
    #[clap(short, long)]
    pub playlist_name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Name of the playlist to export
    #[clap(short, long)]
    pub playlist_name: String,

    /// Path to the CSV file
    #[clap(short, long, default_value = "exported_playlist.csv")]
    pub output_file: PathBuf,

    /// Only write the artist and title columns
    #[clap(long)]
    pub skip_album: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct AlbumCoversOptions {
    /// Name of the playlist to export
    #[clap(short, long)]
    pub playlist_name: String,

    /// Directory the images are written to
    #[clap(short, long, default_value = "output/album_covers")]
    pub output_directory: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct DeduplicateOptions {
    /// Name of the playlist to deduplicate
    #[clap(short, long)]
    pub playlist_name: String,
}

#[derive(Parser, Debug, Clone)]
pub struct SortOptions {
    /// Name of the playlist to sort
    #[clap(short, long)]
    pub playlist_name: String,

    /// Field to sort by
    #[clap(short, long, value_enum, default_value_t = SortKey::Random)]
    pub sort_by: SortKey,

    /// Order of sorting, ignored for random
    #[clap(short, long, value_enum, default_value_t = SortOrder::Asc)]
    pub order: SortOrder,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if !matches!(cli.command, Command::Completions(_)) {
        if let Err(e) = config::load_env().await {
            warning!("Cannot load environment, using defaults. Err: {}", e);
        }
    }

    match cli.command {
        Command::Auth => cli::auth().await,
        Command::ImportPlaylist(opt) => cli::import_playlist(opt.input_file, opt.playlist_name).await,
        Command::ExportPlaylist(opt) => {
            cli::export_playlist(opt.playlist_name, opt.output_file, opt.skip_album).await
        }
        Command::ExportPlaylistAlbumCovers(opt) => {
            cli::export_playlist_album_covers(opt.playlist_name, opt.output_directory).await
        }
        Command::DeduplicatePlaylist(opt) => cli::deduplicate_playlist(opt.playlist_name).await,
        Command::SortPlaylist(opt) => {
            cli::sort_playlist(opt.playlist_name, opt.sort_by, opt.order).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
