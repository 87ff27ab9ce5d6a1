//! CLI struct definitions for the hallway command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    name = "hallway",
    version = env!("CARGO_PKG_VERSION"),
    about = "Room-to-room directions and walking-time estimates for a nine-floor school building."
)]
pub(crate) struct Cli {
    /// Planner settings file (TOML). Falls back to $HALLWAY_CONFIG, then ./hallway.toml.
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Directions between two rooms or special areas
    Route(RouteCli),
    /// Node-by-node path found by the graph search
    Path(PathCli),
    /// List rooms and special areas
    Rooms(RoomsCli),
    /// Ask for trips on stdin until 'quit'
    Interactive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args, Debug)]
pub(crate) struct RouteCli {
    /// Where you are: a room id like 4N5 or an area like Library.
    pub from: String,
    /// Where you are going.
    pub to: String,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(clap::Args, Debug)]
pub(crate) struct PathCli {
    pub from: String,
    pub to: String,
}

#[derive(clap::Args, Debug)]
pub(crate) struct RoomsCli {
    /// Only list this floor (0-8).
    #[clap(long, value_parser = clap::value_parser!(u8).range(0..=8))]
    pub floor: Option<u8>,
    /// Output format: 'text' or 'json'.
    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
