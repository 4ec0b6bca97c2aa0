use clap::{Args, Parser, Subcommand};
use seekpath::PathKind;
use std::path::PathBuf;

#[derive(Clone, Debug, Parser)]
#[command(name = "seekpath", version = env!("CARGO_PKG_VERSION"), about, long_about = None, propagate_version = true)]
pub struct App {
    /// Config file; defaults to $SEEKPATH_CONFIG or the user config dir.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the install prefix used for fallback locations.
    #[arg(long, global = true)]
    pub prefix: Option<PathBuf>,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "l", name = "locate", about = "Find a resource in the search path")]
    Locate(LocateArg),
    #[command(alias = "ls", name = "locations", about = "Print the search path")]
    Locations(LocationsArg),
    #[command(name = "join", about = "Join paths into a path-list value")]
    Join(JoinArg),
    #[command(name = "expand", about = "Append every suffix to every base")]
    Expand(ExpandArg),
}

#[derive(Clone, Debug, Args)]
pub struct LocateArg {
    /// Resource name, relative to each location.
    pub name: PathBuf,

    #[arg(short, long, default_value = "aux", value_parser = parse_kind)]
    pub kind: PathKind,

    /// Search the locations listed in this variable instead of the kind's.
    #[arg(long, conflicts_with = "dir")]
    pub var: Option<String>,

    /// Search these directories, in order, instead of any variable.
    #[arg(short, long)]
    pub dir: Vec<PathBuf>,

    /// Print every match rather than the first.
    #[arg(short, long)]
    pub all: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LocationsArg {
    #[arg(short, long, default_value = "aux", value_parser = parse_kind)]
    pub kind: PathKind,

    /// Only list directories that exist.
    #[arg(short, long)]
    pub existing: bool,
}

#[derive(Clone, Debug, Args)]
pub struct JoinArg {
    /// Entries to join; empty strings are kept as empty slots.
    #[arg(allow_hyphen_values = true)]
    pub paths: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ExpandArg {
    #[arg(short, long = "base", required = true)]
    pub bases: Vec<PathBuf>,

    #[arg(short, long = "suffix", required = true)]
    pub suffixes: Vec<PathBuf>,
}

fn parse_kind(s: &str) -> Result<PathKind, String> {
    s.parse().map_err(|e: seekpath::Error| e.to_string())
}
