//! CLI argument definitions.

use crate::cli::validators::parse_threshold_db;
use crate::config::OutputMode;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Slice bilingual phrase recordings into trimmed clips and an Anki import file.
#[derive(Debug, Parser)]
#[command(name = "phrasedeck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,

    /// Options shared by all subcommands.
    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by all subcommands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Only log warnings and errors; hide the progress bar.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase verbosity (-v: debug, -vv: trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// How results are printed on stdout (human, json).
    #[arg(long, global = true, default_value = "human", env = "PHRASEDECK_OUTPUT_MODE")]
    pub output_mode: OutputMode,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reduce a transcriber JSON file to an editable phrase list (<name>.min.json).
    Minify(MinifyArgs),
    /// Cut one trimmed clip per phrase and write the flashcard import file.
    Build(BuildArgs),
    /// Manage configuration.
    Config {
        /// Configuration action to perform.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Arguments for the minify subcommand.
#[derive(Debug, Args)]
pub struct MinifyArgs {
    /// Transcript JSON with a `segments` array of {start, end, text}.
    pub transcript: PathBuf,
}

/// Arguments for the build subcommand.
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Phrase list JSON with `english` and `norwegian` filled in.
    pub pairs: PathBuf,

    /// Source recording the phrase timings refer to.
    pub audio: PathBuf,

    /// Directory in which the unit directory is created (default: current directory).
    #[arg(short, long, env = "PHRASEDECK_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Silence threshold in dBFS; less negative trims more.
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_threshold_db, env = "PHRASEDECK_THRESHOLD")]
    pub threshold: Option<f64>,

    /// ffmpeg binary to use.
    #[arg(long, env = "PHRASEDECK_FFMPEG")]
    pub ffmpeg: Option<PathBuf>,
}

/// Config subcommand actions.
#[derive(Debug, Clone, Copy, Subcommand)]
pub enum ConfigAction {
    /// Create default configuration file.
    Init,
    /// Display current configuration.
    Show,
    /// Print configuration file path.
    Path,
}
