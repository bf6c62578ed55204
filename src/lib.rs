//! phrasedeck - turn timed bilingual phrase lists into Anki audio flashcards.
//!
//! The workflow has two automated passes with a manual step in between:
//!
//! 1. `minify` reduces a transcriber's JSON to a phrase list.
//! 2. A person fills in the English column.
//! 3. `build` cuts one silence-trimmed clip per phrase with ffmpeg and
//!    writes a tab-separated import file referencing the clips.

#![warn(missing_docs)]

pub mod cli;
pub mod clipper;
pub mod config;
pub mod constants;
pub mod deck;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod segments;
pub mod text;

use clap::Parser;
use cli::{Cli, Command, GlobalArgs};
use config::{Config, OutputMode, config_file_path, load_default_config, save_default_config};
use output::{ConfigPayload, ResultType, emit_json_error, emit_json_result};

pub use error::{Error, Result};

/// Main entry point for the phrasedeck CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet);

    let output_mode = cli.global.output_mode;
    let result = dispatch(cli.command, &cli.global);

    if let Err(e) = &result
        && output_mode.is_structured()
    {
        emit_json_error(e);
    }

    result
}

fn dispatch(command: Command, global: &GlobalArgs) -> Result<()> {
    let output_mode = global.output_mode;

    match command {
        Command::Minify(args) => segments::command::execute(&args, output_mode),
        Command::Build(args) => {
            let config = load_default_config()?;
            clipper::command::execute(&args, &config, output_mode, !global.quiet)
        }
        Command::Config { action } => handle_config_command(action, output_mode),
    }
}

/// Set up `tracing` on stderr; `RUST_LOG` overrides the verbosity flags.
fn init_logging(verbose: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = if quiet {
        "warn"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_config_command(action: cli::ConfigAction, output_mode: OutputMode) -> Result<()> {
    use cli::ConfigAction;

    match action {
        ConfigAction::Init => {
            let path = config_file_path()?;
            let created = !path.exists();
            if created {
                save_default_config(&Config::default())?;
            }

            if output_mode.is_structured() {
                emit_json_result(&ConfigPayload {
                    result_type: ResultType::Config,
                    path,
                    config: None,
                    created: Some(created),
                });
            } else if created {
                println!("Created configuration file: {}", path.display());
            } else {
                println!("Configuration file already exists: {}", path.display());
            }
            Ok(())
        }
        ConfigAction::Show => {
            let config = load_default_config()?;
            if output_mode.is_structured() {
                emit_json_result(&ConfigPayload {
                    result_type: ResultType::Config,
                    path: config_file_path()?,
                    config: Some(config),
                    created: None,
                });
            } else {
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| Error::ConfigSerialize { source: e })?;
                print!("{rendered}");
            }
            Ok(())
        }
        ConfigAction::Path => {
            let path = config_file_path()?;
            if output_mode.is_structured() {
                emit_json_result(&ConfigPayload {
                    result_type: ResultType::Config,
                    path,
                    config: None,
                    created: None,
                });
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
    }
}
