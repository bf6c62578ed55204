//! Command-line interface.

mod args;
pub mod validators;

pub use args::{BuildArgs, Cli, Command, ConfigAction, GlobalArgs, MinifyArgs};
