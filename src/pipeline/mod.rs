//! Processing pipeline components.

mod coordinator;
mod processor;

pub use coordinator::{UnitLayout, unit_name};
pub use processor::{ProcessResult, ProcessedClip, process_segments};
