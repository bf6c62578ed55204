//! Result reporting: JSON envelopes and progress bars.

pub mod json_envelope;
pub mod progress;
mod reporter;

pub use json_envelope::{
    BuildClipEntry, BuildPayload, ConfigPayload, MinifyPayload, ResultType,
};
pub use reporter::{emit_json_error, emit_json_result, error_chain};
