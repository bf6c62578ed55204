//! Result reporting on stdout.

use super::json_envelope::{ErrorPayload, EventType, JsonEnvelope};

/// Emit a JSON result event to stdout.
///
/// Used by command handlers when running in JSON output mode.
pub fn emit_json_result<T: serde::Serialize>(payload: &T) {
    emit(EventType::Result, payload);
}

/// Emit a JSON error event to stdout.
pub fn emit_json_error(error: &dyn std::error::Error) {
    let payload = ErrorPayload {
        message: error_chain(error),
    };
    emit(EventType::Error, &payload);
}

fn emit<T: serde::Serialize>(event: EventType, payload: &T) {
    let envelope = JsonEnvelope::new(event, payload);
    match serde_json::to_string(&envelope) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            // stderr keeps the stdout JSON stream clean
            eprintln!("error: failed to serialize JSON result: {e}");
        }
    }
}

/// Render an error and its sources as `outer: inner: root`.
pub fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
