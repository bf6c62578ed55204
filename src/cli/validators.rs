//! CLI argument validators.

/// Parse and validate a silence threshold in dBFS (finite, at most 0).
pub fn parse_threshold_db(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .trim_end_matches("dB")
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() {
        return Err(format!("threshold must be a finite number, got {value}"));
    }

    if value > 0.0 {
        return Err(format!("threshold must be at most 0 dB, got {value}"));
    }

    Ok(value)
}
