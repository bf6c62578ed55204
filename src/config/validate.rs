//! Configuration validation.

use std::path::{Component, Path};

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_trim(config)?;
    validate_output(config)?;
    Ok(())
}

/// Validate silence trimming settings.
fn validate_trim(config: &Config) -> Result<()> {
    let trim = &config.trim;

    // dBFS is relative to full scale, so a threshold above 0 would treat all audio as silence
    if !trim.threshold_db.is_finite() || trim.threshold_db > 0.0 {
        return Err(Error::ConfigValidation {
            message: format!(
                "trim.threshold_db must be a finite value <= 0 dB, got {}",
                trim.threshold_db
            ),
        });
    }

    if trim.periods == 0 {
        return Err(Error::ConfigValidation {
            message: "trim.periods must be at least 1".to_string(),
        });
    }

    Ok(())
}

/// Validate output layout settings.
fn validate_output(config: &Config) -> Result<()> {
    let output = &config.output;

    // Wiped on every build: plain components only, strictly below the unit directory
    let subdir = Path::new(output.audio_subdir.trim());
    let mut components = subdir.components().peekable();
    let plain = components.peek().is_some()
        && components.all(|c| matches!(c, Component::Normal(_)));
    if !plain {
        return Err(Error::ConfigValidation {
            message: format!(
                "output.audio_subdir must name a subdirectory, got '{}'",
                output.audio_subdir
            ),
        });
    }

    let ext = &output.fallback_extension;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::ConfigValidation {
            message: format!("output.fallback_extension must be alphanumeric, got '{ext}'"),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_positive_threshold_rejected() {
        let mut config = Config::default();
        config.trim.threshold_db = 3.0;
        let result = validate_config(&config);
        assert!(matches!(result, Err(Error::ConfigValidation { .. })));
    }

    #[test]
    fn test_nan_threshold_rejected() {
        let mut config = Config::default();
        config.trim.threshold_db = f64::NAN;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_zero_periods_rejected() {
        let mut config = Config::default();
        config.trim.periods = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_audio_subdir_must_stay_inside_unit_dir() {
        let mut config = Config::default();
        config.output.audio_subdir = "../elsewhere".to_string();
        assert!(validate_config(&config).is_err());

        config.output.audio_subdir = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_audio_subdir_rejects_absolute_and_current_dir() {
        let mut config = Config::default();
        for subdir in ["/abs", "/", "./", ".", "clips/../..", "./clips"] {
            config.output.audio_subdir = subdir.to_string();
            assert!(
                matches!(validate_config(&config), Err(Error::ConfigValidation { .. })),
                "{subdir:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_audio_subdir_accepts_nested_relative_path() {
        let mut config = Config::default();
        for subdir in ["clips", "media/clips", "clips/"] {
            config.output.audio_subdir = subdir.to_string();
            assert!(validate_config(&config).is_ok(), "{subdir:?} should be accepted");
        }
    }

    #[test]
    fn test_fallback_extension_must_be_alphanumeric() {
        let mut config = Config::default();
        config.output.fallback_extension = ".mp3".to_string();
        assert!(validate_config(&config).is_err());

        config.output.fallback_extension = "ogg".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
