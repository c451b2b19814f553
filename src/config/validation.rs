//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (scale, minimum sizes, viewport)
//! - Detect conflicting screen declarations
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Route and default-screen problems are left to boot, which logs and continues

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("boot.bootstrap_fragment must name a fragment")]
    EmptyBootstrapFragment,

    #[error("layout.scale must be in (0, 1], got {0}")]
    ScaleOutOfRange(f64),

    #[error("layout minimum size must be non-zero, got {width}x{height}")]
    ZeroMinimumSize { width: u32, height: u32 },

    #[error("page.viewport must be non-zero, got {width}x{height}")]
    ZeroViewport { width: u32, height: u32 },

    #[error("screen #{index} has an empty id")]
    EmptyScreenId { index: usize },

    #[error("screen id {0:?} declared more than once")]
    DuplicateScreenId(String),
}

/// Validate a configuration, collecting every problem.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.boot.bootstrap_fragment.trim_start_matches('#').is_empty() {
        errors.push(ValidationError::EmptyBootstrapFragment);
    }

    let scale = config.layout.scale;
    if !(scale > 0.0 && scale <= 1.0) {
        errors.push(ValidationError::ScaleOutOfRange(scale));
    }

    if config.layout.min_width == 0 || config.layout.min_height == 0 {
        errors.push(ValidationError::ZeroMinimumSize {
            width: config.layout.min_width,
            height: config.layout.min_height,
        });
    }

    let viewport = config.page.viewport;
    if viewport.width == 0 || viewport.height == 0 {
        errors.push(ValidationError::ZeroViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut seen = HashSet::new();
    for (index, screen) in config.page.screens.iter().enumerate() {
        if screen.id.is_empty() {
            errors.push(ValidationError::EmptyScreenId { index });
        } else if !seen.insert(screen.id.as_str()) {
            errors.push(ValidationError::DuplicateScreenId(screen.id.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::ScreenConfig;

    fn screen(id: &str) -> ScreenConfig {
        ScreenConfig {
            id: id.to_string(),
            default: false,
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.boot.bootstrap_fragment.clear();
        config.layout.scale = 1.5;
        config.layout.min_height = 0;
        config.page.screens = vec![screen("a"), screen(""), screen("a")];

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyBootstrapFragment,
                ValidationError::ScaleOutOfRange(1.5),
                ValidationError::ZeroMinimumSize { width: 500, height: 0 },
                ValidationError::EmptyScreenId { index: 1 },
                ValidationError::DuplicateScreenId("a".to_string()),
            ]
        );
    }

    #[test]
    fn test_hash_only_bootstrap_rejected() {
        let mut config = AppConfig::default();
        config.boot.bootstrap_fragment = "#".to_string();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::EmptyBootstrapFragment]
        );

        config.boot.bootstrap_fragment = "#index".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_nan_scale_rejected() {
        let mut config = AppConfig::default();
        config.layout.scale = f64::NAN;
        assert_eq!(validate_config(&config).unwrap_err().len(), 1);
    }
}
