// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration error diagnostics rendered via miette.

use miette::Diagnostic;
use thiserror::Error;

/// A configuration error with diagnostic rendering.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// Figment failed to parse or deserialize the configuration sources.
    #[error("configuration parse error: {message}")]
    #[diagnostic(
        code(shiftcast::config::parse),
        help("check shiftcast.toml and SHIFTCAST_* environment variables")
    )]
    Parse {
        /// Figment's description of the failure.
        message: String,
    },

    /// A semantic constraint on a deserialized value failed.
    #[error("validation error: {message}")]
    #[diagnostic(code(shiftcast::config::validation))]
    Validation {
        /// Description of the failed constraint.
        message: String,
    },
}

/// Convert a figment error (which may aggregate several failures) into
/// one `ConfigError` per underlying failure.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| ConfigError::Parse {
            message: e.to_string(),
        })
        .collect()
}

/// Render collected configuration errors to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    use miette::GraphicalReportHandler;

    let handler = GraphicalReportHandler::new();
    for error in errors {
        let mut buf = String::new();
        let diagnostic: &dyn Diagnostic = error;
        if handler.render_report(&mut buf, diagnostic).is_ok() {
            eprint!("{buf}");
        } else {
            eprintln!("Error: {error}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn figment_error_becomes_parse_variants() {
        let err = figment::Error::from("boom".to_string());
        let errors = figment_to_config_errors(err);
        assert!(!errors.is_empty());
        assert!(matches!(errors[0], ConfigError::Parse { .. }));
    }

    #[test]
    fn validation_error_displays_message() {
        let err = ConfigError::Validation {
            message: "fanout.escalation_delay_secs must be greater than zero".into(),
        };
        assert!(err.to_string().contains("greater than zero"));
    }
}
