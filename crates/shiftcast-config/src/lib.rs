// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Shiftcast fanout coordinator.
//!
//! Provides TOML configuration parsing with strict validation
//! (`deny_unknown_fields`), XDG file hierarchy lookup, environment variable
//! overrides, and miette diagnostic rendering.
//!
//! # Usage
//!
//! ```no_run
//! use shiftcast_config::load_and_validate;
//!
//! let config = load_and_validate().expect("config errors");
//! println!("escalation delay: {}s", config.fanout.escalation_delay_secs);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::ShiftcastConfig;

/// Load configuration from the XDG hierarchy and validate it.
///
/// The high-level entry point: loads TOML files + env vars via Figment, then
/// runs post-deserialization validation. Returns either a valid
/// [`ShiftcastConfig`] or a list of diagnostic errors.
pub fn load_and_validate() -> Result<ShiftcastConfig, Vec<ConfigError>> {
    finish(loader::load_config())
}

/// Load configuration from a specific file path and validate it.
pub fn load_and_validate_path(
    path: &std::path::Path,
) -> Result<ShiftcastConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path))
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(
    toml_content: &str,
) -> Result<ShiftcastConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(
    loaded: Result<ShiftcastConfig, figment::Error>,
) -> Result<ShiftcastConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
