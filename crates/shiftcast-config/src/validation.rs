// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as a non-zero escalation delay and a plausible bind
//! address.

use crate::diagnostic::ConfigError;
use crate::model::ShiftcastConfig;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ShiftcastConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.fanout.escalation_delay_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "fanout.escalation_delay_secs must be greater than zero".to_string(),
        });
    }

    let host = config.gateway.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "gateway.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!(
                    "gateway.host `{host}` is not a valid IP address or hostname"
                ),
            });
        }
    }

    if !VALID_LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.log_level `{}` is not one of {}",
                config.agent.log_level,
                VALID_LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(seed_file) = &config.storage.seed_file
        && seed_file.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "storage.seed_file must not be empty when set".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&ShiftcastConfig::default()).unwrap();
    }

    #[test]
    fn zero_delay_is_rejected() {
        let mut config = ShiftcastConfig::default();
        config.fanout.escalation_delay_secs = 0;
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("escalation_delay_secs"));
    }

    #[test]
    fn bad_host_and_bad_level_both_reported() {
        let mut config = ShiftcastConfig::default();
        config.gateway.host = "not a host!".into();
        config.agent.log_level = "loud".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2, "validation must not fail fast");
    }

    #[test]
    fn empty_seed_file_is_rejected() {
        let mut config = ShiftcastConfig::default();
        config.storage.seed_file = Some("  ".into());
        assert!(validate_config(&config).is_err());
    }
}
