// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./shiftcast.toml` > `~/.config/shiftcast/shiftcast.toml`
//! > `/etc/shiftcast/shiftcast.toml` with environment variable overrides via
//! the `SHIFTCAST_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::ShiftcastConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/shiftcast/shiftcast.toml` (system-wide)
/// 3. `~/.config/shiftcast/shiftcast.toml` (user XDG config)
/// 4. `./shiftcast.toml` (local directory)
/// 5. `SHIFTCAST_*` environment variables
pub fn load_config() -> Result<ShiftcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShiftcastConfig::default()))
        .merge(Toml::file("/etc/shiftcast/shiftcast.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("shiftcast/shiftcast.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("shiftcast.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(
    toml_content: &str,
) -> Result<ShiftcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShiftcastConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ShiftcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShiftcastConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so that keys containing
/// underscores stay intact: `SHIFTCAST_FANOUT_ESCALATION_DELAY_SECS` must map
/// to `fanout.escalation_delay_secs`, not `fanout.escalation.delay.secs`.
fn env_provider() -> Env {
    Env::prefixed("SHIFTCAST_").map(|key| {
        // Keys arrive in the variable's original (upper) case; the section
        // match below is on the lowercased form.
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("fanout_", "fanout.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn str_loader_applies_defaults_under_partial_toml() {
        let config = load_config_from_str("[fanout]\nescalation_delay_secs = 30\n")
            .expect("partial TOML should load");
        assert_eq!(config.fanout.escalation_delay_secs, 30);
        // Untouched sections keep compiled defaults.
        assert_eq!(config.agent.name, "shiftcast");
        assert_eq!(config.gateway.port, 8080);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = load_config_from_str("[fanout]\nescalation_dealy_secs = 30\n");
        assert!(result.is_err(), "typo'd key must not silently pass");
    }

    #[test]
    fn env_override_maps_section_keys() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("SHIFTCAST_FANOUT_ESCALATION_DELAY_SECS", "15");
            jail.set_env("SHIFTCAST_GATEWAY_PORT", "9000");

            let config: ShiftcastConfig = Figment::new()
                .merge(Serialized::defaults(ShiftcastConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.fanout.escalation_delay_secs, 15);
            assert_eq!(config.gateway.port, 9000);
            Ok(())
        });
    }

    #[test]
    fn env_override_survives_deny_unknown_fields() {
        // An uppercase variable must land on a known section key, not get
        // rejected as an unknown field by the strict models.
        figment::Jail::expect_with(|jail| {
            jail.set_env("SHIFTCAST_AGENT_LOG_LEVEL", "debug");
            jail.set_env("SHIFTCAST_STORAGE_SEED_FILE", "roster.json");

            let config: ShiftcastConfig = Figment::new()
                .merge(Serialized::defaults(ShiftcastConfig::default()))
                .merge(env_provider())
                .extract()?;

            assert_eq!(config.agent.log_level, "debug");
            assert_eq!(config.storage.seed_file.as_deref(), Some("roster.json"));
            Ok(())
        });
    }
}
