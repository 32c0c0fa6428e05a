// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Log-backed notification delivery.
//!
//! `LogNotifier` implements [`NotifierAdapter`] by emitting each SMS and
//! voice call as a structured log line. It is the delivery adapter for
//! development and standalone deployments; a production deployment would add
//! a provider-backed adapter (Twilio or similar) behind the same trait.

use async_trait::async_trait;
use tracing::info;

use shiftcast_core::types::{AdapterType, HealthStatus};
use shiftcast_core::{NotifierAdapter, PluginAdapter, ShiftcastError};

/// Notifier that logs deliveries instead of sending them.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PluginAdapter for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Notifier
    }

    async fn health_check(&self) -> Result<HealthStatus, ShiftcastError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShiftcastError> {
        Ok(())
    }
}

#[async_trait]
impl NotifierAdapter for LogNotifier {
    async fn send_sms(&self, to: &str, body: &str) -> Result<(), ShiftcastError> {
        info!(channel = "sms", to = %to, body = %body, "outbound notification");
        Ok(())
    }

    async fn place_call(&self, to: &str, script: &str) -> Result<(), ShiftcastError> {
        info!(channel = "voice", to = %to, script = %script, "outbound notification");
        Ok(())
    }
}
