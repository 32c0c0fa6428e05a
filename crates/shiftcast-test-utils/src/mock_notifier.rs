// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock notifier adapter that records sends instead of delivering them.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use shiftcast_core::types::{AdapterType, HealthStatus};
use shiftcast_core::{NotifierAdapter, PluginAdapter, ShiftcastError};

/// A recorded outbound notification: `(recipient phone, message body)`.
pub type SentRecord = (String, String);

/// A mock notifier that captures every SMS and voice call.
///
/// Tests inspect [`sms_sent`](Self::sms_sent) and
/// [`calls_placed`](Self::calls_placed) to assert on delivery behavior.
/// Optionally fails a configured recipient to exercise the engine's
/// log-and-continue handling of per-recipient delivery errors.
#[derive(Default)]
pub struct MockNotifier {
    sms: Arc<Mutex<Vec<SentRecord>>>,
    calls: Arc<Mutex<Vec<SentRecord>>>,
    failing_phone: Option<String>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a notifier that returns an error whenever `phone` is the
    /// recipient; all other sends succeed and are recorded.
    pub fn failing_for(phone: &str) -> Self {
        Self {
            failing_phone: Some(phone.to_string()),
            ..Self::default()
        }
    }

    /// All recorded SMS sends, in send order.
    pub async fn sms_sent(&self) -> Vec<SentRecord> {
        self.sms.lock().await.clone()
    }

    /// All recorded voice calls, in call order.
    pub async fn calls_placed(&self) -> Vec<SentRecord> {
        self.calls.lock().await.clone()
    }

    pub async fn sms_count(&self) -> usize {
        self.sms.lock().await.len()
    }

    pub async fn call_count(&self) -> usize {
        self.calls.lock().await.len()
    }

    fn check_failure(&self, to: &str) -> Result<(), ShiftcastError> {
        if self.failing_phone.as_deref() == Some(to) {
            return Err(ShiftcastError::Notifier {
                message: format!("simulated delivery failure to {to}"),
                source: None,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PluginAdapter for MockNotifier {
    fn name(&self) -> &str {
        "mock-notifier"
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
impl NotifierAdapter for MockNotifier {
    async fn send_sms(&self, to: &str, body: &str) -> Result<(), ShiftcastError> {
        self.check_failure(to)?;
        self.sms.lock().await.push((to.to_string(), body.to_string()));
        Ok(())
    }

    async fn place_call(&self, to: &str, script: &str) -> Result<(), ShiftcastError> {
        self.check_failure(to)?;
        self.calls
            .lock()
            .await
            .push((to.to_string(), script.to_string()));
        Ok(())
    }
}
