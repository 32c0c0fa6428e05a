// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Notifier adapter trait for outbound caregiver contact (SMS, voice).

use async_trait::async_trait;

use crate::error::ShiftcastError;
use crate::traits::adapter::PluginAdapter;

/// Adapter for outbound notification delivery.
///
/// Delivery is fire-and-forget: no delivery receipts are modeled, and the
/// core treats a returned error as a per-recipient problem to log, never a
/// reason to abort a fanout or escalation loop.
#[async_trait]
pub trait NotifierAdapter: PluginAdapter {
    /// Sends an SMS to the given phone address.
    async fn send_sms(&self, to: &str, body: &str) -> Result<(), ShiftcastError>;

    /// Places a voice call to the given phone address reading `script`.
    async fn place_call(&self, to: &str, script: &str) -> Result<(), ShiftcastError>;
}
