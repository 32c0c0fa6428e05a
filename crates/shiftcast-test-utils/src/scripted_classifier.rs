// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted intent classifier for deterministic testing.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use shiftcast_core::types::{AdapterType, HealthStatus, MessageIntent};
use shiftcast_core::{IntentClassifier, PluginAdapter, ShiftcastError};

/// A classifier that returns pre-configured intents in FIFO order.
///
/// When the queue is empty the configured fallback intent is returned, so
/// tests can also pin a constant classification with
/// [`always`](Self::always).
pub struct ScriptedClassifier {
    intents: Arc<Mutex<VecDeque<MessageIntent>>>,
    fallback: MessageIntent,
}

impl ScriptedClassifier {
    /// Queue-backed classifier falling back to `Unknown` once drained.
    pub fn with_intents(intents: Vec<MessageIntent>) -> Self {
        Self {
            intents: Arc::new(Mutex::new(VecDeque::from(intents))),
            fallback: MessageIntent::Unknown,
        }
    }

    /// Classifier that returns `intent` for every message.
    pub fn always(intent: MessageIntent) -> Self {
        Self {
            intents: Arc::new(Mutex::new(VecDeque::new())),
            fallback: intent,
        }
    }
}

#[async_trait]
impl PluginAdapter for ScriptedClassifier {
    fn name(&self) -> &str {
        "scripted-classifier"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Classifier
    }

    async fn health_check(&self) -> Result<HealthStatus, ShiftcastError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShiftcastError> {
        Ok(())
    }
}

#[async_trait]
impl IntentClassifier for ScriptedClassifier {
    async fn classify(&self, _text: &str) -> Result<MessageIntent, ShiftcastError> {
        Ok(self
            .intents
            .lock()
            .await
            .pop_front()
            .unwrap_or(self.fallback))
    }
}
