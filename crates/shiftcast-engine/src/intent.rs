// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-based intent classification for inbound replies.

use async_trait::async_trait;

use shiftcast_core::types::{AdapterType, HealthStatus, MessageIntent};
use shiftcast_core::{IntentClassifier, PluginAdapter, ShiftcastError};

const ACCEPT_PHRASES: [&str; 6] = ["yes", "y", "accept", "ok", "confirm", "i'll take it"];
const DECLINE_PHRASES: [&str; 6] = ["no", "n", "decline", "pass", "cannot", "can't"];

/// Default classifier: case-insensitive keyword matching.
///
/// Anything that is neither a recognized acceptance nor a recognized decline
/// is `Unknown`; the engine treats declines and unknowns identically, so
/// misclassifying an exotic decline as unknown is harmless.
#[derive(Debug, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    fn classify_text(text: &str) -> MessageIntent {
        let normalized = text.trim().to_lowercase();
        if ACCEPT_PHRASES.contains(&normalized.as_str()) {
            MessageIntent::Accept
        } else if DECLINE_PHRASES.contains(&normalized.as_str()) {
            MessageIntent::Decline
        } else {
            MessageIntent::Unknown
        }
    }
}

#[async_trait]
impl PluginAdapter for KeywordClassifier {
    fn name(&self) -> &str {
        "keyword"
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
impl IntentClassifier for KeywordClassifier {
    async fn classify(&self, text: &str) -> Result<MessageIntent, ShiftcastError> {
        Ok(Self::classify_text(text))
    }
}
