// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intent classifier trait for inbound reply text.

use async_trait::async_trait;

use crate::error::ShiftcastError;
use crate::traits::adapter::PluginAdapter;

/// Adapter that maps raw inbound text to a bounded intent.
///
/// The core only consumes the resulting [`MessageIntent`] value; how the
/// classification happens (keyword matching, an ML backend) is an
/// implementation concern.
///
/// [`MessageIntent`]: crate::types::MessageIntent
#[async_trait]
pub trait IntentClassifier: PluginAdapter {
    /// Classifies the given reply text.
    async fn classify(
        &self,
        text: &str,
    ) -> Result<crate::types::MessageIntent, ShiftcastError>;
}
