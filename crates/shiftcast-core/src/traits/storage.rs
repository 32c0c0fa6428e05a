// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage adapter trait for persistence backends.

use async_trait::async_trait;

use crate::error::ShiftcastError;
use crate::traits::adapter::PluginAdapter;

/// Adapter for storage backends holding the Shift, Caregiver, and ShiftFanout
/// collections.
///
/// The core requires only key-value semantics; the concrete storage
/// technology is irrelevant to the design and must accept pre-populated
/// collections at startup.
#[async_trait]
pub trait StorageAdapter: PluginAdapter {
    /// Initializes the storage backend.
    async fn initialize(&self) -> Result<(), ShiftcastError>;

    /// Closes the storage backend, flushing pending writes.
    async fn close(&self) -> Result<(), ShiftcastError>;
}
