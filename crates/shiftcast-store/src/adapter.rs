// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! StorageAdapter implementation for the in-memory store.

use async_trait::async_trait;
use tracing::debug;

use shiftcast_core::types::{AdapterType, HealthStatus};
use shiftcast_core::{PluginAdapter, ShiftcastError, StorageAdapter};

use crate::store::MemoryStore;

#[async_trait]
impl PluginAdapter for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn adapter_type(&self) -> AdapterType {
        AdapterType::Storage
    }

    async fn health_check(&self) -> Result<HealthStatus, ShiftcastError> {
        Ok(HealthStatus::Healthy)
    }

    async fn shutdown(&self) -> Result<(), ShiftcastError> {
        self.close().await
    }
}

#[async_trait]
impl StorageAdapter for MemoryStore {
    async fn initialize(&self) -> Result<(), ShiftcastError> {
        // Nothing to open; collections exist from construction.
        debug!("memory store initialized");
        Ok(())
    }

    async fn close(&self) -> Result<(), ShiftcastError> {
        // In-memory contents have no durability contract to flush.
        debug!(
            shifts = self.shifts.len(),
            caregivers = self.caregivers.len(),
            fanouts = self.fanouts.len(),
            "memory store closed"
        );
        Ok(())
    }
}
