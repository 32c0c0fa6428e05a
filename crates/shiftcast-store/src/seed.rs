// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seed import for pre-populated Shift and Caregiver collections.
//!
//! An external provisioning process supplies shifts and caregivers as a JSON
//! document; the store contract requires accepting them at load time. Fanout
//! records are never seeded, they only ever come from the engine.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use shiftcast_core::ShiftcastError;
use shiftcast_core::types::{Caregiver, Shift};

use crate::store::MemoryStore;

/// Wire format of a seed document.
#[derive(Debug, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub caregivers: Vec<Caregiver>,
    #[serde(default)]
    pub shifts: Vec<Shift>,
}

/// Loads a seed document from `path` into `store`.
pub fn load_seed_file(store: &MemoryStore, path: &Path) -> Result<(), ShiftcastError> {
    let content = std::fs::read_to_string(path).map_err(|e| ShiftcastError::Store {
        source: Box::new(e),
    })?;
    load_seed_str(store, &content)
}

/// Loads a seed document from a JSON string into `store`.
pub fn load_seed_str(store: &MemoryStore, json: &str) -> Result<(), ShiftcastError> {
    let data: SeedData = serde_json::from_str(json).map_err(|e| ShiftcastError::Store {
        source: Box::new(e),
    })?;

    for caregiver in data.caregivers {
        store.caregivers.put(caregiver.id.clone(), caregiver);
    }
    for shift in data.shifts {
        store.shifts.put(shift.id.clone(), shift);
    }

    info!(
        caregivers = store.caregivers.len(),
        shifts = store.shifts.len(),
        "seed data loaded"
    );
    Ok(())
}
