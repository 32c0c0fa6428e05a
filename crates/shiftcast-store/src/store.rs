// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory store holding the three entity collections.

use shiftcast_core::types::{Caregiver, CaregiverId, Shift, ShiftFanout, ShiftId};

use crate::table::KvTable;

/// In-memory store for Shift, Caregiver, and ShiftFanout records.
///
/// Constructed once per process (or per test) and shared via `Arc`; there is
/// no ambient global instance. Shifts and caregivers are written only by seed
/// import; fanouts are written only through the engine's per-shift critical
/// section.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub shifts: KvTable<ShiftId, Shift>,
    pub caregivers: KvTable<CaregiverId, Caregiver>,
    pub fanouts: KvTable<ShiftId, ShiftFanout>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All caregivers whose role tag equals `role`.
    ///
    /// Linear scan; caregiver rosters are modest. A role index would be the
    /// scale-up path.
    pub fn caregivers_with_role(&self, role: &str) -> Vec<Caregiver> {
        self.caregivers
            .all()
            .into_iter()
            .filter(|caregiver| caregiver.role == role)
            .collect()
    }

    /// Resolves a phone address to its caregiver record.
    pub fn caregiver_by_phone(&self, phone: &str) -> Option<Caregiver> {
        self.caregivers
            .all()
            .into_iter()
            .find(|caregiver| caregiver.phone == phone)
    }
}
