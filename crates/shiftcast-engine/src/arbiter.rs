// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-shift claim arbitration.
//!
//! The arbiter is the single serialization point for all `ShiftFanout`
//! mutations: claim attempts, fanout initiation, and the escalation action
//! all run inside the same per-shift critical section, so two concurrent
//! claim attempts for one shift yield exactly one winner, and a claim racing
//! an in-flight escalation cannot both observe a pending record.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::info;

use shiftcast_core::types::{CaregiverId, ClaimOutcome, FanoutStatus, ShiftId};
use shiftcast_core::ShiftcastError;
use shiftcast_store::MemoryStore;

use crate::escalation::EscalationRegistry;

/// Grants exclusive, serialized access to mutate a single fanout's state.
///
/// Critical sections are created lazily on first use and never removed for
/// the lifetime of the process; the map is bounded by the number of distinct
/// shifts ever fanned out, which is modest at this scale. A high-churn
/// deployment would need eviction or an external locking service.
pub struct ClaimArbiter {
    store: Arc<MemoryStore>,
    escalations: Arc<EscalationRegistry>,
    locks: DashMap<ShiftId, Arc<Mutex<()>>>,
}

impl ClaimArbiter {
    pub fn new(store: Arc<MemoryStore>, escalations: Arc<EscalationRegistry>) -> Self {
        Self {
            store,
            escalations,
            locks: DashMap::new(),
        }
    }

    /// The critical section for `shift_id`. Callers with different shift
    /// identifiers never block each other; callers with the same identifier
    /// are strictly serialized.
    pub fn lock_for(&self, shift_id: &ShiftId) -> Arc<Mutex<()>> {
        self.locks
            .entry(shift_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Attempts to claim the shift's fanout for `caregiver_id`.
    ///
    /// The fanout is re-read inside the critical section -- a value read
    /// before acquisition may be stale. An absent or non-pending record
    /// yields [`ClaimOutcome::AlreadyResolved`]; a winning claim writes the
    /// record and signals advisory escalation cancellation.
    pub async fn try_claim(
        &self,
        shift_id: &ShiftId,
        caregiver_id: &CaregiverId,
    ) -> Result<ClaimOutcome, ShiftcastError> {
        let lock = self.lock_for(shift_id);
        let _guard = lock.lock().await;

        let Some(mut fanout) = self.store.fanouts.get(shift_id) else {
            return Ok(ClaimOutcome::AlreadyResolved);
        };
        if fanout.status != FanoutStatus::Pending {
            return Ok(ClaimOutcome::AlreadyResolved);
        }

        fanout.status = FanoutStatus::Claimed;
        fanout.claimed_by = Some(caregiver_id.clone());
        self.store.fanouts.put(shift_id.clone(), fanout);

        // Advisory: the escalation task re-checks status on wake either way.
        self.escalations.cancel(shift_id);

        info!(shift_id = %shift_id, caregiver_id = %caregiver_id, "shift claimed");
        Ok(ClaimOutcome::Claimed)
    }

    /// Number of critical sections created so far. Exposed for tests and
    /// operational introspection.
    pub fn lock_count(&self) -> usize {
        self.locks.len()
    }
}
