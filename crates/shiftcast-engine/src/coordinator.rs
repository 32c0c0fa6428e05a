// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! First-time fanout dispatch.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use shiftcast_core::types::{CaregiverId, FanoutOutcome, ShiftFanout, ShiftId};
use shiftcast_core::{NotifierAdapter, ShiftcastError};
use shiftcast_store::MemoryStore;

use crate::arbiter::ClaimArbiter;
use crate::escalation::EscalationScheduler;
use crate::messages::offer_sms_body;

/// Orchestrates first-time fanout: idempotency check, recipient selection,
/// SMS dispatch, fanout record creation, and escalation scheduling.
pub struct FanoutCoordinator {
    store: Arc<MemoryStore>,
    notifier: Arc<dyn NotifierAdapter>,
    arbiter: Arc<ClaimArbiter>,
    scheduler: Arc<EscalationScheduler>,
}

impl FanoutCoordinator {
    pub fn new(
        store: Arc<MemoryStore>,
        notifier: Arc<dyn NotifierAdapter>,
        arbiter: Arc<ClaimArbiter>,
        scheduler: Arc<EscalationScheduler>,
    ) -> Self {
        Self {
            store,
            notifier,
            arbiter,
            scheduler,
        }
    }

    /// Initiates fanout for `shift_id`.
    ///
    /// Idempotent: a second call for the same shift returns
    /// [`FanoutOutcome::AlreadyInitiated`] without sending anything. The
    /// whole initiation runs inside the shift's critical section so two
    /// concurrent first-time calls for the same shift cannot both pass the
    /// existence check and send duplicate SMS batches.
    ///
    /// Returns as soon as the SMS sends and record write complete; the
    /// escalation task runs in the background.
    pub async fn initiate_fanout(
        &self,
        shift_id: &ShiftId,
    ) -> Result<FanoutOutcome, ShiftcastError> {
        let lock = self.arbiter.lock_for(shift_id);
        let _guard = lock.lock().await;

        let Some(shift) = self.store.shifts.get(shift_id) else {
            return Err(ShiftcastError::ShiftNotFound {
                shift_id: shift_id.to_string(),
            });
        };

        if self.store.fanouts.get(shift_id).is_some() {
            info!(shift_id = %shift_id, "fanout already initiated");
            return Ok(FanoutOutcome::AlreadyInitiated);
        }

        let recipients = self.store.caregivers_with_role(&shift.role_required);
        if recipients.is_empty() {
            // Deliberately no fanout record here: a retry after the roster
            // gains a matching caregiver can still succeed.
            return Err(ShiftcastError::NoEligibleCaregivers {
                role: shift.role_required.clone(),
            });
        }

        let body = offer_sms_body(&shift);
        for caregiver in &recipients {
            if let Err(e) = self.notifier.send_sms(&caregiver.phone, &body).await {
                warn!(
                    shift_id = %shift_id,
                    caregiver_id = %caregiver.id,
                    error = %e,
                    "offer SMS failed, continuing with remaining caregivers"
                );
            }
        }

        let now = Utc::now();
        let contacted: Vec<CaregiverId> =
            recipients.iter().map(|c| c.id.clone()).collect();
        let fanout = ShiftFanout::pending(shift_id.clone(), now, contacted);
        self.store.fanouts.put(shift_id.clone(), fanout);

        self.scheduler.schedule(shift_id.clone(), now);

        info!(
            shift_id = %shift_id,
            contacted = recipients.len(),
            "fanout initiated"
        );
        Ok(FanoutOutcome::Initiated {
            contacted: recipients.len(),
        })
    }
}
