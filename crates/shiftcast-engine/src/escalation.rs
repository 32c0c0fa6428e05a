// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Delayed voice-call escalation for unclaimed shifts.
//!
//! At most one escalation task exists per shift with an active fanout. The
//! task sleeps until the deadline, then re-checks the fanout inside the
//! shift's critical section before acting. Cancellation through the registry
//! is advisory only -- the re-check on wake is the authoritative guard, so a
//! cancellation arriving after the task has begun is a benign race: the task
//! observes a non-pending status and no-ops.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::DashMap;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use shiftcast_core::types::{FanoutStatus, ShiftId};
use shiftcast_core::{NotifierAdapter, ShiftcastError};
use shiftcast_store::MemoryStore;

use crate::arbiter::ClaimArbiter;
use crate::messages::escalation_call_script;

/// Registry of outstanding escalation tasks, keyed by shift identifier.
///
/// Cancellation is a direct lookup rather than a scheduler-wide sweep.
#[derive(Default)]
pub struct EscalationRegistry {
    tokens: DashMap<ShiftId, CancellationToken>,
}

impl EscalationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fresh cancellation token for `shift_id`, replacing any
    /// stale entry left by an earlier task.
    pub fn register(&self, shift_id: &ShiftId) -> CancellationToken {
        let token = CancellationToken::new();
        self.tokens.insert(shift_id.clone(), token.clone());
        token
    }

    /// Best-effort cancellation of the shift's pending escalation task.
    pub fn cancel(&self, shift_id: &ShiftId) {
        if let Some((_, token)) = self.tokens.remove(shift_id) {
            token.cancel();
            debug!(shift_id = %shift_id, "escalation cancelled");
        }
    }

    /// Drops the registry entry once its task has run or been cancelled.
    fn finish(&self, shift_id: &ShiftId) {
        self.tokens.remove(shift_id);
    }

    /// Number of outstanding escalation tasks.
    pub fn outstanding(&self) -> usize {
        self.tokens.len()
    }
}

/// Schedules and runs the delayed escalation action for active fanouts.
pub struct EscalationScheduler {
    store: Arc<MemoryStore>,
    notifier: Arc<dyn NotifierAdapter>,
    arbiter: Arc<ClaimArbiter>,
    registry: Arc<EscalationRegistry>,
    delay: Duration,
}

impl EscalationScheduler {
    pub fn new(
        store: Arc<MemoryStore>,
        notifier: Arc<dyn NotifierAdapter>,
        arbiter: Arc<ClaimArbiter>,
        registry: Arc<EscalationRegistry>,
        delay: Duration,
    ) -> Self {
        Self {
            store,
            notifier,
            arbiter,
            registry,
            delay,
        }
    }

    /// The configured escalation delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Starts the delayed escalation task for `shift_id`, measured from
    /// `anchor`. Fire-and-forget relative to the caller: returns as soon as
    /// the task is spawned.
    pub fn schedule(&self, shift_id: ShiftId, anchor: DateTime<Utc>) {
        let token = self.registry.register(&shift_id);
        let store = Arc::clone(&self.store);
        let notifier = Arc::clone(&self.notifier);
        let arbiter = Arc::clone(&self.arbiter);
        let registry = Arc::clone(&self.registry);

        // A delay past chrono's representable range saturates to the far
        // future rather than overflowing the deadline arithmetic.
        let deadline = TimeDelta::from_std(self.delay)
            .ok()
            .and_then(|delta| anchor.checked_add_signed(delta))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        tokio::spawn(async move {
            let remaining = (deadline - Utc::now()).to_std().unwrap_or(Duration::ZERO);

            tokio::select! {
                _ = token.cancelled() => {
                    debug!(shift_id = %shift_id, "escalation task cancelled before deadline");
                }
                _ = tokio::time::sleep(remaining) => {
                    if let Err(e) = run_escalation(&store, &notifier, &arbiter, &shift_id).await {
                        warn!(shift_id = %shift_id, error = %e, "escalation action failed");
                    }
                }
            }

            registry.finish(&shift_id);
        });
    }
}

/// The escalation action: re-check, call, transition.
///
/// Runs inside the shift's critical section so it cannot race a concurrent
/// claim -- the pending check here and the claim's pending check cannot both
/// succeed. An absent or non-pending fanout means the situation resolved
/// itself before the timer fired, which is a silent no-op, not an error.
async fn run_escalation(
    store: &MemoryStore,
    notifier: &Arc<dyn NotifierAdapter>,
    arbiter: &ClaimArbiter,
    shift_id: &ShiftId,
) -> Result<(), ShiftcastError> {
    let lock = arbiter.lock_for(shift_id);
    let _guard = lock.lock().await;

    let Some(mut fanout) = store.fanouts.get(shift_id) else {
        return Ok(());
    };
    if fanout.status != FanoutStatus::Pending {
        debug!(shift_id = %shift_id, status = %fanout.status, "fanout no longer pending, skipping escalation");
        return Ok(());
    }
    let Some(shift) = store.shifts.get(shift_id) else {
        return Ok(());
    };

    // Re-resolve eligibility at escalation time: the roster (or a caregiver's
    // role) may have changed since the SMS fanout.
    let caregivers = store.caregivers_with_role(&shift.role_required);
    let script = escalation_call_script(&shift);

    for caregiver in &caregivers {
        if let Err(e) = notifier.place_call(&caregiver.phone, &script).await {
            warn!(
                shift_id = %shift_id,
                caregiver_id = %caregiver.id,
                error = %e,
                "escalation call failed, continuing with remaining caregivers"
            );
        }
    }

    fanout.status = FanoutStatus::Escalated;
    fanout.phone_call_sent_at = Some(Utc::now());
    store.fanouts.put(shift_id.clone(), fanout);

    info!(
        shift_id = %shift_id,
        called = caregivers.len(),
        "shift escalated to voice calls"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use shiftcast_core::types::{Caregiver, CaregiverId, Shift, ShiftFanout};
    use shiftcast_test_utils::MockNotifier;

    use super::*;

    const DELAY: Duration = Duration::from_secs(600);

    struct Fixture {
        store: Arc<MemoryStore>,
        notifier: Arc<MockNotifier>,
        arbiter: Arc<ClaimArbiter>,
        registry: Arc<EscalationRegistry>,
        scheduler: EscalationScheduler,
        shift_id: ShiftId,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MockNotifier::new());
        let registry = Arc::new(EscalationRegistry::new());
        let arbiter = Arc::new(ClaimArbiter::new(
            Arc::clone(&store),
            Arc::clone(&registry),
        ));
        let scheduler = EscalationScheduler::new(
            Arc::clone(&store),
            Arc::clone(&notifier) as Arc<dyn NotifierAdapter>,
            Arc::clone(&arbiter),
            Arc::clone(&registry),
            DELAY,
        );

        let shift_id = ShiftId("shift-1".into());
        store.shifts.put(
            shift_id.clone(),
            Shift {
                id: shift_id.clone(),
                organization_id: "org-1".into(),
                role_required: "RN".into(),
                start_time: Utc::now(),
                end_time: Utc::now() + TimeDelta::hours(8),
            },
        );
        store.caregivers.put(
            CaregiverId("cg-1".into()),
            Caregiver {
                id: CaregiverId("cg-1".into()),
                name: "Alice".into(),
                role: "RN".into(),
                phone: "+15550001".into(),
            },
        );

        Fixture {
            store,
            notifier,
            arbiter,
            registry,
            scheduler,
            shift_id,
        }
    }

    fn put_pending(fx: &Fixture) {
        fx.store.fanouts.put(
            fx.shift_id.clone(),
            ShiftFanout::pending(
                fx.shift_id.clone(),
                Utc::now(),
                vec![CaregiverId("cg-1".into())],
            ),
        );
    }

    #[tokio::test(start_paused = true)]
    async fn escalation_fires_when_still_pending_at_deadline() {
        let fx = fixture();
        put_pending(&fx);

        fx.scheduler.schedule(fx.shift_id.clone(), Utc::now());
        assert_eq!(fx.registry.outstanding(), 1);

        tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

        let fanout = fx.store.fanouts.get(&fx.shift_id).unwrap();
        assert_eq!(fanout.status, FanoutStatus::Escalated);
        assert!(fanout.phone_call_sent_at.is_some());
        assert_eq!(fx.notifier.call_count().await, 1);
        assert_eq!(fx.registry.outstanding(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn claim_before_deadline_suppresses_escalation() {
        let fx = fixture();
        put_pending(&fx);

        fx.scheduler.schedule(fx.shift_id.clone(), Utc::now());
        fx.arbiter
            .try_claim(&fx.shift_id, &CaregiverId("cg-1".into()))
            .await
            .unwrap();

        tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

        let fanout = fx.store.fanouts.get(&fx.shift_id).unwrap();
        assert_eq!(fanout.status, FanoutStatus::Claimed);
        assert!(fanout.phone_call_sent_at.is_none());
        assert_eq!(fx.notifier.call_count().await, 0);
        assert_eq!(fx.registry.outstanding(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn stale_cancellation_after_wake_is_benign() {
        let fx = fixture();
        put_pending(&fx);

        fx.scheduler.schedule(fx.shift_id.clone(), Utc::now());
        tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

        // Task already ran; cancellation now must be a harmless no-op.
        fx.registry.cancel(&fx.shift_id);
        let fanout = fx.store.fanouts.get(&fx.shift_id).unwrap();
        assert_eq!(fanout.status, FanoutStatus::Escalated);
    }

    #[tokio::test(start_paused = true)]
    async fn escalation_recomputes_eligible_set_at_deadline() {
        let fx = fixture();
        put_pending(&fx);
        fx.scheduler.schedule(fx.shift_id.clone(), Utc::now());

        // A second RN joins the roster after the SMS fanout went out.
        fx.store.caregivers.put(
            CaregiverId("cg-2".into()),
            Caregiver {
                id: CaregiverId("cg-2".into()),
                name: "Bea".into(),
                role: "RN".into(),
                phone: "+15550002".into(),
            },
        );

        tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

        assert_eq!(fx.notifier.call_count().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn missing_fanout_is_a_silent_noop() {
        let fx = fixture();
        // No fanout record exists at all.
        fx.scheduler.schedule(fx.shift_id.clone(), Utc::now());
        tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

        assert_eq!(fx.notifier.call_count().await, 0);
        assert!(fx.store.fanouts.get(&fx.shift_id).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_delay_saturates_instead_of_panicking() {
        let fx = fixture();
        put_pending(&fx);

        let scheduler = EscalationScheduler::new(
            Arc::clone(&fx.store),
            Arc::clone(&fx.notifier) as Arc<dyn NotifierAdapter>,
            Arc::clone(&fx.arbiter),
            Arc::clone(&fx.registry),
            Duration::from_secs(u64::MAX),
        );
        scheduler.schedule(fx.shift_id.clone(), Utc::now());

        // Far past any sane deadline: nothing fires and nothing aborts.
        tokio::time::sleep(Duration::from_secs(365 * 24 * 3600)).await;

        assert_eq!(fx.notifier.call_count().await, 0);
        let fanout = fx.store.fanouts.get(&fx.shift_id).unwrap();
        assert_eq!(fanout.status, FanoutStatus::Pending);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_call_does_not_block_remaining_recipients() {
        let store = Arc::new(MemoryStore::new());
        let notifier = Arc::new(MockNotifier::failing_for("+15550001"));
        let registry = Arc::new(EscalationRegistry::new());
        let arbiter = Arc::new(ClaimArbiter::new(
            Arc::clone(&store),
            Arc::clone(&registry),
        ));
        let scheduler = EscalationScheduler::new(
            Arc::clone(&store),
            Arc::clone(&notifier) as Arc<dyn NotifierAdapter>,
            arbiter,
            registry,
            DELAY,
        );

        let shift_id = ShiftId("shift-1".into());
        store.shifts.put(
            shift_id.clone(),
            Shift {
                id: shift_id.clone(),
                organization_id: "org-1".into(),
                role_required: "RN".into(),
                start_time: Utc::now(),
                end_time: Utc::now() + TimeDelta::hours(8),
            },
        );
        for (id, phone) in [("cg-1", "+15550001"), ("cg-2", "+15550002")] {
            store.caregivers.put(
                CaregiverId(id.into()),
                Caregiver {
                    id: CaregiverId(id.into()),
                    name: id.into(),
                    role: "RN".into(),
                    phone: phone.into(),
                },
            );
        }
        store.fanouts.put(
            shift_id.clone(),
            ShiftFanout::pending(
                shift_id.clone(),
                Utc::now(),
                vec![CaregiverId("cg-1".into()), CaregiverId("cg-2".into())],
            ),
        );

        scheduler.schedule(shift_id.clone(), Utc::now());
        tokio::time::sleep(DELAY + Duration::from_secs(1)).await;

        // One call failed, one landed; the transition still happened.
        assert_eq!(notifier.call_count().await, 1);
        let fanout = store.fanouts.get(&shift_id).unwrap();
        assert_eq!(fanout.status, FanoutStatus::Escalated);
    }
}
