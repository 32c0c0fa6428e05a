// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Explicitly constructed application context.
//!
//! All process-wide state -- the store, the per-shift lock registry, the
//! escalation registry -- lives here and is passed to components at
//! construction time. There is no ambient global, which gives tests clean
//! per-instance reset and keeps a multi-instance deployment possible.

use std::sync::Arc;
use std::time::Duration;

use shiftcast_core::{IntentClassifier, NotifierAdapter};
use shiftcast_store::MemoryStore;

use crate::arbiter::ClaimArbiter;
use crate::coordinator::FanoutCoordinator;
use crate::escalation::{EscalationRegistry, EscalationScheduler};
use crate::inbound::InboundMessageHandler;

/// Wired-up engine components sharing one store and one lock registry.
pub struct AppContext {
    pub store: Arc<MemoryStore>,
    pub notifier: Arc<dyn NotifierAdapter>,
    pub classifier: Arc<dyn IntentClassifier>,
    pub arbiter: Arc<ClaimArbiter>,
    pub escalations: Arc<EscalationRegistry>,
    pub scheduler: Arc<EscalationScheduler>,
    pub coordinator: FanoutCoordinator,
    pub inbound: InboundMessageHandler,
}

impl AppContext {
    /// Builds the full component graph over the given adapters.
    ///
    /// `escalation_delay` is the bounded wait before an unclaimed shift is
    /// escalated to voice calls.
    pub fn build(
        store: Arc<MemoryStore>,
        notifier: Arc<dyn NotifierAdapter>,
        classifier: Arc<dyn IntentClassifier>,
        escalation_delay: Duration,
    ) -> Arc<Self> {
        let escalations = Arc::new(EscalationRegistry::new());
        let arbiter = Arc::new(ClaimArbiter::new(
            Arc::clone(&store),
            Arc::clone(&escalations),
        ));
        let scheduler = Arc::new(EscalationScheduler::new(
            Arc::clone(&store),
            Arc::clone(&notifier),
            Arc::clone(&arbiter),
            Arc::clone(&escalations),
            escalation_delay,
        ));
        let coordinator = FanoutCoordinator::new(
            Arc::clone(&store),
            Arc::clone(&notifier),
            Arc::clone(&arbiter),
            Arc::clone(&scheduler),
        );
        let inbound = InboundMessageHandler::new(
            Arc::clone(&store),
            Arc::clone(&classifier),
            Arc::clone(&arbiter),
        );

        Arc::new(Self {
            store,
            notifier,
            classifier,
            arbiter,
            escalations,
            scheduler,
            coordinator,
            inbound,
        })
    }
}
