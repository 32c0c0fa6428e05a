// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inbound reply handling: classification, candidate lookup, claim delegation.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use shiftcast_core::types::{
    ClaimOutcome, FanoutStatus, InboundOutcome, InboundSms, MessageIntent, ShiftFanout,
};
use shiftcast_core::{IntentClassifier, ShiftcastError};
use shiftcast_store::MemoryStore;

use crate::arbiter::ClaimArbiter;

/// Handles one inbound reply end to end.
pub struct InboundMessageHandler {
    store: Arc<MemoryStore>,
    classifier: Arc<dyn IntentClassifier>,
    arbiter: Arc<ClaimArbiter>,
}

impl InboundMessageHandler {
    pub fn new(
        store: Arc<MemoryStore>,
        classifier: Arc<dyn IntentClassifier>,
        arbiter: Arc<ClaimArbiter>,
    ) -> Self {
        Self {
            store,
            classifier,
            arbiter,
        }
    }

    /// Resolves the sender, classifies the reply, and attempts the claim.
    ///
    /// Non-accept intents (decline and unparseable replies alike) are inert:
    /// no state changes and the caller sees [`InboundOutcome::NotAcceptance`].
    pub async fn handle(&self, msg: InboundSms) -> Result<InboundOutcome, ShiftcastError> {
        let received_at = msg.timestamp.unwrap_or_else(Utc::now);

        let Some(caregiver) = self.store.caregiver_by_phone(&msg.from_phone) else {
            return Err(ShiftcastError::UnknownCaregiver {
                phone: msg.from_phone,
            });
        };

        let intent = self.classifier.classify(&msg.message).await?;
        debug!(
            caregiver_id = %caregiver.id,
            intent = %intent,
            received_at = %received_at,
            "inbound reply classified"
        );

        if intent != MessageIntent::Accept {
            return Ok(InboundOutcome::NotAcceptance);
        }

        // Pick the claim candidate among fanouts that contacted this
        // caregiver. Among pending ones the earliest created_at wins, ties
        // broken by shift id, so the selection is deterministic regardless of
        // store enumeration order.
        let mut candidate: Option<ShiftFanout> = None;
        let mut saw_claimed = false;
        for fanout in self.store.fanouts.all() {
            if !fanout.contacted(&caregiver.id) {
                continue;
            }
            match fanout.status {
                FanoutStatus::Pending => {
                    let replace = match &candidate {
                        None => true,
                        Some(current) => {
                            (fanout.created_at, &fanout.shift_id)
                                < (current.created_at, &current.shift_id)
                        }
                    };
                    if replace {
                        candidate = Some(fanout);
                    }
                }
                FanoutStatus::Claimed => saw_claimed = true,
                FanoutStatus::Escalated => {}
            }
        }

        let Some(candidate) = candidate else {
            return Ok(if saw_claimed {
                InboundOutcome::AlreadyClaimed
            } else {
                InboundOutcome::NoPendingShift
            });
        };

        match self
            .arbiter
            .try_claim(&candidate.shift_id, &caregiver.id)
            .await?
        {
            ClaimOutcome::Claimed => {
                info!(
                    shift_id = %candidate.shift_id,
                    caregiver_id = %caregiver.id,
                    "inbound accept won the claim"
                );
                Ok(InboundOutcome::Claimed {
                    shift_id: candidate.shift_id,
                    caregiver_name: caregiver.name,
                })
            }
            ClaimOutcome::AlreadyResolved => Ok(InboundOutcome::AlreadyClaimed),
        }
    }
}
