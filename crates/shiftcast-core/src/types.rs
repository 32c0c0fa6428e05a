// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain model for the Shiftcast fanout coordinator.
//!
//! `Shift` and `Caregiver` are immutable after creation and read-only to the
//! core. `ShiftFanout` is the mutable state machine instance, exactly one per
//! shift that has ever been fanned out, and is only written through the
//! per-shift critical section owned by the claim arbiter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a shift.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShiftId(pub String);

impl std::fmt::Display for ShiftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Unique identifier for a caregiver.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CaregiverId(pub String);

impl std::fmt::Display for CaregiverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A time-bounded work opportunity requiring a specific role.
///
/// Created by an external provisioning process (seed import); never mutated
/// by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shift {
    pub id: ShiftId,
    pub organization_id: String,
    /// Role tag a caregiver must carry to be eligible, e.g. "RN".
    pub role_required: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// A contactable responder eligible to accept shifts matching their role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Caregiver {
    pub id: CaregiverId,
    pub name: String,
    pub role: String,
    pub phone: String,
}

/// Lifecycle state of a shift fanout.
///
/// Transitions are monotonic: `Pending -> Claimed` (terminal) or
/// `Pending -> Escalated`. `Claimed` permits no further status change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FanoutStatus {
    Pending,
    Claimed,
    Escalated,
}

/// Tracks the state of a single shift's fanout, 1:1 with the shift.
///
/// Invariants:
/// - `claimed_by`, when set, is a member of `contacted_caregiver_ids`.
/// - `phone_call_sent_at` is set iff the status has reached `Escalated`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftFanout {
    pub shift_id: ShiftId,
    pub status: FanoutStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub claimed_by: Option<CaregiverId>,
    pub sms_sent_at: DateTime<Utc>,
    #[serde(default)]
    pub phone_call_sent_at: Option<DateTime<Utc>>,
    /// Caregivers contacted at fanout time. Membership is what matters;
    /// duplicates are impossible by construction (built from distinct records).
    pub contacted_caregiver_ids: Vec<CaregiverId>,
}

impl ShiftFanout {
    /// Create a fresh pending fanout with creation and SMS timestamps anchored
    /// to the same instant.
    pub fn pending(
        shift_id: ShiftId,
        now: DateTime<Utc>,
        contacted_caregiver_ids: Vec<CaregiverId>,
    ) -> Self {
        Self {
            shift_id,
            status: FanoutStatus::Pending,
            created_at: now,
            claimed_by: None,
            sms_sent_at: now,
            phone_call_sent_at: None,
            contacted_caregiver_ids,
        }
    }

    /// Whether the given caregiver was contacted for this fanout.
    pub fn contacted(&self, caregiver_id: &CaregiverId) -> bool {
        self.contacted_caregiver_ids.contains(caregiver_id)
    }

    pub fn is_pending(&self) -> bool {
        self.status == FanoutStatus::Pending
    }
}

/// An inbound SMS reply from a caregiver. Transient: exists only for the
/// duration of one handling call, never persisted.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InboundSms {
    pub from_phone: String,
    pub message: String,
    /// Arrival timestamp; defaulted to processing time when absent.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Classified meaning of a free-text inbound reply.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageIntent {
    Accept,
    Decline,
    Unknown,
}

/// Outcome of a fanout initiation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FanoutOutcome {
    /// First-time fanout: SMS sent to `contacted` caregivers, record written.
    Initiated { contacted: usize },
    /// A fanout already exists for this shift; no side effects occurred.
    AlreadyInitiated,
}

/// Outcome of a claim attempt arbitrated under the per-shift critical section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// This caller won: status moved to `Claimed`.
    Claimed,
    /// The fanout is absent or no longer pending. "Claimed by someone else"
    /// and "no longer exists" deliberately map to the same outcome.
    AlreadyResolved,
}

/// Caller-visible outcome of handling one inbound reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundOutcome {
    /// The reply won the claim for `shift_id`.
    Claimed {
        shift_id: ShiftId,
        caregiver_name: String,
    },
    /// A matching fanout exists but was already claimed.
    AlreadyClaimed,
    /// No fanout ever contacted this caregiver.
    NoPendingShift,
    /// Decline or unparseable reply; no state changed.
    NotAcceptance,
}

/// Identifies the type of adapter behind the base plugin trait.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Notifier,
    Classifier,
    Storage,
}

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fanout_with(contacted: Vec<&str>) -> ShiftFanout {
        ShiftFanout::pending(
            ShiftId("shift-1".into()),
            Utc::now(),
            contacted.into_iter().map(|c| CaregiverId(c.into())).collect(),
        )
    }

    #[test]
    fn pending_fanout_starts_with_invariants_satisfied() {
        let fanout = fanout_with(vec!["cg-1", "cg-2"]);
        assert_eq!(fanout.status, FanoutStatus::Pending);
        assert!(fanout.is_pending());
        assert!(fanout.claimed_by.is_none());
        assert!(fanout.phone_call_sent_at.is_none());
        assert_eq!(fanout.created_at, fanout.sms_sent_at);
    }

    #[test]
    fn contacted_membership() {
        let fanout = fanout_with(vec!["cg-1", "cg-2"]);
        assert!(fanout.contacted(&CaregiverId("cg-1".into())));
        assert!(!fanout.contacted(&CaregiverId("cg-3".into())));
    }

    #[test]
    fn fanout_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&FanoutStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&FanoutStatus::Escalated).unwrap(),
            "\"escalated\""
        );
        let parsed: FanoutStatus = serde_json::from_str("\"claimed\"").unwrap();
        assert_eq!(parsed, FanoutStatus::Claimed);
    }

    #[test]
    fn fanout_status_display_round_trips() {
        use std::str::FromStr;
        for status in [
            FanoutStatus::Pending,
            FanoutStatus::Claimed,
            FanoutStatus::Escalated,
        ] {
            let parsed = FanoutStatus::from_str(&status.to_string()).unwrap();
            assert_eq!(status, parsed);
        }
    }

    #[test]
    fn inbound_sms_timestamp_is_optional() {
        let msg: InboundSms =
            serde_json::from_str(r#"{"from_phone": "+15550001", "message": "yes"}"#)
                .unwrap();
        assert_eq!(msg.from_phone, "+15550001");
        assert!(msg.timestamp.is_none());

        let msg: InboundSms = serde_json::from_str(
            r#"{"from_phone": "+15550001", "message": "yes", "timestamp": "2026-01-02T08:00:00Z"}"#,
        )
        .unwrap();
        assert!(msg.timestamp.is_some());
    }

    #[test]
    fn id_newtypes_serialize_transparently() {
        let id = ShiftId("f5a9d844".into());
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"f5a9d844\"");
        let back: ShiftId = serde_json::from_str("\"f5a9d844\"").unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn shift_fanout_json_round_trip() {
        let fanout = fanout_with(vec!["cg-1"]);
        let json = serde_json::to_string(&fanout).unwrap();
        let back: ShiftFanout = serde_json::from_str(&json).unwrap();
        assert_eq!(fanout, back);
    }
}
