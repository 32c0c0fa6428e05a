// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound message bodies for shift offers and escalations.

use shiftcast_core::types::Shift;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// SMS body for the first-time shift offer.
pub fn offer_sms_body(shift: &Shift) -> String {
    format!(
        "New shift available: {} to {}. Reply 'yes' or 'accept' to claim.",
        shift.start_time.format(TIME_FORMAT),
        shift.end_time.format(TIME_FORMAT)
    )
}

/// Voice script for the higher-urgency escalation call.
pub fn escalation_call_script(shift: &Shift) -> String {
    format!(
        "Shift still available: {} to {}. Reply 'yes' or 'accept' to claim.",
        shift.start_time.format(TIME_FORMAT),
        shift.end_time.format(TIME_FORMAT)
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use shiftcast_core::types::ShiftId;

    use super::*;

    fn shift() -> Shift {
        Shift {
            id: ShiftId("shift-1".into()),
            organization_id: "org-1".into(),
            role_required: "RN".into(),
            start_time: Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2026, 9, 1, 16, 30, 0).unwrap(),
        }
    }

    #[test]
    fn offer_body_contains_window_and_reply_instruction() {
        let body = offer_sms_body(&shift());
        assert_eq!(
            body,
            "New shift available: 2026-09-01 08:00 to 2026-09-01 16:30. \
             Reply 'yes' or 'accept' to claim."
        );
    }

    #[test]
    fn escalation_script_signals_urgency() {
        let script = escalation_call_script(&shift());
        assert!(script.starts_with("Shift still available:"));
        assert!(script.contains("2026-09-01 08:00"));
    }
}
