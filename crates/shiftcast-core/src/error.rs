// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Shiftcast fanout coordinator.

use thiserror::Error;

/// The primary error type used across all Shiftcast adapter traits and core operations.
///
/// `AlreadyInitiated`, `AlreadyClaimed`, `NoPendingShift`, and `NotAcceptance`
/// are deliberately not here: they are normal terminal outcomes carried in the
/// outcome enums, not failures.
#[derive(Debug, Error)]
pub enum ShiftcastError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage backend errors (seed parsing, record serialization).
    #[error("storage error: {source}")]
    Store {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Notifier adapter errors (delivery channel unavailable, message format).
    #[error("notifier error: {message}")]
    Notifier {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Intent classifier errors (classification backend failure).
    #[error("classifier error: {message}")]
    Classifier {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// No shift record exists for the requested identifier.
    #[error("shift {shift_id} not found")]
    ShiftNotFound { shift_id: String },

    /// No caregiver carries the role a shift requires. The fanout record is
    /// not created in this case so a retry after roster changes can succeed.
    #[error("no caregivers found with role {role}")]
    NoEligibleCaregivers { role: String },

    /// No caregiver record matches the sending phone address.
    #[error("caregiver with phone {phone} not found")]
    UnknownCaregiver { phone: String },

    /// Gateway server errors (bind failure, serve failure).
    #[error("gateway error: {message}")]
    Gateway {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ShiftcastError {
    /// Whether the error maps to a 404-equivalent at the HTTP boundary.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::ShiftNotFound { .. }
                | Self::NoEligibleCaregivers { .. }
                | Self::UnknownCaregiver { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(
            ShiftcastError::ShiftNotFound {
                shift_id: "s1".into()
            }
            .is_not_found()
        );
        assert!(
            ShiftcastError::NoEligibleCaregivers { role: "RN".into() }.is_not_found()
        );
        assert!(
            ShiftcastError::UnknownCaregiver {
                phone: "+15550000".into()
            }
            .is_not_found()
        );
        assert!(!ShiftcastError::Config("bad".into()).is_not_found());
        assert!(!ShiftcastError::Internal("boom".into()).is_not_found());
    }

    #[test]
    fn display_messages_name_the_subject() {
        let err = ShiftcastError::ShiftNotFound {
            shift_id: "shift-9".into(),
        };
        assert_eq!(err.to_string(), "shift shift-9 not found");

        let err = ShiftcastError::NoEligibleCaregivers { role: "CNA".into() };
        assert_eq!(err.to_string(), "no caregivers found with role CNA");

        let err = ShiftcastError::UnknownCaregiver {
            phone: "+15559999".into(),
        };
        assert_eq!(err.to_string(), "caregiver with phone +15559999 not found");
    }
}
