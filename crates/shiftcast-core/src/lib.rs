// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Shiftcast fanout coordinator.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain model used throughout the Shiftcast workspace. The engine, store,
//! and gateway crates all build on the seams defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ShiftcastError;
pub use types::{
    AdapterType, Caregiver, CaregiverId, ClaimOutcome, FanoutOutcome, FanoutStatus,
    HealthStatus, InboundOutcome, InboundSms, MessageIntent, Shift, ShiftFanout, ShiftId,
};

// Re-export all adapter traits at crate root.
pub use traits::{IntentClassifier, NotifierAdapter, PluginAdapter, StorageAdapter};
