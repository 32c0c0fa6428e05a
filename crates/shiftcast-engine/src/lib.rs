// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The fanout / claim / escalation state machine.
//!
//! This crate holds the only logic in Shiftcast with real concurrency and
//! ordering concerns:
//!
//! - [`FanoutCoordinator`] decides when a shift is first offered and to whom;
//! - [`ClaimArbiter`] arbitrates concurrent claim attempts with
//!   exactly-one-winner semantics through per-shift critical sections;
//! - [`EscalationScheduler`] fires a voice-call escalation for shifts still
//!   unclaimed after the configured delay, with advisory cancellation;
//! - [`InboundMessageHandler`] turns a classified reply into a claim attempt.
//!
//! All components are wired through an explicitly constructed [`AppContext`];
//! nothing in this crate reaches for ambient global state.

pub mod arbiter;
pub mod context;
pub mod coordinator;
pub mod escalation;
pub mod inbound;
pub mod intent;
pub mod messages;

pub use arbiter::ClaimArbiter;
pub use context::AppContext;
pub use coordinator::FanoutCoordinator;
pub use escalation::{EscalationRegistry, EscalationScheduler};
pub use inbound::InboundMessageHandler;
pub use intent::KeywordClassifier;
