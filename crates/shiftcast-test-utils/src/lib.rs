// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Shiftcast integration tests.
//!
//! Provides mock adapters for fast, deterministic, CI-runnable tests without
//! external delivery providers.
//!
//! # Components
//!
//! - [`MockNotifier`] - records every SMS and call instead of delivering
//! - [`ScriptedClassifier`] - returns pre-configured intents in order

pub mod mock_notifier;
pub mod scripted_classifier;

pub use mock_notifier::MockNotifier;
pub use scripted_classifier::ScriptedClassifier;
