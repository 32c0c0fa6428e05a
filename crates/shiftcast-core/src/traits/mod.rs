// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter trait definitions for Shiftcast's external collaborators.
//!
//! The core never talks to a delivery provider, a classification backend, or
//! a storage engine directly; it goes through these seams so deployments can
//! swap implementations and tests can substitute mocks.

pub mod adapter;
pub mod classifier;
pub mod notifier;
pub mod storage;

pub use adapter::PluginAdapter;
pub use classifier::IntentClassifier;
pub use notifier::NotifierAdapter;
pub use storage::StorageAdapter;
