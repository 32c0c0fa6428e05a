// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory key-value persistence for the Shiftcast fanout coordinator.
//!
//! Holds the three entity collections (shifts, caregivers, fanouts) behind a
//! concurrent [`KvTable`], with the role/phone lookups the engine needs and a
//! JSON seed importer for pre-populated rosters.

pub mod adapter;
pub mod seed;
pub mod store;
pub mod table;

pub use seed::{SeedData, load_seed_file, load_seed_str};
pub use store::MemoryStore;
pub use table::KvTable;
