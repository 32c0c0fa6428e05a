// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Shiftcast fanout coordinator.
//!
//! Exposes the three operations of the service over a small REST surface:
//! a health check, the fanout trigger, and the inbound reply webhook.
//! Authentication is deliberately absent from this surface.

pub mod handlers;
pub mod server;

pub use server::{GatewayState, ServerConfig, router, start_server};
