// SPDX-FileCopyrightText: 2026 Shiftcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway REST API.
//!
//! Handles GET /health, POST /shifts/{shift_id}/fanout, POST /messages/inbound.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use shiftcast_core::types::{FanoutOutcome, InboundOutcome, InboundSms, ShiftId};
use shiftcast_core::ShiftcastError;

use crate::server::GatewayState;

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// Response body for fanout and inbound operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Machine-readable outcome tag.
    pub status: String,
    /// Human-readable detail.
    pub message: String,
}

/// Request body for POST /messages/inbound.
#[derive(Debug, Deserialize)]
pub struct InboundRequest {
    /// Sender phone address.
    pub from_phone: String,
    /// Raw reply text.
    pub message: String,
    /// Arrival timestamp; defaults to processing time when absent.
    #[serde(default)]
    pub timestamp: Option<chrono::DateTime<chrono::Utc>>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// GET /health
pub async fn get_health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.started_at.elapsed().as_secs(),
    })
}

/// POST /shifts/{shift_id}/fanout
///
/// Triggers fanout for a shift. Idempotent: re-posting does not send
/// duplicate notifications.
pub async fn post_fanout(
    State(state): State<GatewayState>,
    Path(shift_id): Path<String>,
) -> Response {
    let shift_id = ShiftId(shift_id);
    match state.ctx.coordinator.initiate_fanout(&shift_id).await {
        Ok(FanoutOutcome::Initiated { contacted }) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "fanout_initiated".to_string(),
                message: format!("Sent SMS to {contacted} caregivers"),
            }),
        )
            .into_response(),
        Ok(FanoutOutcome::AlreadyInitiated) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "already_fanout".to_string(),
                message: format!("Fanout already initiated for shift {shift_id}"),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// POST /messages/inbound
///
/// Handles an inbound SMS reply from a caregiver: classifies it and, for an
/// acceptance, attempts the claim.
pub async fn post_inbound(
    State(state): State<GatewayState>,
    Json(body): Json<InboundRequest>,
) -> Response {
    let msg = InboundSms {
        from_phone: body.from_phone,
        message: body.message,
        timestamp: body.timestamp,
    };

    match state.ctx.inbound.handle(msg).await {
        Ok(InboundOutcome::Claimed {
            shift_id,
            caregiver_name,
        }) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "shift_claimed".to_string(),
                message: format!("Shift {shift_id} claimed by {caregiver_name}"),
            }),
        )
            .into_response(),
        Ok(InboundOutcome::AlreadyClaimed) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "shift_already_claimed".to_string(),
                message: "This shift has already been claimed".to_string(),
            }),
        )
            .into_response(),
        Ok(InboundOutcome::NoPendingShift) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "no_pending_shift".to_string(),
                message: "No pending shift found for this caregiver".to_string(),
            }),
        )
            .into_response(),
        Ok(InboundOutcome::NotAcceptance) => (
            StatusCode::OK,
            Json(StatusResponse {
                status: "processed".to_string(),
                message: "Message received but not an acceptance".to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

/// Maps engine errors to HTTP responses: not-found-family errors become 404,
/// everything else is a 500.
fn error_response(err: ShiftcastError) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        error!(error = %err, "gateway request failed");
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_request_deserializes_without_timestamp() {
        let json = r#"{"from_phone": "+15550001", "message": "yes"}"#;
        let req: InboundRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.from_phone, "+15550001");
        assert_eq!(req.message, "yes");
        assert!(req.timestamp.is_none());
    }

    #[test]
    fn inbound_request_deserializes_with_timestamp() {
        let json = r#"{
            "from_phone": "+15550001",
            "message": "yes",
            "timestamp": "2026-01-02T08:00:00Z"
        }"#;
        let req: InboundRequest = serde_json::from_str(json).unwrap();
        assert!(req.timestamp.is_some());
    }

    #[test]
    fn status_response_serializes() {
        let resp = StatusResponse {
            status: "fanout_initiated".to_string(),
            message: "Sent SMS to 2 caregivers".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"fanout_initiated\""));
        assert!(json.contains("Sent SMS to 2 caregivers"));
    }

    #[test]
    fn error_response_serializes() {
        let resp = ErrorResponse {
            error: "shift shift-9 not found".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("shift shift-9 not found"));
    }
}
