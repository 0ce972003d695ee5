// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

use axum::Json;
use chrono::Local;

use crate::models::HealthCheckResponse;

/// Health check endpoint handler.
///
/// Liveness only: returns 200 whenever the process is running. Requires no
/// authentication.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthCheckResponse)
    )
)]
pub async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "OK".to_string(),
        message: "The backend is running.".to_string(),
        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_ok_with_formatted_timestamp() {
        let response = health_check().await;
        assert_eq!(response.0.status, "OK");
        // YYYY-MM-DD HH:MM:SS
        assert_eq!(response.0.timestamp.len(), 19);
        assert_eq!(&response.0.timestamp[4..5], "-");
        assert_eq!(&response.0.timestamp[10..11], " ");
    }
}
