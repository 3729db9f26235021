//! Liveness probe; does not touch the database.

use axum::http::StatusCode;

pub async fn handler() -> StatusCode { StatusCode::OK }
