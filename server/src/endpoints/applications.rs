use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use axum_macros::debug_handler;
use chrono::Utc;
use shared::{ApplicationReceipt, ApplicationRequest};
use tracing::info;

use crate::error::{Error, Result};

pub fn router() -> Router {
    Router::new().route("/applications", post(submit))
}

fn validate(payload: &ApplicationRequest) -> Result<()> {
    let mut errors: Vec<(&'static str, &'static str)> = Vec::new();
    if payload.first_name.trim().is_empty() {
        errors.push(("firstName", "first name must not be empty"));
    }
    if payload.last_name.trim().is_empty() {
        errors.push(("lastName", "last name must not be empty"));
    }
    if payload.email.trim().is_empty() {
        errors.push(("email", "email must not be empty"));
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::unprocessable_entity(errors))
    }
}

#[debug_handler]
async fn submit(
    Json(payload): Json<ApplicationRequest>,
) -> Result<(StatusCode, Json<ApplicationReceipt>)> {
    validate(&payload)?;
    info!(
        first_name = %payload.first_name,
        last_name = %payload.last_name,
        email = %payload.email,
        "Homes application received"
    );
    let receipt = ApplicationReceipt {
        first_name: payload.first_name,
        last_name: payload.last_name,
        email: payload.email,
        received_at: Utc::now(),
    };
    Ok((StatusCode::CREATED, Json(receipt)))
}
