use actix_web::{web, HttpResponse, Responder};
use log::{error, info};
use serde_json::json;
use uuid::Uuid;

use crate::error::RelayError;
use crate::gateway::build_request;
use crate::relay::normalize;
use crate::web::cors;
use crate::web::models::ChatRequest;
use crate::AppState;

// CORS preflight, answered before anything else is looked at
pub async fn preflight() -> impl Responder {
    HttpResponse::Ok()
        .insert_header(cors::allow_origin())
        .insert_header(cors::allow_headers())
        .insert_header(cors::allow_methods())
        .finish()
}

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, RelayError> {
    let request_id = Uuid::new_v4();

    let body = body.map_err(|e| {
        error!("[{}] Could not read chat request body: {}", request_id, e);
        RelayError::InvalidRequest(format!("Request body could not be read: {}", e))
    })?;

    let request = match ChatRequest::from_body(&body) {
        Ok(request) => request,
        Err(e) => {
            error!("[{}] Rejected chat request: {}", request_id, e);
            return Err(e);
        }
    };

    info!(
        "[{}] Processing {} request with {} messages",
        request_id,
        request.mode.as_str(),
        request.messages.len()
    );

    let upstream = build_request(&data.model, request.mode, &request.messages);

    let completion = match data.gateway.complete(&upstream).await {
        Ok(completion) => completion,
        Err(e) => {
            error!("[{}] Error in chat relay: {}", request_id, e);
            return Err(e);
        }
    };

    info!("[{}] AI response received successfully", request_id);

    match normalize(request.mode, completion) {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => {
            error!("[{}] Unusable AI response: {}", request_id, e);
            Err(e)
        }
    }
}
