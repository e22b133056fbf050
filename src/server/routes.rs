//! The user-facing JSON web server that answers image-generation
//! requests. One route does the work; the adapter behind it performs a
//! single upstream round trip per call and shares no mutable state.

use super::ApiError;
use crate::models::{GenerationRequest, ImageGenerationResponse};
use crate::nebius::NebiusClient;
use actix_web::{get, post, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;

type Result<T> = std::result::Result<T, ApiError>;

#[post("/generate-image")]
pub async fn generate_image(
    req: web::Json<GenerationRequest>,
    state: web::Data<NebiusClient>,
) -> Result<impl Responder> {
    let request_id = Uuid::new_v4();
    log::info!("[req:{}] image generation requested", request_id);

    let response: ImageGenerationResponse = state.image().generate(req.into_inner()).await?;

    log::info!(
        "[req:{}] finished serving image generation request ({} base64 chars)",
        request_id,
        response.image_url.len()
    );

    Ok(web::Json(response))
}

#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}
