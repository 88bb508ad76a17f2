use actix_web::{HttpResponse, Result};

use crate::models::HealthResponse;

pub async fn health() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse::ok()))
}
