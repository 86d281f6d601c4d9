// Route exports
pub mod recommend;

use actix_web::{error, http::StatusCode, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub use recommend::AppState;

/// Mount the routes at the root, as existing clients call them, and again
/// under the versioned scope
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(recommend::configure)
        .service(web::scope("/api/v1").configure(recommend::configure));
}

/// JSON extractor config that reports bad bodies as `{"error": ...}`
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(handle_json_payload_error)
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::build(StatusCode::BAD_REQUEST).json(ErrorResponse {
        error: format!("Invalid JSON: {}", err),
    });
    error::InternalError::from_response(err, response).into()
}
