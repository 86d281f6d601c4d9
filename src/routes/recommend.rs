use actix_web::{http::StatusCode, web, HttpResponse, Responder, ResponseError};
use crate::core::{Matcher, MatchError};
use crate::models::{ErrorResponse, HealthResponse};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
}

/// Configure recommendation routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/recommend", web::post().to(recommend));
}

impl ResponseError for MatchError {
    fn status_code(&self) -> StatusCode {
        match self {
            MatchError::MalformedPayload(_) | MatchError::Validation(_) => StatusCode::BAD_REQUEST,
            MatchError::TooManyJobs { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend jobs endpoint
///
/// POST /recommend
///
/// Request body:
/// ```json
/// {
///   "student": { "skills": ["python"], "preferredLocations": ["Pune"], "remotePref": "remote", "cgpa": 7.5 },
///   "jobs": [{ "_id": "j1", "title": "Intern", "skillsRequired": ["python"], "location": "Pune" }],
///   "limit": 10
/// }
/// ```
async fn recommend(
    state: web::Data<AppState>,
    payload: web::Json<serde_json::Value>,
) -> Result<HttpResponse, MatchError> {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("recommend", %request_id);
    let _entered = span.enter();

    let batch_size = payload
        .get("jobs")
        .and_then(|jobs| jobs.as_array())
        .map_or(0, |jobs| jobs.len());

    tracing::info!("Ranking {} jobs", batch_size);

    let response = state.matcher.recommend(payload.into_inner()).map_err(|e| {
        tracing::warn!("Recommendation failed: {}", e);
        e
    })?;

    tracing::info!(
        "Returning {} recommendations (from {} jobs)",
        response.recommendations.len(),
        response.total_analyzed
    );

    Ok(HttpResponse::Ok().json(response))
}
