use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{filters::filter_by_subject, rank_teachers};
use crate::models::{
    DimensionsResponse, ErrorResponse, HealthResponse, MatchRequest, MatchResponse,
    ReloadResponse, TeachersQuery, TeachersResponse,
};
use crate::services::CorpusStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub corpus: Arc<CorpusStore>,
    pub matching: MatchingSettings,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/match", web::post().to(match_teachers))
        .route("/teachers", web::get().to(list_teachers))
        .route("/teachers/reload", web::post().to(reload_teachers))
        .route("/dimensions", web::get().to(list_dimensions));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let teachers = state.corpus.snapshot().await.len();
    let status = if teachers > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        teachers,
    })
}

/// Rank teachers for a student persona
///
/// POST /api/v1/match
///
/// Request body:
/// ```json
/// {
///   "studentPersona": { "pace": 0.4, "structure": 0.7 },
///   "subject": "Biology",
///   "limit": 10
/// }
/// ```
async fn match_teachers(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if !state.matching.accepts_limit(req.limit) {
        tracing::info!(
            "Rejected match request limit {:?} (max {})",
            req.limit,
            state.matching.max_limit
        );
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: format!("limit must be between 1 and {}", state.matching.max_limit),
            status_code: 400,
        });
    }

    let teachers = state.corpus.snapshot().await;
    let subject = req.subject.as_deref();

    let mut ranked = rank_teachers(&teachers, &req.student_persona, subject);
    let total_results = ranked.len();

    if let Some(limit) = state.matching.effective_limit(req.limit) {
        ranked.truncate(limit);
    }

    tracing::debug!(
        "Ranked {} of {} teachers (subject: {:?}, student dimensions: {})",
        total_results,
        teachers.len(),
        subject,
        req.student_persona.len()
    );

    HttpResponse::Ok().json(MatchResponse {
        ranked,
        total_results,
    })
}

/// List the teacher corpus
///
/// GET /api/v1/teachers?subject={subject}
async fn list_teachers(
    state: web::Data<AppState>,
    query: web::Query<TeachersQuery>,
) -> impl Responder {
    let teachers = state.corpus.snapshot().await;
    let listed: Vec<_> = filter_by_subject(&teachers, query.subject.as_deref())
        .cloned()
        .collect();

    HttpResponse::Ok().json(TeachersResponse {
        count: listed.len(),
        teachers: listed,
    })
}

/// Re-read the corpus file
///
/// POST /api/v1/teachers/reload
async fn reload_teachers(state: web::Data<AppState>) -> impl Responder {
    match state.corpus.reload().await {
        Ok(teachers) => HttpResponse::Ok().json(ReloadResponse {
            success: true,
            teachers,
        }),
        Err(e) => {
            tracing::error!(
                "Failed to reload corpus from {}, keeping previous snapshot: {}",
                state.corpus.path().display(),
                e
            );
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to reload teachers".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Dimension weight table
///
/// GET /api/v1/dimensions
async fn list_dimensions() -> impl Responder {
    HttpResponse::Ok().json(DimensionsResponse::canonical())
}
