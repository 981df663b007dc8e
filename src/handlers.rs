use std::time::Instant;

use axum::{body::Bytes, extract::State, Json};
use tracing::Instrument;
use uuid::Uuid;

use crate::consultant::{assemble, courses_to_facts, truncate_for_log, CompletionError};
use crate::error::AppError;
use crate::matcher::find_relevant_courses;
use crate::models::{AskReply, AskRequest, HealthMessage};
use crate::AppState;

pub const LIVENESS_MESSAGE: &str = "Course consultant backend running 🚀";
pub const NO_QUERY_MESSAGE: &str = "No query provided";

/// GET / - liveness probe, no dependencies touched
pub async fn health() -> Json<HealthMessage> {
    Json(HealthMessage {
        message: LIVENESS_MESSAGE.to_string(),
    })
}

/// POST /ask - answer one question grounded in matching catalog courses
pub async fn ask(State(state): State<AppState>, body: Bytes) -> Result<Json<AskReply>, AppError> {
    let AskRequest { query, lang } = AskRequest::from_body(&body);

    if query.is_empty() {
        return Err(AppError::BadRequest(NO_QUERY_MESSAGE.to_string()));
    }

    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("ask", %request_id);

    async move {
        let request_start = Instant::now();
        tracing::info!(lang = lang.display_name(), "📝 Query: \"{}\"", truncate_for_log(&query, 80));

        let matched = find_relevant_courses(&query, state.catalog.courses());
        if matched.is_empty() {
            tracing::info!("📚 No catalog match");
        } else {
            let names: Vec<&str> = matched.iter().map(|c| c.name()).collect();
            tracing::info!("📚 Matched courses: {:?}", names);
        }

        let facts = courses_to_facts(&matched);
        let request = assemble(&query, lang, &facts);

        let client = state
            .completion
            .as_ref()
            .ok_or(CompletionError::MissingApiKey)?;

        let reply = client.complete(&request).await.map_err(|e| {
            tracing::error!("❌ {} call failed: {}", client.name(), e);
            AppError::from(e)
        })?;

        tracing::info!(
            "✅ Reply in {:.2?}: {}",
            request_start.elapsed(),
            truncate_for_log(&reply, 80)
        );

        Ok::<_, AppError>(Json(AskReply { reply }))
    }
    .instrument(span)
    .await
}
