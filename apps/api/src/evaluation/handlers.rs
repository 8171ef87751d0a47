//! Axum route handlers for the Evaluation API.

use axum::extract::{Multipart, State};
use axum::Json;
use bytes::Bytes;

use crate::errors::AppError;
use crate::evaluation::pipeline::evaluate_resume;
use crate::evaluation::response::EvaluationResult;
use crate::state::AppState;

/// POST /evaluate-resume
///
/// Multipart form with two required fields: `job_description` (text) and
/// `resume_file` (PDF upload). The upload is buffered fully before
/// extraction so both passes read the same bytes.
pub async fn handle_evaluate_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<EvaluationResult>, AppError> {
    let mut job_description: Option<String> = None;
    let mut resume_file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "job_description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Unreadable job_description field: {e}"))
                })?;
                job_description = Some(text);
            }
            "resume_file" => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Unreadable resume_file field: {e}"))
                })?;
                resume_file = Some((filename, data));
            }
            _ => {}
        }
    }

    let job_description = job_description
        .ok_or_else(|| AppError::InvalidInput("Missing field: job_description".to_string()))?;
    if job_description.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "job_description cannot be empty".to_string(),
        ));
    }
    let (filename, document) = resume_file
        .ok_or_else(|| AppError::InvalidInput("Missing field: resume_file".to_string()))?;

    let result =
        evaluate_resume(state.llm.as_ref(), &job_description, &filename, &document).await?;

    Ok(Json(result))
}
