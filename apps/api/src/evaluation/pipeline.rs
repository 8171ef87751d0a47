//! Evaluation pipeline — sequences extraction, prompt construction, the
//! completion call, and response validation.
//!
//! Flow: reject non-PDF uploads → text pass (fatal on failure) → link pass
//! (best-effort) → build prompt → single completion call → validate.
//!
//! This is the only module that translates internal failures into
//! caller-visible `AppError`s. Input- and transport-stage failures are hard
//! errors; model-content failures are absorbed by the validator's fallback.

use tracing::info;

use crate::errors::AppError;
use crate::evaluation::prompts::{build_evaluation_prompt, EvaluationRequest, EVALUATION_SYSTEM};
use crate::evaluation::response::{validate_model_response, EvaluationResult};
use crate::extract::{links, text, ExtractError, ExtractedContent};
use crate::llm_client::{CompletionBackend, LlmError};

/// Runs one full evaluation over a buffered upload.
pub async fn evaluate_resume(
    llm: &dyn CompletionBackend,
    job_description: &str,
    filename: &str,
    document: &[u8],
) -> Result<EvaluationResult, AppError> {
    if !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::InvalidInput(
            "Only PDF files are supported".to_string(),
        ));
    }

    let content = extract_content(document)?;
    info!(
        chars = content.text.len(),
        links = content.links.len(),
        "resume extracted"
    );

    let request = EvaluationRequest {
        resume_text: content.text,
        job_description: job_description.to_string(),
        links: content.links,
    };
    let prompt = build_evaluation_prompt(&request);

    let raw = llm
        .complete(&prompt, EVALUATION_SYSTEM)
        .await
        .map_err(service_error)?;

    Ok(validate_model_response(&raw))
}

/// Runs both extraction passes over the same immutable buffer. The text pass
/// is load-bearing; the link pass cannot fail.
fn extract_content(document: &[u8]) -> Result<ExtractedContent, AppError> {
    let text = text::extract_text(document).map_err(extraction_error)?;
    let links = links::extract_links(document);
    Ok(ExtractedContent { text, links })
}

fn extraction_error(e: ExtractError) -> AppError {
    match e {
        ExtractError::Corrupt(detail) => AppError::DocumentCorrupt(detail),
        ExtractError::Empty => AppError::DocumentEmpty,
        unreadable => AppError::DocumentUnreadable(unreadable.to_string()),
    }
}

fn service_error(e: LlmError) -> AppError {
    match &e {
        LlmError::Unreachable(_) => AppError::ServiceUnavailable(e.to_string()),
        _ => AppError::Service(e.to_string()),
    }
}
