//! Text pass — per-page text layer extraction.

use tracing::debug;

use super::ExtractError;

/// Extracts the text layer of every page, in page order.
///
/// Pages are joined with a newline and the result is trimmed. A page whose
/// text layer is missing (scanned or image-only content) fails the whole
/// pass with its 1-based page number; link extraction is unaffected.
pub fn extract_text(document: &[u8]) -> Result<String, ExtractError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(document)
        .map_err(|e| ExtractError::Corrupt(e.to_string()))?;

    if pages.is_empty() {
        return Err(ExtractError::NoPages);
    }

    for (index, page) in pages.iter().enumerate() {
        if page.trim().is_empty() {
            return Err(ExtractError::UnreadablePage { page: index + 1 });
        }
    }

    let text = pages.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(ExtractError::Empty);
    }

    debug!(
        pages = pages.len(),
        chars = text.len(),
        "text pass complete"
    );
    Ok(text)
}
