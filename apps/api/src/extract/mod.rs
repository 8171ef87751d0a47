//! Document extraction — two independent passes over the same byte buffer.
//!
//! The text pass (`text`) and the link pass (`links`) open the upload with
//! different parsers and different failure tolerances: text is load-bearing
//! and fails the request, links are best-effort and never do. Both operate
//! on the fully buffered upload so neither can disturb the other.

pub mod links;
pub mod text;

use thiserror::Error;

/// Everything pulled out of an uploaded resume.
#[derive(Debug, Clone)]
pub struct ExtractedContent {
    /// Newline-joined page texts in page order, trimmed at the edges.
    pub text: String,
    /// Hyperlink URIs from page annotations, page order then annotation
    /// order. Duplicates are preserved.
    pub links: Vec<String>,
}

/// Failure conditions of the text pass.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("document is not a valid PDF: {0}")]
    Corrupt(String),

    #[error("document has no pages")]
    NoPages,

    /// A page without a text layer — typically a scanned or image-only page.
    #[error("page {page} has no extractable text layer")]
    UnreadablePage { page: usize },

    #[error("document contains no extractable text")]
    Empty,
}


#[cfg(test)]
mod tests {
    use super::links::extract_links;
    use super::testpdf::build_pdf;
    use super::text::extract_text;
    use super::ExtractError;

    #[test]
    fn test_multi_page_text_joins_in_page_order() {
        let pdf = build_pdf(&[
            ("Senior Rust engineer, nine years experience", &[]),
            ("Previously: storage infrastructure at scale", &[]),
        ]);

        let text = extract_text(&pdf).unwrap();

        let first = text.find("Senior Rust engineer").unwrap();
        let second = text.find("storage infrastructure").unwrap();
        assert!(first < second, "pages must come back in document order");
        assert_eq!(text, text.trim(), "result must be trimmed at the edges");
    }

    #[test]
    fn test_corrupt_bytes_fail_with_corrupt() {
        let result = extract_text(b"definitely not a portable document");
        assert!(matches!(result, Err(ExtractError::Corrupt(_))));
    }

    #[test]
    fn test_textless_page_fails_naming_the_page() {
        let pdf = build_pdf(&[("Readable first page", &[]), ("", &[])]);

        let result = extract_text(&pdf);

        match result {
            Err(ExtractError::UnreadablePage { page }) => assert_eq!(page, 2),
            other => panic!("expected UnreadablePage, got {other:?}"),
        }
    }

    #[test]
    fn test_textless_page_error_is_independent_of_other_pages() {
        // Same failure whether the broken page is surrounded by content or not.
        let pdf = build_pdf(&[("", &[]), ("Content afterwards", &[])]);
        match extract_text(&pdf) {
            Err(ExtractError::UnreadablePage { page }) => assert_eq!(page, 1),
            other => panic!("expected UnreadablePage, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_page_document_is_unreadable() {
        let pdf = build_pdf(&[]);
        assert!(matches!(extract_text(&pdf), Err(ExtractError::NoPages)));
    }

    #[test]
    fn test_links_preserve_annotation_order_and_duplicates() {
        let pdf = build_pdf(&[(
            "Portfolio links on one page",
            &[
                "https://github.com/candidate",
                "https://linkedin.com/in/candidate",
                "https://github.com/candidate",
            ][..],
        )]);

        let links = extract_links(&pdf);

        assert_eq!(
            links,
            vec![
                "https://github.com/candidate",
                "https://linkedin.com/in/candidate",
                "https://github.com/candidate",
            ]
        );
    }

    #[test]
    fn test_links_come_back_in_page_order() {
        let pdf = build_pdf(&[
            ("Page one", &["https://one.example"][..]),
            ("Page two", &["https://two.example"][..]),
        ]);

        let links = extract_links(&pdf);

        assert_eq!(links, vec!["https://one.example", "https://two.example"]);
    }

    #[test]
    fn test_link_pass_never_fails_on_garbage_input() {
        assert!(extract_links(b"not a pdf either").is_empty());
    }

    #[test]
    fn test_document_without_annotations_yields_no_links() {
        let pdf = build_pdf(&[("No hyperlinks here", &[])]);
        assert!(extract_links(&pdf).is_empty());
    }

    #[test]
    fn test_both_passes_run_on_the_same_buffer() {
        // The buffer must be re-readable: text then links over identical bytes.
        let pdf = build_pdf(&[("Resume body", &["https://example.com/cv"][..])]);

        let text = extract_text(&pdf).unwrap();
        let links = extract_links(&pdf);

        assert!(text.contains("Resume body"));
        assert_eq!(links, vec!["https://example.com/cv"]);
    }
}
