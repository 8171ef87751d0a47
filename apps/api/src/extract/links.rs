//! Link pass — best-effort hyperlink extraction from page annotations.
//!
//! Reopens the upload with `lopdf` independently of the text pass. URIs are
//! collected in page order then annotation order, without deduplication and
//! without validating well-formedness.

use lopdf::{Dictionary, Document, Object};
use tracing::debug;

/// Collects every hyperlink URI found in the document's annotations.
///
/// Never fails: any internal error yields an empty list. A broken link pass
/// must not abort an otherwise readable evaluation.
pub fn extract_links(document: &[u8]) -> Vec<String> {
    match collect_links(document) {
        Ok(links) => links,
        Err(e) => {
            debug!("link pass failed, continuing without links: {e}");
            Vec::new()
        }
    }
}

fn collect_links(document: &[u8]) -> Result<Vec<String>, lopdf::Error> {
    let doc = Document::load_mem(document)?;
    let mut links = Vec::new();

    // Structured pass: each page's Annots array, in page order.
    for (_number, page_id) in doc.get_pages() {
        let page = match doc.get_dictionary(page_id) {
            Ok(dict) => dict,
            Err(_) => continue,
        };
        let annots = match page.get(b"Annots") {
            Ok(object) => resolve(&doc, object),
            Err(_) => continue,
        };
        let Ok(annots) = annots.as_array() else {
            continue;
        };
        for annot in annots {
            if let Ok(dict) = resolve(&doc, annot).as_dict() {
                if let Some(uri) = annotation_uri(&doc, dict) {
                    links.push(uri);
                }
            }
        }
    }

    // Some generators emit link annotations the page tree never references.
    // When structured access finds nothing, scan the raw object table for
    // annotation-shaped dictionaries exposing a URI.
    if links.is_empty() {
        for object in doc.objects.values() {
            if let Ok(dict) = object.as_dict() {
                if is_annotation(dict) {
                    if let Some(uri) = annotation_uri(&doc, dict) {
                        links.push(uri);
                    }
                }
            }
        }
    }

    Ok(links)
}

fn is_annotation(dict: &Dictionary) -> bool {
    matches!(dict.get(b"Subtype"), Ok(Object::Name(name)) if name.as_slice() == b"Link")
        || matches!(dict.get(b"Type"), Ok(Object::Name(name)) if name.as_slice() == b"Annot")
}

/// URI of a link annotation: `A` action dictionary's `URI` entry, or a `URI`
/// key directly on the annotation for non-conforming producers.
fn annotation_uri(doc: &Document, annot: &Dictionary) -> Option<String> {
    if let Ok(action) = annot.get(b"A") {
        if let Ok(action) = resolve(doc, action).as_dict() {
            if let Ok(uri) = action.get(b"URI") {
                return uri_string(resolve(doc, uri));
            }
        }
    }
    annot
        .get(b"URI")
        .ok()
        .and_then(|uri| uri_string(resolve(doc, uri)))
}

fn uri_string(object: &Object) -> Option<String> {
    match object {
        Object::String(bytes, _) => Some(String::from_utf8_lossy(bytes).into_owned()),
        _ => None,
    }
}

fn resolve<'a>(doc: &'a Document, object: &'a Object) -> &'a Object {
    match object {
        Object::Reference(id) => doc.get_object(*id).unwrap_or(object),
        _ => object,
    }
}
