//! Turning backend source paths into short citation labels.

use crate::api::SourceDocument;

/// Final path segment of `path`, splitting on `/` and `\`.
///
/// Trailing separators are skipped; a string made only of separators is
/// returned unchanged.
pub fn citation_label(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\')
        .find(|segment| !segment.is_empty())
        .unwrap_or(path)
}

/// Labels for every document that names a source, in response order.
/// Duplicates are kept. Returns `None` when nothing is left.
pub fn citation_labels(documents: Option<&[SourceDocument]>) -> Option<Vec<String>> {
    let labels: Vec<String> = documents
        .unwrap_or_default()
        .iter()
        .filter_map(|doc| doc.source.as_deref())
        .filter(|source| !source.is_empty())
        .map(|source| citation_label(source).to_string())
        .collect();

    (!labels.is_empty()).then_some(labels)
}
