//! Marker delimiters and lexical scanning
//!
//! Every edit location is bracketed by a sentinel pair
//! `<!--UNIQUE_MARKER_{id}_START-->` / `<!--UNIQUE_MARKER_{id}_END-->`
//! embedded in the fixture text. Ids are extracted with a regex over
//! the START delimiter; span removal uses a strict lexical scan so a
//! payload containing delimiter-like substrings for *other* ids can
//! never confuse it.

use crate::error::{CorpusError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::ops::Range;

/// Blank-line separator the injector places around every marker block
pub const BLOCK_SEPARATOR: &str = "\n\n";

static START_DELIMITER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<!--UNIQUE_MARKER_(\d+)_START-->").expect("valid marker regex"));

/// START delimiter for a marker id
#[inline]
#[must_use]
pub fn start_delimiter(id: usize) -> String {
    format!("<!--UNIQUE_MARKER_{id}_START-->")
}

/// END delimiter for a marker id
#[inline]
#[must_use]
pub fn end_delimiter(id: usize) -> String {
    format!("<!--UNIQUE_MARKER_{id}_END-->")
}

/// Extract the sorted set of distinct marker ids present in `content`
///
/// Scans for START delimiters only: a file with matched pairs (the
/// only valid state) yields the same set either way.
///
/// # Errors
/// Returns [`CorpusError::MarkerViolation`] if an embedded id does not
/// parse as an unsigned integer.
pub fn extract_marker_ids(content: &str) -> Result<Vec<usize>> {
    let mut ids = BTreeSet::new();
    for captures in START_DELIMITER_RE.captures_iter(content) {
        let digits = &captures[1];
        let id = digits.parse::<usize>().map_err(|_| {
            CorpusError::MarkerViolation(format!("unparseable marker id: {digits}"))
        })?;
        ids.insert(id);
    }
    Ok(ids.into_iter().collect())
}

/// Locate the removable span for marker `id` in `content`
///
/// The span runs from the START delimiter through the matching END
/// delimiter, widened to swallow the blank-line separators the
/// injector placed around the block when they are present. Returns
/// `Ok(None)` when the marker does not appear at all.
///
/// # Errors
/// Returns [`CorpusError::MarkerViolation`] for a START with no
/// matching END after it.
pub fn marker_span(content: &str, id: usize) -> Result<Option<Range<usize>>> {
    let start_tag = start_delimiter(id);
    let Some(start) = content.find(&start_tag) else {
        return Ok(None);
    };

    let end_tag = end_delimiter(id);
    let Some(end_rel) = content[start..].find(&end_tag) else {
        return Err(CorpusError::MarkerViolation(format!(
            "marker {id} has a START delimiter with no matching END"
        )));
    };

    let mut lo = start;
    let mut hi = start + end_rel + end_tag.len();
    if content[..lo].ends_with(BLOCK_SEPARATOR) {
        lo -= BLOCK_SEPARATOR.len();
    }
    if content[hi..].starts_with(BLOCK_SEPARATOR) {
        hi += BLOCK_SEPARATOR.len();
    }
    Ok(Some(lo..hi))
}

/// Remove marker `id`'s span (separators included) from `content`
///
/// No-op if the marker is absent.
///
/// # Errors
/// Propagates [`marker_span`] invariant violations.
pub fn remove_marker(content: &str, id: usize) -> Result<String> {
    match marker_span(content, id)? {
        Some(span) => {
            let mut out = String::with_capacity(content.len() - span.len());
            out.push_str(&content[..span.start]);
            out.push_str(&content[span.end..]);
            Ok(out)
        }
        None => Ok(content.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delimiters_embed_the_id() {
        assert_eq!(start_delimiter(7), "<!--UNIQUE_MARKER_7_START-->");
        assert_eq!(end_delimiter(7), "<!--UNIQUE_MARKER_7_END-->");
    }

    #[test]
    fn extract_ids_sorted_and_distinct() {
        let content = format!(
            "x{}a{}y{}b{}z{}c{}",
            start_delimiter(4),
            end_delimiter(4),
            start_delimiter(0),
            end_delimiter(0),
            start_delimiter(4),
            end_delimiter(4),
        );
        assert_eq!(extract_marker_ids(&content).unwrap(), vec![0, 4]);
    }

    #[test]
    fn extract_ids_empty_content() {
        assert_eq!(extract_marker_ids("plain text, no markers").unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn span_includes_surrounding_separators() {
        let content = format!("head\n\n{}payload{}\n\ntail", start_delimiter(1), end_delimiter(1));
        let span = marker_span(&content, 1).unwrap().unwrap();
        assert_eq!(&content[span.clone()], &content[4..content.len() - 4]);
        assert_eq!(remove_marker(&content, 1).unwrap(), "headtail");
    }

    #[test]
    fn span_without_separators_still_matches() {
        let content = format!("a{}p{}b", start_delimiter(2), end_delimiter(2));
        assert_eq!(remove_marker(&content, 2).unwrap(), "ab");
    }

    #[test]
    fn missing_marker_is_noop() {
        assert_eq!(remove_marker("no markers here", 3).unwrap(), "no markers here");
    }

    #[test]
    fn orphan_start_is_an_invariant_violation() {
        let content = format!("a{}b", start_delimiter(5));
        let err = marker_span(&content, 5).unwrap_err();
        assert!(matches!(err, CorpusError::MarkerViolation(_)));
    }

    #[test]
    fn ids_for_other_markers_do_not_collide() {
        // Marker 1's delimiters must not match marker 11's scan.
        let content = format!("a\n\n{}p{}\n\nb", start_delimiter(11), end_delimiter(11));
        assert!(marker_span(&content, 1).unwrap().is_none());
        assert_eq!(extract_marker_ids(&content).unwrap(), vec![11]);
    }
}
