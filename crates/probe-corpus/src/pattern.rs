//! Edit pattern construction
//!
//! Patterns are fully deterministic given their edit count: marker
//! ids are assigned by position and payload text embeds the id, so a
//! pattern can be rebuilt (and its markers located) without any
//! stored state.

use crate::marker::{end_delimiter, start_delimiter};
use crate::types::{EditPattern, Replacement};

/// Build one delimited original/replacement pair for a marker id
fn build_replacement(marker_id: usize) -> Replacement {
    let start = start_delimiter(marker_id);
    let end = end_delimiter(marker_id);
    Replacement {
        marker_id,
        original: format!("{start}\nThis is original text {marker_id}\n{end}"),
        replacement: format!("{start}\nThis is replacement text {marker_id}\n{end}"),
    }
}

/// Build one pattern per requested edit count, order preserved
///
/// Pattern `n` is named `pattern_{n}_edits` and carries replacements
/// with marker ids `0..n`. An edit count of 0 is valid and produces a
/// pattern with no replacements.
#[must_use]
pub fn build_edit_patterns(edit_counts: &[usize]) -> Vec<EditPattern> {
    edit_counts
        .iter()
        .map(|&count| EditPattern {
            name: format!("pattern_{count}_edits"),
            replacements: (0..count).map(build_replacement).collect(),
        })
        .collect()
}
