//! Footnote numbering
//!
//! Inline references may cite footnotes in any order. Each original number is
//! given the next sequential number the first time it is referenced, and keeps it
//! for the rest of the conversion so that the definitions at the end of the
//! document can be rendered with the same numbers.
//!
//! Original numbers are kept as their digit strings, so a numeral of any length
//! is a valid footnote. Leading zeros are ignored: `[^07]` and `[^7]` cite the
//! same footnote.

use crate::noteblog::options::OrphanFootnotes;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Mapping from as-written footnote numbers to sequential output numbers.
#[derive(Debug, Default, Clone)]
pub struct FootnoteNumbers {
    assigned: HashMap<String, usize>,
    last: usize,
}

/// `digits` without leading zeros; all zeros collapse to `"0"`.
fn normalize(digits: &str) -> &str {
    match digits.trim_start_matches('0') {
        "" if !digits.is_empty() => "0",
        trimmed => trimmed,
    }
}

impl FootnoteNumbers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sequential number for an inline reference to the numeral `original`.
    pub fn reference(&mut self, original: &str) -> usize {
        let original = normalize(original);
        if let Some(&sequential) = self.assigned.get(original) {
            return sequential;
        }
        self.last += 1;
        self.assigned.insert(original.to_string(), self.last);
        debug!(original, sequential = self.last, "assigned footnote number");
        self.last
    }

    /// Sequential number for the definition of `original`.
    ///
    /// Returns `None` when the definition is an orphan and `policy` drops it.
    pub fn definition(&mut self, original: &str, policy: OrphanFootnotes) -> Option<usize> {
        if let Some(&sequential) = self.assigned.get(normalize(original)) {
            return Some(sequential);
        }
        match policy {
            OrphanFootnotes::Renumber => {
                warn!(original, "footnote defined but never referenced; renumbering");
                Some(self.reference(original))
            }
            OrphanFootnotes::Drop => {
                warn!(original, "footnote defined but never referenced; dropping");
                None
            }
        }
    }
}
