//! Applying automatic fixes to source text.

use crate::types::{Replacement, Violation};

/// Outcome of applying a batch of replacements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutput {
    /// The rewritten source.
    pub text: String,
    /// Number of replacements applied.
    pub applied: usize,
    /// Number of replacements skipped because they overlapped an earlier one.
    pub skipped: usize,
}

/// Applies non-overlapping replacements in offset order.
///
/// A replacement starting at or before the end of one already applied is
/// skipped; it will be recomputed on the next pass. Replacements whose range
/// falls outside `source` or splits a character are skipped too.
#[must_use]
pub fn apply_replacements<'a, I>(source: &str, replacements: I) -> FixOutput
where
    I: IntoIterator<Item = &'a Replacement>,
{
    let mut ordered: Vec<&Replacement> = replacements.into_iter().collect();
    ordered.sort_by_key(|r| (r.start(), r.end()));

    let mut text = String::with_capacity(source.len());
    let mut cursor = 0;
    let mut last_end: Option<usize> = None;
    let mut applied = 0;
    let mut skipped = 0;

    for replacement in ordered {
        let (start, end) = (replacement.start(), replacement.end());
        let overlaps = last_end.is_some_and(|last| start <= last);
        let valid = end <= source.len()
            && source.is_char_boundary(start)
            && source.is_char_boundary(end);
        if overlaps || !valid {
            skipped += 1;
            continue;
        }

        text.push_str(&source[cursor..start]);
        text.push_str(&replacement.new_text);
        cursor = end;
        last_end = Some(end);
        applied += 1;
    }

    text.push_str(&source[cursor..]);
    FixOutput {
        text,
        applied,
        skipped,
    }
}

/// Applies every fix carried by `violations`.
#[must_use]
pub fn apply_fixes(source: &str, violations: &[Violation]) -> FixOutput {
    apply_replacements(source, violations.iter().filter_map(Violation::fix))
}
