//! Section segmenter.
//!
//! Splits a document's lines into contiguous groups, each beginning at a
//! heading line (a line whose trimmed form starts with `#`). A single-pass
//! fold with no backtracking: segment order matches document order, and
//! boundaries are determined solely by the leading `#`.

use docdex_shared::Segment;

/// Segment a document's lines into heading-delimited groups.
///
/// Lines before the first heading are discarded, so a document with no
/// heading yields zero segments. Blank lines are dropped entirely; every
/// other non-heading line appends to the current segment's body.
pub fn segment_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.starts_with('#') {
            segments.push(Segment {
                title_line: line.to_string(),
                body_lines: Vec::new(),
            });
        } else if trimmed.is_empty() {
            continue;
        } else if let Some(current) = segments.last_mut() {
            current.body_lines.push(line.to_string());
        }
        // Non-blank content before the first heading falls through and is dropped.
    }

    segments
}

/// Heading text with leading `#` markers and surrounding whitespace stripped.
pub fn heading_title(raw_heading: &str) -> String {
    raw_heading.trim().trim_start_matches('#').trim().to_string()
}

/// Anchor slug for a raw heading line.
///
/// Lower-cased, `#` characters stripped, trimmed, spaces replaced with
/// hyphens. Consecutive spaces produce consecutive hyphens, matching the
/// generated pages this index links into.
pub fn heading_slug(raw_heading: &str) -> String {
    let lowered = raw_heading.to_lowercase();
    let stripped = lowered.replace('#', "");
    stripped.trim().replace(' ', "-")
}
