//! Record extraction — one flattened card in, one validated record or
//! nothing out.
//!
//! Extraction is all-or-nothing: a block that fails any gate yields
//! `None` with no partial result. Rejection is not an error — ads,
//! promoted content, and UI furniture flatten to text that fails the
//! gates constantly, and the caller only needs to know whether there
//! is a record to store.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify;

/// Literal trailing line of a card whose body is collapsed behind an
/// expand affordance. A known-incomplete body is worse than no record.
pub const TRUNCATION_MARKER: &str = "Show more";

/// A validated post record recovered from one rendered card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Stable identifier, supplied by the harness from the card's
    /// permalink. Not derivable from the card text.
    pub id: String,
    /// Account handle, first character always `@`.
    pub author_handle: String,
    /// Reconstructed visible post text, newline-joined, with header,
    /// counter, and quoted-post lines stripped. May be empty.
    pub body: String,
    /// The card's date line, e.g. `Jul 9, 2018`.
    pub posted_at: String,
    /// The original unmodified block, retained for audit.
    pub raw_source: String,
}

/// Extract a [`PostRecord`] from the flattened text of one card.
///
/// The card layout is positional: line 0 is the display name, line 1
/// the `@`-handle, line 2 a separator glyph, line 3 the date. The
/// remainder is body text followed by a contiguous run of engagement
/// counters. Cheap structural gates (handle prefix, date pattern) run
/// before any body work so non-post cards are rejected fast.
pub fn extract_post(id: &str, raw_text: Option<&str>) -> Option<PostRecord> {
    let raw = raw_text?;
    if raw.is_empty() {
        return None;
    }

    let mut lines: Vec<&str> = raw.split('\n').collect();
    if lines.len() < 4 {
        debug!(id, line_count = lines.len(), "card too short, skipping");
        return None;
    }

    let author_handle = lines[1];
    if !author_handle.starts_with('@') {
        debug!(id, line = author_handle, "second line is not a handle, skipping");
        return None;
    }

    let posted_at = lines[3];
    if !classify::is_post_date(posted_at) {
        debug!(id, line = posted_at, "fourth line is not a date, skipping");
        return None;
    }

    // Reply/repost/like counters are a contiguous trailing run of
    // bare-number lines; stop at the first non-counter from the end.
    // A body whose final line happens to look like a bare number is
    // stripped with them — a heuristic limit of the flattened layout.
    while lines
        .last()
        .is_some_and(|line| classify::is_engagement_count(line))
    {
        lines.pop();
    }

    // Header lines (name, handle, separator, date) are captured
    // above, not body content.
    let body_lines = lines.get(4..).unwrap_or(&[]);
    let body_lines = classify::truncate_at_quote_marker(body_lines);

    if body_lines.last().is_some_and(|line| *line == TRUNCATION_MARKER) {
        debug!(id, "body collapsed behind expand affordance, skipping");
        return None;
    }

    Some(PostRecord {
        id: id.to_string(),
        author_handle: author_handle.to_string(),
        body: body_lines.join("\n"),
        posted_at: posted_at.to_string(),
        raw_source: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "AZEALIA BANKS\n@AZEALIASPEAKS\n·\nJul 9, 2018\nTREASURE ISLAND | \n…\n21\n18\n73";

    #[test]
    fn test_extract_valid_card() {
        let record = extract_post("123", Some(CARD)).unwrap();
        assert_eq!(record.id, "123");
        assert_eq!(record.author_handle, "@AZEALIASPEAKS");
        assert_eq!(record.posted_at, "Jul 9, 2018");
        assert_eq!(record.body, "TREASURE ISLAND | \n…");
        assert_eq!(record.raw_source, CARD);
    }

    #[test]
    fn test_extract_is_deterministic() {
        let first = extract_post("123", Some(CARD)).unwrap();
        let second = extract_post("123", Some(CARD)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_or_empty_text() {
        assert_eq!(extract_post("1", None), None);
        assert_eq!(extract_post("1", Some("")), None);
    }

    #[test]
    fn test_too_few_lines() {
        assert_eq!(extract_post("1", Some("Name\n@handle\n·")), None);
    }

    #[test]
    fn test_handle_without_at_prefix() {
        let raw = "AZEALIA BANKS\nAZEALIASPEAKS\n·\nJul 9, 2018\nbody";
        assert_eq!(extract_post("1", Some(raw)), None);
    }

    #[test]
    fn test_invalid_date_line() {
        let raw = "Name\n@handle\n·\nnot a date\nbody";
        assert_eq!(extract_post("1", Some(raw)), None);
    }

    #[test]
    fn test_suffixed_counters_stripped() {
        let raw = "Name\n@handle\n·\nJan 2, 2024\nhello world\n1.2K\n340\n55.2K";
        let record = extract_post("9", Some(raw)).unwrap();
        assert_eq!(record.body, "hello world");
    }

    #[test]
    fn test_counter_stripping_stops_at_first_non_number() {
        // "over 9000" interrupts the trailing run; the 12 above it stays
        let raw = "Name\n@handle\n·\nJan 2, 2024\n12\nover 9000\n7\n8";
        let record = extract_post("9", Some(raw)).unwrap();
        assert_eq!(record.body, "12\nover 9000");
    }

    #[test]
    fn test_quote_marker_truncates_body() {
        let raw = "Name\n@handle\n·\nJan 2, 2024\nmy take\nQuote\nQuoted Person\n@quoted\nnested body\n4\n5";
        let record = extract_post("9", Some(raw)).unwrap();
        assert_eq!(record.body, "my take");
    }

    #[test]
    fn test_collapsed_body_rejected() {
        let raw = "Name\n@handle\n·\nJan 2, 2024\nlong post start\nShow more\n10\n11\n12";
        assert_eq!(extract_post("9", Some(raw)), None);
    }

    #[test]
    fn test_header_only_card_has_empty_body() {
        let raw = "Name\n@handle\n·\nJan 2, 2024\n3\n1\n0";
        let record = extract_post("9", Some(raw)).unwrap();
        assert_eq!(record.body, "");
    }

    #[test]
    fn test_record_serde_roundtrip() {
        let record = extract_post("123", Some(CARD)).unwrap();
        let json = serde_json::to_string(&record).unwrap();
        let back: PostRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
