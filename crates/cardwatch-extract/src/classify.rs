//! Line-level field classifiers — pure predicates over the flattened
//! card text.
//!
//! A rendered card flattens to one line per visual row, so field
//! types have to be recognized from the line shape alone: engagement
//! counters are bare numbers (possibly with a magnitude suffix),
//! embedded quoted posts are introduced by a literal marker line, and
//! post dates carry a month-name calendar form.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal line that introduces an embedded quoted post.
pub const QUOTE_MARKER: &str = "Quote";

/// Engagement counters: a bare integer or decimal, optionally signed,
/// optionally with a single magnitude suffix. The suffix set is the
/// one the feed actually renders (no lowercase `b`).
static ENGAGEMENT_COUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(?:\.\d+)?[KMBTkmt]?$").unwrap());

/// Month-name calendar date, e.g. `Jul 9, 2018`. Deliberately
/// unanchored: the date row can carry surrounding text (edited
/// markers and the like) and only the date line is ever tested.
static POST_DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z]+ \d{1,2}, \d{4}").unwrap());

/// Digit run after `/status/` in a card permalink.
static PERMALINK_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"/status/(\d+)").unwrap());

/// True if the line is a reply/repost/like counter.
///
/// Counters render as trailing bare-number lines with no other
/// distinguishing marker, so they must be recognized by shape and
/// stripped before body reconstruction.
pub fn is_engagement_count(line: &str) -> bool {
    ENGAGEMENT_COUNT_RE.is_match(line)
}

/// True if the line is the literal marker before an embedded quoted post.
pub fn is_quote_marker(line: &str) -> bool {
    line == QUOTE_MARKER
}

/// True if the line carries a month-name calendar date.
pub fn is_post_date(line: &str) -> bool {
    POST_DATE_RE.is_match(line)
}

/// Return the prefix of `lines` strictly before the first quote
/// marker, or all of `lines` when no marker is present.
///
/// Nested quoted content is a distinct post and must not contaminate
/// this record's body. Idempotent: the returned prefix never contains
/// a marker.
pub fn truncate_at_quote_marker<'a>(lines: &'a [&'a str]) -> &'a [&'a str] {
    match lines.iter().position(|line| is_quote_marker(line)) {
        Some(idx) => &lines[..idx],
        None => lines,
    }
}

/// Extract the post id from a permalink-style href, e.g.
/// `/AZEALIASPEAKS/status/1016099466447962112` → the digit run after
/// `/status/`. This is the secondary signal the harness uses to
/// assign stable ids; the id is never derivable from the card text.
///
/// Called by the out-of-tree DOM/driver side when it builds
/// `CardSnapshot`s; nothing in this workspace mints ids itself.
pub fn post_id_from_permalink(href: &str) -> Option<&str> {
    PERMALINK_ID_RE
        .captures(href)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
