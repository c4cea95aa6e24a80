//! Card sources — where flattened snapshots come from.

/// One rendered card as sampled in a poll cycle.
///
/// `raw_text` is optional because reading an element's visible text
/// can fail mid-render; the id comes from a permalink on the card
/// (see `cardwatch_extract::post_id_from_permalink`), never from the
/// text itself.
#[derive(Debug, Clone)]
pub struct CardSnapshot {
    pub id: String,
    pub raw_text: Option<String>,
}

impl CardSnapshot {
    pub fn new(id: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            raw_text: Some(raw_text.into()),
        }
    }
}

/// Supplier of the currently rendered cards.
///
/// The DOM/driver side lives outside this workspace; implementations
/// here are test doubles. A call enumerates whatever is on screen at
/// that instant, and the same post is expected to reappear across
/// calls as the view scrolls.
pub trait CardSource: Send + Sync {
    fn poll_cards(&self) -> Vec<CardSnapshot>;
}
