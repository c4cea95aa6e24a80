//! Cardwatch Extract — line-level field classification and record
//! extraction from the flattened text of a rendered feed card.
//!
//! Everything here is pure: the same input always yields the same
//! output, and nothing is retained between calls. The polling harness
//! in `cardwatch-runtime` drives these functions once per visible
//! card per cycle.

pub mod classify;
pub mod record;

pub use classify::{
    is_engagement_count, is_post_date, is_quote_marker, post_id_from_permalink,
    truncate_at_quote_marker,
};
pub use record::{extract_post, PostRecord};
