//! Cardwatch Store — in-memory accumulation of extracted records.

pub mod feed;

pub use feed::FeedStore;
