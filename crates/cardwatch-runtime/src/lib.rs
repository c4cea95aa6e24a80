//! Cardwatch Runtime — the thin harness around extraction.
//!
//! A [`CardSource`] supplies flattened snapshots of the currently
//! rendered cards, a [`Collector`] turns each cycle's snapshots into
//! stored records, and a [`Poller`] drives collection on a repeating
//! timer with a start/stop lifecycle. Everything interesting lives in
//! `cardwatch-extract`; this crate only wires it to a changing view.

pub mod collector;
pub mod poller;
pub mod source;

pub use collector::{render_report, report_line, Collector, CollectorStats};
pub use poller::Poller;
pub use source::{CardSnapshot, CardSource};
