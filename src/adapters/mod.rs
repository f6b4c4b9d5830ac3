//! Adapter implementations for port traits.
//!
//! - `live/` — reqwest-backed HTTP endpoint adapters
//! - `console` — terminal rendering surface
//! - `recording/` — record fetch outcomes to cassettes
//! - `replaying/` — replay fetch outcomes from cassettes

pub mod console;
pub mod live;
pub mod recording;
pub mod replaying;
