//! Live HTTP adapters for the fetch ports.

pub mod image_source;
pub mod quote_source;
