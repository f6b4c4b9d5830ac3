//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the update core and an external
//! collaborator: the two remote endpoints and the rendering surface.
//! Implementations live in `src/adapters/`.

pub mod image_source;
pub mod quote_source;
pub mod view;

pub use image_source::ImageSource;
pub use quote_source::QuoteSource;
pub use view::PosterView;
