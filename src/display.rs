//! Display State and caption composition.

use crate::ports::quote_source::QuoteRecord;

/// The authoritative (image, caption) pair currently rendered.
///
/// Holds either the configured default pair or a pair produced by a single
/// successful fetch cycle, never a mix of the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Resolved URL (or local path) of the poster image.
    pub image_url: String,
    /// Caption rendered under the image.
    pub quote_text: String,
}

/// Compose the caption for a fetched quote record.
///
/// A present quote is wrapped in quotation marks, with ` - <author>`
/// appended only when an author is present. A record without a quote falls
/// back to the default caption verbatim; a stray author on its own is not
/// attributed to text the endpoint never produced.
#[must_use]
pub fn compose_caption(record: &QuoteRecord, default_quote: &str) -> String {
    match record.quote {
        Some(ref quote) => match record.author {
            Some(ref author) => format!("\"{quote}\" - {author}"),
            None => format!("\"{quote}\""),
        },
        None => default_quote.to_string(),
    }
}
