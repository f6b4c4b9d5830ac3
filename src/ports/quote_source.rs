//! Quote source port for random-quote endpoints.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PosterError;

/// A quote as received from the endpoint.
///
/// Both fields are optional on the wire; unknown fields are ignored. The
/// caption composition rules in [`crate::display`] decide what a partial
/// record renders as.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuoteRecord {
    /// The quote text.
    #[serde(default)]
    pub quote: Option<String>,
    /// Attribution, if the endpoint provided one.
    #[serde(default)]
    pub author: Option<String>,
}

/// Boxed future type returned by [`QuoteSource::fetch`].
pub type QuoteFuture<'a> =
    Pin<Box<dyn Future<Output = Result<QuoteRecord, PosterError>> + Send + 'a>>;

/// Fetches one random quote from an external endpoint.
pub trait QuoteSource: Send + Sync {
    /// Fetch a quote record.
    fn fetch(&self) -> QuoteFuture<'_>;
}
