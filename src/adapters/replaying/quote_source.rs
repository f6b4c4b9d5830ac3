//! Replaying adapter for the `QuoteSource` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::quote_source::{QuoteFuture, QuoteRecord, QuoteSource};

/// Serves recorded quote fetch outcomes from a cassette.
pub struct ReplayingQuoteSource {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingQuoteSource {
    /// Create a replaying source backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl QuoteSource for ReplayingQuoteSource {
    fn fetch(&self) -> QuoteFuture<'_> {
        let output = next_output(&self.replayer, "quote_source");
        Box::pin(async move { replay_result::<QuoteRecord>(output) })
    }
}
