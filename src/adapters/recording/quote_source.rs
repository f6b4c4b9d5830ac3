//! Recording adapter for the `QuoteSource` port.

use std::sync::{Arc, Mutex};

use super::record_outcome;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::quote_source::{QuoteFuture, QuoteSource};

/// Records quote fetch outcomes while delegating to an inner source.
pub struct RecordingQuoteSource {
    inner: Box<dyn QuoteSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingQuoteSource {
    /// Creates a recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn QuoteSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl QuoteSource for RecordingQuoteSource {
    fn fetch(&self) -> QuoteFuture<'_> {
        let recorder = Arc::clone(&self.recorder);
        Box::pin(async move {
            let result = self.inner.fetch().await;
            record_outcome(&recorder, "quote_source", &result);
            result
        })
    }
}
