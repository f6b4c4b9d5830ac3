//! Live adapter for the random-quote endpoint.

use reqwest::Client;

use crate::error::PosterError;
use crate::ports::quote_source::{QuoteFuture, QuoteRecord, QuoteSource};

/// Quote source that issues an HTTP GET and decodes the JSON body.
pub struct HttpQuoteSource {
    client: Client,
    endpoint: String,
}

impl HttpQuoteSource {
    /// Create a new quote source for the given endpoint URL.
    #[must_use]
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

impl QuoteSource for HttpQuoteSource {
    fn fetch(&self) -> QuoteFuture<'_> {
        Box::pin(async move {
            tracing::debug!("GET {}", self.endpoint);
            let response = self.client.get(&self.endpoint).send().await?;

            let status = response.status();
            let body = response.text().await?;
            if !status.is_success() {
                return Err(PosterError::Api { status: status.as_u16(), message: body });
            }

            let record: QuoteRecord = serde_json::from_str(&body).map_err(|e| {
                PosterError::Decode(format!("quote response is not valid JSON: {e}"))
            })?;
            Ok(record)
        })
    }
}
