//! Live adapter for the random-image endpoint.

use reqwest::Client;

use crate::error::PosterError;
use crate::ports::image_source::{FetchedImage, ImageFuture, ImageSource};

/// Image source that issues an HTTP GET against a configured endpoint.
///
/// The endpoint is expected to answer with (a redirect to) an image; the
/// body itself is never read. Success is the HTTP status alone.
pub struct HttpImageSource {
    client: Client,
    endpoint: String,
}

impl HttpImageSource {
    /// Create a new image source for the given endpoint URL.
    #[must_use]
    pub fn new(client: Client, endpoint: String) -> Self {
        Self { client, endpoint }
    }
}

impl ImageSource for HttpImageSource {
    fn fetch(&self) -> ImageFuture<'_> {
        Box::pin(async move {
            tracing::debug!("GET {}", self.endpoint);
            let response = self.client.get(&self.endpoint).send().await?;

            let status = response.status();
            if !status.is_success() {
                let message = response.text().await.unwrap_or_default();
                return Err(PosterError::Api { status: status.as_u16(), message });
            }

            // Redirects already followed; this is the final location.
            let url = response.url().to_string();
            Ok(FetchedImage { url })
        })
    }
}
