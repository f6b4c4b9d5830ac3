//! Image source port for random-image endpoints.

use std::future::Future;
use std::pin::Pin;

use serde::{Deserialize, Serialize};

use crate::error::PosterError;

/// The resolved location of a fetched image resource.
///
/// The URL is the final one after any redirects, so it can differ from the
/// endpoint that was requested.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchedImage {
    /// Final URL of the image resource.
    pub url: String,
}

/// Boxed future type returned by [`ImageSource::fetch`].
pub type ImageFuture<'a> =
    Pin<Box<dyn Future<Output = Result<FetchedImage, PosterError>> + Send + 'a>>;

/// Fetches one random image resource from an external endpoint.
pub trait ImageSource: Send + Sync {
    /// Fetch an image resource and resolve its final location.
    fn fetch(&self) -> ImageFuture<'_>;
}
