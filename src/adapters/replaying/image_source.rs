//! Replaying adapter for the `ImageSource` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::image_source::{FetchedImage, ImageFuture, ImageSource};

/// Serves recorded image fetch outcomes from a cassette.
pub struct ReplayingImageSource {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingImageSource {
    /// Create a replaying source backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl ImageSource for ReplayingImageSource {
    fn fetch(&self) -> ImageFuture<'_> {
        let output = next_output(&self.replayer, "image_source");
        Box::pin(async move { replay_result::<FetchedImage>(output) })
    }
}
