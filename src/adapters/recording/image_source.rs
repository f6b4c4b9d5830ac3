//! Recording adapter for the `ImageSource` port.

use std::sync::{Arc, Mutex};

use super::record_outcome;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::image_source::{ImageFuture, ImageSource};

/// Records image fetch outcomes while delegating to an inner source.
pub struct RecordingImageSource {
    inner: Box<dyn ImageSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingImageSource {
    /// Creates a recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn ImageSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl ImageSource for RecordingImageSource {
    fn fetch(&self) -> ImageFuture<'_> {
        let recorder = Arc::clone(&self.recorder);
        Box::pin(async move {
            let result = self.inner.fetch().await;
            record_outcome(&recorder, "image_source", &result);
            result
        })
    }
}
