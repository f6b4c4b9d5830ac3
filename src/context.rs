//! Service context that bundles the fetch-port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use reqwest::Client;

use crate::adapters::live::image_source::HttpImageSource;
use crate::adapters::live::quote_source::HttpQuoteSource;
use crate::adapters::recording::image_source::RecordingImageSource;
use crate::adapters::recording::quote_source::RecordingQuoteSource;
use crate::adapters::replaying::image_source::ReplayingImageSource;
use crate::adapters::replaying::quote_source::ReplayingQuoteSource;
use crate::cassette::load_cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::config::Config;
use crate::error::PosterError;
use crate::ports::{ImageSource, QuoteSource};

/// Bundles the two fetch ports into a single context.
///
/// Construction validates the collaborators up front (endpoint URLs parse,
/// cassettes load) so the update cycle never has to guard its accesses.
pub struct ServiceContext {
    /// Image fetch port.
    pub images: Box<dyn ImageSource>,
    /// Quote fetch port.
    pub quotes: Box<dyn QuoteSource>,
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext").finish_non_exhaustive()
    }
}

/// Handle to a recording session that must be finished after use.
pub struct RecordingSession {
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingSession {
    /// Finish the recording and write the cassette file to disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be written.
    pub fn finish(self) -> Result<PathBuf, String> {
        let recorder = Arc::try_unwrap(self.recorder)
            .map_err(|_| "Recording adapter still has references".to_string())?
            .into_inner()
            .map_err(|e| format!("Recorder lock poisoned: {e}"))?;
        recorder.finish().map_err(|e| format!("Failed to write cassette: {e}"))
    }
}

impl ServiceContext {
    /// Create a live context against the configured endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is not a valid absolute URL.
    pub fn live(config: &Config) -> Result<Self, PosterError> {
        let image_endpoint = parse_endpoint(&config.endpoints.image)?;
        let quote_endpoint = parse_endpoint(&config.endpoints.quote)?;

        let client = Client::new();
        Ok(Self {
            images: Box::new(HttpImageSource::new(client.clone(), image_endpoint)),
            quotes: Box::new(HttpQuoteSource::new(client, quote_endpoint)),
        })
    }

    /// Create a recording context that wraps the live adapters with
    /// recorders.
    ///
    /// # Errors
    ///
    /// Returns an error if the live context cannot be created.
    pub fn recording(config: &Config) -> Result<(Self, RecordingSession), PosterError> {
        let live = Self::live(config)?;

        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let path = PathBuf::from(".poster/cassettes")
            .join(&timestamp)
            .join("fetch.cassette.yaml");
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, format!("{timestamp}-fetch"))));

        let ctx = Self {
            images: Box::new(RecordingImageSource::new(live.images, Arc::clone(&recorder))),
            quotes: Box::new(RecordingQuoteSource::new(live.quotes, Arc::clone(&recorder))),
        };
        let session = RecordingSession { recorder };

        Ok((ctx, session))
    }

    /// Create a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be loaded.
    pub fn replaying(path: &Path) -> Result<Self, PosterError> {
        let replayer = load_cassette(path).map_err(PosterError::Config)?;
        let replayer = Arc::new(Mutex::new(replayer));
        Ok(Self {
            images: Box::new(ReplayingImageSource::new(Arc::clone(&replayer))),
            quotes: Box::new(ReplayingQuoteSource::new(replayer)),
        })
    }
}

/// Validate an endpoint address as an absolute URL.
fn parse_endpoint(raw: &str) -> Result<String, PosterError> {
    reqwest::Url::parse(raw)
        .map(String::from)
        .map_err(|e| PosterError::InvalidArgument(format!("invalid endpoint URL '{raw}': {e}")))
}
