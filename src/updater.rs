//! The poster update cycle: concurrent fetches, joint-success policy,
//! fallback, and delayed trigger re-enable.

use std::time::Duration;

use crate::context::ServiceContext;
use crate::display::{compose_caption, DisplayState};
use crate::ports::PosterView;

/// Status shown while both fetches are in flight.
const STATUS_LOADING: &str = "Loading poster...";
/// Status shown after a successful cycle.
const STATUS_UPDATED: &str = "Poster updated successfully!";
/// Status shown when the cycle collapsed to the defaults.
const STATUS_FAILED: &str = "Error loading content. Using defaults.";

/// Outcome of one fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Both fetches succeeded and the display shows the fetched pair.
    Updated,
    /// At least one fetch failed; the display reverted to the defaults.
    Fallback,
}

/// Drives the fetch-compose-render-fallback sequence against injected
/// ports.
///
/// The display state only ever holds the default pair or a pair produced by
/// one successful cycle; an update is applied only when both fetches
/// succeed.
pub struct PosterUpdater {
    ctx: ServiceContext,
    view: Box<dyn PosterView>,
    defaults: DisplayState,
    reenable_delay: Duration,
    state: DisplayState,
}

impl PosterUpdater {
    /// Create an updater and render the default pair on the view.
    #[must_use]
    pub fn new(
        ctx: ServiceContext,
        view: Box<dyn PosterView>,
        defaults: DisplayState,
        reenable_delay: Duration,
    ) -> Self {
        let mut updater =
            Self { ctx, view, state: defaults.clone(), defaults, reenable_delay };
        updater.render();
        updater
    }

    /// The display state as currently rendered.
    #[must_use]
    pub fn display(&self) -> &DisplayState {
        &self.state
    }

    /// Run one fetch cycle.
    ///
    /// Disables the trigger for the whole cycle; the trigger is re-enabled
    /// and the status cleared only after the configured delay, regardless
    /// of outcome. Fetch failures never escape this method: they are logged
    /// and collapsed into the fallback path.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        self.view.show_status(STATUS_LOADING);
        self.view.set_trigger_enabled(false);

        // Both requests are in flight before either is awaited, and the
        // join waits for both to settle. No cancellation mid-flight.
        let (image, quote) = tokio::join!(self.ctx.images.fetch(), self.ctx.quotes.fetch());

        let outcome = match (image, quote) {
            (Ok(image), Ok(record)) => {
                let caption = compose_caption(&record, &self.defaults.quote_text);
                self.state = DisplayState { image_url: image.url, quote_text: caption };
                self.render();
                self.view.show_status(STATUS_UPDATED);
                CycleOutcome::Updated
            }
            (image, quote) => {
                for err in [image.err(), quote.err()].into_iter().flatten() {
                    tracing::warn!("poster fetch failed: {err}");
                }
                self.state = self.defaults.clone();
                self.render();
                self.view.show_status(STATUS_FAILED);
                CycleOutcome::Fallback
            }
        };

        tokio::time::sleep(self.reenable_delay).await;
        self.view.set_trigger_enabled(true);
        self.view.show_status("");
        outcome
    }

    fn render(&mut self) {
        self.view.show_image(&self.state.image_url);
        self.view.show_quote(&self.state.quote_text);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::error::PosterError;
    use crate::ports::image_source::{FetchedImage, ImageFuture, ImageSource};
    use crate::ports::quote_source::{QuoteFuture, QuoteRecord, QuoteSource};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ViewEvent {
        Image(String),
        Quote(String),
        Status(String),
        Trigger(bool),
    }

    #[derive(Default)]
    struct RecordingView {
        events: Arc<Mutex<Vec<ViewEvent>>>,
    }

    impl PosterView for RecordingView {
        fn show_image(&mut self, url: &str) {
            self.events.lock().unwrap().push(ViewEvent::Image(url.into()));
        }
        fn show_quote(&mut self, text: &str) {
            self.events.lock().unwrap().push(ViewEvent::Quote(text.into()));
        }
        fn show_status(&mut self, text: &str) {
            self.events.lock().unwrap().push(ViewEvent::Status(text.into()));
        }
        fn set_trigger_enabled(&mut self, enabled: bool) {
            self.events.lock().unwrap().push(ViewEvent::Trigger(enabled));
        }
    }

    struct ScriptedImages(Mutex<VecDeque<Result<FetchedImage, PosterError>>>);

    impl ScriptedImages {
        fn script(results: Vec<Result<FetchedImage, PosterError>>) -> Self {
            Self(Mutex::new(results.into()))
        }
        fn ok(url: &str) -> Self {
            Self::script(vec![Ok(FetchedImage { url: url.into() })])
        }
        fn err(status: u16) -> Self {
            Self::script(vec![Err(PosterError::Api { status, message: "boom".into() })])
        }
    }

    impl ImageSource for ScriptedImages {
        fn fetch(&self) -> ImageFuture<'_> {
            let result = self.0.lock().unwrap().pop_front().expect("image script exhausted");
            Box::pin(async move { result })
        }
    }

    struct ScriptedQuotes(Mutex<VecDeque<Result<QuoteRecord, PosterError>>>);

    impl ScriptedQuotes {
        fn script(results: Vec<Result<QuoteRecord, PosterError>>) -> Self {
            Self(Mutex::new(results.into()))
        }
        fn ok(quote: Option<&str>, author: Option<&str>) -> Self {
            Self::script(vec![Ok(QuoteRecord {
                quote: quote.map(str::to_string),
                author: author.map(str::to_string),
            })])
        }
        fn err() -> Self {
            Self::script(vec![Err(PosterError::Decode("not valid JSON".into()))])
        }
    }

    impl QuoteSource for ScriptedQuotes {
        fn fetch(&self) -> QuoteFuture<'_> {
            let result = self.0.lock().unwrap().pop_front().expect("quote script exhausted");
            Box::pin(async move { result })
        }
    }

    fn defaults() -> DisplayState {
        DisplayState { image_url: "flower.jpg".into(), quote_text: "Grow With Grace".into() }
    }

    fn updater_with(
        images: ScriptedImages,
        quotes: ScriptedQuotes,
        events: &Arc<Mutex<Vec<ViewEvent>>>,
    ) -> PosterUpdater {
        let ctx =
            ServiceContext { images: Box::new(images), quotes: Box::new(quotes) };
        let view = RecordingView { events: Arc::clone(events) };
        PosterUpdater::new(ctx, Box::new(view), defaults(), Duration::ZERO)
    }

    #[test]
    fn construction_renders_defaults() {
        let events = Arc::default();
        let updater = updater_with(
            ScriptedImages::script(vec![]),
            ScriptedQuotes::script(vec![]),
            &events,
        );
        assert_eq!(*updater.display(), defaults());
        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                ViewEvent::Image("flower.jpg".into()),
                ViewEvent::Quote("Grow With Grace".into()),
            ]
        );
    }

    #[tokio::test]
    async fn joint_success_applies_both_fields() {
        let events = Arc::default();
        let mut updater = updater_with(
            ScriptedImages::ok("https://cdn.example/img123.jpg"),
            ScriptedQuotes::ok(Some("Be bold"), Some("A. Writer")),
            &events,
        );

        let outcome = updater.run_cycle().await;

        assert_eq!(outcome, CycleOutcome::Updated);
        assert_eq!(
            *updater.display(),
            DisplayState {
                image_url: "https://cdn.example/img123.jpg".into(),
                quote_text: "\"Be bold\" - A. Writer".into(),
            }
        );
    }

    #[tokio::test]
    async fn image_failure_reverts_to_defaults() {
        let events = Arc::default();
        let mut updater = updater_with(
            ScriptedImages::err(500),
            ScriptedQuotes::ok(Some("Be bold"), Some("A. Writer")),
            &events,
        );

        let outcome = updater.run_cycle().await;

        // The successful quote is discarded along with the failed image.
        assert_eq!(outcome, CycleOutcome::Fallback);
        assert_eq!(*updater.display(), defaults());
    }

    #[tokio::test]
    async fn quote_failure_reverts_to_defaults() {
        let events = Arc::default();
        let mut updater = updater_with(
            ScriptedImages::ok("https://cdn.example/img123.jpg"),
            ScriptedQuotes::err(),
            &events,
        );

        let outcome = updater.run_cycle().await;

        assert_eq!(outcome, CycleOutcome::Fallback);
        assert_eq!(*updater.display(), defaults());
    }

    #[tokio::test]
    async fn both_failures_revert_to_defaults() {
        let events = Arc::default();
        let mut updater =
            updater_with(ScriptedImages::err(502), ScriptedQuotes::err(), &events);

        assert_eq!(updater.run_cycle().await, CycleOutcome::Fallback);
        assert_eq!(*updater.display(), defaults());
    }

    #[tokio::test]
    async fn missing_author_omits_attribution() {
        let events = Arc::default();
        let mut updater = updater_with(
            ScriptedImages::ok("https://cdn.example/img456.jpg"),
            ScriptedQuotes::ok(Some("Stay curious"), None),
            &events,
        );

        updater.run_cycle().await;
        assert_eq!(updater.display().quote_text, "\"Stay curious\"");
    }

    #[tokio::test]
    async fn missing_quote_field_uses_default_caption() {
        let events = Arc::default();
        let mut updater = updater_with(
            ScriptedImages::ok("https://cdn.example/img456.jpg"),
            ScriptedQuotes::ok(None, Some("A. Writer")),
            &events,
        );

        updater.run_cycle().await;
        assert_eq!(updater.display().quote_text, "Grow With Grace");
        assert_eq!(updater.display().image_url, "https://cdn.example/img456.jpg");
    }

    #[tokio::test]
    async fn failure_after_success_resets_both_fields() {
        let events = Arc::default();
        let images = ScriptedImages::script(vec![
            Ok(FetchedImage { url: "https://cdn.example/img123.jpg".into() }),
            Err(PosterError::Api { status: 500, message: "boom".into() }),
        ]);
        let quotes = ScriptedQuotes::script(vec![
            Ok(QuoteRecord { quote: Some("Be bold".into()), author: None }),
            Ok(QuoteRecord { quote: Some("Stay curious".into()), author: None }),
        ]);
        let mut updater = updater_with(images, quotes, &events);

        updater.run_cycle().await;
        assert_eq!(updater.display().image_url, "https://cdn.example/img123.jpg");

        updater.run_cycle().await;
        // No field from the first cycle survives the failed second cycle.
        assert_eq!(*updater.display(), defaults());
    }

    #[tokio::test]
    async fn trigger_disabled_for_cycle_then_reenabled_and_status_cleared() {
        let events = Arc::default();
        let mut updater = updater_with(
            ScriptedImages::ok("https://cdn.example/img123.jpg"),
            ScriptedQuotes::ok(Some("Be bold"), None),
            &events,
        );

        updater.run_cycle().await;

        let events = events.lock().unwrap();
        let triggers: Vec<&ViewEvent> = events
            .iter()
            .filter(|e| matches!(e, ViewEvent::Trigger(_)))
            .collect();
        assert_eq!(triggers, vec![&ViewEvent::Trigger(false), &ViewEvent::Trigger(true)]);

        // The cycle ends with re-enable followed by a cleared status.
        let tail = &events[events.len() - 2..];
        assert_eq!(tail, [ViewEvent::Trigger(true), ViewEvent::Status(String::new())]);

        // Nothing re-enables the trigger before the cycle settles.
        let disable_at =
            events.iter().position(|e| *e == ViewEvent::Trigger(false)).unwrap();
        let enable_at =
            events.iter().position(|e| *e == ViewEvent::Trigger(true)).unwrap();
        assert!(events[..disable_at].contains(&ViewEvent::Status(STATUS_LOADING.into())));
        assert!(events[disable_at..enable_at]
            .contains(&ViewEvent::Status(STATUS_UPDATED.into())));
    }
}
