//! Terminal adapter for the poster view.

use std::io::Write;

use crate::ports::PosterView;

/// Poster view that renders the image and caption targets to an output
/// stream. Status text goes to stderr so piped poster output stays clean.
pub struct ConsoleView<W: Write + Send> {
    out: W,
    trigger_enabled: bool,
}

impl ConsoleView<std::io::Stdout> {
    /// Create a console view over stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleView<W> {
    /// Create a console view over the given output stream.
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out, trigger_enabled: true }
    }

    /// Whether the trigger control is currently enabled.
    #[must_use]
    pub fn is_trigger_enabled(&self) -> bool {
        self.trigger_enabled
    }
}

impl<W: Write + Send> PosterView for ConsoleView<W> {
    fn show_image(&mut self, url: &str) {
        let _ = writeln!(self.out, "Image: {url}");
    }

    fn show_quote(&mut self, text: &str) {
        let _ = writeln!(self.out, "Quote: {text}");
    }

    fn show_status(&mut self, text: &str) {
        if !text.is_empty() {
            eprintln!("{text}");
        }
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }
}
