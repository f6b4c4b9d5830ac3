//! Rendering-surface port for the poster display.

/// A rendering surface with three addressable targets and one trigger
/// control.
///
/// The updater is the only writer. Implementations decide how the targets
/// are presented; the terminal adapter lives in
/// [`crate::adapters::console`].
pub trait PosterView: Send {
    /// Show the poster image by its resolved URL.
    fn show_image(&mut self, url: &str);

    /// Show the poster caption.
    fn show_quote(&mut self, text: &str);

    /// Show transient status text. An empty string clears the status.
    fn show_status(&mut self, text: &str);

    /// Enable or disable the trigger control.
    fn set_trigger_enabled(&mut self, enabled: bool);
}
