//! Replays recorded fetch outcomes from a cassette.

use std::collections::{HashMap, VecDeque};

use super::format::Cassette;

/// Serves recorded outputs sequentially per port.
pub struct CassetteReplayer {
    queues: HashMap<String, VecDeque<serde_json::Value>>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<String, VecDeque<serde_json::Value>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry(interaction.port.clone())
                .or_default()
                .push_back(interaction.output.clone());
        }
        Self { queues }
    }

    /// Return the next recorded output for the given port.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) interactions for the port; a
    /// cassette that runs dry mid-test is a broken fixture, not a runtime
    /// condition to recover from.
    pub fn next_output(&mut self, port: &str) -> serde_json::Value {
        let Some(queue) = self.queues.get_mut(port) else {
            let available: Vec<&str> = self.queues.keys().map(String::as_str).collect();
            panic!(
                "Cassette exhausted: no interactions recorded for port {port:?}. \
                 Available ports: [{}]",
                available.join(", ")
            );
        };
        queue.pop_front().unwrap_or_else(|| {
            panic!("Cassette exhausted: all interactions for port {port:?} have been consumed")
        })
    }
}
