//! Replaying adapters that serve recorded fetch outcomes from cassettes.

pub mod image_source;
pub mod quote_source;

use std::sync::{Arc, Mutex};

use crate::cassette::replayer::CassetteReplayer;
use crate::error::PosterError;

/// Retrieve the next recorded output for a port.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
) -> serde_json::Value {
    let mut guard = replayer.lock().expect("replayer lock poisoned");
    guard.next_output(port)
}

/// Deserialize a replayed output as `Result<T, PosterError>`.
///
/// Recorded failures come back as a [`PosterError::Api`] with status 0;
/// the error taxonomy is flattened to a display string at record time.
pub(crate) fn replay_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
) -> Result<T, PosterError> {
    if let Some(err_val) = output.get("Err") {
        let message = err_val.as_str().unwrap_or("replayed error").to_string();
        return Err(PosterError::Api { status: 0, message });
    }
    let value = match output.get("Ok") {
        Some(ok_val) => ok_val.clone(),
        None => output,
    };
    serde_json::from_value(value)
        .map_err(|e| PosterError::Decode(format!("replayed output did not decode: {e}")))
}
