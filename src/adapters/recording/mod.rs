//! Recording adapters that capture fetch outcomes to cassettes.

pub mod image_source;
pub mod quote_source;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

/// Record a port outcome using the `Ok`/`Err` JSON convention.
pub(crate) fn record_outcome<T, E>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
{
    let output = match result {
        Ok(v) => {
            let inner = serde_json::to_value(v).expect("failed to serialize Ok value");
            serde_json::json!({ "Ok": inner })
        }
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    let mut guard = recorder.lock().expect("recorder lock poisoned");
    guard.record(port, output);
}
