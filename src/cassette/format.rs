//! On-disk cassette format.
//!
//! A cassette is a YAML file holding the outcomes of a recorded run, one
//! entry per port fetch, in capture order. Outputs use the `Ok`/`Err` JSON
//! convention so that both successes and failures replay faithfully.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded set of port interactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cassette {
    /// Human-readable cassette name.
    pub name: String,
    /// When the recording was made.
    pub recorded_at: DateTime<Utc>,
    /// Recorded interactions in capture order.
    pub interactions: Vec<Interaction>,
}

/// One recorded port fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    /// Position in the overall recording.
    pub seq: u64,
    /// Port the interaction belongs to (`image_source` or `quote_source`).
    pub port: String,
    /// Outcome in `Ok`/`Err` JSON convention.
    pub output: serde_json::Value,
}
