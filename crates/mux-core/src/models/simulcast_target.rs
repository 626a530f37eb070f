use serde::{Deserialize, Serialize};

use crate::normalize::{Field, Normalizable, ScalarKind, Schema};

/// A destination a live stream is re-broadcast to.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulcastTarget {
    pub id: String,
    pub url: Option<String>,
    pub stream_key: Option<String>,
    /// Opaque caller label, echoed back by the API.
    pub passthrough: Option<String>,
    /// idle, starting, broadcasting or errored
    pub status: Option<String>,
}

impl Normalizable for SimulcastTarget {
    const SCHEMA: &'static Schema = &Schema {
        name: "SimulcastTarget",
        fields: &[
            Field::scalar("id", ScalarKind::String),
            Field::scalar("url", ScalarKind::String),
            Field::scalar("stream_key", ScalarKind::String),
            Field::scalar("passthrough", ScalarKind::String),
            Field::scalar("status", ScalarKind::String),
        ],
    };
}
