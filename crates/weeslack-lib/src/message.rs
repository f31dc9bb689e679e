//! User-visible messages produced by dispatch.

use serde::{Deserialize, Serialize};

/// Label used for every collapsed dispatch failure.
pub const SORRY_LABEL: &str = "sorry:";

/// Body used for every collapsed dispatch failure.
pub const SORRY_BODY: &str = "The Slack plugin doesn't understand that command";

/// A `(label, body)` pair sent to the output sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputMessage {
    pub label: String,
    pub body: String,
}

impl OutputMessage {
    pub fn new(label: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            body: body.into(),
        }
    }

    /// The fixed message shown whenever a line cannot be dispatched.
    #[must_use]
    pub fn sorry() -> Self {
        Self::new(SORRY_LABEL, SORRY_BODY)
    }
}
