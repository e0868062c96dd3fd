use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Style;

/// A saved poem. Immutable once created; the saved list keeps the most
/// recent poem first and permits duplicates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Poem {
    pub text: String,
    pub style: Style,
    pub prompt: String,
    pub doom: u8,
    pub date: DateTime<Utc>,
}

/// Structural verdict for a poem checked against a style.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Verdict {
    pub valid: bool,
    pub message: String,
}

impl Verdict {
    pub fn pass(message: impl Into<String>) -> Self {
        Self { valid: true, message: message.into() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { valid: false, message: message.into() }
    }
}
