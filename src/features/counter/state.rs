//! State for the counter feature.

use serde::Serialize;

use crate::dependency::DependencyError;

/// State of the counter screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CounterState {
    pub count: i64,
    /// Text field contents, edited through a binding.
    pub text: String,
    /// Number of characters in `text`, derived on each text binding action.
    pub text_length: usize,
    /// Last dependency failure; cleared by the next successful call.
    pub failure: Option<DependencyError>,
}

impl CounterState {
    pub fn new(count: i64) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// State with pre-filled text and its derived length.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            text_length: text.chars().count(),
            text,
            ..Self::default()
        }
    }

    pub fn has_failed(&self) -> bool {
        self.failure.is_some()
    }
}
