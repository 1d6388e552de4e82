//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::{App, DEFAULT_ASSISTANT_NAME};
use crate::core::surface::{ChatSurface, InputSource, Visibility};
use crate::core::transcript::Entry;

/// One call made by the core against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Append(Entry),
    ClearInput,
    SetVisibility(Visibility),
    ScrollToBottom,
}

/// A surface that remembers every call instead of drawing anything.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub input: String,
    pub calls: Vec<SurfaceCall>,
}

impl RecordingSurface {
    pub fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            calls: Vec::new(),
        }
    }
}

impl InputSource for RecordingSurface {
    fn input_value(&self) -> String {
        self.input.clone()
    }
}

impl ChatSurface for RecordingSurface {
    fn append_entry(&mut self, entry: &Entry) {
        self.calls.push(SurfaceCall::Append(entry.clone()));
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.calls.push(SurfaceCall::ClearInput);
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.calls.push(SurfaceCall::SetVisibility(visibility));
    }

    fn scroll_to_bottom(&mut self) {
        self.calls.push(SurfaceCall::ScrollToBottom);
    }
}

/// Creates a test App with the default assistant name.
pub fn test_app() -> App {
    App::new(DEFAULT_ASSISTANT_NAME.to_string())
}
