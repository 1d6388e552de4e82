//! # Presentation Boundary
//!
//! The two collaborators the core talks to. The core never draws anything
//! itself; it reads the draft through [`InputSource`] and pushes display
//! changes through [`ChatSurface`]. The TUI implements both, and tests use a
//! recording implementation.

use crate::core::transcript::Entry;

/// Whether the chat panel is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Shown,
    #[default]
    Hidden,
}

impl Visibility {
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Visibility::Shown
    }
}

/// Read-only access to the user's current draft.
pub trait InputSource {
    fn input_value(&self) -> String;
}

/// Display-side effects requested by the core.
pub trait ChatSurface {
    /// Show a newly appended log entry.
    ///
    /// The entry is already in the [`App`](crate::core::state::App) log when
    /// this is called. A surface that draws from the log itself may treat
    /// this as a repaint request instead of keeping its own copy.
    fn append_entry(&mut self, entry: &Entry);

    /// Empty the draft buffer.
    fn clear_input(&mut self);

    /// Show or hide the chat panel.
    fn set_visibility(&mut self, visibility: Visibility);

    /// Bring the newest entry into view.
    fn scroll_to_bottom(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hidden() {
        assert_eq!(Visibility::default(), Visibility::Hidden);
    }

    #[test]
    fn test_toggled_is_involution() {
        for v in [Visibility::Shown, Visibility::Hidden] {
            assert_ne!(v.toggled(), v);
            assert_eq!(v.toggled().toggled(), v);
        }
    }
}
