//! # Application State
//!
//! Core session state for HealMate. No TUI-specific types live here;
//! presentation state belongs to the `tui` module.
//!
//! ```text
//! App
//! ├── log: MessageLog          // append-only conversation
//! ├── visibility: Visibility   // chat panel shown/hidden
//! ├── assistant_name: String   // label for bot entries
//! └── status_message: String   // header status text
//! ```
//!
//! The panel visibility is only ever changed by [`App::toggle_panel`], and the
//! log only grows through [`App::submit_message`].

use log::{debug, info};

use crate::core::classifier::{Reply, classify_reply};
use crate::core::config::ResolvedConfig;
use crate::core::surface::{ChatSurface, Visibility};
use crate::core::transcript::{Entry, MessageLog};

pub const DEFAULT_ASSISTANT_NAME: &str = "HealMate";

/// Strip surrounding whitespace and U+FEFF from a draft.
///
/// Pasted text often carries a byte-order mark, which `str::trim` keeps.
pub fn trim_draft(raw_input: &str) -> &str {
    raw_input.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub struct App {
    pub log: MessageLog,
    visibility: Visibility,
    pub assistant_name: String,
    pub status_message: String,
}

impl App {
    pub fn new(assistant_name: String) -> Self {
        Self {
            log: MessageLog::new(),
            visibility: Visibility::Hidden,
            status_message: format!("Ask {assistant_name} about diet or calories"),
            assistant_name,
        }
    }

    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self::new(config.assistant_name.clone())
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Flip the panel between shown and hidden and tell the surface.
    pub fn toggle_panel(&mut self, surface: &mut dyn ChatSurface) -> Visibility {
        self.visibility = self.visibility.toggled();
        debug!("Panel visibility -> {:?}", self.visibility);
        surface.set_visibility(self.visibility);
        self.visibility
    }

    /// Record a user message and the assistant's reply.
    ///
    /// Blank input (empty, whitespace or byte-order marks only) is ignored:
    /// nothing is appended and the surface is not touched. Otherwise the
    /// surface sees, in order: the user entry, the reply entry, an input
    /// clear and a scroll to the bottom.
    pub fn submit_message(
        &mut self,
        raw_input: &str,
        surface: &mut dyn ChatSurface,
    ) -> Option<Reply> {
        let trimmed = trim_draft(raw_input);
        if trimmed.is_empty() {
            return None;
        }

        let reply = classify_reply(&trimmed.to_lowercase());
        info!(
            "Answering message #{} with '{}' reply",
            self.log.exchange_count() + 1,
            reply.label()
        );

        let (user, bot) = self
            .log
            .push_exchange(Entry::user(trimmed), Entry::bot(reply.text()));
        surface.append_entry(user);
        surface.append_entry(bot);
        surface.clear_input();
        surface.scroll_to_bottom();

        Some(reply)
    }
}
