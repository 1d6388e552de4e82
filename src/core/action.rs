//! # Actions
//!
//! Everything the user can do in HealMate becomes an `Action`.
//! Ctrl+T? That's `Action::TogglePanel`. Enter in the input box? That's
//! `Action::SubmitMessage`.
//!
//! `update()` applies an action to the [`App`] and reports what the event
//! loop should do next as an [`Effect`]. Display changes go through the
//! surface passed in, so the same reducer drives the terminal and the tests.
//!
//! ```text
//! App + Action + Surface  →  update()  →  Effect
//! ```

use log::debug;

use crate::core::state::App;
use crate::core::surface::{ChatSurface, InputSource};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the chat panel if hidden, hide it if shown.
    TogglePanel,
    /// Consume the surface's current draft as a message.
    SubmitMessage,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update<S>(app: &mut App, action: Action, surface: &mut S) -> Effect
where
    S: InputSource + ChatSurface,
{
    debug!("update: {:?}", action);
    match action {
        Action::TogglePanel => {
            let visibility = app.toggle_panel(surface);
            app.status_message = if visibility.is_shown() {
                format!("Chatting with {}", app.assistant_name)
            } else {
                String::from("Press Ctrl+T to chat")
            };
            Effect::None
        }
        Action::SubmitMessage => {
            let raw = surface.input_value();
            if let Some(reply) = app.submit_message(&raw, surface) {
                app.status_message = format!("Answered: {}", reply.label());
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
