//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the landing
//! page, launcher and chat panel, and translates keyboard and mouse events
//! into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm. The core
//! talks to it through the `InputSource` and `ChatSurface` traits, both
//! implemented by [`TuiState`].
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 500ms waiting for input and
//! only redraws after an event (including terminal resize) or when the core
//! appended entries.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

pub mod component;
pub mod components;
pub mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::surface::{ChatSurface, InputSource, Visibility};
use crate::core::transcript::Entry;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, MessageListState, hit_test_launcher};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    // Persistent component states
    pub message_list: MessageListState,
    pub input_box: InputBox,
    /// Mirror of the core's panel visibility, updated through `ChatSurface`
    pub panel: Visibility,
    pub panel_width_percent: u16,
    pub panel_height_percent: u16,
    /// Set when the core changed something that must be drawn
    pub needs_redraw: bool,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new(&ResolvedConfig::default())
    }
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            message_list: MessageListState::new(),
            input_box: InputBox::new(),
            panel: Visibility::Hidden,
            panel_width_percent: config.panel_width_percent,
            panel_height_percent: config.panel_height_percent,
            needs_redraw: true, // Force first frame
        }
    }
}

impl InputSource for TuiState {
    fn input_value(&self) -> String {
        self.input_box.buffer().to_string()
    }
}

impl ChatSurface for TuiState {
    fn append_entry(&mut self, entry: &Entry) {
        // The list renders straight from the log; a redraw picks it up
        debug!("Appending {} entry ({} bytes)", entry.origin.as_str(), entry.text.len());
        self.needs_redraw = true;
    }

    fn clear_input(&mut self) {
        self.input_box.clear();
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        self.panel = visibility;
        self.input_box.focused = visibility.is_shown();
        self.needs_redraw = true;
    }

    fn scroll_to_bottom(&mut self) {
        self.message_list.scroll_to_bottom();
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Keyboard enhancement is ignored by terminals that lack it
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!(
            "Terminal modes enabled (mouse, bracketed paste, steady block cursor, keyboard enhancement)"
        );
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// Route one event to the core or to a component.
///
/// `frame_area` is the full terminal area, used to hit-test the launcher.
pub fn dispatch(app: &mut App, tui: &mut TuiState, event: TuiEvent, frame_area: Rect) -> Effect {
    let shown = app.visibility().is_shown();

    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => Effect::None,
        TuiEvent::ForceQuit => update(app, Action::Quit, tui),
        TuiEvent::TogglePanel => update(app, Action::TogglePanel, tui),
        TuiEvent::MouseClick(column, row) => {
            if hit_test_launcher(column, row, frame_area) {
                update(app, Action::TogglePanel, tui)
            } else {
                Effect::None
            }
        }
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToBottom => {
            if shown {
                tui.message_list.handle_event(&event);
            }
            Effect::None
        }
        TuiEvent::Escape if shown => update(app, Action::TogglePanel, tui),
        _ if shown => match tui.input_box.handle_event(&event) {
            Some(InputEvent::Submit) => update(app, Action::SubmitMessage, tui),
            Some(InputEvent::ContentChanged) | None => Effect::None,
        },
        // Panel hidden: only a few keys mean anything
        TuiEvent::Escape | TuiEvent::InputChar('q') => update(app, Action::Quit, tui),
        TuiEvent::Submit => update(app, Action::TogglePanel, tui),
        _ => Effect::None,
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Failed to enable terminal modes: {}", e))
        .ok();

    let result = (|| -> std::io::Result<()> {
        loop {
            if tui.needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
                tui.needs_redraw = false;
            }

            let first_event = poll_event_timeout(IDLE_POLL)?;
            if first_event.is_some() {
                tui.needs_redraw = true;
            }

            // Process first event + drain all pending events before next draw
            let frame_area: Rect = terminal.get_frame().area();
            for event in first_event
                .into_iter()
                .chain(std::iter::from_fn(poll_event_immediate))
            {
                if dispatch(&mut app, &mut tui, event, frame_area) == Effect::Quit {
                    info!("Quitting after {} exchanges", app.log.exchange_count());
                    return Ok(());
                }
            }
        }
    })();

    drop(guard);
    ratatui::restore();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transcript::Origin;
    use crate::test_support::test_app;

    fn frame() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn send(app: &mut App, tui: &mut TuiState, events: &[TuiEvent]) -> Vec<Effect> {
        events
            .iter()
            .cloned()
            .map(|event| dispatch(app, tui, event, frame()))
            .collect()
    }

    fn type_str(app: &mut App, tui: &mut TuiState, text: &str) {
        for c in text.chars() {
            dispatch(app, tui, TuiEvent::InputChar(c), frame());
        }
    }

    #[test]
    fn test_ctrl_t_opens_and_closes_panel() {
        let mut app = test_app();
        let mut tui = TuiState::default();

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        assert_eq!(app.visibility(), Visibility::Shown);
        assert_eq!(tui.panel, Visibility::Shown);

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        assert_eq!(app.visibility(), Visibility::Hidden);
        assert_eq!(tui.panel, Visibility::Hidden);
    }

    #[test]
    fn test_focus_follows_visibility() {
        let mut app = test_app();
        let mut tui = TuiState::default();

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        assert!(tui.input_box.focused);

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        assert!(!tui.input_box.focused);
    }

    #[test]
    fn test_appended_entries_request_redraw() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        type_str(&mut app, &mut tui, "diet");
        tui.needs_redraw = false;

        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(tui.needs_redraw);
    }

    #[test]
    fn test_launcher_click_toggles() {
        let mut app = test_app();
        let mut tui = TuiState::default();

        send(&mut app, &mut tui, &[TuiEvent::MouseClick(70, 21)]);
        assert_eq!(tui.panel, Visibility::Shown);

        send(&mut app, &mut tui, &[TuiEvent::MouseClick(5, 5)]);
        assert_eq!(tui.panel, Visibility::Shown);
    }

    #[test]
    fn test_typing_and_enter_records_exchange() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);

        type_str(&mut app, &mut tui, "How many calories?");
        assert_eq!(tui.input_box.buffer(), "How many calories?");

        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        let entries = app.log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].origin, Origin::User);
        assert_eq!(entries[0].text, "How many calories?");
        assert_eq!(entries[1].origin, Origin::Bot);
        assert!(tui.input_box.buffer().is_empty());
        assert!(tui.message_list.stick_to_bottom);
        assert_eq!(app.status_message, "Answered: calories");
    }

    #[test]
    fn test_blank_enter_keeps_draft_and_log() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        type_str(&mut app, &mut tui, "   ");

        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert!(app.log.is_empty());
        assert_eq!(tui.input_box.buffer(), "   ");
    }

    #[test]
    fn test_escape_hides_then_quits() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);

        let effects = send(&mut app, &mut tui, &[TuiEvent::Escape, TuiEvent::Escape]);
        assert_eq!(effects, vec![Effect::None, Effect::Quit]);
        assert_eq!(app.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_q_types_when_shown_and_quits_when_hidden() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);

        let effects = send(&mut app, &mut tui, &[TuiEvent::InputChar('q')]);
        assert_eq!(effects, vec![Effect::None]);
        assert_eq!(tui.input_box.buffer(), "q");

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        let effects = send(&mut app, &mut tui, &[TuiEvent::InputChar('q')]);
        assert_eq!(effects, vec![Effect::Quit]);
    }

    #[test]
    fn test_force_quit_in_any_state() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]), vec![Effect::Quit]);

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        assert_eq!(send(&mut app, &mut tui, &[TuiEvent::ForceQuit]), vec![Effect::Quit]);
    }

    #[test]
    fn test_enter_while_hidden_opens_panel() {
        let mut app = test_app();
        let mut tui = TuiState::default();

        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        assert_eq!(app.visibility(), Visibility::Shown);
        assert!(app.log.is_empty());
    }

    #[test]
    fn test_typing_while_hidden_is_ignored() {
        let mut app = test_app();
        let mut tui = TuiState::default();

        type_str(&mut app, &mut tui, "diet");
        assert!(tui.input_box.buffer().is_empty());
        assert_eq!(app.visibility(), Visibility::Hidden);
    }

    #[test]
    fn test_hidden_panel_keeps_log_and_draft() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        send(&mut app, &mut tui, &[TuiEvent::TogglePanel]);
        type_str(&mut app, &mut tui, "diet");
        send(&mut app, &mut tui, &[TuiEvent::Submit]);
        type_str(&mut app, &mut tui, "draft");

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel, TuiEvent::TogglePanel]);
        assert_eq!(app.log.len(), 2);
        assert_eq!(tui.input_box.buffer(), "draft");
    }

    #[test]
    fn test_scroll_up_unpins_only_when_shown() {
        let mut app = test_app();
        let mut tui = TuiState::default();

        send(&mut app, &mut tui, &[TuiEvent::ScrollUp]);
        assert!(tui.message_list.stick_to_bottom);

        send(&mut app, &mut tui, &[TuiEvent::TogglePanel, TuiEvent::ScrollUp]);
        assert!(!tui.message_list.stick_to_bottom);

        send(&mut app, &mut tui, &[TuiEvent::ScrollToBottom]);
        assert!(tui.message_list.stick_to_bottom);
    }
}
