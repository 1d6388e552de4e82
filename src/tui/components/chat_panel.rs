//! # Chat Panel Component
//!
//! Overlay anchored to the bottom-right corner, just above the launcher.
//! Shows the header, the message list and the input box.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MessageListState` and `InputBox` live in `TuiState`
//! - `ChatPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType, Clear};

use crate::core::transcript::Entry;
use crate::tui::component::Component;
use crate::tui::components::chat_header::ChatHeader;
use crate::tui::components::input_box::InputBox;
use crate::tui::components::launcher::{LAUNCHER_HEIGHT, LAUNCHER_MARGIN};
use crate::tui::components::message_list::{MessageList, MessageListState};

/// Smallest panel that can still hold header, one entry and the input box.
const MIN_PANEL_WIDTH: u16 = 24;
const MIN_PANEL_HEIGHT: u16 = 10;

/// Panel rectangle for the given frame and size percentages.
pub fn panel_area(frame_area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let right_margin = LAUNCHER_MARGIN;
    // Leave the launcher row (and its margin) uncovered
    let reserved_bottom = LAUNCHER_HEIGHT + LAUNCHER_MARGIN;
    let avail_width = frame_area.width.saturating_sub(right_margin);
    let avail_height = frame_area.height.saturating_sub(reserved_bottom);

    let width = (u32::from(frame_area.width) * u32::from(width_percent) / 100) as u16;
    let height = (u32::from(frame_area.height) * u32::from(height_percent) / 100) as u16;
    let width = width.max(MIN_PANEL_WIDTH).min(avail_width);
    let height = height.max(MIN_PANEL_HEIGHT).min(avail_height);

    let x = frame_area.x + avail_width - width;
    let y = frame_area.y + avail_height - height;
    Rect::new(x, y, width, height)
}

pub struct ChatPanel<'a> {
    pub message_list: &'a mut MessageListState,
    pub input_box: &'a mut InputBox,
    pub entries: &'a [Entry],
    pub assistant_name: &'a str,
    pub status_message: &'a str,
}

impl<'a> Component for ChatPanel<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let input_height = self.input_box.calculate_height(inner.width);
        let [header_area, list_area, input_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(input_height),
        ])
        .areas(inner);

        MessageList::new(self.message_list, self.entries, self.assistant_name)
            .render(frame, list_area);

        // Header after the list so the unseen indicator reflects this frame
        ChatHeader::new(
            self.assistant_name.to_string(),
            self.status_message.to_string(),
            self.message_list.has_unseen_content,
        )
        .render(frame, header_area);

        self.input_box.render(frame, input_area);
    }
}
