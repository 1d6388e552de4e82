//! # Launcher Button
//!
//! The floating button in the bottom-right corner that opens and closes the
//! chat panel. Clicking it (or pressing Ctrl+T) dispatches the same toggle.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::surface::Visibility;
use crate::tui::component::Component;

pub const LAUNCHER_WIDTH: u16 = 16;
pub const LAUNCHER_HEIGHT: u16 = 3;
/// Gap between the launcher and the right/bottom edges
pub const LAUNCHER_MARGIN: u16 = 1;

/// Where the launcher sits within the full frame.
pub fn launcher_area(frame_area: Rect) -> Rect {
    let width = LAUNCHER_WIDTH.min(frame_area.width);
    let height = LAUNCHER_HEIGHT.min(frame_area.height);
    let x = (frame_area.x + frame_area.width)
        .saturating_sub(width + LAUNCHER_MARGIN)
        .max(frame_area.x);
    let y = (frame_area.y + frame_area.height)
        .saturating_sub(height + LAUNCHER_MARGIN)
        .max(frame_area.y);
    Rect::new(x, y, width, height)
}

/// Whether a click at (`column`, `row`) lands on the launcher.
pub fn hit_test_launcher(column: u16, row: u16, frame_area: Rect) -> bool {
    launcher_area(frame_area).contains(Position::new(column, row))
}

pub struct Launcher {
    pub panel: Visibility,
}

impl Launcher {
    pub fn label(&self) -> &'static str {
        match self.panel {
            Visibility::Hidden => "💬 Chat",
            Visibility::Shown => "✖ Close",
        }
    }
}

impl Component for Launcher {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = match self.panel {
            Visibility::Hidden => Style::default().fg(Color::White).bg(Color::Blue),
            Visibility::Shown => Style::default().fg(Color::Gray),
        };

        let button = Paragraph::new(self.label())
            .alignment(Alignment::Center)
            .style(style.add_modifier(Modifier::BOLD))
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(button, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_launcher_anchored_bottom_right() {
        let frame = Rect::new(0, 0, 80, 24);
        let area = launcher_area(frame);
        assert_eq!(area, Rect::new(80 - 16 - 1, 24 - 3 - 1, 16, 3));
    }

    #[test]
    fn test_launcher_fits_tiny_frame() {
        let frame = Rect::new(0, 0, 10, 2);
        let area = launcher_area(frame);
        assert!(area.width <= 10 && area.height <= 2);
        assert_eq!(area.x, 0);
        assert_eq!(area.y, 0);
    }

    #[test]
    fn test_hit_test() {
        let frame = Rect::new(0, 0, 80, 24);
        assert!(hit_test_launcher(70, 21, frame));
        assert!(!hit_test_launcher(10, 5, frame));
        assert!(!hit_test_launcher(79, 23, frame)); // margin
    }

    #[test]
    fn test_label_follows_panel() {
        assert_eq!(Launcher { panel: Visibility::Hidden }.label(), "💬 Chat");
        assert_eq!(Launcher { panel: Visibility::Shown }.label(), "✖ Close");
    }
}
