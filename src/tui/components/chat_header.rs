//! # ChatHeader Component
//!
//! One-line bar at the top of the chat panel.
//!
//! Stateless: everything arrives as props.
//!
//! - `assistant_name`: core App state (configuration)
//! - `status_message`: core App state (last action)
//! - `has_unseen_content`: TUI state (scroll position indicator)
//!
//! The text degrades in priority order so the name survives narrow panels:
//!
//! 1. `"🤖 HealMate | Answered: diet | ↓ New"`
//! 2. `"🤖 HealMate | Answered: diet"`
//! 3. `"🤖 HealMate"`
//!
//! and is finally cut to the panel width with an ellipsis.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::tui::component::Component;

pub struct ChatHeader {
    pub assistant_name: String,
    pub status_message: String,
    pub has_unseen_content: bool,
}

impl ChatHeader {
    pub fn new(assistant_name: String, status_message: String, has_unseen_content: bool) -> Self {
        Self {
            assistant_name,
            status_message,
            has_unseen_content,
        }
    }

    /// Header text for a given width.
    pub fn text(&self, width: u16) -> String {
        let name = format!("🤖 {}", self.assistant_name);
        let mut candidates = Vec::with_capacity(3);
        if !self.status_message.is_empty() {
            if self.has_unseen_content {
                candidates.push(format!("{name} | {} | ↓ New", self.status_message));
            }
            candidates.push(format!("{name} | {}", self.status_message));
        } else if self.has_unseen_content {
            candidates.push(format!("{name} | ↓ New"));
        }

        candidates
            .into_iter()
            .find(|text| text.width() <= width as usize)
            .unwrap_or_else(|| truncate_to_width(&name, width as usize))
    }
}

/// Cut `s` to at most `max_width` display columns, ending with "…" if shortened.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

impl Component for ChatHeader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);
        let text = format!("{:<width$}", self.text(area.width), width = area.width as usize);
        frame.render_widget(Span::styled(text, style), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn header(status: &str, unseen: bool) -> ChatHeader {
        ChatHeader::new("HealMate".to_string(), status.to_string(), unseen)
    }

    #[test]
    fn test_full_text_when_wide() {
        assert_eq!(
            header("Answered: diet", true).text(80),
            "🤖 HealMate | Answered: diet | ↓ New"
        );
    }

    #[test]
    fn test_status_without_unseen() {
        assert_eq!(header("Answered: diet", false).text(80), "🤖 HealMate | Answered: diet");
    }

    #[test]
    fn test_empty_status() {
        assert_eq!(header("", false).text(80), "🤖 HealMate");
        assert_eq!(header("", true).text(80), "🤖 HealMate | ↓ New");
    }

    #[test]
    fn test_drops_indicator_before_status() {
        let h = header("Answered: diet", true);
        let without_indicator = "🤖 HealMate | Answered: diet";
        let width = without_indicator.width() as u16;
        assert_eq!(h.text(width), without_indicator);
    }

    #[test]
    fn test_truncates_name_when_tiny() {
        let text = header("Answered: diet", false).text(6);
        assert!(text.width() <= 6);
        assert!(text.ends_with('…'));
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abcdef", 4), "abc…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn test_render_fills_line() {
        let backend = TestBackend::new(50, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut h = header("Chatting with HealMate", false);

        terminal.draw(|f| h.render(f, f.area())).unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("HealMate"));
        assert!(text.contains("Chatting with"));
    }
}
