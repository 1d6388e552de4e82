//! # Landing Page Component
//!
//! The home screen drawn behind the chat panel.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub struct LandingPage<'a> {
    pub assistant_name: &'a str,
}

impl<'a> LandingPage<'a> {
    pub fn new(assistant_name: &'a str) -> Self {
        Self { assistant_name }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let dim = Style::default().fg(Color::DarkGray);
        vec![
            Line::from(Span::styled(
                self.assistant_name.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Your diabetes care companion", dim)),
            Line::from(Span::styled(format!("v{}", env!("CARGO_PKG_VERSION")), dim)),
            Line::from(""),
            Line::from(vec![
                Span::styled("Ctrl+T", Style::default().fg(Color::Cyan)),
                Span::styled(" or click ", dim),
                Span::styled("💬 Chat", Style::default().fg(Color::Cyan)),
                Span::styled(" to open the assistant", dim),
            ]),
            Line::from(vec![
                Span::styled("q", Style::default().fg(Color::Cyan)),
                Span::styled(" / ", dim),
                Span::styled("Esc", Style::default().fg(Color::Cyan)),
                Span::styled(" to quit", dim),
            ]),
        ]
    }
}

impl<'a> Component for LandingPage<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = self.lines();
        let [text_area] = Layout::vertical([Constraint::Length(lines.len() as u16)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_landing_shows_name_and_hint() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| LandingPage::new("HealMate").render(f, f.area()))
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("HealMate"));
        assert!(text.contains("Ctrl+T"));
    }
}
