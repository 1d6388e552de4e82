use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget, Wrap};

use crate::core::transcript::{Entry, Origin};
use crate::tui::component::Component;

/// Horizontal padding (per side) between the border and text content.
const CONTENT_PAD_H: u16 = 1;
/// Total horizontal space consumed by borders (1 left + 1 right) and padding.
const HORIZONTAL_OVERHEAD: u16 = 2 + CONTENT_PAD_H * 2;
/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;

/// A stateless component that renders a single log entry with origin-based styling.
///
/// `Message` is created fresh each frame by `MessageList`. The border title
/// carries the speaker label: `🧑 You` for user entries and `🤖 <name>`
/// for the assistant.
///
/// [`calculate_height`](Self::calculate_height) predicts the rendered height
/// with `textwrap` options that match `Paragraph` wrapping, so the list can
/// size its scroll canvas without rendering.
#[derive(Clone, Copy)]
pub struct Message<'a> {
    pub entry: &'a Entry,
    /// Name shown on assistant entries
    pub assistant_name: &'a str,
}

impl<'a> Message<'a> {
    pub fn new(entry: &'a Entry, assistant_name: &'a str) -> Self {
        Self {
            entry,
            assistant_name,
        }
    }

    /// Calculate the height required for an entry given a width.
    pub fn calculate_height(entry: &Entry, width: u16) -> u16 {
        let content_width = width.saturating_sub(HORIZONTAL_OVERHEAD);
        if content_width == 0 {
            // Terminal too narrow for borders + padding; still occupy a row.
            return 1;
        }

        let content = entry.text.trim();
        if content.is_empty() {
            return VERTICAL_OVERHEAD;
        }

        let options = textwrap::Options::new(content_width as usize)
            .break_words(true)
            .word_separator(textwrap::WordSeparator::AsciiSpace);

        let lines = textwrap::wrap(content, options);
        u16::try_from(lines.len().max(1))
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    pub fn label(&self) -> String {
        match self.entry.origin {
            Origin::User => "🧑 You".to_string(),
            Origin::Bot => format!("🤖 {}", self.assistant_name),
        }
    }
}

pub fn origin_style(origin: Origin) -> Style {
    match origin {
        Origin::User => Style::default().fg(Color::Green),
        Origin::Bot => Style::default().fg(Color::Blue),
    }
}

impl<'a> Widget for Message<'a> {
    fn render(self, area: Rect, buf: &mut ratatui::buffer::Buffer) {
        let style = origin_style(self.entry.origin);
        let border_style = style.add_modifier(Modifier::DIM);

        let block = Block::bordered()
            .title(self.label())
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title_style(style.add_modifier(Modifier::BOLD))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.entry.text.trim())
            .style(style)
            .wrap(Wrap { trim: true })
            .render(inner_area, buf);
    }
}

impl<'a> Component for Message<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
