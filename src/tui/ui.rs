use ratatui::Frame;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChatPanel, LandingPage, Launcher, launcher_area, panel_area};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();

    LandingPage::new(&app.assistant_name).render(frame, area);

    Launcher { panel: tui.panel }.render(frame, launcher_area(area));

    if tui.panel.is_shown() {
        let overlay = panel_area(area, tui.panel_width_percent, tui.panel_height_percent);
        ChatPanel {
            message_list: &mut tui.message_list,
            input_box: &mut tui.input_box,
            entries: app.log.entries(),
            assistant_name: &app.assistant_name,
            status_message: &app.status_message,
        }
        .render(frame, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::surface::Visibility;
    use crate::test_support::{RecordingSurface, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn screen_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_hidden_panel_shows_only_landing_and_launcher() {
        let app = test_app();
        let mut tui = TuiState::default();

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Your diabetes care companion"));
        assert!(text.contains("Chat"));
        assert!(!text.contains("Enter to send"));
    }

    #[test]
    fn test_shown_panel_renders_conversation() {
        let mut app = test_app();
        let mut tui = TuiState::default();
        tui.panel = Visibility::Shown;
        app.submit_message("What food is good?", &mut RecordingSurface::default());

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("You"));
        assert!(text.contains("What food is good?"));
        assert!(text.contains("Enter to send"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_empty_log_shows_hint() {
        let app = test_app();
        let mut tui = TuiState::default();
        tui.panel = Visibility::Shown;

        let text = screen_text(&app, &mut tui);
        assert!(text.contains("Ask me about"));
        assert!(app.log.is_empty());
    }
}
