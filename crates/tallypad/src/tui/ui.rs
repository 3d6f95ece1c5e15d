//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::KeypadWidget;

/// Keyboard shortcuts shown in the help sidebar
const HELP_SHORTCUTS: &[(&str, &str)] = &[
    ("0-9", "digits"),
    (".", "decimal point"),
    ("+-*/", "operators"),
    ("=", "evaluate"),
    ("n", "negate"),
    ("Bksp", "delete"),
    ("e", "clear entry"),
    ("c", "clear all"),
    ("q/Esc", "quit"),
];

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    let ui = CalculatorUI::new(app);
    frame.render_widget(ui, area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    /// Creates the main horizontal layout (display column + keypad + help)
    fn create_horizontal_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Horizontal)
            .margin(1)
            .constraints([
                Constraint::Min(30),    // Display column
                Constraint::Length(22), // Keypad
                Constraint::Length(24), // Help sidebar
            ])
            .split(area)
            .to_vec()
    }

    /// Creates the display column layout
    fn create_display_layout(area: Rect) -> Vec<Rect> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Pending operation
                Constraint::Length(3), // Display
                Constraint::Min(0),    // Filler
            ])
            .split(area)
            .to_vec()
    }

    /// Returns the keypad area within the full frame, for mouse hit-testing
    #[must_use]
    pub fn keypad_area(area: Rect) -> Rect {
        Self::create_horizontal_layout(area)[1]
    }

    fn render_pending(&self, area: Rect, buf: &mut Buffer) {
        let pending = Paragraph::new(Span::styled(
            self.app.pending(),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Pending ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        pending.render(area, buf);
    }

    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let display = Paragraph::new(Span::styled(
            self.app.display(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .title(" Display ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        display.render(area, buf);
    }

    fn render_help_sidebar(area: Rect, buf: &mut Buffer) {
        let shortcuts: Vec<ListItem> = HELP_SHORTCUTS
            .iter()
            .map(|(key, desc)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{key:>7}"), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(*desc, Style::default().fg(Color::Gray)),
                ]))
            })
            .collect();

        let shortcuts_list = List::new(shortcuts).block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        shortcuts_list.render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let columns = Self::create_horizontal_layout(area);
        let display_chunks = Self::create_display_layout(columns[0]);

        self.render_pending(display_chunks[0], buf);
        self.render_display(display_chunks[1], buf);
        KeypadWidget::new(self.app.keypad()).render(columns[1], buf);
        Self::render_help_sidebar(columns[2], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;
    use crate::tui::keypad::ButtonAction;

    fn render_to_string(app: &CalculatorApp, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        CalculatorUI::new(app).render(area, &mut buf);
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_render_initial_state() {
        let app = CalculatorApp::new();
        let content = render_to_string(&app, 90, 16);
        assert!(content.contains("Display"));
        assert!(content.contains("Keypad"));
        assert!(content.contains("Help"));
        assert!(content.contains('0'));
    }

    #[test]
    fn test_render_shows_input() {
        let mut app = CalculatorApp::new();
        app.dispatch(ButtonAction::Digit(4));
        app.dispatch(ButtonAction::Digit(2));
        let content = render_to_string(&app, 90, 16);
        assert!(content.contains("42"));
    }

    #[test]
    fn test_render_shows_pending_operation() {
        let mut app = CalculatorApp::new();
        app.dispatch(ButtonAction::Digit(5));
        app.dispatch(ButtonAction::Operator(Operator::Add));
        let content = render_to_string(&app, 90, 16);
        assert!(content.contains("5 +"));
    }

    #[test]
    fn test_render_small_area_does_not_panic() {
        let app = CalculatorApp::new();
        let _ = render_to_string(&app, 10, 4);
    }

    #[test]
    fn test_keypad_area_within_frame() {
        let frame = Rect::new(0, 0, 90, 16);
        let keypad = CalculatorUI::keypad_area(frame);
        assert!(keypad.width > 0);
        assert!(keypad.x > 0);
        assert!(keypad.x + keypad.width <= frame.width);
    }
}
