//! Status bar component

use crate::icons::IconService;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// What the status bar reflects this frame
#[derive(Debug, Default, Clone)]
pub struct StatusInfo {
    pub quick_add_busy: bool,
    pub form_busy: bool,
    pub loading: bool,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, status: &StatusInfo, icons: &IconService) {
        let status_text = if status.quick_add_busy {
            format!("{} Adding task...", icons.busy())
        } else if status.form_busy {
            format!("{} Saving task...", icons.busy())
        } else if status.loading {
            format!("{} Loading tasks...", icons.busy())
        } else if let Some(error) = &status.error_message {
            format!("{} {}", icons.error(), error)
        } else if let Some(info) = &status.info_message {
            info.clone()
        } else {
            "a: quick add • n: new • e: edit • r: reload • ?: help • q: quit".to_string()
        };

        let status_color = if status.quick_add_busy || status.form_busy || status.loading {
            Color::Yellow
        } else if status.error_message.is_some() {
            Color::Red
        } else if status.info_message.is_some() {
            Color::Green
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
