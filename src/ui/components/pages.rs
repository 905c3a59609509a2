//! Placeholder bodies for pages other than the task list.

use crate::ui::core::Route;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

fn page_text(route: Route) -> &'static str {
    match route {
        Route::Tasks => "",
        Route::Calendar => "Calendar view is not available yet.\nDeadlines are shown in the task list.",
        Route::Analytics => "Analytics are not available yet.",
        Route::About => "studyflow\nPlan study sessions, assignments and projects from the terminal.",
        Route::Contact => "Report issues or ideas through the project repository.",
    }
}

pub fn render_placeholder_page(f: &mut Frame, area: Rect, route: Route) {
    let paragraph = Paragraph::new(page_text(route))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", route.title())),
        )
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}
