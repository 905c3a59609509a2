use crate::constants::DIALOG_TITLE_LOGS;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const HELP_CONTENT: &str = r"
STUDYFLOW - Study Task Planner
==============================

NAVIGATION
----------
1-5         Jump to Tasks, Calendar, Analytics, About, Contact
[ / ]       Previous / next page
j/k ↑↓      Move through the task list

QUICK ADD
---------
a or /      Focus the quick-add field
Enter       Add the typed task
Tab         Open the full form with the typed text
Esc         Leave the quick-add field

TASK FORM
---------
n           New task
e           Edit selected task
Tab/↑↓      Move between fields
←/→         Change priority or category
Enter       Add tag (in Tags) or save
Backspace   Remove last tag when the tag input is empty
Ctrl+S      Save
Esc         Discard and close

GENERAL CONTROLS
----------------
r           Reload tasks
i           Change icon theme
?           Toggle help panel
G           Toggle logs
q / Ctrl+C  Quit application

HELP PANEL SCROLLING
--------------------
j/k ↑↓      Scroll down/up
PageUp/Down Page through content
Home/End    Jump to top/bottom

Press 'Esc' or '?' to close this help panel
";

/// Render the help text, returning the scroll offset actually shown
pub fn render_help_dialog(
    f: &mut Frame,
    area: Rect,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    render_scrollable_text(
        f,
        area,
        &lines,
        "📖 Help - Press 'Esc' or '?' to close",
        scroll_offset,
        scrollbar_state,
    )
}

/// Render the in-memory log, newest first, returning the scroll offset actually shown
pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let logs = logger.get_logs();
    let lines: Vec<&str> = if logs.is_empty() {
        vec!["No logs yet"]
    } else {
        logs.iter().flat_map(|entry| entry.lines()).collect()
    };

    render_scrollable_text(f, area, &lines, DIALOG_TITLE_LOGS, scroll_offset, scrollbar_state)
}

fn render_scrollable_text(
    f: &mut Frame,
    area: Rect,
    lines: &[&str],
    title: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, dialog_area);

    let margin_x = 2;
    let margin_y = 1;
    let content_area = Rect::new(
        dialog_area.x + margin_x,
        dialog_area.y + margin_y,
        dialog_area.width.saturating_sub(margin_x * 2),
        dialog_area.height.saturating_sub(margin_y * 2),
    );

    let total_lines = lines.len();
    let visible_height = content_area.height.saturating_sub(2) as usize;

    let max_scroll = total_lines.saturating_sub(visible_height);
    let clamped_offset = scroll_offset.min(max_scroll);

    *scrollbar_state = scrollbar_state
        .content_length(total_lines)
        .viewport_content_length(visible_height)
        .position(clamped_offset);

    let visible_text = lines
        .iter()
        .skip(clamped_offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_alignment(Alignment::Center),
        )
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);

    f.render_widget(paragraph, content_area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, content_area, scrollbar_state);
    }

    clamped_offset
}
