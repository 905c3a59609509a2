use super::common::{self, shortcuts};
use crate::constants::{DIALOG_TITLE_EDIT_TASK, DIALOG_TITLE_NEW_TASK, TASK_FORM_HEIGHT, TASK_FORM_WIDTH_PERCENT};
use crate::ui::components::input;
use crate::ui::components::task_form::{FormField, TaskFormComponent};
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
    Frame,
};

pub fn render_task_form_dialog(f: &mut Frame, area: Rect, form: &TaskFormComponent) {
    let dialog_area = LayoutManager::centered_rect_lines(TASK_FORM_WIDTH_PERCENT, TASK_FORM_HEIGHT, area);
    f.render_widget(Clear, dialog_area);

    let icons = form.icons();
    let title = if form.is_editing() {
        DIALOG_TITLE_EDIT_TASK
    } else {
        DIALOG_TITLE_NEW_TASK
    };
    let theme_color = if form.is_submitting() { Color::Yellow } else { Color::Cyan };
    let main_block = common::create_dialog_block(title, theme_color);

    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Description
            Constraint::Length(3), // Priority + Category
            Constraint::Length(3), // Estimate + Deadline
            Constraint::Length(3), // Tag input
            Constraint::Length(1), // Tag chips
            Constraint::Length(1), // Status
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let row = |area: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area)
    };
    let selectors = row(chunks[2]);
    let extras = row(chunks[3]);

    let draft = form.draft();
    let text_field = |field: FormField, text: &str| {
        let focused = form.focus() == field;
        let display = if focused && !form.is_submitting() {
            input::with_cursor(text, form.cursor())
        } else {
            text.to_string()
        };
        common::create_input_paragraph(display, field.label(), focused)
    };

    let priority = format!("{} {}", icons.priority(draft.priority), draft.priority);
    let category = format!("{} {}", icons.category(draft.category), draft.category);

    f.render_widget(main_block, dialog_area);
    f.render_widget(text_field(FormField::Content, &draft.content), chunks[0]);
    f.render_widget(text_field(FormField::Description, &draft.description), chunks[1]);
    f.render_widget(
        common::create_selection_paragraph(priority, FormField::Priority.label(), form.focus() == FormField::Priority),
        selectors[0],
    );
    f.render_widget(
        common::create_selection_paragraph(category, FormField::Category.label(), form.focus() == FormField::Category),
        selectors[1],
    );
    f.render_widget(text_field(FormField::EstimatedTime, &draft.estimated_time), extras[0]);
    f.render_widget(text_field(FormField::Deadline, &draft.deadline), extras[1]);
    f.render_widget(text_field(FormField::Tags, form.tag_input()), chunks[4]);

    let mut chips = Vec::new();
    for tag in draft.tags.iter() {
        chips.push(Span::styled(
            format!("{}{} ", icons.tag(), tag),
            Style::default().fg(Color::Magenta),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(chips)), chunks[5]);

    let status = if form.is_submitting() {
        Line::from(Span::styled(
            format!("{} Saving...", icons.busy()),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(err) = form.last_error() {
        Line::from(Span::styled(
            format!("{} {}", icons.error(), err),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(status), chunks[6]);

    let submit: common::InstructionShortcut = if form.can_submit() {
        shortcuts::CTRL_S_SAVE
    } else {
        ("Ctrl+S", Color::DarkGray, " Save")
    };
    let instructions = [
        submit,
        shortcuts::SEPARATOR,
        shortcuts::TAB_NEXT,
        shortcuts::SEPARATOR,
        ("←/→", Color::Cyan, " Change"),
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ];
    f.render_widget(common::create_instructions_paragraph(&instructions), chunks[7]);
}
