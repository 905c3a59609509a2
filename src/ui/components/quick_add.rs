//! Inline quick-add field in the navigation bar.
//!
//! Submits its text as a bare task. While a submission is in flight the field
//! is disabled and shows a busy indicator; a success clears it and a failure
//! leaves the text in place for another try.

use super::input;
use crate::backend::TaskSink;
use crate::constants::{ERROR_QUICK_ADD_FAILED, QUICK_ADD_PLACEHOLDER};
use crate::icons::IconService;
use crate::model::{DraftError, TaskPayload};
use crate::submission::{log_error_handler, ErrorHandler, SubmitError, SubmitOrigin, SubmitResult};
use crate::ui::core::{Action, Component, FormInit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct QuickAddComponent {
    content: String,
    cursor: usize,
    focused: bool,
    submitting: bool,
    on_error: ErrorHandler,
    icons: IconService,
}

impl Default for QuickAddComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl QuickAddComponent {
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            submitting: false,
            on_error: log_error_handler(ERROR_QUICK_ADD_FAILED),
            icons: IconService::default(),
        }
    }

    /// Replace the failure reaction (the default logs the error).
    pub fn with_error_handler(mut self, on_error: ErrorHandler) -> Self {
        self.on_error = on_error;
        self
    }

    pub fn set_icons(&mut self, icons: IconService) {
        self.icons = icons;
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = input::char_count(&self.content);
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Submit is enabled iff the content is not blank and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.content.trim().is_empty()
    }

    /// Start a submission, raising the in-flight flag.
    ///
    /// Blocked attempts return an error without reaching the error handler;
    /// they correspond to a disabled submit control.
    pub fn begin_submit(&mut self) -> Result<TaskPayload, SubmitError> {
        if self.submitting {
            return Err(SubmitError::Busy);
        }
        if self.content.trim().is_empty() {
            return Err(SubmitError::Validation(DraftError::EmptyContent));
        }
        self.submitting = true;
        log::info!("Quick add: submitting '{}'", self.content);
        Ok(TaskPayload::Quick {
            content: self.content.clone(),
        })
    }

    /// Apply the outcome of the submission started by [`begin_submit`](Self::begin_submit).
    pub fn finish_submit(&mut self, result: &SubmitResult) {
        self.submitting = false;
        match result {
            Ok(task) => {
                log::info!("Quick add: created task {}", task.id);
                self.content.clear();
                self.cursor = 0;
            }
            Err(e) => (self.on_error)(e),
        }
    }

    /// Submit directly to `sink`, awaiting the result.
    pub async fn submit(&mut self, sink: &dyn TaskSink) -> SubmitResult {
        let payload = self.begin_submit()?;
        let result = sink.submit(payload).await.map_err(SubmitError::from);
        self.finish_submit(&result);
        result
    }
}

impl Component for QuickAddComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => match self.begin_submit() {
                Ok(payload) => Action::Submit {
                    origin: SubmitOrigin::QuickAdd,
                    payload,
                },
                Err(_) => Action::None,
            },
            KeyCode::Esc => {
                self.blur();
                Action::None
            }
            KeyCode::Tab => Action::OpenTaskForm(FormInit::Content(self.content.clone())),
            KeyCode::Char('o') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Action::OpenTaskForm(FormInit::Content(self.content.clone()))
            }
            _ => {
                // The field is disabled while a submission is in flight
                if !self.submitting {
                    input::handle_edit_key(&mut self.content, &mut self.cursor, key);
                }
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [field_area, button_area] = Layout::horizontal([Constraint::Min(10), Constraint::Length(14)]).areas(rect);

        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let field_text = if self.content.is_empty() && !self.focused {
            Line::from(Span::styled(QUICK_ADD_PLACEHOLDER, Style::default().fg(Color::DarkGray)))
        } else if self.focused && !self.submitting {
            Line::from(input::with_cursor(&self.content, self.cursor))
        } else {
            Line::from(self.content.as_str())
        };

        let field = Paragraph::new(field_text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Quick add ")
                .style(Style::default().fg(border_color)),
        );

        let (label, style) = if self.submitting {
            (
                format!("{} Adding", self.icons.busy()),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::DIM),
            )
        } else if self.can_submit() {
            ("Add".to_string(), Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        } else {
            ("Add".to_string(), Style::default().fg(Color::DarkGray))
        };

        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));

        f.render_widget(field, field_area);
        f.render_widget(button, button_area);
    }
}
