//! Modal task form for creating and editing tasks.
//!
//! The form owns a [`DraftTask`] while open. Every keystroke edits the draft
//! directly; nothing reaches the sink until a submission normalizes the draft
//! into a [`TaskPayload`]. Closing the form discards the draft.

use super::dialogs::task_form_dialog;
use super::input;
use crate::backend::TaskSink;
use crate::constants::ERROR_TASK_FORM_FAILED;
use crate::icons::IconService;
use crate::model::{Category, DraftError, DraftTask, Priority, TaskPayload};
use crate::submission::{log_error_handler, ErrorHandler, SubmitError, SubmitOrigin, SubmitResult};
use crate::ui::core::{Action, Component, FormInit};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use uuid::Uuid;

/// Lifecycle of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    OpenCreate,
    OpenEdit {
        id: Uuid,
    },
}

/// Fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Content,
    Description,
    Priority,
    Category,
    EstimatedTime,
    Deadline,
    Tags,
}

impl FormField {
    pub const ALL: [FormField; 7] = [
        FormField::Content,
        FormField::Description,
        FormField::Priority,
        FormField::Category,
        FormField::EstimatedTime,
        FormField::Deadline,
        FormField::Tags,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Content => "Title",
            FormField::Description => "Description",
            FormField::Priority => "Priority",
            FormField::Category => "Category",
            FormField::EstimatedTime => "Estimated time (min)",
            FormField::Deadline => "Deadline (YYYY-MM-DDTHH:MM)",
            FormField::Tags => "Tags",
        }
    }

    /// Selector fields are cycled rather than typed into
    pub fn is_selector(&self) -> bool {
        matches!(self, FormField::Priority | FormField::Category)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct TaskFormComponent {
    state: FormState,
    draft: DraftTask,
    tag_input: String,
    focus: FormField,
    cursor: usize,
    /// One submission per form instance; survives close and reopen
    submitting: bool,
    /// Incremented on every open; completions from older sessions only lower the in-flight flag
    session: u64,
    last_error: Option<SubmitError>,
    on_error: ErrorHandler,
    icons: IconService,
}

impl Default for TaskFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskFormComponent {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
            draft: DraftTask::default(),
            tag_input: String::new(),
            focus: FormField::Content,
            cursor: 0,
            submitting: false,
            session: 0,
            last_error: None,
            on_error: log_error_handler(ERROR_TASK_FORM_FAILED),
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

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    // Lifecycle

    /// Open the form, resetting the draft or pre-filling it from `init`.
    pub fn open(&mut self, init: FormInit) {
        let (state, draft) = match init {
            FormInit::Blank => (FormState::OpenCreate, DraftTask::default()),
            FormInit::Content(content) => (FormState::OpenCreate, DraftTask::with_content(&content)),
            FormInit::Edit(task) => (FormState::OpenEdit { id: task.id }, DraftTask::from_task(&task)),
        };

        self.session += 1;
        self.state = state;
        self.draft = draft;
        self.tag_input.clear();
        self.last_error = None;
        self.focus = FormField::Content;
        self.cursor = input::char_count(&self.draft.content);
        log::info!("Task form: opened ({:?}, session {})", self.state, self.session);
    }

    /// Close the form and discard the draft.
    ///
    /// A submission still in flight is not cancelled. Until it completes the
    /// form refuses new submissions, even after reopening.
    pub fn close(&mut self) {
        if self.state != FormState::Closed {
            log::info!("Task form: closed (session {})", self.session);
        }
        self.state = FormState::Closed;
        self.draft = DraftTask::default();
        self.tag_input.clear();
        self.focus = FormField::Content;
        self.cursor = 0;
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state != FormState::Closed
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, FormState::OpenEdit { .. })
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn draft(&self) -> &DraftTask {
        &self.draft
    }

    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Most recent failure reported by this form, cleared on open
    pub fn last_error(&self) -> Option<&SubmitError> {
        self.last_error.as_ref()
    }

    // Field setters

    pub fn set_content(&mut self, content: &str) {
        self.draft.content = content.to_string();
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.description = description.to_string();
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.draft.priority = priority;
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    /// Only digits are kept; the value is coerced to minutes on submit.
    pub fn set_estimated_time(&mut self, estimated_time: &str) {
        self.draft.estimated_time = estimated_time.chars().filter(char::is_ascii_digit).collect();
    }

    pub fn set_deadline(&mut self, deadline: &str) {
        self.draft.deadline = deadline.to_string();
    }

    pub fn set_tag_input(&mut self, tag: &str) {
        self.tag_input = tag.to_string();
    }

    /// Add the pending tag input to the draft.
    ///
    /// The input is trimmed; empty or duplicate tags are rejected. The input
    /// is cleared either way. Returns whether a tag was added.
    pub fn add_tag(&mut self) -> bool {
        let added = self.draft.tags.insert(&self.tag_input);
        self.tag_input.clear();
        if self.focus == FormField::Tags {
            self.cursor = 0;
        }
        added
    }

    /// Remove a tag by exact match.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.draft.tags.remove(tag)
    }

    pub fn set_focus(&mut self, field: FormField) {
        self.focus = field;
        self.cursor = self.focused_text().map(input::char_count).unwrap_or(0);
    }

    // Submission

    /// Submit is enabled iff the form is open, the content is not blank and
    /// nothing is in flight.
    pub fn can_submit(&self) -> bool {
        self.is_open() && !self.submitting && self.draft.has_content()
    }

    /// Normalize the draft and raise the in-flight flag.
    ///
    /// Blocked attempts (closed, busy, blank content) return an error without
    /// reaching the error handler. A draft that fails validation is reported
    /// to the handler and nothing is sent.
    pub fn begin_submit(&mut self) -> Result<TaskPayload, SubmitError> {
        if !self.is_open() {
            return Err(SubmitError::Closed);
        }
        if self.submitting {
            return Err(SubmitError::Busy);
        }
        if !self.draft.has_content() {
            return Err(SubmitError::Validation(DraftError::EmptyContent));
        }

        let task = match self.draft.normalize() {
            Ok(task) => task,
            Err(e) => {
                let err = SubmitError::Validation(e);
                self.report(err.clone());
                return Err(err);
            }
        };

        self.submitting = true;
        self.last_error = None;
        let payload = match self.state {
            FormState::OpenEdit { id } => TaskPayload::Update { id, task },
            _ => TaskPayload::Create { task },
        };
        log::info!("Task form: submitting {}", payload.describe());
        Ok(payload)
    }

    /// Apply the outcome of a submission from `session`.
    ///
    /// Success closes the form. Failure keeps it open with the draft intact.
    /// A result from an earlier session only clears the in-flight flag and
    /// returns `false`.
    pub fn finish_submit(&mut self, session: u64, result: &SubmitResult) -> bool {
        self.submitting = false;
        if session != self.session || !self.is_open() {
            log::info!("Task form: ignoring result for stale session {}", session);
            return false;
        }

        match result {
            Ok(task) => {
                log::info!("Task form: saved task {}", task.id);
                self.close();
            }
            Err(e) => self.report(e.clone()),
        }
        true
    }

    /// Submit directly to `sink`, awaiting the result.
    pub async fn submit(&mut self, sink: &dyn TaskSink) -> SubmitResult {
        let payload = self.begin_submit()?;
        let session = self.session;
        let result = sink.submit(payload).await.map_err(SubmitError::from);
        self.finish_submit(session, &result);
        result
    }

    fn report(&mut self, err: SubmitError) {
        (self.on_error)(&err);
        self.last_error = Some(err);
    }

    fn submit_action(&mut self) -> Action {
        match self.begin_submit() {
            Ok(payload) => Action::Submit {
                origin: SubmitOrigin::TaskForm { session: self.session },
                payload,
            },
            Err(_) => Action::None,
        }
    }

    // Editing

    fn focused_text(&self) -> Option<&str> {
        match self.focus {
            FormField::Content => Some(&self.draft.content),
            FormField::Description => Some(&self.draft.description),
            FormField::EstimatedTime => Some(&self.draft.estimated_time),
            FormField::Deadline => Some(&self.draft.deadline),
            FormField::Tags => Some(&self.tag_input),
            FormField::Priority | FormField::Category => None,
        }
    }

    fn edit_focused(&mut self, key: KeyEvent) {
        let text = match self.focus {
            FormField::Content => &mut self.draft.content,
            FormField::Description => &mut self.draft.description,
            FormField::EstimatedTime => {
                if let KeyCode::Char(c) = key.code {
                    if !c.is_ascii_digit() {
                        return;
                    }
                }
                &mut self.draft.estimated_time
            }
            FormField::Deadline => &mut self.draft.deadline,
            FormField::Tags => &mut self.tag_input,
            FormField::Priority | FormField::Category => return,
        };
        input::handle_edit_key(text, &mut self.cursor, key);
    }

    fn cycle_selector(&mut self, forward: bool) {
        match (self.focus, forward) {
            (FormField::Priority, true) => self.draft.priority = self.draft.priority.next(),
            (FormField::Priority, false) => self.draft.priority = self.draft.priority.previous(),
            (FormField::Category, true) => self.draft.category = self.draft.category.next(),
            (FormField::Category, false) => self.draft.category = self.draft.category.previous(),
            _ => {}
        }
    }
}

impl Component for TaskFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_open() {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.close();
                Action::CloseTaskForm
            }
            KeyCode::Char('s') if ctrl => self.submit_action(),
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus.next());
                Action::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus.previous());
                Action::None
            }
            KeyCode::Enter if self.focus == FormField::Tags && !self.tag_input.is_empty() => {
                self.add_tag();
                Action::None
            }
            KeyCode::Enter => self.submit_action(),
            KeyCode::Backspace if self.focus == FormField::Tags && self.tag_input.is_empty() => {
                if let Some(tag) = self.draft.tags.pop() {
                    log::info!("Task form: removed tag '{}'", tag);
                }
                Action::None
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') if self.focus.is_selector() => {
                self.cycle_selector(key.code != KeyCode::Left);
                Action::None
            }
            _ => {
                self.edit_focused(key);
                Action::None
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.is_open() {
            task_form_dialog::render_task_form_dialog(f, rect, self);
        }
    }
}
