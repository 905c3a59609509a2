use crate::config::DisplayConfig;
use crate::constants::EMPTY_TASK_LIST;
use crate::icons::IconService;
use crate::model::{Priority, Task};
use crate::ui::core::{Action, Component, FormInit};
use crate::utils::datetime::{format_estimate, format_human_deadline, is_overdue};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

/// Committed tasks, newest first.
pub struct TaskListComponent {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub loading: bool,
    pub icons: IconService,
    pub display_config: DisplayConfig,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskListComponent {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            loading: false,
            icons: IconService::default(),
            display_config: DisplayConfig::default(),
        }
    }

    pub fn update_display_config(&mut self, display_config: DisplayConfig) {
        self.display_config = display_config;
    }

    /// Replace the list, keeping the selection on the same task when it still exists.
    pub fn update_data(&mut self, tasks: Vec<Task>) {
        let selected_id = self.get_selected_task().map(|t| t.id);
        self.tasks = tasks;
        self.loading = false;

        self.selected_index = selected_id
            .and_then(|id| self.tasks.iter().position(|t| t.id == id))
            .unwrap_or(0);
        self.update_list_state();
    }

    pub fn get_selected_task(&self) -> Option<&Task> {
        self.tasks.get(self.selected_index)
    }

    fn update_list_state(&mut self) {
        if self.tasks.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            self.selected_index = self.selected_index.min(self.tasks.len() - 1);
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn format_deadline(&self, task: &Task) -> Option<Span<'static>> {
        let deadline = task.deadline?;
        let text = if self.display_config.relative_deadlines {
            format_human_deadline(deadline)
        } else {
            deadline.format(&self.display_config.deadline_format).to_string()
        };
        let color = if is_overdue(deadline) {
            Color::Red
        } else {
            Color::Rgb(255, 165, 0) // Orange
        };
        Some(Span::styled(
            format!("{}{}", self.icons.deadline(), text),
            Style::default().fg(color),
        ))
    }

    fn create_task_item(&self, task: &Task) -> ListItem<'static> {
        let mut line_spans = Vec::new();

        let priority_color = match task.priority {
            Priority::Urgent => Color::Red,
            Priority::High => Color::Rgb(255, 165, 0),
            Priority::Medium => Color::Blue,
            Priority::Low => Color::Gray,
        };
        line_spans.push(Span::styled(
            format!("{} ", self.icons.priority(task.priority)),
            Style::default().fg(priority_color),
        ));
        line_spans.push(Span::raw(format!("{} ", self.icons.category(task.category))));
        line_spans.push(Span::styled(task.content.clone(), Style::default().fg(Color::White)));

        if let Some(deadline) = self.format_deadline(task) {
            line_spans.push(Span::raw(" "));
            line_spans.push(deadline);
        }

        if self.display_config.show_estimates {
            if let Some(minutes) = task.estimated_time {
                line_spans.push(Span::raw(" "));
                line_spans.push(Span::styled(
                    format!("{}{}", self.icons.estimate(), format_estimate(minutes)),
                    Style::default().fg(Color::Cyan),
                ));
            }
        }

        if self.display_config.show_tags {
            for tag in &task.tags {
                line_spans.push(Span::raw(" "));
                line_spans.push(Span::styled(
                    format!("{}{}", self.icons.tag(), tag),
                    Style::default().fg(Color::Magenta),
                ));
            }
        }

        let mut lines = vec![Line::from(line_spans)];
        if self.display_config.show_descriptions {
            if let Some(description) = &task.description {
                lines.push(Line::from(Span::styled(
                    format!("    {}", description),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        ListItem::new(lines)
    }
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => Action::PreviousTask,
            KeyCode::Down | KeyCode::Char('j') => Action::NextTask,
            KeyCode::Enter | KeyCode::Char('e') => match self.get_selected_task() {
                Some(task) => Action::OpenTaskForm(FormInit::Edit(task.clone())),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = (self.selected_index + 1) % self.tasks.len();
                    self.update_list_state();
                }
                Action::None
            }
            Action::PreviousTask => {
                if !self.tasks.is_empty() {
                    self.selected_index = if self.selected_index == 0 {
                        self.tasks.len() - 1
                    } else {
                        self.selected_index - 1
                    };
                    self.update_list_state();
                }
                Action::None
            }
            Action::TasksLoaded(tasks) => {
                self.update_data(tasks);
                Action::None
            }
            Action::TasksLoadFailed(_) => {
                self.loading = false;
                action
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = format!(" Tasks ({}) ", self.tasks.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(title);

        if self.tasks.is_empty() {
            let message = if self.loading {
                format!("{} Loading tasks...", self.icons.busy())
            } else {
                EMPTY_TASK_LIST.to_string()
            };
            let empty_list = List::new(vec![ListItem::new(message)]).block(block);
            f.render_widget(empty_list, rect);
        } else {
            let items: Vec<ListItem> = self.tasks.iter().map(|t| self.create_task_item(t)).collect();
            let tasks_list = List::new(items).block(block).highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            );

            f.render_stateful_widget(tasks_list, rect, &mut self.list_state);
        }
    }
}
