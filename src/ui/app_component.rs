use crate::backend::SharedSink;
use crate::config::Config;
use crate::constants::{
    ERROR_QUICK_ADD_FAILED, ERROR_TASK_FORM_FAILED, ERROR_TASK_LIST_FAILED, SUCCESS_TASK_CREATED, SUCCESS_TASK_UPDATED,
};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::submission::{ErrorHandler, SubmitError, SubmitOrigin};
use crate::ui::components::{
    pages, DialogComponent, NavBarComponent, QuickAddComponent, StatusBar, StatusInfo, TaskFormComponent,
    TaskListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, FormInit, Route},
    event_handler::EventType,
    task_manager::TaskManager,
    Component,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl AppState {
    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

/// Latest failure reported by a component's error handler
type SharedError = Arc<Mutex<Option<String>>>;

/// Error handler that logs under `source` and surfaces the failure in the status bar.
fn status_error_handler(source: &'static str, slot: SharedError) -> ErrorHandler {
    Arc::new(move |err: &SubmitError| {
        log::error!("{}: {}", source, err);
        if let Ok(mut slot) = slot.lock() {
            *slot = Some(format!("{}: {}", source, err));
        }
    })
}

pub struct AppComponent {
    // Component composition
    nav: NavBarComponent,
    quick_add: QuickAddComponent,
    task_form: TaskFormComponent,
    task_list: TaskListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    reported_error: SharedError,
    icons: IconService,
    /// Last task load spawned, and the newest one whose result was shown
    load_generation: u64,
    applied_generation: u64,

    // Services
    sink: SharedSink,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, sink: SharedSink, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let reported_error: SharedError = Arc::new(Mutex::new(None));
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut quick_add = QuickAddComponent::new()
            .with_error_handler(status_error_handler(ERROR_QUICK_ADD_FAILED, reported_error.clone()));
        quick_add.set_icons(icons.clone());

        let mut task_form = TaskFormComponent::new()
            .with_error_handler(status_error_handler(ERROR_TASK_FORM_FAILED, reported_error.clone()));
        task_form.set_icons(icons.clone());

        let mut task_list = TaskListComponent::new();
        task_list.icons = icons.clone();
        task_list.update_display_config(config.display.clone());

        log::info!("AppComponent: using '{}' sink", sink.sink_type());

        Self {
            nav: NavBarComponent::new(config.default_route()),
            quick_add,
            task_form,
            task_list,
            dialog: DialogComponent::new(logger),
            state: AppState::default(),
            reported_error,
            icons,
            load_generation: 0,
            applied_generation: 0,
            sink,
            task_manager,
            background_action_rx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_route(&self) -> Route {
        self.nav.current
    }

    pub fn quick_add(&self) -> &QuickAddComponent {
        &self.quick_add
    }

    pub fn task_form(&self) -> &TaskFormComponent {
        &self.task_form
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_dialog_visible(&self) -> bool {
        self.dialog.is_visible()
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Load the task list on startup
    pub fn trigger_initial_load(&mut self) {
        log::info!("AppComponent: loading tasks");
        self.start_task_load();
    }

    fn start_task_load(&mut self) {
        self.load_generation += 1;
        self.task_list.loading = true;
        self.task_manager.spawn_task_load(self.sink.clone(), self.load_generation);
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                log::info!("Global key: 'q' - quitting application");
                Action::Quit
            }
            KeyCode::Char('a') | KeyCode::Char('/') => Action::FocusQuickAdd,
            KeyCode::Char('n') => Action::OpenTaskForm(FormInit::Blank),
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('r') => Action::RefreshTasks,
            _ => Action::None,
        }
    }

    /// Route a key to the component that owns input right now
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            log::info!("Global key: Ctrl+C - quitting application");
            return Action::Quit;
        }

        // Modal surfaces have priority: dialog, then the form, then the focused quick add
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }
        if self.task_form.is_open() {
            return self.task_form.handle_key_events(key);
        }
        if self.quick_add.is_focused() {
            return self.quick_add.handle_key_events(key);
        }

        if self.nav.current == Route::Tasks {
            let task_list_action = self.task_list.handle_key_events(key);
            if !matches!(task_list_action, Action::None) {
                return task_list_action;
            }
        }

        let nav_action = self.nav.handle_key_events(key);
        if !matches!(nav_action, Action::None) {
            return nav_action;
        }

        self.handle_global_key(key)
    }

    /// Handle app-level actions that require business logic
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::FocusQuickAdd => {
                self.quick_add.focus();
                Action::None
            }
            Action::Submit { origin, payload } => {
                log::info!("Submit: {} from {:?}", payload.describe(), origin);
                self.task_manager.spawn_submission(self.sink.clone(), origin, payload);
                Action::None
            }
            Action::SubmissionFinished { origin, result } => {
                match origin {
                    SubmitOrigin::QuickAdd => self.quick_add.finish_submit(&result),
                    SubmitOrigin::TaskForm { session } => {
                        self.task_form.finish_submit(session, &result);
                    }
                }
                if let Ok(task) = &result {
                    let edited = self.task_list.tasks.iter().any(|t| t.id == task.id);
                    let message = if edited { SUCCESS_TASK_UPDATED } else { SUCCESS_TASK_CREATED };
                    self.state.info_message = Some(message.to_string());
                    // The sink committed the task even if the form has since closed
                    self.start_task_load();
                }
                Action::None
            }
            Action::RefreshTasks => {
                self.start_task_load();
                Action::None
            }
            Action::TasksFetched { generation, tasks } => {
                if generation <= self.applied_generation {
                    log::debug!("Dropping stale task list #{} (showing #{})", generation, self.applied_generation);
                } else {
                    self.applied_generation = generation;
                    self.task_list.update(Action::TasksLoaded(tasks));
                }
                Action::None
            }
            Action::TasksLoadFailed(message) => {
                log::error!("{}: {}", ERROR_TASK_LIST_FAILED, message);
                self.state.error_message = Some(format!("{}: {}", ERROR_TASK_LIST_FAILED, message));
                Action::None
            }
            Action::OpenTaskForm(init) => {
                self.quick_add.blur();
                self.task_form.open(init);
                Action::None
            }
            Action::CloseTaskForm => {
                self.task_form.close();
                Action::None
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                log::info!("Icon theme: {:?}", self.icons.theme());
                self.quick_add.set_icons(self.icons.clone());
                self.task_form.set_icons(self.icons.clone());
                self.task_list.icons = self.icons.clone();
                Action::None
            }
            _ => Action::None,
        }
    }

    /// Process background actions from task manager
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();

        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received action {:?}", action);
            actions.push(action);
        }

        let completed_tasks = self.task_manager.cleanup_finished_tasks();
        for (id, description) in completed_tasks {
            log::debug!("Background: task {} finished ({})", id, description);
        }

        actions
    }

    /// Apply finished background work. Returns whether anything changed.
    pub fn drain_background(&mut self) -> bool {
        let actions = self.process_background_actions();
        let changed = !actions.is_empty();
        for action in actions {
            self.dispatch(action);
        }
        changed
    }

    /// Send an action through the component hierarchy, then the app
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);

        // Pick up failures reported through the components' error handlers
        if let Ok(mut reported) = self.reported_error.lock() {
            if let Some(message) = reported.take() {
                self.state.error_message = Some(message);
                self.state.info_message = None;
            }
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        match event_type {
            EventType::Key(key) => {
                self.state.clear_messages();
                let action = self.route_key(key);
                self.dispatch(action);
            }
            EventType::Tick => {
                self.drain_background();
            }
            EventType::Resize(_, _) | EventType::Other => {}
        }
        Ok(())
    }

    fn status_info(&self) -> StatusInfo {
        StatusInfo {
            quick_add_busy: self.quick_add.is_submitting(),
            form_busy: self.task_form.is_open() && self.task_form.is_submitting(),
            loading: self.task_list.loading,
            error_message: self.state.error_message.clone(),
            info_message: self.state.info_message.clone(),
        }
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        let action = self.dialog.update(action);
        let action = self.nav.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let areas = LayoutManager::main_layout(rect);

        self.nav.render(f, areas.tabs);
        self.quick_add.render(f, areas.quick_add);

        match self.nav.current {
            Route::Tasks => self.task_list.render(f, areas.body),
            other => pages::render_placeholder_page(f, areas.body, other),
        }

        StatusBar::render(f, areas.status, &self.status_info(), &self.icons);

        // Overlays
        self.task_form.render(f, rect);
        self.dialog.render(f, rect);
    }
}

