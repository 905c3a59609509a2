use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use studyflow::backend::{MemoryBackend, SharedSink, TaskSink};
use studyflow::config::Config;
use studyflow::constants::{SUCCESS_TASK_CREATED, SUCCESS_TASK_UPDATED};
use studyflow::logger::Logger;
use studyflow::ui::app_component::{AppComponent, AppState};
use studyflow::model::Task;
use studyflow::ui::core::{Action, EventType, Route};
use uuid::Uuid;

fn app_with(backend: &MemoryBackend) -> AppComponent {
    let sink: SharedSink = Arc::new(backend.clone());
    AppComponent::new(&Config::default(), sink, Logger::new())
}

fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .unwrap();
}

fn press_ctrl(app: &mut AppComponent, c: char) {
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)))
        .unwrap();
}

fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Let background work finish and apply its results
async fn settle(app: &mut AppComponent) {
    for _ in 0..500 {
        tokio::time::sleep(Duration::from_millis(2)).await;
        app.drain_background();
        if app.active_task_count() == 0 {
            return;
        }
    }
    panic!("background work did not finish");
}

#[test]
fn test_app_state_default() {
    let state = AppState::default();
    assert!(state.error_message.is_none(), "Default AppState should have no error message");
    assert!(state.info_message.is_none());
}

#[tokio::test]
async fn test_quick_add_flow() {
    let backend = MemoryBackend::new();
    let mut app = app_with(&backend);
    app.trigger_initial_load();
    settle(&mut app).await;
    assert!(app.task_list().tasks.is_empty());

    press(&mut app, KeyCode::Char('a'));
    assert!(app.quick_add().is_focused());
    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    assert!(app.quick_add().is_submitting());

    settle(&mut app).await;

    assert!(!app.quick_add().is_submitting());
    assert_eq!(app.quick_add().content(), "");
    assert_eq!(app.task_list().tasks.len(), 1);
    assert_eq!(app.task_list().tasks[0].content, "Buy milk");
    assert_eq!(app.state().info_message.as_deref(), Some(SUCCESS_TASK_CREATED));
}

#[tokio::test]
async fn test_quick_add_failure_surfaces_error() {
    let backend = MemoryBackend::new();
    backend.set_fail_submissions(true);
    let mut app = app_with(&backend);

    press(&mut app, KeyCode::Char('/'));
    type_text(&mut app, "Buy milk");
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert_eq!(app.quick_add().content(), "Buy milk");
    assert!(!app.quick_add().is_submitting());
    let error = app.state().error_message.clone().unwrap_or_default();
    assert!(error.contains("Quick add failed"), "unexpected status: {}", error);
    assert!(backend.is_empty().await);
}

#[tokio::test]
async fn test_task_form_create_and_edit() {
    let backend = MemoryBackend::new();
    let mut app = app_with(&backend);

    press(&mut app, KeyCode::Char('n'));
    assert!(app.task_form().is_open());
    type_text(&mut app, "Essay");
    press_ctrl(&mut app, 's');
    settle(&mut app).await;

    assert!(!app.task_form().is_open());
    assert_eq!(app.task_list().tasks.len(), 1);
    assert_eq!(app.state().info_message.as_deref(), Some(SUCCESS_TASK_CREATED));

    // Edit the selected task
    press(&mut app, KeyCode::Char('e'));
    assert!(app.task_form().is_editing());
    assert_eq!(app.task_form().draft().content, "Essay");
    type_text(&mut app, " draft");
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    assert!(!app.task_form().is_open());
    let tasks = backend.list().await.unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].content, "Essay draft");
    assert_eq!(app.task_list().tasks[0].content, "Essay draft");
    assert_eq!(app.state().info_message.as_deref(), Some(SUCCESS_TASK_UPDATED));
}

#[tokio::test]
async fn test_quick_add_text_moves_to_form() {
    let backend = MemoryBackend::new();
    let mut app = app_with(&backend);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "Lab report");
    press(&mut app, KeyCode::Tab);

    assert!(app.task_form().is_open());
    assert!(!app.quick_add().is_focused());
    assert_eq!(app.task_form().draft().content, "Lab report");
}

#[tokio::test]
async fn test_closing_form_during_submission() {
    let backend = MemoryBackend::new().with_latency(Duration::from_millis(20));
    let mut app = app_with(&backend);

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Late task");
    press_ctrl(&mut app, 's');
    assert!(app.task_form().is_submitting());
    press(&mut app, KeyCode::Esc);
    assert!(!app.task_form().is_open());

    settle(&mut app).await;

    // The sink still committed the task; the closed form ignored the result
    assert!(!app.task_form().is_open());
    assert_eq!(app.task_list().tasks.len(), 1);

    press(&mut app, KeyCode::Char('n'));
    assert!(!app.task_form().is_submitting());
    assert_eq!(app.task_form().draft().content, "");
}

#[tokio::test]
async fn test_reopened_form_waits_for_earlier_submission() {
    let backend = MemoryBackend::new().with_latency(Duration::from_millis(20));
    let mut app = app_with(&backend);

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "First");
    press_ctrl(&mut app, 's');
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('n'));
    type_text(&mut app, "Second");
    press_ctrl(&mut app, 's');
    assert_eq!(app.active_task_count(), 1, "a second submission was spawned");

    settle(&mut app).await;

    // The earlier result neither closed nor reported on the reopened form
    assert!(app.task_form().is_open());
    assert_eq!(app.task_form().draft().content, "Second");
    assert!(app.state().error_message.is_none());
    assert_eq!(backend.len().await, 1);

    press_ctrl(&mut app, 's');
    settle(&mut app).await;
    assert!(!app.task_form().is_open());
    assert_eq!(backend.len().await, 2);
}

#[tokio::test]
async fn test_navigation_and_dialogs() {
    let backend = MemoryBackend::new();
    let mut app = app_with(&backend);
    assert_eq!(app.current_route(), Route::Tasks);

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.current_route(), Route::Calendar);
    press(&mut app, KeyCode::Char(']'));
    assert_eq!(app.current_route(), Route::Analytics);
    press(&mut app, KeyCode::Char('['));
    press(&mut app, KeyCode::Char('['));
    assert_eq!(app.current_route(), Route::Tasks);

    press(&mut app, KeyCode::Char('?'));
    assert!(app.is_dialog_visible());
    // Keys go to the dialog while it is open
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_route(), Route::Tasks);
    press(&mut app, KeyCode::Esc);
    assert!(!app.is_dialog_visible());

    press(&mut app, KeyCode::Char('G'));
    assert!(app.is_dialog_visible());
    press(&mut app, KeyCode::Char('G'));
    assert!(!app.is_dialog_visible());

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_older_task_load_does_not_replace_newer() {
    let backend = MemoryBackend::new();
    let mut app = app_with(&backend);

    let newer = vec![
        Task::from_content(Uuid::new_v4(), "Essay"),
        Task::from_content(Uuid::new_v4(), "Buy milk"),
    ];
    let older = vec![Task::from_content(Uuid::new_v4(), "Buy milk")];

    app.dispatch(Action::TasksFetched {
        generation: 2,
        tasks: newer,
    });
    app.dispatch(Action::TasksFetched {
        generation: 1,
        tasks: older,
    });

    assert_eq!(app.task_list().tasks.len(), 2);
    assert_eq!(app.task_list().tasks[0].content, "Essay");
}

#[tokio::test]
async fn test_back_to_back_submissions_show_latest_list() {
    let backend = MemoryBackend::new();
    let mut app = app_with(&backend);

    press(&mut app, KeyCode::Char('a'));
    type_text(&mut app, "One");
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;
    type_text(&mut app, "Two");
    press(&mut app, KeyCode::Enter);
    settle(&mut app).await;

    let contents: Vec<&str> = app.task_list().tasks.iter().map(|t| t.content.as_str()).collect();
    assert_eq!(contents, vec!["Two", "One"]);
}
