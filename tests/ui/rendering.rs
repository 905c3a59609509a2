use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
use std::sync::Arc;
use studyflow::backend::{MemoryBackend, SharedSink};
use studyflow::config::Config;
use studyflow::logger::Logger;
use studyflow::model::Task;
use studyflow::ui::app_component::AppComponent;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use studyflow::ui::components::{DialogComponent, TaskFormComponent};
use studyflow::ui::core::{Action, Component, DialogType, FormInit};
use uuid::Uuid;

fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn render<C: Component>(component: &mut C, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            component.render(f, area);
        })
        .unwrap();
    buffer_text(terminal.backend().buffer())
}

fn app() -> AppComponent {
    let sink: SharedSink = Arc::new(MemoryBackend::new());
    AppComponent::new(&Config::default(), sink, Logger::new())
}

#[test]
fn test_app_renders_navigation_and_empty_list() {
    let mut app = app();
    let screen = render(&mut app, 120, 30);

    assert!(screen.contains("Tasks"));
    assert!(screen.contains("Calendar"));
    assert!(screen.contains("Quick add"));
    assert!(screen.contains("No tasks yet"));
}

#[test]
fn test_app_renders_placeholder_pages() {
    let mut app = app();
    app.dispatch(Action::Navigate(studyflow::ui::core::Route::About));
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Plan study sessions"));
}

#[test]
fn test_app_renders_loaded_tasks() {
    let mut app = app();
    app.dispatch(Action::TasksLoaded(vec![Task::from_content(Uuid::new_v4(), "Read chapter 4")]));
    let screen = render(&mut app, 120, 30);
    assert!(screen.contains("Read chapter 4"));
    assert!(screen.contains("Tasks (1)"));
}

#[test]
fn test_task_form_renders_when_open() {
    let mut form = TaskFormComponent::new();
    assert!(!render(&mut form, 100, 30).contains("New Task"));

    form.open(FormInit::Content("Essay".to_string()));
    form.set_tag_input("history");
    form.add_tag();
    let screen = render(&mut form, 100, 30);

    assert!(screen.contains("New Task"));
    assert!(screen.contains("Essay"));
    assert!(screen.contains("Priority"));
    assert!(screen.contains("history"));
}

#[test]
fn test_help_dialog_renders() {
    let mut app = app();
    app.dispatch(Action::ShowDialog(studyflow::ui::core::DialogType::Help));
    let screen = render(&mut app, 120, 40);
    assert!(screen.contains("QUICK ADD"));
}

#[test]
fn test_logs_dialog_end_then_up_scrolls() {
    let logger = Logger::new();
    for i in 0..100 {
        logger.log(format!("entry {}", i));
    }
    let mut dialog = DialogComponent::new(logger);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let top = render(&mut dialog, 80, 24);
    assert!(top.contains("entry 99"));

    dialog.handle_key_events(KeyEvent::new(KeyCode::End, KeyModifiers::NONE));
    let bottom = render(&mut dialog, 80, 24);
    // Newest first, so the oldest entry sits at the bottom
    assert!(bottom.contains("entry 0 "));
    assert!(!bottom.contains("entry 99"));
    let max_offset = dialog.scroll_offset;
    assert!(max_offset > 0 && max_offset < 100);

    dialog.handle_key_events(KeyEvent::new(KeyCode::Up, KeyModifiers::NONE));
    let scrolled = render(&mut dialog, 80, 24);
    assert_eq!(dialog.scroll_offset, max_offset - 1);
    assert_ne!(scrolled, bottom);
    assert!(!scrolled.contains("entry 0 "));
}
