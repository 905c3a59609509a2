use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use studyflow::model::Task;
use studyflow::ui::components::TaskListComponent;
use studyflow::ui::core::{Action, Component, FormInit};
use uuid::Uuid;

fn tasks(names: &[&str]) -> Vec<Task> {
    names.iter().map(|n| Task::from_content(Uuid::new_v4(), n)).collect()
}

#[test]
fn test_selection_wraps() {
    let mut list = TaskListComponent::new();
    list.update_data(tasks(&["a", "b", "c"]));
    assert_eq!(list.selected_index, 0);

    list.update(Action::PreviousTask);
    assert_eq!(list.selected_index, 2);
    list.update(Action::NextTask);
    assert_eq!(list.selected_index, 0);
}

#[test]
fn test_selection_follows_task_on_reload() {
    let mut list = TaskListComponent::new();
    let mut data = tasks(&["a", "b"]);
    list.update_data(data.clone());
    list.update(Action::NextTask);
    let selected = list.get_selected_task().map(|t| t.id);

    // A new task arrives at the top
    data.insert(0, Task::from_content(Uuid::new_v4(), "new"));
    list.update(Action::TasksLoaded(data));

    assert_eq!(list.get_selected_task().map(|t| t.id), selected);
    assert_eq!(list.selected_index, 2);
}

#[test]
fn test_edit_key_opens_form_for_selected() {
    let mut list = TaskListComponent::new();
    assert!(matches!(
        list.handle_key_events(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE)),
        Action::None
    ));

    list.update_data(tasks(&["a", "b"]));
    list.update(Action::NextTask);
    match list.handle_key_events(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)) {
        Action::OpenTaskForm(FormInit::Edit(task)) => assert_eq!(task.content, "b"),
        other => panic!("unexpected action {:?}", other),
    }
}
