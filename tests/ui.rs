#[path = "ui/actions.rs"]
mod actions;

#[path = "ui/app_component.rs"]
mod app_component;

#[path = "ui/rendering.rs"]
mod rendering;

#[path = "ui/task_list.rs"]
mod task_list;

#[path = "ui/task_manager.rs"]
mod task_manager;
