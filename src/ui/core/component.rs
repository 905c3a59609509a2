use super::actions::Action;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// A piece of the screen that owns some state.
///
/// Keys are turned into [`Action`]s rather than applied directly so the app
/// can decide who sees them (a focused quick-add field, the open form, a
/// dialog). `update` receives every dispatched action; anything a component
/// does not consume is handed back for the next one in the chain.
pub trait Component {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    fn update(&mut self, action: Action) -> Action {
        action
    }

    fn render(&mut self, f: &mut Frame, rect: Rect);
}
