//! Overlay dialogs for help and logs.
//!
//! Both dialogs show read-only scrollable text. The task form is a separate
//! component because it owns a draft.

use crate::logger::Logger;
use crate::ui::components::dialogs::system_dialogs;
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, widgets::ScrollbarState, Frame};

const PAGE_SIZE: usize = 10;

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    pub scroll_offset: usize,
    pub scrollbar_state: ScrollbarState,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll_offset: 0,
            scrollbar_state: ScrollbarState::new(0),
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn show(&mut self, dialog_type: DialogType) {
        self.dialog_type = Some(dialog_type);
        self.scroll_to_top();
    }

    pub fn hide(&mut self) {
        self.dialog_type = None;
        self.scroll_to_top();
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll_offset = self.scroll_offset.saturating_add_signed(delta);
        self.scrollbar_state = self.scrollbar_state.position(self.scroll_offset);
    }

    fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
        self.scrollbar_state = self.scrollbar_state.position(0);
    }

    fn scroll_to_bottom(&mut self) {
        // Clamped to the content height at render time
        self.scroll_offset = usize::MAX;
        self.scrollbar_state = self.scrollbar_state.position(usize::MAX);
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        let is_close_key = match dialog_type {
            DialogType::Help => matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')),
            DialogType::Logs => matches!(key.code, KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q')),
        };
        if is_close_key {
            return Action::HideDialog;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_by(1),
            KeyCode::PageUp => self.scroll_by(-(PAGE_SIZE as isize)),
            KeyCode::PageDown => self.scroll_by(PAGE_SIZE as isize),
            KeyCode::Home => self.scroll_to_top(),
            KeyCode::End => self.scroll_to_bottom(),
            _ => {}
        }
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.show(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.hide();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        // The real content height is only known here, so the offset is clamped after drawing
        self.scroll_offset = match self.dialog_type {
            Some(DialogType::Help) => {
                system_dialogs::render_help_dialog(f, rect, self.scroll_offset, &mut self.scrollbar_state)
            }
            Some(DialogType::Logs) => {
                system_dialogs::render_logs_dialog(f, rect, &self.logger, self.scroll_offset, &mut self.scrollbar_state)
            }
            None => return,
        };
    }
}
