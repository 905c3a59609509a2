//! Page tabs in the navigation bar

use crate::ui::core::{Action, Component, Route};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Tabs},
    Frame,
};

pub struct NavBarComponent {
    pub current: Route,
}

impl NavBarComponent {
    pub fn new(current: Route) -> Self {
        Self { current }
    }
}

impl Component for NavBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(']') => Action::NextRoute,
            KeyCode::Char('[') => Action::PreviousRoute,
            KeyCode::Char(c @ '1'..='5') => {
                let index = (c as usize) - ('1' as usize);
                Route::ALL.get(index).map_or(Action::None, |r| Action::Navigate(*r))
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        let target = match action {
            Action::Navigate(route) => route,
            Action::NextRoute => self.current.next(),
            Action::PreviousRoute => self.current.previous(),
            _ => return action,
        };
        if target != self.current {
            log::info!("Navigation: {} -> {}", self.current, target);
            self.current = target;
        }
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let titles: Vec<Line> = Route::ALL
            .iter()
            .enumerate()
            .map(|(i, r)| Line::from(format!("{} {}", i + 1, r.title())))
            .collect();

        let tabs = Tabs::new(titles)
            .select(self.current.index())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" studyflow "),
            )
            .style(Style::default().fg(Color::Gray))
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .divider("│");

        f.render_widget(tabs, rect);
    }
}
