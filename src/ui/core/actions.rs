use crate::model::{Task, TaskPayload};
use crate::submission::{SubmitOrigin, SubmitResult};
use std::fmt;
use std::str::FromStr;

/// Pages reachable from the navigation bar.
///
/// Only the task page is modeled; the others are opaque targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Tasks,
    Calendar,
    Analytics,
    About,
    Contact,
}

impl Route {
    pub const ALL: [Route; 5] = [Route::Tasks, Route::Calendar, Route::Analytics, Route::About, Route::Contact];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Tasks => "/",
            Route::Calendar => "/calendar",
            Route::Analytics => "/analytics",
            Route::About => "/about",
            Route::Contact => "/contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Tasks => "Tasks",
            Route::Calendar => "Calendar",
            Route::Analytics => "Analytics",
            Route::About => "About",
            Route::Contact => "Contact",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|r| r == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    /// Accepts either the page name ("calendar") or its path ("/calendar").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Route::ALL
            .iter()
            .copied()
            .find(|r| r.path() == key || r.title().to_lowercase() == key)
            .ok_or_else(|| format!("unknown route '{}'", s.trim()))
    }
}

/// How the task form is opened.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FormInit {
    /// Default draft
    #[default]
    Blank,
    /// Default draft with the content pre-filled, e.g. from the quick-add bar
    Content(String),
    /// Edit mode, pre-filled from a committed task
    Edit(Task),
}

#[derive(Debug, Clone)]
pub enum Action {
    // Navigation
    Navigate(Route),
    NextRoute,
    PreviousRoute,
    NextTask,
    PreviousTask,
    FocusQuickAdd,

    // Submissions
    Submit {
        origin: SubmitOrigin,
        payload: TaskPayload,
    },
    SubmissionFinished {
        origin: SubmitOrigin,
        result: SubmitResult,
    },

    // Task data
    RefreshTasks,
    /// Result of the `generation`-th background load, before staleness is checked
    TasksFetched {
        generation: u64,
        tasks: Vec<Task>,
    },
    TasksLoaded(Vec<Task>),
    TasksLoadFailed(String),

    // UI operations
    OpenTaskForm(FormInit),
    CloseTaskForm,
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    Help,
    Logs,
}
