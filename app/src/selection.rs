//! Deriving the visible subset of the todo list.

use crate::types::{AppState, TodoItem, VisibilityFilter};

/// Returns the todos visible under `filter`, in their original order
///
/// `ShowCompleted` keeps completed items, `ShowActive` keeps uncompleted
/// items, and `ShowAll` keeps everything.
#[must_use]
pub fn visible_todos(todos: &[TodoItem], filter: VisibilityFilter) -> Vec<&TodoItem> {
    match filter {
        VisibilityFilter::ShowAll => todos.iter().collect(),
        VisibilityFilter::ShowActive => todos.iter().filter(|t| !t.completed).collect(),
        VisibilityFilter::ShowCompleted => todos.iter().filter(|t| t.completed).collect(),
    }
}

impl AppState {
    /// Returns the todos visible under the current filter
    #[must_use]
    pub fn visible(&self) -> Vec<&TodoItem> {
        visible_todos(&self.todos, self.visibility_filter)
    }
}
