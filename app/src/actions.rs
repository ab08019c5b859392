//! Action constructors.
//!
//! Builders for the three [`TodoAction`] variants. [`add_todo`] mints a
//! fresh random id; [`add_todo_with_id`] takes the id from the caller,
//! which is what deterministic tests want.

use crate::types::{TodoAction, TodoId, VisibilityFilter};

/// Builds a [`TodoAction::AddTodo`] with a freshly minted id
#[must_use]
pub fn add_todo(text: impl Into<String>) -> TodoAction {
    add_todo_with_id(TodoId::new(), text)
}

/// Builds a [`TodoAction::AddTodo`] with the given id
#[must_use]
pub fn add_todo_with_id(id: TodoId, text: impl Into<String>) -> TodoAction {
    TodoAction::AddTodo {
        id,
        text: text.into(),
    }
}

/// Builds a [`TodoAction::ToggleTodo`] for the given id
#[must_use]
pub const fn toggle_todo(id: TodoId) -> TodoAction {
    TodoAction::ToggleTodo { id }
}

/// Builds a [`TodoAction::SetVisibilityFilter`] for the given filter
#[must_use]
pub const fn set_visibility_filter(filter: VisibilityFilter) -> TodoAction {
    TodoAction::SetVisibilityFilter { filter }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_todo_mints_distinct_ids() {
        let first = add_todo("one");
        let second = add_todo("one");

        let (TodoAction::AddTodo { id: first_id, .. }, TodoAction::AddTodo { id: second_id, .. }) =
            (first, second)
        else {
            panic!("add_todo must build AddTodo actions");
        };

        assert_ne!(first_id, second_id);
    }

    #[test]
    fn add_todo_with_id_wraps_its_arguments() {
        let id = TodoId::new();
        let action = add_todo_with_id(id.clone(), "Buy milk");

        assert_eq!(
            action,
            TodoAction::AddTodo {
                id,
                text: "Buy milk".to_string(),
            }
        );
    }

    #[test]
    fn toggle_and_filter_wrap_their_arguments() {
        let id = TodoId::new();
        assert_eq!(
            toggle_todo(id.clone()),
            TodoAction::ToggleTodo { id }
        );
        assert_eq!(
            set_visibility_filter(VisibilityFilter::ShowCompleted),
            TodoAction::SetVisibilityFilter {
                filter: VisibilityFilter::ShowCompleted,
            }
        );
    }
}
