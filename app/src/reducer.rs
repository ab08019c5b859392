//! Reducers for the todo application.
//!
//! Two independent reducers own the two slices of [`AppState`]: the
//! collection reducer owns the ordered todo list and the filter reducer
//! owns the visibility filter. [`app_reducer`] scopes each onto its field
//! and combines them into the root reducer; both run on every dispatched
//! action.

use crate::types::{AppState, TodoAction, TodoItem, VisibilityFilter};
use todoflow_core::composition::{CombinedReducer, combine_reducers, scope_reducer};
use todoflow_core::reducer::Reducer;

/// Reducer for the ordered todo collection
///
/// Appends on `AddTodo`, rebuilds the sequence with the targeted item
/// toggled on `ToggleTodo`, and leaves the sequence untouched for every
/// other action.
#[derive(Clone, Debug, Default)]
pub struct TodoListReducer;

impl TodoListReducer {
    /// Creates a new `TodoListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Next state for a single item given an action
    ///
    /// `AddTodo` builds a fresh, uncompleted item and ignores the previous
    /// one. `ToggleTodo` negates `completed` on the item whose id matches
    /// and passes every other item through unchanged. Anything else passes
    /// the item through unchanged.
    fn next_item(item: Option<TodoItem>, action: &TodoAction) -> Option<TodoItem> {
        match action {
            TodoAction::AddTodo { id, text } => {
                Some(TodoItem::new(id.clone(), text.clone()))
            }
            TodoAction::ToggleTodo { id } => item.map(|todo| {
                if todo.id == *id {
                    todo.toggled()
                } else {
                    todo
                }
            }),
            TodoAction::SetVisibilityFilter { .. } => item,
        }
    }
}

impl Reducer for TodoListReducer {
    type State = Vec<TodoItem>;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match &action {
            TodoAction::AddTodo { .. } => {
                if let Some(todo) = Self::next_item(None, &action) {
                    state.push(todo);
                }
            }
            TodoAction::ToggleTodo { .. } => {
                // Rebuild the sequence rather than flipping a flag in place;
                // the state only ever holds fully reduced values.
                let next = std::mem::take(state)
                    .into_iter()
                    .filter_map(|todo| Self::next_item(Some(todo), &action))
                    .collect();
                *state = next;
            }
            TodoAction::SetVisibilityFilter { .. } => {}
        }
    }
}

/// Reducer for the visibility filter
#[derive(Clone, Debug, Default)]
pub struct VisibilityFilterReducer;

impl VisibilityFilterReducer {
    /// Creates a new `VisibilityFilterReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for VisibilityFilterReducer {
    type State = VisibilityFilter;
    type Action = TodoAction;
    type Environment = ();

    fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
        match action {
            TodoAction::SetVisibilityFilter { filter } => *state = filter,
            TodoAction::AddTodo { .. } | TodoAction::ToggleTodo { .. } => {}
        }
    }
}

/// Builds the root reducer over [`AppState`]
///
/// Scopes the collection reducer onto `todos` and the filter reducer onto
/// `visibility_filter`, then combines them. Every dispatched action runs
/// through both sub-reducers; the one that does not handle it leaves its
/// slice unchanged.
#[must_use]
pub fn app_reducer() -> CombinedReducer<AppState, TodoAction, ()> {
    combine_reducers(vec![
        Box::new(scope_reducer(
            TodoListReducer::new(),
            |state: &AppState| &state.todos,
            |state: &mut AppState, todos| state.todos = todos,
        )),
        Box::new(scope_reducer(
            VisibilityFilterReducer::new(),
            |state: &AppState| &state.visibility_filter,
            |state: &mut AppState, filter| state.visibility_filter = filter,
        )),
    ])
}
