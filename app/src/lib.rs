//! Todo list application on the todoflow state container.
//!
//! The application state is a composite of the ordered todo collection and
//! a visibility filter. All changes flow through [`types::TodoAction`]:
//! action constructors build actions, the root reducer computes the next
//! state, the store applies it and notifies subscribers, and the selection
//! function derives the visible list for rendering.
//!
//! # Quick Start
//!
//! ```
//! use todoflow_app::{actions, app_reducer, AppState, VisibilityFilter};
//! use todoflow_runtime::Store;
//!
//! let store = Store::new(AppState::default(), app_reducer(), ());
//!
//! store.dispatch(actions::add_todo("Buy milk"));
//! store.dispatch(actions::set_visibility_filter(VisibilityFilter::ShowActive));
//!
//! let visible = store.state(|state| {
//!     state.visible().len()
//! });
//! assert_eq!(visible, 1);
//! ```

/// Action constructors
pub mod actions;

/// JSON state persistence
pub mod persistence;

/// Collection, filter, and root reducers
pub mod reducer;

/// Visible-todos selection
pub mod selection;

/// Domain types
pub mod types;

// Re-export commonly used items
pub use persistence::{StateFile, StorageError};
pub use reducer::{TodoListReducer, VisibilityFilterReducer, app_reducer};
pub use selection::visible_todos;
pub use types::{AppState, TodoAction, TodoId, TodoItem, VisibilityFilter};
