//! Domain types for the todo application.
//!
//! The application state is a composite of two independent pieces: the
//! ordered todo collection and the visibility filter. Every change to
//! either goes through a [`TodoAction`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a todo item
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TodoId(Uuid);

impl TodoId {
    /// Creates a new random `TodoId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TodoId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TodoId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single todo item
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Unique identifier
    pub id: TodoId,
    /// Text of the todo
    pub text: String,
    /// Whether the todo is completed
    pub completed: bool,
}

impl TodoItem {
    /// Creates a new, uncompleted todo item
    #[must_use]
    pub const fn new(id: TodoId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
        }
    }

    /// Returns this item with the completed flag negated
    #[must_use]
    pub fn toggled(self) -> Self {
        Self {
            completed: !self.completed,
            ..self
        }
    }
}

/// Display mode for the todo list
///
/// Serializes as the original storage strings (`"SHOW_ALL"` etc.).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VisibilityFilter {
    /// Show every todo
    #[default]
    ShowAll,
    /// Show only todos that are not completed
    ShowActive,
    /// Show only completed todos
    ShowCompleted,
}

impl std::fmt::Display for VisibilityFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShowAll => write!(f, "SHOW_ALL"),
            Self::ShowActive => write!(f, "SHOW_ACTIVE"),
            Self::ShowCompleted => write!(f, "SHOW_COMPLETED"),
        }
    }
}

/// Composite application state
///
/// Invariants: every id in `todos` is unique, and new items are appended at
/// the end, so the collection keeps insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    /// Ordered todo collection, newest last
    pub todos: Vec<TodoItem>,
    /// Current display mode
    pub visibility_filter: VisibilityFilter,
}

impl AppState {
    /// Creates an empty state with the default filter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Vec::new(),
            visibility_filter: VisibilityFilter::ShowAll,
        }
    }

    /// Returns the number of todos
    #[must_use]
    pub fn count(&self) -> usize {
        self.todos.len()
    }

    /// Returns the number of completed todos
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|t| t.completed).count()
    }

    /// Returns a todo by id
    #[must_use]
    pub fn get(&self, id: &TodoId) -> Option<&TodoItem> {
        self.todos.iter().find(|t| &t.id == id)
    }
}

/// Actions describing every state transition in the application
///
/// The enum is exhaustive: a reducer that does not handle a variant must
/// return its state unchanged, and the compiler enforces that every
/// variant is considered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a new todo with the given id and text
    AddTodo {
        /// Identifier for the new todo
        id: TodoId,
        /// Text of the new todo
        text: String,
    },

    /// Negate the completed flag of the todo with the given id
    ToggleTodo {
        /// Todo to toggle
        id: TodoId,
    },

    /// Switch the visibility filter
    SetVisibilityFilter {
        /// Filter to switch to
        filter: VisibilityFilter,
    },
}
