//! JSON state persistence.
//!
//! The state file is the application's storage collaborator: [`StateFile::load`]
//! returns the persisted state or nothing, [`StateFile::save`] writes only
//! the todo collection. [`attach`] registers a store subscriber that saves
//! after every change, so the file always reflects the last dispatch.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use todoflow_core::reducer::Reducer;
use todoflow_runtime::{Store, SubscriberId};

use crate::types::{AppState, TodoAction, TodoItem, VisibilityFilter};

/// Errors from reading or writing the state file
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying filesystem failure
    #[error("state file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// State file contents are not valid JSON
    #[error("state file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// No platform data directory is available
    #[error("no platform data directory available")]
    NoDataDir,
}

/// On-disk shape of the persisted state
///
/// Only the todo collection is persisted; the visibility filter always
/// starts at its default.
#[derive(Debug, Serialize, Deserialize)]
struct PersistedState {
    todos: Vec<TodoItem>,
}

/// Handle to the JSON file holding persisted application state
#[derive(Clone, Debug)]
pub struct StateFile {
    path: PathBuf,
}

impl StateFile {
    /// Creates a handle for the given path
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// State file under the platform data directory
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::NoDataDir`] when the platform provides no
    /// data directory.
    pub fn default_location() -> Result<Self, StorageError> {
        let mut path = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        path.push("todoflow");
        path.push("state.json");
        Ok(Self::new(path))
    }

    /// Path of the state file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted state
    ///
    /// Any failure (missing file, unreadable contents, invalid JSON)
    /// yields `None` and the application starts from defaults.
    #[must_use]
    pub fn load(&self) -> Option<AppState> {
        let contents = fs::read_to_string(&self.path).ok()?;
        let persisted: PersistedState = serde_json::from_str(&contents).ok()?;
        Some(AppState {
            todos: persisted.todos,
            visibility_filter: VisibilityFilter::default(),
        })
    }

    /// Saves the todo collection, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] on filesystem failures and
    /// [`StorageError::Json`] if the collection cannot be serialized.
    pub fn save(&self, todos: &[TodoItem]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let persisted = PersistedState {
            todos: todos.to_vec(),
        };
        let json = serde_json::to_string_pretty(&persisted)?;
        fs::write(&self.path, json)?;

        tracing::debug!(path = %self.path.display(), todos = todos.len(), "persisted todos");
        Ok(())
    }
}

/// Registers a store subscriber that saves the todos after every change
///
/// Save failures are logged and never propagated; a full disk must not take
/// the application down. Returns the subscriber id so the caller can detach
/// persistence again.
pub fn attach<R>(store: &Store<AppState, TodoAction, (), R>, file: StateFile) -> SubscriberId
where
    R: Reducer<State = AppState, Action = TodoAction, Environment = ()>,
{
    store.subscribe(move |state: &AppState| {
        if let Err(error) = file.save(&state.todos) {
            tracing::warn!(%error, path = %file.path().display(), "failed to persist todos");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions;
    use crate::reducer::app_reducer;
    use crate::types::TodoId;

    fn state_file(dir: &tempfile::TempDir) -> StateFile {
        StateFile::new(dir.path().join("state.json"))
    }

    #[test]
    fn save_then_load_round_trips_the_todos() {
        let dir = tempfile::tempdir().unwrap();
        let file = state_file(&dir);

        let todos = vec![
            TodoItem::new(TodoId::new(), "Learn Redux".to_string()),
            TodoItem::new(TodoId::new(), "Go shopping".to_string()).toggled(),
        ];
        file.save(&todos).unwrap();

        let loaded = file.load().unwrap();
        assert_eq!(loaded.todos, todos);
        assert_eq!(loaded.visibility_filter, VisibilityFilter::ShowAll);
    }

    #[test]
    fn load_returns_none_for_a_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(state_file(&dir).load().is_none());
    }

    #[test]
    fn load_returns_none_for_corrupt_json() {
        let dir = tempfile::tempdir().unwrap();
        let file = state_file(&dir);
        fs::write(file.path(), "{not json").unwrap();

        assert!(file.load().is_none());
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let file = StateFile::new(dir.path().join("nested").join("deep").join("state.json"));

        file.save(&[]).unwrap();
        assert!(file.path().exists());
    }

    #[test]
    fn attached_store_persists_after_every_dispatch() {
        let dir = tempfile::tempdir().unwrap();
        let file = state_file(&dir);

        let store = Store::new(AppState::default(), app_reducer(), ());
        attach(&store, file.clone());

        store.dispatch(actions::add_todo("Water the plants"));

        let loaded = file.load().unwrap();
        assert_eq!(loaded.count(), 1);
        assert_eq!(loaded.todos[0].text, "Water the plants");

        let id = loaded.todos[0].id.clone();
        store.dispatch(actions::toggle_todo(id));

        let loaded = file.load().unwrap();
        assert_eq!(loaded.completed_count(), 1);
    }

    #[test]
    fn only_the_todos_are_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let file = state_file(&dir);

        let store = Store::new(AppState::default(), app_reducer(), ());
        attach(&store, file.clone());

        store.dispatch(actions::add_todo("Learn Rust"));
        store.dispatch(actions::set_visibility_filter(VisibilityFilter::ShowCompleted));

        // The dispatched filter change was saved, but only the todos exist
        // on disk; the filter comes back at its default.
        let loaded = file.load().unwrap();
        assert_eq!(loaded.count(), 1);
        assert_eq!(loaded.visibility_filter, VisibilityFilter::ShowAll);

        let raw = fs::read_to_string(file.path()).unwrap();
        assert!(!raw.contains("visibility"));
    }

    #[test]
    fn detached_persistence_stops_saving() {
        let dir = tempfile::tempdir().unwrap();
        let file = state_file(&dir);

        let store = Store::new(AppState::default(), app_reducer(), ());
        let id = attach(&store, file.clone());

        store.dispatch(actions::add_todo("first"));
        assert!(store.unsubscribe(id));

        store.dispatch(actions::add_todo("second"));
        let loaded = file.load().unwrap();
        assert_eq!(loaded.count(), 1);
    }
}
