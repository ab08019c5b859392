//! CLI demo for the todoflow application.
//!
//! Loads the persisted state, runs a short scripted session against the
//! store, and prints the visible list after each step.

use anyhow::Result;
use todoflow_app::persistence::{self, StateFile};
use todoflow_app::reducer::app_reducer;
use todoflow_app::types::{AppState, TodoAction, VisibilityFilter};
use todoflow_app::{actions, visible_todos};
use todoflow_core::reducer::Reducer;
use todoflow_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todoflow_app=debug,todoflow_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Todoflow ===\n");

    let state_file = StateFile::default_location()?;
    let initial = state_file.load().unwrap_or_default();
    println!(
        "Loaded {} persisted todo(s) from {}",
        initial.count(),
        state_file.path().display()
    );

    let store = Store::new(initial, app_reducer(), ());
    persistence::attach(&store, state_file);

    println!("\nAdding todos...");
    store.dispatch(actions::add_todo("Learn Rust"));
    store.dispatch(actions::add_todo("Go shopping"));
    store.dispatch(actions::add_todo("Water the plants"));
    print_visible(&store);

    let first = store.state(|state| state.todos.first().map(|todo| todo.id.clone()));
    if let Some(id) = first {
        println!("\nToggling the first todo...");
        store.dispatch(actions::toggle_todo(id));
    }
    print_visible(&store);

    println!("\nShowing only active todos...");
    store.dispatch(actions::set_visibility_filter(VisibilityFilter::ShowActive));
    print_visible(&store);

    println!("\nShowing only completed todos...");
    store.dispatch(actions::set_visibility_filter(
        VisibilityFilter::ShowCompleted,
    ));
    print_visible(&store);

    let (done, total) = store.state(|state| (state.completed_count(), state.count()));
    println!("\nCompleted: {done}/{total}");

    Ok(())
}

/// Prints the todos visible under the store's current filter
fn print_visible<R>(store: &Store<AppState, TodoAction, (), R>)
where
    R: Reducer<State = AppState, Action = TodoAction, Environment = ()>,
{
    store.state(|state| {
        println!("  filter: {}", state.visibility_filter);
        for todo in visible_todos(&state.todos, state.visibility_filter) {
            let mark = if todo.completed { "✓" } else { " " };
            println!("  [{mark}] {}", todo.text);
        }
    });
}
