//! # Todoflow Runtime
//!
//! Runtime implementation for the todoflow state container.
//!
//! This crate provides the Store runtime that holds application state,
//! applies the reducer on each dispatched action, and notifies subscribers
//! after every change.
//!
//! ## Core Components
//!
//! - **Store**: The state container with `dispatch`, `state`, and
//!   `subscribe`
//! - **Subscriber registry**: callbacks invoked synchronously, in
//!   registration order, after each dispatch
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_runtime::Store;
//!
//! let store = Store::new(initial_state, my_reducer, environment);
//!
//! // Dispatch an action
//! store.dispatch(Action::DoSomething);
//!
//! // Read state
//! let value = store.state(|s| s.some_field.clone());
//! ```

/// Store module - the state container runtime
pub mod store;

pub use store::{Store, SubscriberId};
