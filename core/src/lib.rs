//! # Todoflow Core
//!
//! Core traits and types for the todoflow state container.
//!
//! This crate provides the fundamental abstractions for unidirectional data
//! flow: state lives in one place, every change is described by an action,
//! and a pure reducer computes the next state from the current state and the
//! action.
//!
//! ## Core Concepts
//!
//! - **State**: Owned domain state for a feature
//! - **Action**: All possible inputs to a reducer, as an exhaustive enum
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits
//!
//! ## Architecture Principles
//!
//! - Unidirectional Data Flow
//! - Exhaustive action matching (the type checker closes unhandled branches)
//! - Dependency Injection via Environment
//!
//! ## Example
//!
//! ```
//! use todoflow_core::reducer::Reducer;
//!
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//!     Decrement,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, _env: &()) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Decrement => state.count -= 1,
//!         }
//!     }
//! }
//!
//! let mut state = CounterState::default();
//! CounterReducer.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.count, 1);
//! ```

/// Reducer composition utilities (`combine_reducers`, `scope_reducer`)
pub mod composition;

/// The `Reducer` trait - core abstraction for state transitions
pub mod reducer;

pub use composition::{CombinedReducer, ScopedReducer, combine_reducers, scope_reducer};
pub use reducer::Reducer;
