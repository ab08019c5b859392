//! # Todoflow Testing
//!
//! Testing utilities and helpers for the todoflow state container.
//!
//! This crate provides a fluent Given-When-Then harness for exercising
//! reducers in isolation, without a store.
//!
//! ## Example
//!
//! ```ignore
//! use todoflow_testing::ReducerTest;
//!
//! ReducerTest::new(TodoListReducer::new())
//!     .with_env(())
//!     .given_state(Vec::new())
//!     .when_action(actions::add_todo_with_id(id, "Buy milk"))
//!     .then_state(|todos| {
//!         assert_eq!(todos.len(), 1);
//!     })
//!     .run();
//! ```


pub use reducer_test::ReducerTest;
