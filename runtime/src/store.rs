//! The Store - runtime coordinator for a reducer.
//!
//! The store owns the application state and is the only place it changes.
//! `dispatch` applies the reducer and then notifies every subscriber with
//! the post-dispatch state before returning.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use todoflow_core::reducer::Reducer;

/// Identifier returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

/// A registered subscriber callback.
///
/// Subscribers are stored behind `Arc` so the registry lock is released
/// before callbacks run; a callback can therefore read the store or change
/// the registry. Registry changes made during notification take effect on
/// the next dispatch.
type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

/// The Store - state container for a reducer
///
/// The Store manages:
/// 1. State (behind `RwLock` for concurrent reads)
/// 2. Reducer (state-transition logic)
/// 3. Environment (injected dependencies)
/// 4. Subscribers (notified synchronously after every dispatch)
///
/// Dispatch is synchronous: the reducer runs and every subscriber is
/// notified before `dispatch` returns. Concurrent dispatches serialize on
/// the state lock.
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `E`: Environment type
/// - `R`: Reducer implementation
///
/// # Example
///
/// ```
/// use todoflow_core::reducer::Reducer;
/// use todoflow_runtime::Store;
///
/// struct Counter;
///
/// impl Reducer for Counter {
///     type State = i64;
///     type Action = i64;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut i64, action: i64, _env: &()) {
///         *state += action;
///     }
/// }
///
/// let store = Store::new(0, Counter, ());
/// store.dispatch(2);
/// store.dispatch(3);
/// assert_eq!(store.state(|count| *count), 5);
/// ```
pub struct Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
{
    state: RwLock<S>,
    reducer: R,
    environment: E,
    subscribers: Mutex<Vec<(SubscriberId, Subscriber<S>)>>,
    next_subscriber: AtomicU64,
    _phantom: PhantomData<fn(A)>,
}

impl<S, A, E, R> Store<S, A, E, R>
where
    R: Reducer<State = S, Action = A, Environment = E>,
    S: Clone,
{
    /// Create a new store with initial state, reducer, and environment
    ///
    /// # Arguments
    ///
    /// - `initial_state`: The starting state for the store
    /// - `reducer`: The reducer implementation (state-transition logic)
    /// - `environment`: Injected dependencies
    #[must_use]
    pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
        Self {
            state: RwLock::new(initial_state),
            reducer,
            environment,
            subscribers: Mutex::new(Vec::new()),
            next_subscriber: AtomicU64::new(0),
            _phantom: PhantomData,
        }
    }

    /// Dispatch an action to the store
    ///
    /// This is the primary way to interact with the store:
    /// 1. Acquires the write lock on state
    /// 2. Calls the reducer with (state, action, environment)
    /// 3. Releases the lock, then notifies every subscriber with the
    ///    post-dispatch state, in registration order
    ///
    /// Subscriber callbacks run on the dispatching thread; `dispatch`
    /// returns only after the last one. A callback may read the store or
    /// change the subscriber registry; a callback that dispatches will
    /// recurse.
    #[tracing::instrument(skip(self, action), name = "store_dispatch")]
    pub fn dispatch(&self, action: A) {
        let snapshot = {
            let mut state = self
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            self.reducer.reduce(&mut state, action, &self.environment);
            state.clone()
        };

        metrics::counter!("store.dispatch").increment(1);

        // Snapshot the registry so callbacks run without the lock held.
        let subscribers: Vec<Subscriber<S>> = {
            let registry = self
                .subscribers
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            registry.iter().map(|(_, s)| Arc::clone(s)).collect()
        };

        tracing::trace!(subscribers = subscribers.len(), "notifying subscribers");
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    /// Read state through a projection function
    ///
    /// Takes the read lock for the duration of the closure. Prefer
    /// projecting out the value you need over cloning the whole state.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let count = store.state(|s| s.todos.len());
    /// ```
    pub fn state<T>(&self, f: impl FnOnce(&S) -> T) -> T {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Register a subscriber, returning its id
    ///
    /// The callback is invoked with the post-dispatch state after every
    /// subsequent dispatch, until [`Store::unsubscribe`] is called with the
    /// returned id. Subscribers registered during a notification pass are
    /// first called on the next dispatch.
    pub fn subscribe(&self, f: impl Fn(&S) + Send + Sync + 'static) -> SubscriberId {
        let id = SubscriberId(self.next_subscriber.fetch_add(1, Ordering::Relaxed));
        let mut registry = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        registry.push((id, Arc::new(f)));

        // Registry size fits comfortably in f64 for any realistic count
        #[allow(clippy::cast_precision_loss)]
        metrics::gauge!("store.subscribers").set(registry.len() as f64);

        id
    }

    /// Remove a subscriber
    ///
    /// Returns `true` if the id was registered. Unsubscribing an unknown or
    /// already-removed id is a no-op.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut registry = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = registry.len();
        registry.retain(|(registered, _)| *registered != id);
        let removed = registry.len() < before;

        #[allow(clippy::cast_precision_loss)]
        metrics::gauge!("store.subscribers").set(registry.len() as f64);

        removed
    }

    /// Number of currently registered subscribers
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        entries: Vec<String>,
    }

    #[derive(Clone)]
    enum TestAction {
        Append(String),
        Clear,
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = ();

        fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
            match action {
                TestAction::Append(entry) => state.entries.push(entry),
                TestAction::Clear => state.entries.clear(),
            }
        }
    }

    #[test]
    fn dispatch_applies_the_reducer() {
        let store = Store::new(TestState::default(), TestReducer, ());

        store.dispatch(TestAction::Append("one".to_string()));
        store.dispatch(TestAction::Append("two".to_string()));

        assert_eq!(
            store.state(|s| s.entries.clone()),
            vec!["one".to_string(), "two".to_string()]
        );

        store.dispatch(TestAction::Clear);
        assert!(store.state(|s| s.entries.is_empty()));
    }

    #[test]
    fn subscribers_observe_the_post_dispatch_state() {
        let store = Store::new(TestState::default(), TestReducer, ());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        store.subscribe(move |state: &TestState| {
            let mut seen = sink.lock().unwrap_or_else(PoisonError::into_inner);
            seen.push(state.entries.len());
        });

        store.dispatch(TestAction::Append("a".to_string()));
        store.dispatch(TestAction::Append("b".to_string()));
        store.dispatch(TestAction::Clear);

        let seen = seen.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(*seen, vec![1, 2, 0]);
    }

    #[test]
    fn subscribers_run_in_registration_order() {
        let store = Store::new(TestState::default(), TestReducer, ());
        let order = Arc::new(Mutex::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let sink = Arc::clone(&order);
            store.subscribe(move |_: &TestState| {
                sink.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(tag);
            });
        }

        store.dispatch(TestAction::Append("x".to_string()));

        let order = order.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(*order, vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_stops_notifications() {
        let store = Store::new(TestState::default(), TestReducer, ());
        let calls = Arc::new(Mutex::new(0_u32));

        let sink = Arc::clone(&calls);
        let id = store.subscribe(move |_: &TestState| {
            *sink.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        });

        store.dispatch(TestAction::Append("a".to_string()));
        assert!(store.unsubscribe(id));
        store.dispatch(TestAction::Append("b".to_string()));

        assert_eq!(*calls.lock().unwrap_or_else(PoisonError::into_inner), 1);
        assert_eq!(store.subscriber_count(), 0);
        // A second unsubscribe of the same id is a no-op.
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn state_projects_without_cloning_the_whole_state() {
        let store = Store::new(
            TestState {
                entries: vec!["solo".to_string()],
            },
            TestReducer,
            (),
        );

        assert_eq!(store.state(|s| s.entries.len()), 1);
        assert_eq!(store.state(|s| s.entries[0].clone()), "solo");
    }
}
