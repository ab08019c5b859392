//! Reducer composition utilities
//!
//! This module provides utilities for composing reducers in various ways:
//! - **`combine_reducers`**: Run multiple reducers on the same state/action
//! - **`scope_reducer`**: Focus a reducer on a subset of state
//!
//! Together they express a composite state as a set of independent
//! sub-reducers: scope each sub-reducer onto its field, then combine the
//! scoped reducers into one root reducer. The combined reducer runs every
//! sub-reducer on every action, so a sub-reducer that does not handle an
//! action simply leaves its slice of state unchanged.

use crate::reducer::Reducer;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer is run in sequence on every action. This is useful when a
/// composite state is owned piecewise by independent reducers, each scoped
/// onto its own field with [`scope_reducer`].
///
/// # Type Parameters
///
/// - `S`: The state type
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use todoflow_core::Reducer;
/// use todoflow_core::composition::combine_reducers;
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     entries: Vec<String>,
///     muted: bool,
/// }
///
/// #[derive(Clone)]
/// enum AppAction {
///     Append(String),
///     Mute,
/// }
///
/// struct EntryReducer;
/// struct MuteReducer;
///
/// impl Reducer for EntryReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
///         if let AppAction::Append(entry) = action {
///             state.entries.push(entry);
///         }
///     }
/// }
///
/// impl Reducer for MuteReducer {
///     type State = AppState;
///     type Action = AppAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
///         if matches!(action, AppAction::Mute) {
///             state.muted = true;
///         }
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(EntryReducer), Box::new(MuteReducer)]);
///
/// let mut state = AppState::default();
/// combined.reduce(&mut state, AppAction::Append("first".to_string()), &());
/// assert_eq!(state.entries.len(), 1);
/// assert!(!state.muted);
/// ```
#[must_use]
pub fn combine_reducers<S, A, E>(
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
) -> CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`]. Every reducer sees every action,
/// regardless of which reducer ends up handling it.
pub struct CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    reducers: Vec<Box<dyn Reducer<State = S, Action = A, Environment = E>>>,
}

impl<S, A, E> Reducer for CombinedReducer<S, A, E>
where
    S: 'static,
    A: Clone + 'static,
    E: 'static,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone(), env);
        }
    }
}

/// Scopes a reducer to operate on a subset of a larger state.
///
/// This allows you to reuse reducers designed for smaller state types
/// within a larger application state.
///
/// # Type Parameters
///
/// - `S`: The parent state type
/// - `SubS`: The child state type (subset of `S`)
/// - `A`: The action type
/// - `E`: The environment type
///
/// # Examples
///
/// ```
/// use todoflow_core::Reducer;
/// use todoflow_core::composition::scope_reducer;
///
/// #[derive(Clone, Default)]
/// struct PageState {
///     offset: usize,
/// }
///
/// #[derive(Clone)]
/// enum PageAction {
///     Advance(usize),
/// }
///
/// struct PageReducer;
///
/// impl Reducer for PageReducer {
///     type State = PageState;
///     type Action = PageAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
///         let PageAction::Advance(by) = action;
///         state.offset += by;
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct AppState {
///     page: PageState,
///     title: String,
/// }
///
/// let scoped = scope_reducer(
///     PageReducer,
///     |app: &AppState| &app.page,
///     |app: &mut AppState, page: PageState| {
///         app.page = page;
///     },
/// );
///
/// let mut state = AppState::default();
/// scoped.reduce(&mut state, PageAction::Advance(10), &());
/// assert_eq!(state.page.offset, 10);
/// assert_eq!(state.title, "");
/// ```
pub fn scope_reducer<S, SubS, A, E, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on a subset of state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<(A, E)>,
}

impl<S, SubS, A, E, R> Reducer for ScopedReducer<S, SubS, A, E, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    E: 'static,
    R: Reducer<State = SubS, Action = A, Environment = E>,
{
    type State = S;
    type Action = A;
    type Environment = E;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        // Clone the sub-state out, reduce it, write it back. The parent
        // state only ever observes the fully reduced value.
        let mut sub_state = (self.get_state)(state).clone();

        self.reducer.reduce(&mut sub_state, action, env);

        (self.set_state)(state, sub_state);
    }
}
