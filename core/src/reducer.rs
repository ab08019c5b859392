//! The `Reducer` trait.
//!
//! Reducers are pure functions: `(State, Action, Environment) → State`.
//! They contain all state-transition logic and are deterministic and
//! testable. A reducer must not perform I/O; dependencies it genuinely
//! needs are injected through the `Environment` parameter.

/// The Reducer trait - core abstraction for state transitions
///
/// # Type Parameters
///
/// - `State`: The domain state this reducer operates on
/// - `Action`: The action type this reducer processes
/// - `Environment`: The injected dependencies this reducer needs
///
/// # Example
///
/// ```
/// use todoflow_core::reducer::Reducer;
///
/// #[derive(Clone, Debug, Default)]
/// struct TallyState {
///     total: u64,
/// }
///
/// #[derive(Clone, Debug)]
/// enum TallyAction {
///     Record { amount: u64 },
///     Reset,
/// }
///
/// struct TallyReducer;
///
/// impl Reducer for TallyReducer {
///     type State = TallyState;
///     type Action = TallyAction;
///     type Environment = ();
///
///     fn reduce(&self, state: &mut TallyState, action: TallyAction, _env: &()) {
///         match action {
///             TallyAction::Record { amount } => state.total += amount,
///             TallyAction::Reset => state.total = 0,
///         }
///     }
/// }
/// ```
pub trait Reducer {
    /// The state type this reducer operates on
    type State;

    /// The action type this reducer processes
    type Action;

    /// The environment type with injected dependencies
    type Environment;

    /// Reduce an action into the next state
    ///
    /// This is a pure function that:
    /// 1. Matches the action exhaustively
    /// 2. Updates state in place, replacing owned values rather than
    ///    mutating shared ones
    /// 3. Leaves state untouched for actions it does not handle
    ///
    /// # Arguments
    ///
    /// - `state`: Mutable reference to current state
    /// - `action`: The action to process
    /// - `env`: Reference to injected dependencies
    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment);
}
