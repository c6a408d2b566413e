//! Reducer trait for store state machines.
//!
//! Provides a consistent interface for the pure half of every store: a state
//! value and a closed set of actions folded into it one at a time.

/// A pure state machine over a tagged action set.
///
/// Implementors never perform IO. The store that owns the state applies
/// actions in dispatch order and publishes each resulting value whole.
///
/// # Example
///
/// ```ignore
/// impl Reducer for CounterReducer {
///     type State = u32;
///     type Action = CounterAction;
///
///     fn reduce(state: u32, action: CounterAction) -> u32 {
///         match action {
///             CounterAction::Increment => state + 1,
///             CounterAction::Reset => 0,
///         }
///     }
///
///     fn action_kind(action: &CounterAction) -> &'static str {
///         match action {
///             CounterAction::Increment => "INCREMENT",
///             CounterAction::Reset => "RESET",
///         }
///     }
/// }
/// ```
pub trait Reducer: Send + Sync + 'static {
    /// The state value. `Default` is the freshly created store.
    type State: Clone + Default + Send + Sync + 'static;

    /// The action vocabulary.
    type Action: Send + 'static;

    /// Produces the next state.
    fn reduce(state: Self::State, action: Self::Action) -> Self::State;

    /// Stable name of an action, for logs.
    fn action_kind(action: &Self::Action) -> &'static str;
}
