//! Reducer trait.

use super::intent::Intent;
use super::state::Snapshot;

/// Pure transition function: `(State, Intent) -> State`.
///
/// Reducers never perform I/O. Whoever owns the state decides when to run
/// side effects based on the state the reducer returns.
pub trait Reducer {
    /// The state this reducer advances.
    type State: Snapshot;

    /// The events this reducer understands.
    type Intent: Intent;

    /// Compute the next state.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
