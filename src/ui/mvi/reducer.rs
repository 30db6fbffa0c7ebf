//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effect).
/// Side effects are described by the returned effect value and performed
/// by whoever dispatched the intent.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// What the caller has to do after committing the new state.
    type Effect;

    /// Process an intent and return the new state with its effect.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Self::Effect);
}
