//! Unidirectional state primitives.
//!
//! ```text
//! key press / fetch result ──→ Intent ──→ Reducer ──→ State ──→ render
//!        ↑                                                        │
//!        └────────────────────────────────────────────────────────┘
//! ```
//!
//! Every state change goes through a [`Reducer`]. Side effects (network,
//! terminal) live in the caller around the dispatch.

/// A user action or system event that may change state.
pub trait Intent: Send + 'static {}

/// Snapshot of UI state.
///
/// Snapshots are values: a reducer consumes one and returns a new one, so a
/// clone taken before a dispatch never observes the transition.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Pure transition function `(State, Intent) -> State`.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
