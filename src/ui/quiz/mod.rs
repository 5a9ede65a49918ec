//! Quiz session feature module.
//!
//! - `state.rs` - status, score and question snapshot
//! - `intent.rs` - dispatchable actions and their serialized form
//! - `reducer.rs` - pure state transitions
//! - `session.rs` - state owner, fetch scheduling and stale-result guard

mod intent;
mod reducer;
mod session;
mod state;

pub use intent::{QuizError, QuizIntent, ACTION_KINDS};
pub use reducer::QuizReducer;
pub use session::{FetchTicket, QuizSession};
pub use state::{Outcome, QuizState, Score, Status};
