//! Request lifecycle state machine.
//!
//! A request moves `Idle -> Loading -> Success | Failed` and may be
//! resubmitted from any settled phase. The machine is cyclic and has no
//! terminal state.
//!
//! - `state.rs` - lifecycle phases and accessors
//! - `intent.rs` - submit and completion events
//! - `reducer.rs` - transitions

mod intent;
mod reducer;
mod state;

pub use intent::RequestIntent;
pub use reducer::RequestReducer;
pub use state::{RequestState, RequestStatus};
