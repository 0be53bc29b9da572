//! Model-View-Intent primitives for the request lifecycle.
//!
//! ```text
//! Intent ──→ Reducer ──→ Snapshot ──→ renderer
//!    ↑                                  │
//!    └──────── controller ◄─────────────┘
//! ```
//!
//! - **Snapshot**: a cloneable, comparable picture of the current state
//! - **Intent**: a user submission or a completion of the generation call
//! - **Reducer**: the only place where a snapshot turns into the next one

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::Snapshot;
