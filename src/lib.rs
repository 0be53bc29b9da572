pub mod config;
pub mod controller;
pub mod generation;
pub mod logging;
pub mod mvi;
pub mod render;
pub mod request;

pub use controller::{RequestController, SubmitOutcome, GENERATION_FAILED_MESSAGE};
pub use request::{RequestState, RequestStatus};
