//! Marker trait for observable state.

/// State that can be handed out to observers.
///
/// `Clone` produces the snapshot, `PartialEq` lets publishers skip
/// notifications when nothing changed, `Default` is the initial phase.
pub trait Snapshot: Clone + PartialEq + Default + Send + Sync + 'static {}
