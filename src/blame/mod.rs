//! Blame computation engine.
//!
//! - `calculate`: builds per-(test, digest) frequency vectors from a tile
//! - `align`: maps one frequency vector onto an arbitrary commit list
//! - `weighted`: turns a test's vectors into per-author probabilities
//! - `snapshot`: immutable result of one calculation plus its query API
//!
//! Everything here is pure. Publishing snapshots is `crate::store`'s job.

pub mod align;
pub mod calculate;
pub mod snapshot;
pub mod weighted;

pub use align::{align, AlignedBlame};
pub use calculate::{calculate, FirstSeenPolicy};
pub use snapshot::BlameSnapshot;
pub use weighted::weighted_blame;
