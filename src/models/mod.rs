//! Data model shared by the blame engine and the HTTP layer.
//!
//! - `commit`: Commit, CommitInfo, CommitListResponse
//! - `trace`: Trace, Tile and the missing-digest sentinel
//! - `expectations`: Label, Expectations and the lookup trait
//! - `blame`: WeightedBlame plus blame response DTOs

pub mod blame;
pub mod commit;
pub mod expectations;
pub mod trace;

pub use blame::*;
pub use commit::*;
pub use expectations::*;
pub use trace::*;
