//! Loading tiles and expectations from disk.
//!
//! - `tile`: JSON tile files and commit/trace validation
//! - `git`: commit sequences read from a git repository
//! - `expectations`: JSON expectation files

pub mod expectations;
pub mod git;
pub mod tile;

pub use expectations::load_expectations;
pub use git::commits_from_repo;
pub use tile::{load_tile, validate_tile};
