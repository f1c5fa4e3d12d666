//! Blame for untriaged visual-regression digests.
//!
//! Given a tile of per-commit digests for many traces and the current
//! triage expectations, works out which commits (and which authors) most
//! likely introduced each untriaged digest.
//!
//! - `blame`: the pure calculation and its query API
//! - `store`: publishes snapshots to concurrent readers
//! - `ingest`: tile, expectations and git loading
//! - `refresh`: periodic rebuilds
//! - `routes`: JSON HTTP API

pub mod blame;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod refresh;
pub mod routes;
pub mod store;
