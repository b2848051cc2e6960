// crates/dbs26-scheduler/src/lib.rs

//! Parallel search engine for enumerating binary De Bruijn sequences
//! B(2,6).
//!
//! This crate owns everything with side effects or shared mutable
//! state: the fixed-capacity DFS kernel ([`dfs`]), the per-task
//! executor ([`executor`]), the lock-free work dispatcher and worker
//! pool ([`dispatcher`]), and the output writer ([`writer`]). Catalog
//! data and pure bit arithmetic live in `dbs26-core`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod dfs;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod writer;

pub use dispatcher::Solver;
pub use error::SolverError;
pub use writer::{write_sequences, Sink};
