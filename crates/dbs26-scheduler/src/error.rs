// crates/dbs26-scheduler/src/error.rs

//! Typed errors for the parallel solve. These describe conditions the
//! scheduler can detect and recover a diagnostic from; anything at the
//! process I/O boundary (reading args, opening the output file) is
//! handled by the `dbs26-cli` crate with `anyhow` instead.

use thiserror::Error;

/// Failure modes of a single [`crate::Solver::solve`] run.
#[derive(Debug, Error)]
pub enum SolverError {
    /// Every worker thread failed to spawn; there is nobody left to run
    /// the search.
    #[error("no worker threads could be spawned")]
    NoWorkersSpawned,

    /// A task's output buffer could not be allocated at its exact
    /// required capacity.
    #[error("failed to allocate output buffer for task {id}")]
    TaskAllocationFailed {
        /// Catalog index of the task that failed to allocate.
        id: usize,
    },

    /// A task ran to completion but emitted a different number of
    /// sequences than its catalog entry promises. This should never
    /// happen for a correct catalog and search kernel; treated as a
    /// recoverable per-task failure rather than a panic so one bad task
    /// cannot take down an otherwise-successful run.
    #[error("task {id} expected {expected} sequences but produced {actual}")]
    TaskCountMismatch {
        /// Catalog index of the mismatched task.
        id: usize,
        /// Sequence count the catalog promises for this task.
        expected: u32,
        /// Sequence count the search actually produced.
        actual: u32,
    },
}
