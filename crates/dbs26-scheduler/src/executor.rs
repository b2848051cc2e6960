// crates/dbs26-scheduler/src/executor.rs

//! Runs a single catalog task to completion.
//!
//! Mirrors the reference solver's `task_solve`: allocate an output
//! buffer sized exactly to the task's promised count, run the DFS, and
//! treat both allocation failure and an output-count mismatch as
//! recoverable — the caller drops this one task's contribution to the
//! total instead of aborting the whole run.

use dbs26_core::TASK_TABLE;

use crate::dfs::SearchStack;
use crate::error::SolverError;

/// Run catalog task `id` on `stack`, returning its completed sequences
/// in ascending order.
///
/// # Errors
///
/// Returns [`SolverError::TaskAllocationFailed`] if the exact-capacity
/// buffer reservation fails, or [`SolverError::TaskCountMismatch`] if
/// the search emits a different number of sequences than the catalog
/// promises for `id`.
pub fn run_task(stack: &mut SearchStack, id: usize) -> Result<Vec<u64>, SolverError> {
    let task = TASK_TABLE[id];

    let mut out = Vec::new();
    out.try_reserve_exact(task.count as usize)
        .map_err(|_| SolverError::TaskAllocationFailed { id })?;

    let n = stack.run(&mut out, u64::from(task.prefix), task.map);

    if n == task.count {
        Ok(out)
    } else {
        Err(SolverError::TaskCountMismatch {
            id,
            expected: task.count,
            actual: n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_zero_runs_to_the_documented_completion() {
        let mut stack = SearchStack::new();
        let out = run_task(&mut stack, 0).expect("task 0 should complete cleanly");
        assert_eq!(out.len(), TASK_TABLE[0].count as usize);
    }

    #[test]
    #[ignore = "runs the full 67,108,864-sequence search; see tests/full_solve.rs"]
    fn every_task_in_the_catalog_completes_without_error() {
        let mut stack = SearchStack::new();
        for id in 0..dbs26_core::TASK_COUNT {
            let out = run_task(&mut stack, id).unwrap_or_else(|e| panic!("task {id}: {e}"));
            assert_eq!(out.len(), TASK_TABLE[id].count as usize);
        }
    }
}
