// crates/dbs26-scheduler/src/dispatcher.rs

//! Lock-free work dispatcher and worker pool.
//!
//! Each worker repeatedly claims the next unclaimed task id from a
//! single shared atomic counter and runs it to completion; there is no
//! shared queue, lock, or work-stealing — just one fetch-add per claim.
//! Completed task buffers land in per-task [`OnceLock`] slots indexed
//! by catalog order, which `dbs26_scheduler::writer` later drains in
//! that same order.

use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::OnceLock;
use std::thread;

use dbs26_core::TASK_COUNT;
use tracing::warn;

use crate::dfs::SearchStack;
use crate::executor::run_task;

/// Claims task ids from a single shared counter.
///
/// Seeded at `-(TASK_COUNT as i32)` and fetch-added by one per claim, so
/// the first `TASK_COUNT` claims observe negative values; the id is
/// recovered as the bitwise complement of the observed value
/// (`!i as usize`). Once the counter reaches (or passes) zero, every
/// worker sees a non-negative value and stops claiming. This mirrors the
/// reference dispatcher's `atomic_fetch_add` loop bit-for-bit.
struct Dispatcher {
    counter: AtomicI32,
}

impl Dispatcher {
    fn new(task_count: usize) -> Self {
        Self {
            counter: AtomicI32::new(-(task_count as i32)),
        }
    }

    /// Claim the next task id, or `None` once the catalog is exhausted.
    fn claim(&self) -> Option<usize> {
        let i = self.counter.fetch_add(1, Ordering::Relaxed);
        if i < 0 {
            #[allow(clippy::cast_sign_loss)]
            Some(!i as usize)
        } else {
            None
        }
    }
}

/// Outcome of one worker thread's share of the search.
struct WorkerReport {
    /// Sum of sequences produced by every task this worker completed.
    produced: u64,
}

/// Drives the parallel search over the whole task catalog.
pub struct Solver {
    n_workers: usize,
}

impl Solver {
    /// Create a solver that will use `n_workers` threads. `n_workers`
    /// must be at least 1; callers resolve `0` (meaning "autodetect") to
    /// [`std::thread::available_parallelism`] before constructing this.
    #[must_use]
    pub fn new(n_workers: usize) -> Self {
        Self { n_workers }
    }

    /// Run the full catalog to completion.
    ///
    /// Returns the per-task result slots (in catalog order, `None` for
    /// any task that failed to allocate or produced a mismatched count)
    /// and the total number of sequences successfully produced.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SolverError::NoWorkersSpawned`] if every worker
    /// thread failed to spawn.
    pub fn solve(
        &self,
    ) -> Result<(Vec<Option<Vec<u64>>>, u64), crate::SolverError> {
        let dispatcher = Dispatcher::new(TASK_COUNT);
        let slots: Vec<OnceLock<Vec<u64>>> = (0..TASK_COUNT).map(|_| OnceLock::new()).collect();

        let (spawned, total) = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(self.n_workers);
            for worker_id in 0..self.n_workers {
                let dispatcher = &dispatcher;
                let slots = &slots;
                let spawn_result = thread::Builder::new()
                    .name(format!("dbs26-worker-{worker_id}"))
                    .spawn_scoped(scope, move || worker_loop(worker_id, dispatcher, slots));
                match spawn_result {
                    Ok(handle) => handles.push(handle),
                    Err(e) => warn!(worker = worker_id, error = %e, "failed to spawn worker thread"),
                }
            }

            let spawned = handles.len();
            let total = handles
                .into_iter()
                .map(|h| h.join().map(|r| r.produced).unwrap_or(0))
                .sum::<u64>();
            (spawned, total)
        });

        if spawned == 0 {
            return Err(crate::SolverError::NoWorkersSpawned);
        }

        let results = slots.into_iter().map(OnceLock::into_inner).collect();
        Ok((results, total))
    }
}

fn worker_loop(
    worker_id: usize,
    dispatcher: &Dispatcher,
    slots: &[OnceLock<Vec<u64>>],
) -> WorkerReport {
    let mut stack = SearchStack::new();
    let mut produced = 0u64;

    while let Some(id) = dispatcher.claim() {
        match run_task(&mut stack, id) {
            Ok(buf) => {
                produced += buf.len() as u64;
                // Each id is claimed by exactly one worker; this slot is
                // never written twice.
                let _ = slots[id].set(buf);
            }
            Err(e) => {
                warn!(worker = worker_id, task = id, error = %e, "task did not complete cleanly");
            }
        }
    }

    WorkerReport { produced }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_claims_every_id_exactly_once_across_workers() {
        let dispatcher = Dispatcher::new(20);
        let mut claimed = Vec::new();
        while let Some(id) = dispatcher.claim() {
            claimed.push(id);
        }
        claimed.sort_unstable();
        assert_eq!(claimed, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn dispatcher_of_zero_tasks_claims_nothing() {
        let dispatcher = Dispatcher::new(0);
        assert!(dispatcher.claim().is_none());
    }
}
