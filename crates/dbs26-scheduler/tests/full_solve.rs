// crates/dbs26-scheduler/tests/full_solve.rs

//! End-to-end coverage of the full catalog. These generate all
//! 67,108,864 sequences and are therefore slow (seconds, not
//! milliseconds) and memory-heavy (the complete output is 512 MiB) —
//! run explicitly with `cargo test -- --ignored`.

use dbs26_core::TOTAL_SEQUENCES;
use dbs26_scheduler::Solver;

fn run_and_check(n_workers: usize) -> Vec<u64> {
    let solver = Solver::new(n_workers);
    let (slots, total) = solver.solve().expect("solve should succeed");
    assert_eq!(total, TOTAL_SEQUENCES);

    let mut all = Vec::with_capacity(total as usize);
    for slot in slots {
        let buf = slot.expect("every task should have completed for a full run");
        all.extend_from_slice(&buf);
    }
    all
}

#[test]
#[ignore = "generates all 67,108,864 sequences"]
fn single_threaded_run_produces_every_sequence_exactly_once() {
    let all = run_and_check(1);
    assert_eq!(all.len(), TOTAL_SEQUENCES as usize);

    let mut seen = std::collections::HashSet::with_capacity(all.len());
    for &seq in &all {
        assert!(seen.insert(seq), "{seq:#018x} produced more than once");
    }
}

#[test]
#[ignore = "generates all 67,108,864 sequences, twice"]
fn thread_count_does_not_change_the_output_set() {
    let one = run_and_check(1);
    let many = run_and_check(4);

    let mut one_sorted = one.clone();
    let mut many_sorted = many.clone();
    one_sorted.sort_unstable();
    many_sorted.sort_unstable();
    assert_eq!(one_sorted, many_sorted);

    // Within each task the search already emits in ascending order, and
    // tasks are concatenated in catalog order, so both runs should come
    // out byte-for-byte identical regardless of worker count.
    assert_eq!(one, many);
}
