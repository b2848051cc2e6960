// crates/dbs26-core/src/lib.rs

//! Core data types and primitives for enumerating binary De Bruijn
//! sequences B(2, 6): 64-bit words whose 64 cyclic 6-bit windows are a
//! permutation of `0..64`.
//!
//! This crate owns the parts of the search that are pure data or pure
//! arithmetic: bit-run counting, the window occupancy validator, and the
//! static 186-entry task catalog that seeds the parallel search in
//! `dbs26-scheduler`. It has no I/O and no threading of its own.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod bits;
pub mod task_table;
pub mod window;

pub use bits::{count_lsb_1_u32, count_lsb_1_u64, count_msb_1_u32, count_msb_1_u64};
pub use task_table::{TaskEntry, TASK_COUNT, TASK_TABLE};
pub use window::{rol_64, validate_map, validate_seq};

/// Width in bits of one De Bruijn subsequence window.
pub const SUB_LEN: u32 = 6;

/// Total length of a B(2,6) sequence in bits (also the window-value space size).
pub const SEQ_LEN: u32 = 1 << SUB_LEN;

/// Largest representable 6-bit chunk value (`SEQ_LEN - 1`).
pub const SUB_LAST: u64 = (SEQ_LEN - 1) as u64;

/// Mask selecting the low 6 bits of a word (the current window value).
pub const SUB_MASK: u64 = (SEQ_LEN - 1) as u64;

/// Exact number of distinct B(2,6) sequences (Σ over the task table).
pub const TOTAL_SEQUENCES: u64 = 67_108_864;

/// `SEARCH_DEPTH(n) = ((1 << n) - n - 2) / n`, the number of six-bit
/// extension rounds a full B(2,n) search performs below the seeded prefix.
#[must_use]
pub const fn search_depth(n: u32) -> u32 {
    ((1 << n) - n - 2) / n
}

/// Fixed capacity of a per-worker search stack: `SEARCH_DEPTH(6) - 1`.
pub const STACK_CAPACITY: usize = (search_depth(SUB_LEN) - 1) as usize;
