// crates/dbs26-core/src/bits.rs

//! Bit-run primitives: count a run of leading or trailing one-bits.
//!
//! The DFS core (`dbs26-scheduler`) uses these to bound the next legal
//! six-bit chunk from the run of set bits at either end of the occupancy
//! map. The hardware count-leading/trailing-zero instructions these are
//! built on are undefined for an all-zero operand, which is why every
//! primitive here inverts its input first and explicitly saturates the
//! all-ones case instead of falling through to `leading_zeros`/`trailing_zeros`
//! on a value that would make the inversion zero.

/// Number of consecutive 1-bits starting at the least-significant end of `x`.
///
/// Equivalent to `(!x).trailing_zeros()`; the all-ones input is saturated
/// to the bit width explicitly rather than left to fall out of the
/// identity, since the algorithm relies on that saturation at the
/// end-of-map case.
#[inline]
#[must_use]
pub const fn count_lsb_1_u32(x: u32) -> u32 {
    if x == u32::MAX {
        u32::BITS
    } else {
        (!x).trailing_zeros()
    }
}

/// 64-bit counterpart of [`count_lsb_1_u32`].
#[inline]
#[must_use]
pub const fn count_lsb_1_u64(x: u64) -> u32 {
    if x == u64::MAX {
        u64::BITS
    } else {
        (!x).trailing_zeros()
    }
}

/// Number of consecutive 1-bits starting at the most-significant end of `x`.
///
/// Equivalent to `(!x).leading_zeros()`, with the same explicit all-ones
/// saturation as [`count_lsb_1_u32`].
#[inline]
#[must_use]
pub const fn count_msb_1_u32(x: u32) -> u32 {
    if x == u32::MAX {
        u32::BITS
    } else {
        (!x).leading_zeros()
    }
}

/// 64-bit counterpart of [`count_msb_1_u32`].
#[inline]
#[must_use]
pub const fn count_msb_1_u64(x: u64) -> u32 {
    if x == u64::MAX {
        u64::BITS
    } else {
        (!x).leading_zeros()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lsb_all_ones_saturates() {
        assert_eq!(count_lsb_1_u32(u32::MAX), 32);
        assert_eq!(count_lsb_1_u64(u64::MAX), 64);
    }

    #[test]
    fn msb_all_ones_saturates() {
        assert_eq!(count_msb_1_u32(u32::MAX), 32);
        assert_eq!(count_msb_1_u64(u64::MAX), 64);
    }

    #[test]
    fn lsb_counts_trailing_run() {
        assert_eq!(count_lsb_1_u64(0), 0);
        assert_eq!(count_lsb_1_u64(0b1), 1);
        assert_eq!(count_lsb_1_u64(0b111), 3);
        assert_eq!(count_lsb_1_u64(0b1011), 2); // run stops at the 0 in bit position 2
    }

    #[test]
    fn msb_counts_leading_run() {
        assert_eq!(count_msb_1_u64(0), 0);
        assert_eq!(count_msb_1_u32(1 << 31), 1);
        assert_eq!(count_msb_1_u32(0b111 << 29), 3);
    }

    #[test]
    fn zero_has_no_run_at_either_end() {
        assert_eq!(count_lsb_1_u32(0), 0);
        assert_eq!(count_msb_1_u32(0), 0);
    }

    proptest::proptest! {
        #[test]
        fn lsb_matches_naive_scan(x: u64) {
            let expected = (0u32..64).take_while(|&i| x & (1 << i) != 0).count() as u32;
            proptest::prop_assert_eq!(count_lsb_1_u64(x), expected);
        }

        #[test]
        fn msb_matches_naive_scan(x: u64) {
            let expected = (0u32..64).take_while(|&i| x & (1 << (63 - i)) != 0).count() as u32;
            proptest::prop_assert_eq!(count_msb_1_u64(x), expected);
        }
    }
}
