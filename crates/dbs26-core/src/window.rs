// crates/dbs26-core/src/window.rs

//! Window occupancy validator.
//!
//! Probes `num` consecutive six-bit windows of a candidate sequence
//! against an occupancy bitmap, marking each as seen. The probe fails
//! the instant a window value repeats.

use crate::SUB_MASK;

/// Test bit `pos` of `map`: if unset, set it and return `false` ("not
/// seen before"); if already set, leave `map` untouched and return `true`
/// ("collision").
#[inline]
fn seen(map: &mut u64, pos: u64) -> bool {
    let bit = 1u64 << pos;
    if *map & bit != 0 {
        return true;
    }
    *map |= bit;
    false
}

/// Probe `num` consecutive six-bit windows of `seq` (least-significant
/// window first, shifting right by one bit between probes) against `map`.
///
/// Returns the updated occupancy map on success, or `0` if any of the
/// `num` probed windows had already been marked seen. `num` must be at
/// most 6 in all call sites; this function never inspects bits of `seq`
/// beyond the window positions it probes.
#[inline]
#[must_use]
pub fn validate_map(mut seq: u64, mut map: u64, mut num: u32) -> u64 {
    loop {
        if seen(&mut map, seq & SUB_MASK) {
            return 0;
        }
        num -= 1;
        if num == 0 {
            return map;
        }
        seq >>= 1;
    }
}

/// Identical probe loop to [`validate_map`], but returns the rotated
/// `seq` (after `num - 1` right-shifts) on success instead of the
/// updated map. Used only at the terminal DFS frame, where the caller
/// needs the finished sequence value rather than its occupancy map.
#[inline]
#[must_use]
pub fn validate_seq(mut seq: u64, mut map: u64, mut num: u32) -> u64 {
    loop {
        if seen(&mut map, seq & SUB_MASK) {
            return 0;
        }
        num -= 1;
        if num == 0 {
            return seq;
        }
        seq >>= 1;
    }
}

/// Left-rotate a 64-bit sequence by `off` bits (`0 <= off < 64`).
#[inline]
#[must_use]
pub const fn rol_64(seq: u64, off: u32) -> u64 {
    seq.rotate_left(off)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_map_accepts_disjoint_windows() {
        // seq's low 6 bits probe window 0, then (after one right shift)
        // window (seq >> 1) & 0x3f. Pick a seq where both are distinct.
        let seq = 0b000001u64; // window 0 = 0b000001 = 1, next window = 0
        let map = validate_map(seq, 0, 2);
        assert_ne!(map, 0);
        assert_eq!(map & (1 << 1), 1 << 1);
        assert_eq!(map & 1, 1);
    }

    #[test]
    fn validate_map_rejects_repeated_window() {
        let map_with_0_seen = 1u64; // bit 0 already marked
        let seq = 0u64; // window value 0, already seen
        assert_eq!(validate_map(seq, map_with_0_seen, 1), 0);
    }

    #[test]
    fn validate_map_never_marks_more_than_num_bits() {
        let seq = 0u64;
        let map = validate_map(seq, 0, 1);
        assert_eq!(map.count_ones(), 1);
    }

    #[test]
    fn validate_seq_returns_rotated_value_on_success() {
        let seq = 0b10u64;
        let got = validate_seq(seq, 0, 1);
        assert_eq!(got, seq);
    }

    #[test]
    fn rol_64_matches_shift_definition() {
        let seq = 0x8000_0000_0000_0001u64;
        assert_eq!(rol_64(seq, 1), seq << 1 | seq >> 63);
        assert_eq!(rol_64(seq, 5), seq << 5 | seq >> 59);
    }

    proptest::proptest! {
        #[test]
        fn validate_map_sets_exactly_num_new_bits_or_fails(
            seq: u64, map: u64, num in 1u32..=6
        ) {
            let result = validate_map(seq, map, num);
            if result != 0 {
                proptest::prop_assert_eq!(result.count_ones(), map.count_ones() + num);
            }
        }
    }
}
