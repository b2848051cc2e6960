// crates/dbs26-core/src/task_table.rs

//! The static 186-entry task catalog.
//!
//! Each entry seeds one independent subtree of the global DFS: a 16-bit
//! prefix (the top bits of the working sequence), the occupancy map those
//! prefix bits already induce, and the exact number of completed B(2,6)
//! sequences that subtree will yield. The catalog is reproduced
//! byte-for-byte from the reference implementation's hard-coded table
//! rather than regenerated, per the reproducibility requirement on this
//! table: any conforming implementation must reach the same 186 rows in
//! the same order.
//!
//! `Σ count == TOTAL_SEQUENCES` is checked by a unit test below, not just
//! asserted in prose.

use crate::TOTAL_SEQUENCES;

/// One row of the static task catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskEntry {
    /// Top 16 bits of the working sequence for this subtree.
    pub prefix: u16,
    /// Occupancy bitmap already induced by `prefix` (plus one sentinel
    /// bit from the wrap-around window at the top of the sequence).
    pub map: u64,
    /// Exact number of completed B(2,6) sequences this subtree yields.
    pub count: u32,
}

/// Number of rows in the task catalog.
pub const TASK_COUNT: usize = 186;

/// The static task catalog, in ascending catalog order. Catalog order is
/// the order the output writer concatenates task buffers in; it is not
/// necessarily the order workers claim task ids in (see
/// `dbs26_scheduler::dispatcher`).
pub static TASK_TABLE: [TaskEntry; TASK_COUNT] = [
    TaskEntry { prefix: 0x810c, map: 0x000000030001115f, count: 475136 },
    TaskEntry { prefix: 0x810d, map: 0x000000030001215f, count: 540672 },
    TaskEntry { prefix: 0x810e, map: 0x000000030001419f, count: 507904 },
    TaskEntry { prefix: 0x810f, map: 0x000000030001819f, count: 507904 },
    TaskEntry { prefix: 0x8114, map: 0x0000000500120537, count: 294912 },
    TaskEntry { prefix: 0x8115, map: 0x0000000500220537, count: 688128 },
    TaskEntry { prefix: 0x8116, map: 0x0000000500420937, count: 524288 },
    TaskEntry { prefix: 0x8117, map: 0x0000000500820937, count: 524288 },
    TaskEntry { prefix: 0x8118, map: 0x0000000901021157, count: 245760 },
    TaskEntry { prefix: 0x8119, map: 0x0000000902021157, count: 327680 },
    TaskEntry { prefix: 0x811a, map: 0x0000000904022157, count: 227328 },
    TaskEntry { prefix: 0x811b, map: 0x0000000908022157, count: 313344 },
    TaskEntry { prefix: 0x811c, map: 0x0000000910024197, count: 253952 },
    TaskEntry { prefix: 0x811d, map: 0x0000000920024197, count: 303104 },
    TaskEntry { prefix: 0x811e, map: 0x0000000940028197, count: 278528 },
    TaskEntry { prefix: 0x811f, map: 0x0000000980028197, count: 278528 },
    TaskEntry { prefix: 0x8121, map: 0x0000001300050317, count: 720896 },
    TaskEntry { prefix: 0x8122, map: 0x0000001500060317, count: 720896 },
    TaskEntry { prefix: 0x8123, map: 0x0000001900060317, count: 786432 },
    TaskEntry { prefix: 0x8128, map: 0x0000012100140617, count: 196608 },
    TaskEntry { prefix: 0x8129, map: 0x0000022100140617, count: 262144 },
    TaskEntry { prefix: 0x812a, map: 0x0000042100240617, count: 458752 },
    TaskEntry { prefix: 0x812b, map: 0x0000082100240617, count: 524288 },
    TaskEntry { prefix: 0x812c, map: 0x0000102100440a17, count: 286720 },
    TaskEntry { prefix: 0x812d, map: 0x0000202100440a17, count: 434176 },
    TaskEntry { prefix: 0x812e, map: 0x0000402100840a17, count: 360448 },
    TaskEntry { prefix: 0x812f, map: 0x0000802100840a17, count: 360448 },
    TaskEntry { prefix: 0x8130, map: 0x0001004101081217, count: 206848 },
    TaskEntry { prefix: 0x8131, map: 0x0002004101081217, count: 399360 },
    TaskEntry { prefix: 0x8132, map: 0x0004004102081217, count: 311296 },
    TaskEntry { prefix: 0x8133, map: 0x0008004102081217, count: 425984 },
    TaskEntry { prefix: 0x8134, map: 0x0010004104082217, count: 265216 },
    TaskEntry { prefix: 0x8135, map: 0x0020004104082217, count: 320512 },
    TaskEntry { prefix: 0x8136, map: 0x0040004108082217, count: 324608 },
    TaskEntry { prefix: 0x8137, map: 0x0080004108082217, count: 433152 },
    TaskEntry { prefix: 0x8138, map: 0x0100008110084217, count: 278528 },
    TaskEntry { prefix: 0x8139, map: 0x0200008110084217, count: 311296 },
    TaskEntry { prefix: 0x813a, map: 0x0400008120084217, count: 355328 },
    TaskEntry { prefix: 0x813b, map: 0x0800008120084217, count: 398336 },
    TaskEntry { prefix: 0x813c, map: 0x1000008140088217, count: 294912 },
    TaskEntry { prefix: 0x813d, map: 0x2000008140088217, count: 376832 },
    TaskEntry { prefix: 0x813f, map: 0x8000008180088217, count: 671744 },
    TaskEntry { prefix: 0x8143, map: 0x000001030011042f, count: 327680 },
    TaskEntry { prefix: 0x8144, map: 0x0000010500120437, count: 327680 },
    TaskEntry { prefix: 0x8146, map: 0x0000010900120467, count: 229376 },
    TaskEntry { prefix: 0x8147, map: 0x00000109001204a7, count: 229376 },
    TaskEntry { prefix: 0x8148, map: 0x0000021100140527, count: 196608 },
    TaskEntry { prefix: 0x8149, map: 0x0000021100140627, count: 196608 },
    TaskEntry { prefix: 0x814b, map: 0x0000022100140c27, count: 458752 },
    TaskEntry { prefix: 0x814c, map: 0x0000024100181427, count: 163840 },
    TaskEntry { prefix: 0x814d, map: 0x0000024100182427, count: 163840 },
    TaskEntry { prefix: 0x814e, map: 0x0000028100184427, count: 163840 },
    TaskEntry { prefix: 0x814f, map: 0x0000028100188427, count: 163840 },
    TaskEntry { prefix: 0x8150, map: 0x0000050100310427, count: 327680 },
    TaskEntry { prefix: 0x8151, map: 0x0000050100320427, count: 786432 },
    TaskEntry { prefix: 0x8152, map: 0x0000060100340427, count: 851968 },
    TaskEntry { prefix: 0x8153, map: 0x0000060100380427, count: 655360 },
    TaskEntry { prefix: 0x8158, map: 0x0000180101600427, count: 286720 },
    TaskEntry { prefix: 0x8159, map: 0x0000180102600427, count: 368640 },
    TaskEntry { prefix: 0x815a, map: 0x0000280104600427, count: 458752 },
    TaskEntry { prefix: 0x815b, map: 0x0000280108600427, count: 458752 },
    TaskEntry { prefix: 0x815c, map: 0x0000480110a00427, count: 393216 },
    TaskEntry { prefix: 0x815d, map: 0x0000480120a00427, count: 393216 },
    TaskEntry { prefix: 0x815e, map: 0x0000880140a00427, count: 393216 },
    TaskEntry { prefix: 0x815f, map: 0x0000880180a00427, count: 393216 },
    TaskEntry { prefix: 0x8161, map: 0x0001100301400827, count: 264704 },
    TaskEntry { prefix: 0x8162, map: 0x0002100501400827, count: 264704 },
    TaskEntry { prefix: 0x8163, map: 0x0002100901400827, count: 216064 },
    TaskEntry { prefix: 0x8164, map: 0x0004101102400827, count: 231424 },
    TaskEntry { prefix: 0x8165, map: 0x0004102102400827, count: 216064 },
    TaskEntry { prefix: 0x8166, map: 0x0008104102400827, count: 243712 },
    TaskEntry { prefix: 0x8167, map: 0x0008108102400827, count: 267264 },
    TaskEntry { prefix: 0x8168, map: 0x0010210104400827, count: 219136 },
    TaskEntry { prefix: 0x8169, map: 0x0010220104400827, count: 337920 },
    TaskEntry { prefix: 0x816a, map: 0x0020240104400827, count: 458752 },
    TaskEntry { prefix: 0x816b, map: 0x0020280104400827, count: 229376 },
    TaskEntry { prefix: 0x816c, map: 0x0040300108400827, count: 524288 },
    TaskEntry { prefix: 0x816e, map: 0x0080600108400827, count: 360448 },
    TaskEntry { prefix: 0x816f, map: 0x0080a00108400827, count: 360448 },
    TaskEntry { prefix: 0x8170, map: 0x0101400110800827, count: 162176 },
    TaskEntry { prefix: 0x8171, map: 0x0102400110800827, count: 294528 },
    TaskEntry { prefix: 0x8172, map: 0x0204400110800827, count: 275200 },
    TaskEntry { prefix: 0x8173, map: 0x0208400110800827, count: 316672 },
    TaskEntry { prefix: 0x8174, map: 0x0410400120800827, count: 196608 },
    TaskEntry { prefix: 0x8175, map: 0x0420400120800827, count: 245760 },
    TaskEntry { prefix: 0x8176, map: 0x0840400120800827, count: 344064 },
    TaskEntry { prefix: 0x8177, map: 0x0880400120800827, count: 262144 },
    TaskEntry { prefix: 0x8178, map: 0x1100800140800827, count: 228352 },
    TaskEntry { prefix: 0x8179, map: 0x1200800140800827, count: 295936 },
    TaskEntry { prefix: 0x817a, map: 0x2400800140800827, count: 221184 },
    TaskEntry { prefix: 0x817b, map: 0x2800800140800827, count: 303104 },
    TaskEntry { prefix: 0x817e, map: 0xc000800180800827, count: 1048576 },
    TaskEntry { prefix: 0x8184, map: 0x000100030100105f, count: 516096 },
    TaskEntry { prefix: 0x8185, map: 0x000100030100106f, count: 589824 },
    TaskEntry { prefix: 0x8188, map: 0x000200050100115b, count: 245760 },
    TaskEntry { prefix: 0x8189, map: 0x000200050100125b, count: 417792 },
    TaskEntry { prefix: 0x818a, map: 0x000200050100146b, count: 325632 },
    TaskEntry { prefix: 0x818b, map: 0x000200050100186b, count: 337920 },
    TaskEntry { prefix: 0x818e, map: 0x00020009010050cb, count: 552960 },
    TaskEntry { prefix: 0x818f, map: 0x00020009010090cb, count: 552960 },
    TaskEntry { prefix: 0x8190, map: 0x000400110201114b, count: 206848 },
    TaskEntry { prefix: 0x8191, map: 0x000400110202114b, count: 399360 },
    TaskEntry { prefix: 0x8192, map: 0x000400110204124b, count: 311296 },
    TaskEntry { prefix: 0x8193, map: 0x000400110208124b, count: 294912 },
    TaskEntry { prefix: 0x8194, map: 0x000400210210144b, count: 162816 },
    TaskEntry { prefix: 0x8195, map: 0x000400210220144b, count: 353280 },
    TaskEntry { prefix: 0x8196, map: 0x000400210240184b, count: 248832 },
    TaskEntry { prefix: 0x8197, map: 0x000400210280184b, count: 267264 },
    TaskEntry { prefix: 0x819a, map: 0x000800410600304b, count: 589824 },
    TaskEntry { prefix: 0x819b, map: 0x000800410a00304b, count: 737280 },
    TaskEntry { prefix: 0x819c, map: 0x000800811200504b, count: 282624 },
    TaskEntry { prefix: 0x819d, map: 0x000800812200504b, count: 356352 },
    TaskEntry { prefix: 0x819e, map: 0x000800814200904b, count: 319488 },
    TaskEntry { prefix: 0x819f, map: 0x000800818200904b, count: 319488 },
    TaskEntry { prefix: 0x81a1, map: 0x001001030401204b, count: 264704 },
    TaskEntry { prefix: 0x81a2, map: 0x001001050402204b, count: 216064 },
    TaskEntry { prefix: 0x81a3, map: 0x001001090402204b, count: 264704 },
    TaskEntry { prefix: 0x81a4, map: 0x001002110404204b, count: 260096 },
    TaskEntry { prefix: 0x81a5, map: 0x001002210404204b, count: 275456 },
    TaskEntry { prefix: 0x81a6, map: 0x001002410408204b, count: 216064 },
    TaskEntry { prefix: 0x81a7, map: 0x001002810408204b, count: 206848 },
    TaskEntry { prefix: 0x81a8, map: 0x002005010410204b, count: 286720 },
    TaskEntry { prefix: 0x81a9, map: 0x002006010410204b, count: 368640 },
    TaskEntry { prefix: 0x81ab, map: 0x00200c010420204b, count: 655360 },
    TaskEntry { prefix: 0x81ac, map: 0x002018010440204b, count: 98304 },
    TaskEntry { prefix: 0x81ad, map: 0x002028010440204b, count: 229376 },
    TaskEntry { prefix: 0x81ae, map: 0x002048010480204b, count: 163840 },
    TaskEntry { prefix: 0x81af, map: 0x002088010480204b, count: 163840 },
    TaskEntry { prefix: 0x81b0, map: 0x004110010900204b, count: 106496 },
    TaskEntry { prefix: 0x81b1, map: 0x004210010900204b, count: 237568 },
    TaskEntry { prefix: 0x81b2, map: 0x004410010a00204b, count: 278528 },
    TaskEntry { prefix: 0x81b3, map: 0x004810010a00204b, count: 294912 },
    TaskEntry { prefix: 0x81b4, map: 0x005020010c00204b, count: 524288 },
    TaskEntry { prefix: 0x81b5, map: 0x006020010c00204b, count: 589824 },
    TaskEntry { prefix: 0x81b8, map: 0x018040011800204b, count: 293888 },
    TaskEntry { prefix: 0x81b9, map: 0x028040011800204b, count: 377856 },
    TaskEntry { prefix: 0x81ba, map: 0x048040012800204b, count: 344064 },
    TaskEntry { prefix: 0x81bb, map: 0x088040012800204b, count: 327680 },
    TaskEntry { prefix: 0x81bc, map: 0x108080014800204b, count: 335872 },
    TaskEntry { prefix: 0x81bd, map: 0x208080014800204b, count: 335872 },
    TaskEntry { prefix: 0x81bf, map: 0x808080018800204b, count: 671744 },
    TaskEntry { prefix: 0x81c2, map: 0x010100031000408f, count: 460800 },
    TaskEntry { prefix: 0x81c4, map: 0x010200051000409b, count: 276480 },
    TaskEntry { prefix: 0x81c5, map: 0x01020005100040ab, count: 276480 },
    TaskEntry { prefix: 0x81c6, map: 0x01020009100040cb, count: 460800 },
    TaskEntry { prefix: 0x81c8, map: 0x020400111000418b, count: 278528 },
    TaskEntry { prefix: 0x81c9, map: 0x020400111000428b, count: 278528 },
    TaskEntry { prefix: 0x81ca, map: 0x020400211000448b, count: 243712 },
    TaskEntry { prefix: 0x81cb, map: 0x020400211000488b, count: 243712 },
    TaskEntry { prefix: 0x81cc, map: 0x020800411000508b, count: 299008 },
    TaskEntry { prefix: 0x81cd, map: 0x020800411000608b, count: 299008 },
    TaskEntry { prefix: 0x81cf, map: 0x020800811000c08b, count: 552960 },
    TaskEntry { prefix: 0x81d0, map: 0x041001012001408b, count: 162176 },
    TaskEntry { prefix: 0x81d1, map: 0x041001012002408b, count: 294528 },
    TaskEntry { prefix: 0x81d2, map: 0x041002012004408b, count: 331008 },
    TaskEntry { prefix: 0x81d3, map: 0x041002012008408b, count: 260864 },
    TaskEntry { prefix: 0x81d4, map: 0x042004012010408b, count: 393216 },
    TaskEntry { prefix: 0x81d5, map: 0x042004012020408b, count: 393216 },
    TaskEntry { prefix: 0x81d6, map: 0x042008012040408b, count: 196608 },
    TaskEntry { prefix: 0x81d7, map: 0x042008012080408b, count: 196608 },
    TaskEntry { prefix: 0x81d8, map: 0x084010012100408b, count: 293888 },
    TaskEntry { prefix: 0x81d9, map: 0x084010012200408b, count: 377856 },
    TaskEntry { prefix: 0x81da, map: 0x084020012400408b, count: 376832 },
    TaskEntry { prefix: 0x81db, map: 0x084020012800408b, count: 376832 },
    TaskEntry { prefix: 0x81dc, map: 0x088040013000408b, count: 507904 },
    TaskEntry { prefix: 0x81de, map: 0x088080016000408b, count: 278528 },
    TaskEntry { prefix: 0x81df, map: 0x08808001a000408b, count: 278528 },
    TaskEntry { prefix: 0x81e1, map: 0x110100034000808b, count: 230400 },
    TaskEntry { prefix: 0x81e2, map: 0x110200054000808b, count: 276480 },
    TaskEntry { prefix: 0x81e3, map: 0x110200094000808b, count: 230400 },
    TaskEntry { prefix: 0x81e4, map: 0x120400114000808b, count: 278528 },
    TaskEntry { prefix: 0x81e5, map: 0x120400214000808b, count: 243712 },
    TaskEntry { prefix: 0x81e6, map: 0x120800414000808b, count: 299008 },
    TaskEntry { prefix: 0x81e7, map: 0x120800814000808b, count: 276480 },
    TaskEntry { prefix: 0x81e8, map: 0x241001014000808b, count: 228352 },
    TaskEntry { prefix: 0x81e9, map: 0x241002014000808b, count: 295936 },
    TaskEntry { prefix: 0x81ea, map: 0x242004014000808b, count: 393216 },
    TaskEntry { prefix: 0x81eb, map: 0x242008014000808b, count: 196608 },
    TaskEntry { prefix: 0x81ec, map: 0x284010014000808b, count: 335872 },
    TaskEntry { prefix: 0x81ed, map: 0x284020014000808b, count: 376832 },
    TaskEntry { prefix: 0x81ee, map: 0x288040014000808b, count: 278528 },
    TaskEntry { prefix: 0x81ef, map: 0x288080014000808b, count: 253952 },
    TaskEntry { prefix: 0x81f8, map: 0xd10000018000808b, count: 737280 },
    TaskEntry { prefix: 0x81f9, map: 0xd20000018000808b, count: 1097728 },
    TaskEntry { prefix: 0x81fa, map: 0xe40000018000808b, count: 1114112 },
    TaskEntry { prefix: 0x81fb, map: 0xe80000018000808b, count: 1245184 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_expected_row_count() {
        assert_eq!(TASK_TABLE.len(), TASK_COUNT);
    }

    #[test]
    fn counts_sum_to_total_sequences() {
        let sum: u64 = TASK_TABLE.iter().map(|t| u64::from(t.count)).sum();
        assert_eq!(sum, TOTAL_SEQUENCES);
    }

    #[test]
    fn every_map_has_eleven_bits_set() {
        for t in &TASK_TABLE {
            assert_eq!(
                t.map.count_ones(),
                11,
                "prefix {:#06x} has map popcount {}",
                t.prefix,
                t.map.count_ones()
            );
        }
    }

    #[test]
    fn prefixes_are_strictly_ascending() {
        for pair in TASK_TABLE.windows(2) {
            assert!(pair[0].prefix < pair[1].prefix);
        }
    }

    #[test]
    fn task_zero_matches_the_documented_scenario() {
        let t = TASK_TABLE[0];
        assert_eq!(t.prefix, 0x810c);
        assert_eq!(t.map, 0x0000_0003_0001_115f);
        assert_eq!(t.count, 475_136);
    }
}
