//! Property-based tests for the checksum fold.

use proptest::prelude::*;

use mandelbrot_checksum::checksum::BitPacker;
use mandelbrot_checksum::compute::{checksum_parallel, checksum_sequential, Params};

proptest! {
    /// The row-parallel engine must reproduce the sequential byte stream
    /// exactly, whatever the grid size.
    #[test]
    fn parallel_matches_sequential(size in 1u32..48) {
        let params = Params::with_size(size);
        prop_assert_eq!(checksum_parallel(params), checksum_sequential(params));
    }

    /// XOR-folding byte values can never leave the byte range, no matter how
    /// the rows split the bit stream.
    #[test]
    fn folded_sum_stays_within_a_byte(rows in prop::collection::vec(
        prop::collection::vec(any::<bool>(), 1..20),
        1..20,
    )) {
        let mut packer = BitPacker::new();
        for row in &rows {
            for &flag in row {
                packer.push(flag);
            }
            packer.flush_padded();
        }
        prop_assert!(packer.sum() <= 255);
    }

    /// Feeding the concatenated bit stream with per-row padded flushes is
    /// equivalent to XOR-ing each row's padded bytes by hand.
    #[test]
    fn fold_agrees_with_manual_byte_xor(rows in prop::collection::vec(
        prop::collection::vec(any::<bool>(), 1..20),
        1..10,
    )) {
        let mut packer = BitPacker::new();
        let mut expected = 0u32;

        for row in &rows {
            let mut byte = 0u32;
            let mut bits = 0;
            for &flag in row {
                byte = (byte << 1) | flag as u32;
                bits += 1;
                if bits == 8 {
                    expected ^= byte;
                    byte = 0;
                    bits = 0;
                }
                packer.push(flag);
            }
            if bits != 0 {
                expected ^= byte << (8 - bits);
            }
            packer.flush_padded();
        }

        prop_assert_eq!(packer.sum(), expected);
    }
}
