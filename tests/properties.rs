//! Property-based tests using proptest.
//!
//! - Correlation: row count, energy conservation, XOR order independence,
//!   agreement with the point-by-point Walsh sum
//! - DDT: row sums for arbitrary tables, row 0 for permutations, method
//!   agreement, determinism

use proptest::prelude::*;
use sboxstat::{
    combinations, walsh_transform, xor_combine, CorrelationOptions, CorrelationTable, DdtMethod,
    DifferenceDistributionTable, OutputVectors, SBox,
};

/// Domain size `N = 2^m` with `k` random boolean vectors.
fn arb_vector_set() -> impl Strategy<Value = (usize, Vec<Vec<bool>>)> {
    (0u32..=5).prop_flat_map(|m| {
        let n = 1usize << m;
        (
            Just(n),
            prop::collection::vec(prop::collection::vec(any::<bool>(), n), 0..=4),
        )
    })
}

/// Arbitrary (not necessarily bijective) table over `[0, 2^m)`.
fn arb_table() -> impl Strategy<Value = Vec<usize>> {
    (0u32..=5).prop_flat_map(|m| {
        let n = 1usize << m;
        prop::collection::vec(0..n, n)
    })
}

fn arb_permutation() -> impl Strategy<Value = Vec<usize>> {
    (1u32..=5).prop_flat_map(|m| Just((0..1usize << m).collect::<Vec<_>>()).prop_shuffle())
}

fn arb_bipolar() -> impl Strategy<Value = Vec<i64>> {
    (0u32..=6).prop_flat_map(|m| {
        prop::collection::vec(prop_oneof![Just(1i64), Just(-1i64)], 1usize << m)
    })
}

fn parity(x: usize) -> bool {
    x.count_ones() % 2 == 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn table_has_one_row_per_subset((n, vectors) in arb_vector_set()) {
        let k = vectors.len();
        let set = OutputVectors::new(n, vectors).unwrap();
        let table = CorrelationTable::build(&set, CorrelationOptions::default().with_labels());

        prop_assert_eq!(table.len(), 1 << k);
        prop_assert_eq!(table.rows()[0].label(), Some("0"));
        let mut labels: Vec<_> = table.rows().iter().map(|r| r.label().unwrap().to_string()).collect();
        labels.sort();
        labels.dedup();
        prop_assert_eq!(labels.len(), 1 << k);
    }

    #[test]
    fn every_row_conserves_energy((n, vectors) in arb_vector_set()) {
        let set = OutputVectors::new(n, vectors).unwrap();
        let table = CorrelationTable::build(&set, CorrelationOptions::default());
        for row in table.rows() {
            prop_assert_eq!(row.spectrum().len(), n);
            let energy: i64 = row.spectrum().iter().map(|c| c * c).sum();
            prop_assert_eq!(energy, (n * n) as i64);
        }
    }

    #[test]
    fn transform_is_walsh_sum(input in arb_bipolar()) {
        let n = input.len();
        let out = walsh_transform(&input);
        for w in 0..n {
            let expected: i64 = (0..n)
                .map(|x| if parity(w & x) { -input[x] } else { input[x] })
                .sum();
            prop_assert_eq!(out[w], expected, "w = {}", w);
        }
    }

    #[test]
    fn xor_ignores_order((n, vectors) in arb_vector_set()) {
        let forward = xor_combine(n, &vectors);
        let mut reversed = vectors.clone();
        reversed.reverse();
        prop_assert_eq!(&forward, &xor_combine(n, &reversed));
        if vectors.len() >= 2 {
            let mut rotated = vectors.clone();
            rotated.rotate_left(1);
            prop_assert_eq!(&forward, &xor_combine(n, &rotated));
        }
    }

    #[test]
    fn enumeration_is_exhaustive(k in 0usize..=10) {
        let masks: Vec<u32> = combinations(k).map(|c| c.mask()).collect();
        prop_assert_eq!(masks.len(), 1 << k);
        prop_assert!(masks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn ddt_rows_sum_to_n(table in arb_table()) {
        let n = table.len();
        let sbox = SBox::new(table).unwrap();
        let ddt = DifferenceDistributionTable::build(&sbox);
        prop_assert_eq!(ddt.size(), n);
        for a in 0..n {
            prop_assert_eq!(ddt.row(a).iter().sum::<usize>(), n);
        }
    }

    #[test]
    fn permutation_row_zero(table in arb_permutation()) {
        let n = table.len();
        let sbox = SBox::new(table).unwrap();
        prop_assert!(sbox.is_permutation());
        let ddt = DifferenceDistributionTable::build(&sbox);
        prop_assert_eq!(ddt.get(0, 0), n);
        prop_assert!(ddt.row(0)[1..].iter().all(|&c| c == 0));
    }

    #[test]
    fn ddt_methods_agree(table in arb_table()) {
        let sbox = SBox::new(table).unwrap();
        prop_assert_eq!(
            DifferenceDistributionTable::build_with(&sbox, DdtMethod::Naive),
            DifferenceDistributionTable::build_with(&sbox, DdtMethod::Bucketed)
        );
    }

    #[test]
    fn builds_are_deterministic(table in arb_permutation()) {
        let sbox = SBox::new(table).unwrap();
        prop_assert_eq!(
            DifferenceDistributionTable::build(&sbox),
            DifferenceDistributionTable::build(&sbox)
        );
        let options = CorrelationOptions::default().with_labels();
        prop_assert_eq!(
            CorrelationTable::from_sbox(&sbox, options).unwrap(),
            CorrelationTable::from_sbox(&sbox, options).unwrap()
        );
    }
}
