#![cfg(feature = "proptest")]

use {
    proptest::{collection::SizeRange, prelude::*},
    connectivity::{
        input::PairStream,
        Algorithm,
        CompressedWeightedQuickUnion,
        Counters,
        Outcome,
        QuickFind,
        QuickUnion,
        UnionFind,
        WeightedQuickUnion,
    },
};

fn streams() -> impl Strategy<Value = PairStream> {
    any_with::<PairStream>((1 .. 40, SizeRange::from(0 .. 80)))
}

/// Asserts the properties every strategy keeps after each pair.
fn check_prefixes<U: UnionFind>(stream: &PairStream) -> Result<U, TestCaseError> {
    let mut set = U::with_len(stream.len).unwrap();
    let mut counters = Counters::default();

    for &(p, q) in &stream.pairs {
        set.union(p, q, &mut counters).unwrap();

        prop_assert_eq!(set.amount_of_sets(), stream.len - counters.links_cnt);

        // Following the pointers from any element reaches a fixed point within `len` steps.
        for start in 0 .. stream.len {
            let mut index = start;
            let mut steps = 0;

            while set.id()[index] != index {
                index = set.id()[index];
                steps += 1;
                prop_assert!(steps < stream.len);
            }
        }
    }

    let groups = set.components().unwrap();
    prop_assert_eq!(groups.len(), stream.len - counters.links_cnt);

    let mut members: Vec<usize> = groups.into_iter().flatten().collect();
    members.sort();
    prop_assert_eq!(members, (0 .. stream.len).collect::<Vec<_>>());

    Ok(set)
}

/// Asserts that a pair that is already connected changes nothing but the counters of the check.
fn check_discard<U: UnionFind + Clone>(stream: &PairStream) -> Result<(), TestCaseError> {
    let mut set = U::with_len(stream.len).unwrap();
    let mut counters = Counters::default();

    for &(p, q) in &stream.pairs {
        set.union(p, q, &mut counters).unwrap();

        let before = set.clone();
        let before_counters = counters;

        prop_assert_eq!(set.union(p, q, &mut counters).unwrap(), Outcome::Discarded);
        prop_assert_eq!(set.id(), before.id());
        prop_assert_eq!(counters.links_cnt, before_counters.links_cnt);
        prop_assert_eq!(counters.union_cnt, before_counters.union_cnt);
        prop_assert!(counters.find_cnt > before_counters.find_cnt);
    }

    Ok(())
}

/// Asserts that a discarded pair leaves the size array of a weighted strategy alone.
fn check_discard_sizes<U: UnionFind + Clone>(
    stream: &PairStream,
    sizes: fn(&U) -> &[usize],
) -> Result<(), TestCaseError> {
    let mut set = U::with_len(stream.len).unwrap();
    let mut counters = Counters::default();

    for &(p, q) in &stream.pairs {
        set.union(p, q, &mut counters).unwrap();

        let before = set.clone();

        prop_assert_eq!(set.union(q, p, &mut counters).unwrap(), Outcome::Discarded);
        prop_assert_eq!(sizes(&set), sizes(&before));
        prop_assert_eq!(set.id(), before.id());
    }

    Ok(())
}

fn size_of_roots(sizes: &[usize], id: &[usize]) -> usize {
    (0 .. id.len()).filter(|&index| id[index] == index).map(|index| sizes[index]).sum()
}

proptest! {
    #[test]
    fn every_strategy_keeps_a_partition(stream in streams()) {
        check_prefixes::<QuickFind>(&stream)?;
        check_prefixes::<QuickUnion>(&stream)?;
        check_prefixes::<WeightedQuickUnion>(&stream)?;
        check_prefixes::<CompressedWeightedQuickUnion>(&stream)?;
    }

    #[test]
    fn strategies_agree(stream in streams()) {
        let quick_find = check_prefixes::<QuickFind>(&stream)?;
        let quick_union = check_prefixes::<QuickUnion>(&stream)?;
        let weighted = check_prefixes::<WeightedQuickUnion>(&stream)?;
        let compressed = check_prefixes::<CompressedWeightedQuickUnion>(&stream)?;

        let mut counters = Counters::default();

        for p in 0 .. stream.len {
            for q in 0 .. stream.len {
                let expected = quick_find.connected(p, q, &mut counters).unwrap();

                prop_assert_eq!(quick_union.connected(p, q, &mut counters).unwrap(), expected);
                prop_assert_eq!(weighted.connected(p, q, &mut counters).unwrap(), expected);
                prop_assert_eq!(compressed.connected(p, q, &mut counters).unwrap(), expected);
            }
        }

        prop_assert_eq!(quick_find.components(), quick_union.components());
        prop_assert_eq!(quick_find.components(), weighted.components());
        prop_assert_eq!(quick_find.components(), compressed.components());
    }

    #[test]
    fn discarding_is_idempotent(stream in streams()) {
        check_discard::<QuickFind>(&stream)?;
        check_discard::<QuickUnion>(&stream)?;
        check_discard::<WeightedQuickUnion>(&stream)?;
        check_discard::<CompressedWeightedQuickUnion>(&stream)?;
        check_discard_sizes::<WeightedQuickUnion>(&stream, WeightedQuickUnion::sizes)?;
        check_discard_sizes::<CompressedWeightedQuickUnion>(&stream, CompressedWeightedQuickUnion::sizes)?;
    }

    #[test]
    fn weighted_sizes_and_height(stream in streams()) {
        let weighted = check_prefixes::<WeightedQuickUnion>(&stream)?;
        let compressed = check_prefixes::<CompressedWeightedQuickUnion>(&stream)?;

        prop_assert_eq!(size_of_roots(weighted.sizes(), weighted.id()), stream.len);
        prop_assert_eq!(size_of_roots(compressed.sizes(), compressed.id()), stream.len);

        let max_height = (usize::BITS - 1 - stream.len.leading_zeros()) as usize;
        for index in 0 .. stream.len {
            prop_assert!(weighted.depth(index) <= max_height);
            prop_assert!(compressed.depth(index) <= max_height);
        }
    }

    #[test]
    fn compression_never_lengthens_a_walk(stream in streams()) {
        let mut weighted = WeightedQuickUnion::with_len(stream.len).unwrap();
        let mut compressed = CompressedWeightedQuickUnion::with_len(stream.len).unwrap();
        let mut counters = Counters::default();

        for &(p, q) in &stream.pairs {
            weighted.union(p, q, &mut counters).unwrap();
            compressed.union(p, q, &mut counters).unwrap();

            for index in 0 .. stream.len {
                prop_assert!(compressed.depth(index) <= weighted.depth(index));

                let mut weighted_query = Counters::default();
                let mut compressed_query = Counters::default();
                weighted.connected(p, index, &mut weighted_query).unwrap();
                compressed.connected(p, index, &mut compressed_query).unwrap();
                prop_assert!(compressed_query.find_cnt <= weighted_query.find_cnt);
            }
        }
    }

    #[test]
    fn reports_agree(stream in streams()) {
        let reports: Vec<_> = Algorithm::ALL.iter()
            .map(|algorithm| algorithm.run(stream.len, stream.iter()).unwrap())
            .collect();

        for report in &reports {
            prop_assert_eq!(report.pairs_cnt, stream.pairs.len());
            prop_assert_eq!(report.groups.len(), report.component_count());
            prop_assert_eq!(report.total_cnt, report.find_cnt + report.union_cnt);
            prop_assert_eq!(&report.steps, &reports[0].steps);
        }
    }
}
