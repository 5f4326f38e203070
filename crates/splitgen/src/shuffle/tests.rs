use crate::{
    CartesianProduct, Characteristics, Error, FeistelNetwork, FeistelShuffler, IndexedSupplier,
    IndexedTraversal, Ordinal, RandSource, SeedPolicy, ShuffledRange, Shuffler,
};
use num::BigUint;
use std::collections::HashSet;

struct FixedRand(u64);

impl RandSource<u64> for FixedRand {
    fn rand(&self) -> u64 {
        self.0
    }
}

fn permutation<I: Ordinal>(shuffler: &impl Shuffler<I>) -> Vec<I> {
    let count = shuffler
        .count()
        .to_u64()
        .expect("test domains fit in a u64");
    (0..count)
        .map(|i| shuffler.shuffled_index(&I::from_u64(i).unwrap()).unwrap())
        .collect()
}

fn run_shuffler_is_a_bijection<I: Ordinal>() {
    for count in (0u64..300).chain([511, 512, 513, 1000, 4097]) {
        for seed in [0u64, 1, 42, u64::MAX] {
            let shuffler = FeistelShuffler::from_seed(I::from_u64(count).unwrap(), seed);
            let mut seen: Vec<u64> = permutation(&shuffler)
                .iter()
                .map(|i| i.to_u64().unwrap())
                .collect();
            seen.sort_unstable();
            assert_eq!(
                seen,
                (0..count).collect::<Vec<_>>(),
                "count {count}, seed {seed}"
            );
        }
    }
}

#[test]
fn shuffler_is_a_bijection_on_every_small_domain() {
    run_shuffler_is_a_bijection::<u32>();
    run_shuffler_is_a_bijection::<u64>();
    run_shuffler_is_a_bijection::<BigUint>();
}

#[test]
fn same_seed_reproduces_the_permutation() {
    let first: Vec<u64> = ShuffledRange::<u64>::seeded(10, 42).collect();
    let second: Vec<u64> = ShuffledRange::<u64>::seeded(10, 42).collect();
    assert_eq!(first, second);

    let shuffler = FeistelShuffler::from_seed(10u64, 42);
    assert_eq!(permutation(&shuffler), first);
}

#[test]
fn index_width_does_not_change_the_permutation() {
    let narrow: Vec<u64> = ShuffledRange::<u64>::seeded(777, 5).collect();
    let wide: Vec<u64> = ShuffledRange::<BigUint>::seeded(BigUint::from(777u32), 5)
        .map(|i| i.to_u64().unwrap())
        .collect();
    assert_eq!(narrow, wide);
}

#[test]
fn different_seeds_give_different_orders() {
    let a: Vec<u64> = ShuffledRange::<u64>::seeded(1000, 1).collect();
    let b: Vec<u64> = ShuffledRange::<u64>::seeded(1000, 2).collect();
    assert_ne!(a, b);
    assert_ne!(a, (0..1000).collect::<Vec<_>>());

    let orders: HashSet<Vec<u64>> = (0..16)
        .map(|seed| ShuffledRange::<u64>::seeded(4, seed).collect())
        .collect();
    assert!(orders.len() > 1);
}

#[test]
fn out_of_range_index_is_rejected() {
    let shuffler = FeistelShuffler::from_seed(10u64, 0);
    assert_eq!(
        shuffler.shuffled_index(&10).unwrap_err(),
        Error::IndexOutOfRange {
            index: "10".into(),
            count: "10".into()
        }
    );

    let empty = FeistelShuffler::from_seed(0u64, 0);
    assert!(empty.shuffled_index(&0).is_err());
}

#[test]
fn empty_and_single_domains() {
    assert_eq!(ShuffledRange::<u64>::seeded(0, 3).next(), None);

    let single: Vec<u64> = ShuffledRange::<u64>::seeded(1, 3).collect();
    assert_eq!(single, vec![0]);
    assert_eq!(FeistelShuffler::from_seed(1u64, 3).bits(), 0);
}

#[test]
fn network_width_covers_the_count() {
    assert_eq!(FeistelShuffler::from_seed(2u64, 0).bits(), 1);
    assert_eq!(FeistelShuffler::from_seed(512u64, 0).bits(), 9);
    assert_eq!(FeistelShuffler::from_seed(513u64, 0).bits(), 10);
    assert_eq!(FeistelShuffler::from_seed(u64::MAX, 0).bits(), 64);
}

#[test]
fn odd_width_network_is_a_bijection() {
    for bits in [1u64, 3, 7, 11] {
        let network = FeistelNetwork::new(bits, 99);
        let domain = 1u64 << bits;

        let word: HashSet<u64> = (0..domain).map(|v| network.permute_u64(v)).collect();
        assert_eq!(word.len() as u64, domain);
        assert!(word.iter().all(|&v| v < domain));

        let big: HashSet<BigUint> = (0..domain)
            .map(|v| network.permute_big(&BigUint::from(v)))
            .collect();
        assert_eq!(big.len() as u64, domain);
        assert!(big.iter().all(|v| *v < BigUint::from(domain)));
    }
}

#[test]
fn wide_domain_stays_in_range_and_distinct() {
    let count = (BigUint::from(1u32) << 70usize) + 5u32;
    let shuffler = FeistelShuffler::from_seed(count.clone(), 17);
    assert_eq!(shuffler.bits(), 71);

    let mut seen = HashSet::new();
    let tail = &count - 1000u32;
    for offset in 0u32..1000 {
        for index in [BigUint::from(offset), &tail + offset] {
            let shuffled = shuffler.shuffled_index(&index).unwrap();
            assert!(shuffled < count);
            assert!(seen.insert(shuffled));
        }
    }
}

#[test]
fn u128_domain_wider_than_a_word() {
    let count = (1u128 << 80) + 3;
    let shuffler = FeistelShuffler::from_seed(count, 8);
    let outputs: HashSet<u128> = (0..500u128)
        .map(|i| shuffler.shuffled_index(&i).unwrap())
        .collect();
    assert_eq!(outputs.len(), 500);
    assert!(outputs.iter().all(|&v| v < count));
}

#[test]
fn with_seed_rekeys_the_same_domain() {
    let shuffler = FeistelShuffler::from_seed(100u64, 1).with_seed(2);
    assert_eq!(*shuffler.count(), 100);
    assert_eq!(shuffler.seed(), 2);
    assert_eq!(
        permutation(&shuffler),
        permutation(&FeistelShuffler::from_seed(100u64, 2))
    );

    let range = ShuffledRange::<u64>::seeded(100, 1).with_seed(2);
    assert_eq!(range.seed(), 2);
    assert_eq!(range.collect::<Vec<_>>(), permutation(&shuffler));
}

#[test]
fn seed_policy_controls_missing_seeds() {
    assert!(matches!(
        ShuffledRange::<u64>::resolve(10, None, SeedPolicy::Deterministic),
        Err(Error::MissingSeed)
    ));

    let seeded = ShuffledRange::<u64>::resolve(10, Some(4), SeedPolicy::Deterministic).unwrap();
    assert_eq!(seeded.seed(), 4);

    let random = ShuffledRange::<u64>::resolve(10, None, SeedPolicy::default()).unwrap();
    let mut values: Vec<u64> = random.collect();
    values.sort_unstable();
    assert_eq!(values, (0..10).collect::<Vec<_>>());
}

#[test]
fn rand_source_supplies_the_seed() {
    let shuffler = FeistelShuffler::with_rand(50u64, &FixedRand(42));
    assert_eq!(shuffler.seed(), 42);
    assert_eq!(
        permutation(&shuffler),
        permutation(&FeistelShuffler::from_seed(50u64, 42))
    );
}

#[test]
fn unseeded_shuffle_is_still_a_permutation() {
    let mut values: Vec<u64> = ShuffledRange::<u64>::from_count(257).collect();
    values.sort_unstable();
    assert_eq!(values, (0..257).collect::<Vec<_>>());
}

#[test]
fn shuffler_split_shares_the_permutation() {
    let mut shuffler = FeistelShuffler::from_seed(64u64, 11);
    let mut copy = crate::Splittable::split(&shuffler);
    for i in 0..64u64 {
        assert_eq!(shuffler.apply(&i), copy.apply(&i));
    }
}

#[test]
fn shuffled_range_reports_distinct_but_not_sorted() {
    let characteristics = ShuffledRange::<u64>::seeded(10, 0).characteristics();
    assert!(characteristics.contains(Characteristics::DISTINCT));
    assert!(!characteristics.contains(Characteristics::SORTED));
}

#[test]
fn shuffled_product_has_the_same_tuples() {
    let product = CartesianProduct::<u64>::from_dimensions(&[3, 4, 5]).unwrap();
    let mut sequential: Vec<Vec<u64>> = product.clone().collect();

    let shuffled = product.shuffle_with_seed(123);
    assert!(shuffled.characteristics().contains(Characteristics::DISTINCT));
    assert!(!shuffled.characteristics().contains(Characteristics::SORTED));
    assert_eq!(shuffled.supplier().shuffler().seed(), 123);

    let mut shuffled: Vec<Vec<u64>> = shuffled.collect();
    assert_ne!(shuffled, sequential);
    shuffled.sort();
    sequential.sort();
    assert_eq!(shuffled, sequential);
}

#[test]
fn shuffled_subrange_stays_within_its_bounds() {
    let traversal = IndexedTraversal::range(100u64, 150).unwrap();
    assert!(traversal.characteristics().contains(Characteristics::SORTED));

    let shuffled = traversal.shuffle_with_seed(6);
    assert!(!shuffled.characteristics().contains(Characteristics::SORTED));

    let mut values: Vec<u64> = shuffled.collect();
    values.sort_unstable();
    assert_eq!(values, (100..150).collect::<Vec<_>>());

    let mut values: Vec<u64> = IndexedTraversal::range(100u64, 150)
        .unwrap()
        .shuffle()
        .collect();
    values.sort_unstable();
    assert_eq!(values, (100..150).collect::<Vec<_>>());
}

#[test]
fn split_shuffled_range_matches_sequential() {
    let sequential: Vec<u64> = ShuffledRange::<u64>::seeded(1000, 77).collect();

    let mut upper = ShuffledRange::<u64>::seeded(1000, 77);
    let mut lower = upper.try_split().unwrap();
    let lowest = lower.try_split().unwrap();

    let mut joined: Vec<u64> = lowest.collect();
    joined.extend(lower);
    joined.extend(upper);
    assert_eq!(joined, sequential);
}

#[test]
fn traversal_must_stay_within_the_shuffled_domain() {
    let shuffler = FeistelShuffler::from_seed(10u64, 42);

    let err = IndexedTraversal::new(0u64, 16, shuffler.clone()).unwrap_err();
    assert_eq!(
        err,
        Error::OutOfDomain {
            start: "0".into(),
            end: "16".into(),
            domain_start: "0".into(),
            domain_end: "10".into(),
        }
    );
    assert!(IndexedTraversal::new(1000u64, 1003, shuffler.clone()).is_err());

    let mut full: Vec<u64> = IndexedTraversal::new(0u64, 10, shuffler.clone())
        .unwrap()
        .collect();
    full.sort_unstable();
    assert_eq!(full, (0..10).collect::<Vec<_>>());

    let middle: HashSet<u64> = IndexedTraversal::new(3u64, 7, shuffler).unwrap().collect();
    assert_eq!(middle.len(), 4);
    assert!(middle.iter().all(|&v| v < 10));
}

#[test]
fn shuffled_supplier_keeps_its_base_range() {
    let shuffled = IndexedTraversal::range(100u64, 150)
        .unwrap()
        .shuffle_with_seed(6);
    let supplier = shuffled.supplier().clone();
    assert_eq!(IndexedSupplier::<u64>::domain(&supplier), Some(100..150));

    assert!(matches!(
        IndexedTraversal::new(90u64, 150, supplier.clone()),
        Err(Error::OutOfDomain { .. })
    ));
    assert!(IndexedTraversal::new(140u64, 151, supplier.clone()).is_err());

    let mut values: Vec<u64> = IndexedTraversal::new(100u64, 150, supplier)
        .unwrap()
        .collect();
    values.sort_unstable();
    assert_eq!(values, (100..150).collect::<Vec<_>>());
}

#[cfg(feature = "rayon")]
mod parallel {
    use super::*;
    use rayon::prelude::*;

    #[test]
    fn parallel_shuffled_range_matches_sequential() {
        let range = ShuffledRange::<u64>::seeded(20_000, 9).with_split_threshold(128);
        let sequential: Vec<u64> = range.clone().collect();
        let parallel: Vec<u64> = range.into_par_iter().collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn parallel_shuffled_product_matches_sequential() {
        let shuffled = CartesianProduct::<BigUint>::from_dimensions(&[9, 9, 9])
            .unwrap()
            .shuffle_with_seed(31);
        let sequential: Vec<Vec<u64>> = shuffled.clone().collect();
        let parallel: Vec<Vec<u64>> = shuffled.into_par_iter().collect();
        assert_eq!(parallel, sequential);
    }
}
