//! Property-based testing for the generic algorithms
//!
//! Every property checks a container operation against the same operation on
//! a plain `Vec` model.

use proptest::prelude::*;
use soa_slice::{Column, Indexable, soa_slice};

soa_slice! {
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Pair {
        pub key: u8,
        pub seq: u32,
    }

    #[derive(Debug)]
    pub struct PairSlice;
}

// =============================================================================
// PROPERTY TEST GENERATORS
// =============================================================================

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..200)
}

/// A vector plus a valid half-open range inside it
fn vec_with_range() -> impl Strategy<Value = (Vec<i32>, usize, usize)> {
    small_vec().prop_flat_map(|v| {
        let n = v.len();
        (Just(v), 0..=n).prop_flat_map(move |(v, i)| (Just(v), Just(i), i..=n))
    })
}

/// Pairs with few distinct keys so that ties are common
fn pairs() -> impl Strategy<Value = Vec<Pair>> {
    prop::collection::vec(0u8..4, 0..300).prop_map(|keys| {
        keys.into_iter()
            .zip(0u32..)
            .map(|(key, seq)| Pair { key, seq })
            .collect()
    })
}

fn column(v: &[i32]) -> Column<i32> {
    Column::from(v.to_vec())
}

// =============================================================================
// GROWTH AND VIEWS
// =============================================================================

proptest! {
    #[test]
    fn prop_grow_preserves_contents(v in small_vec(), n in 0usize..1000) {
        let s = column(&v);
        let cap = s.cap();
        let grown = soa_slice::grow(s, n);
        prop_assert_eq!(grown.len(), v.len());
        prop_assert!(grown.cap() >= cap + n);
        prop_assert_eq!(grown.to_vec(), v);
    }

    #[test]
    fn prop_append_is_cumulative(batches in prop::collection::vec(small_vec(), 0..8)) {
        let mut s = Column::<i32>::default();
        let mut model = Vec::new();
        for batch in batches {
            model.extend_from_slice(&batch);
            s = soa_slice::append(s, batch);
            prop_assert!(s.cap() >= s.len());
        }
        prop_assert_eq!(s.to_vec(), model);
    }

    #[test]
    fn prop_slice_writes_are_visible_through_source((v, i, j) in vec_with_range()) {
        prop_assume!(i < j);
        let s = column(&v);
        let view = s.slice(i, j, s.cap());
        view.set(0, 1000);
        prop_assert_eq!(s.get(i), 1000);
    }

    #[test]
    fn prop_chunks_concatenate_back(v in small_vec(), size in 1usize..20) {
        let s = column(&v);
        let chunks: Vec<Column<i32>> = soa_slice::chunk(&s, size).collect();
        prop_assert_eq!(chunks.len(), v.len().div_ceil(size));
        prop_assert!(chunks.iter().all(|c| c.len() <= size && c.cap() == c.len()));
        prop_assert_eq!(soa_slice::concat(&chunks).to_vec(), v);
    }

    #[test]
    fn prop_repeat_matches_model(v in prop::collection::vec(any::<i32>(), 0..20), count in 0usize..10) {
        let s = soa_slice::repeat(&column(&v), count);
        prop_assert_eq!(s.to_vec(), v.repeat(count));
    }
}

// =============================================================================
// EDITING
// =============================================================================

proptest! {
    #[test]
    fn prop_delete_then_insert_round_trips((v, i, j) in vec_with_range()) {
        let removed = v[i..j].to_vec();
        let s = soa_slice::delete(column(&v), i, j);

        let mut model = v.clone();
        model.drain(i..j);
        prop_assert_eq!(s.to_vec(), model);

        let restored = soa_slice::insert(s, i, removed);
        prop_assert_eq!(restored.to_vec(), v);
    }

    #[test]
    fn prop_replace_matches_splice(
        (v, i, j) in vec_with_range(),
        values in prop::collection::vec(any::<i32>(), 0..10),
    ) {
        let s = soa_slice::replace(column(&v), i, j, values.clone());
        let mut model = v;
        model.splice(i..j, values);
        prop_assert_eq!(s.to_vec(), model);
    }

    #[test]
    fn prop_delete_func_matches_retain(v in small_vec(), threshold in -50i32..50) {
        let s = soa_slice::delete_func(column(&v), |&e| e < threshold);
        let mut model = v;
        model.retain(|&e| e >= threshold);
        prop_assert_eq!(s.to_vec(), model);
    }

    #[test]
    fn prop_compact_matches_dedup_and_is_idempotent(v in prop::collection::vec(0i32..4, 0..100)) {
        let once = soa_slice::compact(column(&v));
        let mut model = v;
        model.dedup();
        prop_assert_eq!(once.to_vec(), model.clone());

        let twice = soa_slice::compact(once);
        prop_assert_eq!(twice.to_vec(), model);
    }

    #[test]
    fn prop_reverse_twice_is_identity(v in small_vec()) {
        let s = column(&v);
        soa_slice::reverse(&s);
        let mut model = v.clone();
        model.reverse();
        prop_assert_eq!(s.to_vec(), model);

        soa_slice::reverse(&s);
        prop_assert_eq!(s.to_vec(), v);
    }
}

// =============================================================================
// ORDERING AND SEARCH
// =============================================================================

proptest! {
    #[test]
    fn prop_sort_matches_std(v in small_vec()) {
        let s = column(&v);
        soa_slice::sort(&s);
        let mut model = v;
        model.sort_unstable();
        prop_assert!(soa_slice::is_sorted(&s));
        prop_assert_eq!(s.to_vec(), model);
    }

    #[test]
    fn prop_sort_stable_matches_std_stable(items in pairs()) {
        let s: PairSlice = soa_slice::collect(items.clone());
        soa_slice::sort_stable_func(&s, |a, b| a.key.cmp(&b.key));

        let mut model = items;
        model.sort_by_key(|p| p.key);
        let sorted: Vec<Pair> = soa_slice::values(&s).collect();
        prop_assert_eq!(sorted, model);
    }

    #[test]
    fn prop_binary_search_matches_linear_scan(mut v in small_vec(), target in -60i32..60) {
        v.sort();
        let s = column(&v);
        let (i, found) = soa_slice::binary_search(&s, &target);
        let expected = v.iter().position(|&e| e >= target).unwrap_or(v.len());
        prop_assert_eq!(i, expected);
        prop_assert_eq!(found, v.contains(&target));
    }

    #[test]
    fn prop_compare_matches_vec_ordering(a in small_vec(), b in small_vec()) {
        prop_assert_eq!(soa_slice::compare(&column(&a), &column(&b)), a.cmp(&b));
        prop_assert_eq!(soa_slice::equal(&column(&a), &column(&b)), a == b);
    }

    #[test]
    fn prop_extrema_match_iterators(v in prop::collection::vec(any::<i32>(), 1..100)) {
        let s = column(&v);
        prop_assert_eq!(Some(soa_slice::max(&s)), v.iter().copied().max());
        prop_assert_eq!(Some(soa_slice::min(&s)), v.iter().copied().min());
    }
}
