//! Comparison, equality and sorting

use super::growth::collect;
use super::search::values;
use super::sort::SortAdapter;
use crate::containers::Indexable;
use std::cmp::Ordering;

/// Lexicographic comparison under `cmp`.
///
/// The first non-equal pair decides; otherwise a strict prefix orders first.
pub fn compare_func<S1, S2, F>(s1: &S1, s2: &S2, mut cmp: F) -> Ordering
where
    S1: Indexable,
    S2: Indexable,
    F: FnMut(&S1::Elem, &S2::Elem) -> Ordering,
{
    for (a, b) in values(s1).zip(values(s2)) {
        match cmp(&a, &b) {
            Ordering::Equal => {}
            decided => return decided,
        }
    }
    s1.len().cmp(&s2.len())
}

/// [`compare_func`] using the natural order.
pub fn compare<S>(s1: &S, s2: &S) -> Ordering
where
    S: Indexable,
    S::Elem: Ord,
{
    compare_func(s1, s2, Ord::cmp)
}

/// Same length and pairwise `eq`.
pub fn equal_func<S1, S2, F>(s1: &S1, s2: &S2, mut eq: F) -> bool
where
    S1: Indexable,
    S2: Indexable,
    F: FnMut(&S1::Elem, &S2::Elem) -> bool,
{
    if s1.len() != s2.len() {
        return false;
    }
    values(s1).zip(values(s2)).all(|(a, b)| eq(&a, &b))
}

/// Same length and pairwise `==`.
pub fn equal<S>(s1: &S, s2: &S) -> bool
where
    S: Indexable,
    S::Elem: PartialEq,
{
    equal_func(s1, s2, |a, b| a == b)
}

/// Sort in place under `cmp`; equal elements may be reordered.
///
/// `cmp` must be a strict weak ordering. If it is not, the result is some
/// permutation of the input.
pub fn sort_func<S, F>(s: &S, cmp: F)
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    SortAdapter::new(s, cmp).sort_unstable();
}

/// Sort in place under `cmp`, keeping equal elements in their original order.
pub fn sort_stable_func<S, F>(s: &S, cmp: F)
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    SortAdapter::new(s, cmp).sort_stable();
}

/// [`sort_func`] using the natural order.
pub fn sort<S>(s: &S)
where
    S: Indexable,
    S::Elem: Ord,
{
    sort_func(s, Ord::cmp)
}

/// [`sort_stable_func`] using the natural order.
pub fn sort_stable<S>(s: &S)
where
    S: Indexable,
    S::Elem: Ord,
{
    sort_stable_func(s, Ord::cmp)
}

/// Collect `seq` into a new container and sort it with [`sort_func`].
pub fn sorted_func<S, I, F>(seq: I, cmp: F) -> S
where
    S: Indexable,
    I: IntoIterator<Item = S::Elem>,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let s = collect(seq);
    sort_func(&s, cmp);
    s
}

/// Collect `seq` into a new container and sort it with [`sort_stable_func`].
pub fn sorted_stable_func<S, I, F>(seq: I, cmp: F) -> S
where
    S: Indexable,
    I: IntoIterator<Item = S::Elem>,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let s = collect(seq);
    sort_stable_func(&s, cmp);
    s
}

/// Collect `seq` into a new container in natural order.
pub fn sorted<S, I>(seq: I) -> S
where
    S: Indexable,
    S::Elem: Ord,
    I: IntoIterator<Item = S::Elem>,
{
    sorted_func(seq, Ord::cmp)
}
