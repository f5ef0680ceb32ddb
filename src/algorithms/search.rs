//! Traversal and search

use crate::containers::Indexable;
use crate::error::{Result, SoaError, fatal};
use std::cmp::Ordering;
use std::iter::{FusedIterator, Rev};

/// `(index, element)` pairs of a container; see [`all`].
///
/// Bound to the length observed when it was created.
#[derive(Debug)]
pub struct All<'a, S> {
    source: &'a S,
    front: usize,
    back: usize,
}

impl<'a, S: Indexable> Iterator for All<'a, S> {
    type Item = (usize, S::Elem);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let i = self.front;
        self.front += 1;
        Some((i, self.source.get(i)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<S: Indexable> DoubleEndedIterator for All<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some((self.back, self.source.get(self.back)))
    }
}

impl<S: Indexable> ExactSizeIterator for All<'_, S> {}

impl<S: Indexable> FusedIterator for All<'_, S> {}

/// Elements of a container; see [`values`].
#[derive(Debug)]
pub struct Values<'a, S> {
    inner: All<'a, S>,
}

impl<'a, S: Indexable> Iterator for Values<'a, S> {
    type Item = S::Elem;

    #[inline]
    fn next(&mut self) -> Option<S::Elem> {
        self.inner.next().map(|(_, e)| e)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S: Indexable> DoubleEndedIterator for Values<'_, S> {
    #[inline]
    fn next_back(&mut self) -> Option<S::Elem> {
        self.inner.next_back().map(|(_, e)| e)
    }
}

impl<S: Indexable> ExactSizeIterator for Values<'_, S> {}

impl<S: Indexable> FusedIterator for Values<'_, S> {}

/// Iterate `(index, element)` in ascending index order.
///
/// Stopping early leaves `s` untouched; every call starts a new traversal.
#[inline]
pub fn all<S: Indexable>(s: &S) -> All<'_, S> {
    All {
        source: s,
        front: 0,
        back: s.len(),
    }
}

/// Iterate `(index, element)` in descending index order.
#[inline]
pub fn backward<S: Indexable>(s: &S) -> Rev<All<'_, S>> {
    all(s).rev()
}

/// Iterate elements in ascending index order.
#[inline]
pub fn values<S: Indexable>(s: &S) -> Values<'_, S> {
    Values { inner: all(s) }
}

/// First index whose element satisfies `pred`.
pub fn index_func<S, F>(s: &S, mut pred: F) -> Option<usize>
where
    S: Indexable,
    F: FnMut(&S::Elem) -> bool,
{
    all(s).find_map(|(i, e)| pred(&e).then_some(i))
}

/// First index whose element equals `value`.
pub fn index<S>(s: &S, value: &S::Elem) -> Option<usize>
where
    S: Indexable,
    S::Elem: PartialEq,
{
    index_func(s, |e| e == value)
}

/// Whether any element satisfies `pred`.
#[inline]
pub fn contains_func<S, F>(s: &S, pred: F) -> bool
where
    S: Indexable,
    F: FnMut(&S::Elem) -> bool,
{
    index_func(s, pred).is_some()
}

/// Whether any element equals `value`.
#[inline]
pub fn contains<S>(s: &S, value: &S::Elem) -> bool
where
    S: Indexable,
    S::Elem: PartialEq,
{
    index(s, value).is_some()
}

/// Binary search a container sorted ascending under `cmp`.
///
/// Returns the leftmost position where `target` could be inserted keeping the
/// order, and whether the element at that position compares equal.
///
/// ```rust
/// use soa_slice::{Column, binary_search_func};
///
/// let s = Column::from(vec![1, 3, 3, 5, 7]);
/// assert_eq!(binary_search_func(&s, &3, |e, t| e.cmp(t)), (1, true));
/// assert_eq!(binary_search_func(&s, &4, |e, t| e.cmp(t)), (3, false));
/// ```
pub fn binary_search_func<S, T, F>(s: &S, target: &T, mut cmp: F) -> (usize, bool)
where
    S: Indexable,
    T: ?Sized,
    F: FnMut(&S::Elem, &T) -> Ordering,
{
    let n = s.len();
    let (mut lo, mut hi) = (0, n);
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&s.get(mid), target) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    let found = lo < n && cmp(&s.get(lo), target) == Ordering::Equal;
    (lo, found)
}

/// [`binary_search_func`] using the natural order.
pub fn binary_search<S>(s: &S, target: &S::Elem) -> (usize, bool)
where
    S: Indexable,
    S::Elem: Ord,
{
    binary_search_func(s, target, Ord::cmp)
}

/// Whether every adjacent pair is in order under `cmp`.
pub fn is_sorted_func<S, F>(s: &S, mut cmp: F) -> bool
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let mut iter = values(s);
    let Some(mut prev) = iter.next() else {
        return true;
    };
    for cur in iter {
        if cmp(&prev, &cur) == Ordering::Greater {
            return false;
        }
        prev = cur;
    }
    true
}

/// [`is_sorted_func`] using the natural order.
pub fn is_sorted<S>(s: &S) -> bool
where
    S: Indexable,
    S::Elem: Ord,
{
    is_sorted_func(s, Ord::cmp)
}

fn extremum<S, F>(s: &S, want: Ordering, operation: &'static str, mut cmp: F) -> Result<S::Elem>
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    let mut iter = values(s);
    let mut best = iter.next().ok_or(SoaError::empty(operation))?;
    for e in iter {
        if cmp(&e, &best) == want {
            best = e;
        }
    }
    Ok(best)
}

/// Largest element under `cmp`; the first one wins ties.
pub fn try_max_func<S, F>(s: &S, cmp: F) -> Result<S::Elem>
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    extremum(s, Ordering::Greater, "max_func", cmp)
}

/// Smallest element under `cmp`; the first one wins ties.
pub fn try_min_func<S, F>(s: &S, cmp: F) -> Result<S::Elem>
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    extremum(s, Ordering::Less, "min_func", cmp)
}

/// Panicking form of [`try_max_func`].
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
pub fn max_func<S, F>(s: &S, cmp: F) -> S::Elem
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    match try_max_func(s, cmp) {
        Ok(e) => e,
        Err(e) => fatal(e),
    }
}

/// Panicking form of [`try_min_func`].
///
/// # Panics
///
/// Panics if `s` is empty.
#[track_caller]
pub fn min_func<S, F>(s: &S, cmp: F) -> S::Elem
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    match try_min_func(s, cmp) {
        Ok(e) => e,
        Err(e) => fatal(e),
    }
}

/// [`max_func`] using the natural order.
#[track_caller]
pub fn max<S>(s: &S) -> S::Elem
where
    S: Indexable,
    S::Elem: Ord,
{
    max_func(s, Ord::cmp)
}

/// [`min_func`] using the natural order.
#[track_caller]
pub fn min<S>(s: &S) -> S::Elem
where
    S: Indexable,
    S::Elem: Ord,
{
    min_func(s, Ord::cmp)
}
