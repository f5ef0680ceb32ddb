//! Views and aliasing
//!
//! A view shares storage with the container it was taken from. [`clip`]
//! removes spare capacity so the next growth detaches; [`clone`] copies into
//! storage nobody else references.

use super::growth::collect;
use super::search::values;
use crate::containers::Indexable;
use crate::error::{Result, SoaError, fatal};
use std::iter::FusedIterator;

/// Room for at least `n` more elements; see [`Sliceable::grow`](crate::Sliceable::grow).
#[inline]
pub fn grow<S: Indexable>(s: S, n: usize) -> S {
    s.grow(n)
}

/// View of `s` with capacity equal to its length.
///
/// Appending to the result always reallocates, so it can be handed to
/// another owner without letting that owner write into `s`.
#[inline]
pub fn clip<S: Indexable>(s: &S) -> S {
    let len = s.len();
    s.slice(0, len, len)
}

/// An independent copy of `s`.
pub fn clone<S: Indexable>(s: &S) -> S {
    collect(values(s))
}

/// Copy `min(dst.len(), src.len())` elements from the front of `src` to the
/// front of `dst` and return how many were copied.
///
/// `dst` and `src` may be overlapping views of the same storage: every source
/// element is read before the first write, so `dst` ends up holding what `src`
/// held on entry.
pub fn copy<S: Indexable>(dst: &S, src: &S) -> usize {
    let n = dst.len().min(src.len());
    let staged: Vec<S::Elem> = values(src).take(n).collect();
    for (i, e) in staged.into_iter().enumerate() {
        dst.set(i, e);
    }
    n
}

/// Consecutive non-overlapping views of `size` elements; see [`chunk`].
#[derive(Debug)]
pub struct Chunks<'a, S> {
    source: &'a S,
    size: usize,
    pos: usize,
    len: usize,
}

impl<'a, S: Indexable> Iterator for Chunks<'a, S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if self.pos >= self.len {
            return None;
        }
        let end = self.pos + self.size.min(self.len - self.pos);
        let view = self.source.slice(self.pos, end, end);
        self.pos = end;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.len - self.pos).div_ceil(self.size);
        (remaining, Some(remaining))
    }
}

impl<S: Indexable> ExactSizeIterator for Chunks<'_, S> {}

impl<S: Indexable> FusedIterator for Chunks<'_, S> {}

/// Lazily split `s` into views of `size` elements, the last possibly shorter.
///
/// Each view has no spare capacity. Calling again starts over.
pub fn try_chunk<S: Indexable>(s: &S, size: usize) -> Result<Chunks<'_, S>> {
    if size < 1 {
        return Err(SoaError::InvalidChunkSize);
    }
    Ok(Chunks {
        source: s,
        size,
        pos: 0,
        len: s.len(),
    })
}

/// Panicking form of [`try_chunk`].
///
/// ```rust
/// use soa_slice::{Column, Indexable, chunk};
///
/// let s: Column<i32> = (1..=10).collect();
/// let lens: Vec<usize> = chunk(&s, 3).map(|c| c.len()).collect();
/// assert_eq!(lens, vec![3, 3, 3, 1]);
/// ```
///
/// # Panics
///
/// Panics if `size == 0`.
#[track_caller]
pub fn chunk<S: Indexable>(s: &S, size: usize) -> Chunks<'_, S> {
    match try_chunk(s, size) {
        Ok(chunks) => chunks,
        Err(e) => fatal(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::growth::append;
    use crate::containers::{Column, Sliceable};

    #[test]
    fn test_grow() {
        let s = grow(Column::from(vec![1, 2, 3]), 4);
        assert_eq!(s.len(), 3);
        assert!(s.cap() >= 7);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);

        let empty = grow(Column::<i32>::default(), 0);
        assert_eq!(empty.len(), 0);
        assert_eq!(empty.cap(), 0);
    }

    #[test]
    fn test_clip_removes_spare_capacity() {
        let s = append(Column::<i32>::default().grow(5), [1, 2, 3]);
        assert_eq!(s.cap(), 5);
        let clipped = clip(&s);
        assert_eq!(clipped.len(), 3);
        assert_eq!(clipped.cap(), 3);
    }

    #[test]
    fn test_clip_then_append_detaches() {
        let s = append(Column::<i32>::default().grow(5), [1, 2, 3]);
        let detached = append(clip(&s), [4]);
        assert!(!detached.shares_storage_with(&s));

        detached.set(0, 100);
        assert_eq!(s.get(0), 1);
        assert_eq!(s.slice(0, 4, 5).get(3), 0);
    }

    #[test]
    fn test_clone_is_independent() {
        let s = Column::from(vec![1, 2, 3]);
        let copy_of = clone(&s);
        assert_eq!(copy_of, s);
        assert!(!copy_of.shares_storage_with(&s));

        s.set(1, 4);
        assert_ne!(copy_of, s);
    }

    #[test]
    fn test_copy_counts_shorter_side() {
        let dst = Column::from(vec![0, 0]);
        let src = Column::from(vec![7, 8, 9]);
        assert_eq!(copy(&dst, &src), 2);
        assert_eq!(dst.to_vec(), vec![7, 8]);
        assert_eq!(src.len(), 3);
    }

    #[test]
    fn test_copy_overlapping_views() {
        let s = Column::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(copy(&s.slice(1, 5, 5), &s.slice(0, 4, 5)), 4);
        assert_eq!(s.to_vec(), vec![1, 1, 2, 3, 4]);

        let s = Column::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(copy(&s.slice(0, 4, 5), &s.slice(1, 5, 5)), 4);
        assert_eq!(s.to_vec(), vec![2, 3, 4, 5, 5]);
    }

    #[test]
    fn test_chunk_windows() {
        let s: Column<i32> = (1..=10).collect();
        let chunks: Vec<Vec<i32>> = chunk(&s, 3).map(|c| c.to_vec()).collect();
        assert_eq!(
            chunks,
            vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]
        );
    }

    #[test]
    fn test_chunk_views_alias_source_without_spare_capacity() {
        let s: Column<i32> = (1..=5).collect();
        let first = chunk(&s, 2).next().map(|c| (c.cap(), c.shares_storage_with(&s)));
        assert_eq!(first, Some((2, true)));
    }

    #[test]
    fn test_chunk_early_stop_and_restart() {
        let s: Column<i32> = (1..=10).collect();
        let taken: Vec<Vec<i32>> = chunk(&s, 3).take(2).map(|c| c.to_vec()).collect();
        assert_eq!(taken, vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(chunk(&s, 3).len(), 4);
    }

    #[test]
    fn test_chunk_empty_source() {
        let s = Column::<i32>::default();
        assert_eq!(chunk(&s, 3).count(), 0);
    }

    #[test]
    fn test_try_chunk_zero() {
        let s = Column::from(vec![1]);
        assert!(matches!(try_chunk(&s, 0), Err(SoaError::InvalidChunkSize)));
    }

    #[test]
    #[should_panic(expected = "cannot be less than 1")]
    fn test_chunk_zero_panics() {
        let s = Column::from(vec![1]);
        let _ = chunk(&s, 0);
    }
}
