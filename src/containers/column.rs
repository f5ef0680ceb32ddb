//! Column: one backing array seen through a three-index window
//!
//! A `Column<T>` is the storage unit of every structure-of-arrays container.
//! Like a slice header it is a window (`offset`, `len`, `cap`) over a shared,
//! fully initialized buffer. Re-slicing shares the buffer; growing beyond the
//! window's capacity moves the contents into a fresh buffer and detaches the
//! result from every earlier view.
//!
//! The buffer lives behind `Rc<RefCell<_>>`, so columns (and containers built
//! from them) are neither `Send` nor `Sync`. Borrows only last for the duration
//! of a single `get`, `set` or comparison.

use crate::config::{self, GrowthConfig};
use crate::containers::traits::{Indexable, Sliceable};
use crate::error::{SoaError, check_bounds, check_slice, fatal};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A single backing array with Go-style slice semantics.
///
/// # Examples
///
/// ```rust
/// use soa_slice::{Column, Indexable, Sliceable};
///
/// let col = Column::from(vec![1, 2, 3, 4]);
/// let view = col.slice(1, 3, 4);
/// view.set(0, 20);
/// assert_eq!(col.get(1), 20);
/// assert_eq!(view.len(), 2);
/// assert_eq!(view.cap(), 3);
/// ```
pub struct Column<T> {
    buf: Option<Rc<RefCell<Vec<T>>>>,
    offset: usize,
    len: usize,
    cap: usize,
}

impl<T> Column<T> {
    /// Create the zero column: no storage, length and capacity 0.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: None,
            offset: 0,
            len: 0,
            cap: 0,
        }
    }

    /// Number of visible elements
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no elements are visible
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity of the window
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Whether both columns are windows over the same buffer.
    pub fn shares_storage_with(&self, other: &Self) -> bool {
        match (&self.buf, &other.buf) {
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn with_window<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        match &self.buf {
            Some(buf) => {
                let data = buf.borrow();
                f(&data[self.offset..self.offset + self.len])
            }
            None => f(&[]),
        }
    }

    fn with_window_mut<R>(&self, f: impl FnOnce(&mut [T]) -> R) -> R {
        match &self.buf {
            Some(buf) => {
                let mut data = buf.borrow_mut();
                f(&mut data[self.offset..self.offset + self.len])
            }
            None => f(&mut []),
        }
    }

    /// Three-index re-slice `self[low:high:max]`.
    ///
    /// # Panics
    ///
    /// Panics unless `low <= high <= max <= self.capacity()`.
    #[track_caller]
    pub fn slice(&self, low: usize, high: usize, max: usize) -> Self {
        if let Err(e) = check_slice(low, high, max, self.cap) {
            fatal(e);
        }
        Self {
            buf: self.buf.clone(),
            offset: self.offset + low,
            len: high - low,
            cap: max - low,
        }
    }
}

impl<T: Clone> Column<T> {
    /// Read the element at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[track_caller]
    pub fn get(&self, i: usize) -> T {
        if let Err(e) = check_bounds(i, self.len) {
            fatal(e);
        }
        self.with_window(|w| w[i].clone())
    }

    /// Copy the visible elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.with_window(|w| w.to_vec())
    }
}

impl<T> Column<T> {
    /// Overwrite the element at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[track_caller]
    pub fn set(&self, i: usize, value: T) {
        if let Err(e) = check_bounds(i, self.len) {
            fatal(e);
        }
        self.with_window_mut(|w| w[i] = value)
    }
}

impl<T: Clone + Default> Column<T> {
    /// Grow using an explicit policy instead of the process-wide one.
    ///
    /// # Panics
    ///
    /// Panics if the required capacity exceeds `isize::MAX`.
    pub fn grow_with(self, n: usize, policy: &GrowthConfig) -> Self {
        if n == 0 {
            return self;
        }
        let required = match self.cap.checked_add(n) {
            Some(required) if required <= isize::MAX as usize => required,
            _ => fatal(SoaError::length_overflow("grow")),
        };
        let new_cap = policy.next_capacity(self.cap, required).min(isize::MAX as usize);

        let mut data = Vec::with_capacity(new_cap);
        self.with_window(|w| data.extend_from_slice(w));
        data.resize(new_cap, T::default());

        log::trace!(
            "column realloc: cap {} -> {} ({} live)",
            self.cap,
            new_cap,
            self.len
        );

        Self {
            buf: Some(Rc::new(RefCell::new(data))),
            offset: 0,
            len: self.len,
            cap: new_cap,
        }
    }
}

impl<T> Default for Column<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Column<T> {
    fn from(data: Vec<T>) -> Self {
        if data.is_empty() {
            return Self::new();
        }
        let len = data.len();
        Self {
            buf: Some(Rc::new(RefCell::new(data))),
            offset: 0,
            len,
            cap: len,
        }
    }
}

impl<T> FromIterator<T> for Column<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T: fmt::Debug> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with_window(|w| f.debug_list().entries(w.iter()).finish())
    }
}

/// Columns compare by visible contents; capacity and sharing are ignored.
impl<T: PartialEq> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.with_window(|a| other.with_window(|b| a == b))
    }
}

impl<T: Eq> Eq for Column<T> {}

impl<T: Clone + Default> Sliceable for Column<T> {
    #[inline]
    fn slice(&self, low: usize, high: usize, max: usize) -> Self {
        Column::slice(self, low, high, max)
    }

    #[inline]
    fn grow(self, n: usize) -> Self {
        self.grow_with(n, config::growth_policy())
    }
}

impl<T: Clone + Default> Indexable for Column<T> {
    type Elem = T;

    #[inline]
    fn get(&self, i: usize) -> T {
        Column::get(self, i)
    }

    #[inline]
    fn set(&self, i: usize, elem: T) {
        Column::set(self, i, elem)
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_value() {
        let col: Column<i32> = Column::default();
        assert_eq!(col.len(), 0);
        assert_eq!(col.capacity(), 0);
        assert!(col.is_empty());
        assert_eq!(col.to_vec(), Vec::<i32>::new());
        assert_eq!(format!("{:?}", col), "[]");
    }

    #[test]
    fn test_from_vec() {
        let col = Column::from(vec![1, 2, 3]);
        assert_eq!(col.len(), 3);
        assert_eq!(col.capacity(), 3);
        assert_eq!(col.get(2), 3);
        assert_eq!(format!("{:?}", col), "[1, 2, 3]");
    }

    #[test]
    fn test_slice_aliases_storage() {
        let col = Column::from(vec![1, 2, 3, 4, 5]);
        let view = col.slice(1, 3, 4);
        assert_eq!(view.to_vec(), vec![2, 3]);
        assert_eq!(view.capacity(), 3);
        assert!(view.shares_storage_with(&col));

        view.set(1, 30);
        assert_eq!(col.get(2), 30);
        col.set(1, 20);
        assert_eq!(view.get(0), 20);
    }

    #[test]
    fn test_slice_extends_into_capacity() {
        let col = Column::from(vec![1, 2, 3, 4]);
        let head = col.slice(0, 2, 4);
        let again = head.slice(0, 4, 4);
        assert_eq!(again.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    #[should_panic(expected = "slice bounds out of range [0:5:5] with capacity 4")]
    fn test_slice_beyond_capacity_panics() {
        let col = Column::from(vec![1, 2, 3, 4]);
        let _ = col.slice(0, 5, 5);
    }

    #[test]
    #[should_panic(expected = "index out of range [3] with length 3")]
    fn test_get_out_of_bounds_panics() {
        let col = Column::from(vec![1, 2, 3]);
        let _ = col.get(3);
    }

    #[test]
    #[should_panic(expected = "index out of range [2] with length 2")]
    fn test_get_past_view_length_panics() {
        // Slot 2 exists in the buffer but not in the view.
        let col = Column::from(vec![1, 2, 3, 4]);
        let view = col.slice(0, 2, 4);
        let _ = view.get(2);
    }

    #[test]
    #[should_panic(expected = "index out of range [1] with length 1")]
    fn test_set_past_view_length_panics() {
        let col = Column::from(vec![1, 2, 3]);
        col.slice(1, 2, 3).set(1, 9);
    }

    #[test]
    #[should_panic(expected = "index out of range [0] with length 0")]
    fn test_set_on_zero_value_panics() {
        let col: Column<u8> = Column::new();
        col.set(0, 1);
    }

    #[test]
    fn test_grow_zero_keeps_storage() {
        let col = Column::from(vec![1, 2]);
        let view = col.slice(0, 2, 2);
        let grown = view.grow_with(0, &GrowthConfig::default());
        assert!(grown.shares_storage_with(&col));
    }

    #[test]
    fn test_grow_detaches() {
        let col = Column::from(vec![1, 2, 3]);
        let grown = col.slice(0, 3, 3).grow_with(4, &GrowthConfig::default());
        assert_eq!(grown.len(), 3);
        assert_eq!(grown.capacity(), 7);
        assert!(!grown.shares_storage_with(&col));

        grown.set(0, 100);
        assert_eq!(col.get(0), 1);
    }

    #[test]
    fn test_grow_fills_spare_capacity_with_default() {
        let col = Column::from(vec![7u32]).grow_with(3, &GrowthConfig::default());
        let full = col.slice(0, 4, 4);
        assert_eq!(full.to_vec(), vec![7, 0, 0, 0]);
    }

    #[test]
    fn test_grow_uses_policy_factor() {
        let col = Column::from(vec![1, 2, 3, 4]).grow_with(1, &GrowthConfig::default());
        assert_eq!(col.capacity(), 8);
    }

    #[test]
    #[should_panic(expected = "grow: length overflow")]
    fn test_grow_overflow_panics() {
        let col = Column::from(vec![1u8]);
        let _ = col.grow_with(usize::MAX, &GrowthConfig::default());
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let a = Column::from(vec![1, 2, 3]);
        let b = Column::from(vec![1, 2, 3, 4]).slice(0, 3, 4);
        assert_eq!(a, b);
        assert_ne!(a, b.slice(0, 2, 3));
    }

    #[test]
    fn test_from_iterator() {
        let col: Column<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        assert_eq!(col.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }
}
