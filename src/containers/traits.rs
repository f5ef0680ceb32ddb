//! The capability contract every structure-of-arrays container implements.
//!
//! A container is a window over one or more equal-cardinality backing arrays.
//! The generic algorithms in [`crate::algorithms`] only ever talk to a
//! container through these two traits, so they work the same whether the
//! container has one backing array or twenty.

/// Windowing and growth of a container's backing storage.
pub trait Sliceable: Sized {
    /// Three-index sub-view `s[low:high:max]` sharing storage with `self`.
    ///
    /// The view has length `high - low` and capacity `max - low`.
    ///
    /// # Panics
    ///
    /// Panics unless `low <= high <= max <= self.cap()`.
    fn slice(&self, low: usize, high: usize, max: usize) -> Self;

    /// Consume the container and return one with room for at least `n` more
    /// elements beyond the current capacity.
    ///
    /// Contents and length are preserved. `grow(0)` must return the same
    /// storage unchanged; any other call may allocate fresh storage, in which
    /// case views taken earlier no longer alias the result.
    fn grow(self, n: usize) -> Self;
}

/// Element access over a [`Sliceable`] container.
///
/// `Default` must produce the zero container: length and capacity 0.
pub trait Indexable: Sliceable + Default {
    /// The logical record materialized by [`get`](Indexable::get).
    type Elem;

    /// Materialize the record at `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    fn get(&self, i: usize) -> Self::Elem;

    /// Write `elem` at `i`, field by field.
    ///
    /// Writes go to shared storage and are visible through every alias.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    fn set(&self, i: usize, elem: Self::Elem);

    /// Number of visible records.
    fn len(&self) -> usize;

    /// Number of records the window can hold without growing.
    fn cap(&self) -> usize;

    /// Whether no records are visible.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
