//! Sort adapter and in-place sort routines
//!
//! A structure-of-arrays container cannot hand out `&mut [E]`, so the standard
//! slice sorts do not apply. [`SortAdapter`] reduces a container plus a
//! comparator to the three primitives a comparison sort needs (`len`,
//! `less(i, j)`, `swap(i, j)`), and both sorts here are written purely in
//! terms of those.
//!
//! - Unstable: introsort. Median-of-three quicksort, insertion sort below
//!   [`INSERTION_SORT_THRESHOLD`], heapsort once the depth budget runs out.
//! - Stable: insertion sort over blocks of [`STABLE_BLOCK_SIZE`], then
//!   repeated in-place symmetric merges (rotation based, no extra storage).

use crate::containers::Indexable;
use std::cmp::Ordering;

/// Ranges at most this long are insertion sorted.
pub const INSERTION_SORT_THRESHOLD: usize = 12;

/// Initial run length of the stable sort.
pub const STABLE_BLOCK_SIZE: usize = 20;

/// `len` / `less` / `swap` view of a container under a comparator.
pub struct SortAdapter<'a, S, F> {
    data: &'a S,
    cmp: F,
}

impl<'a, S, F> SortAdapter<'a, S, F>
where
    S: Indexable,
    F: FnMut(&S::Elem, &S::Elem) -> Ordering,
{
    /// Wrap `data` for sorting by `cmp`.
    pub fn new(data: &'a S, cmp: F) -> Self {
        Self { data, cmp }
    }

    /// Number of elements being sorted.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether there is nothing to sort.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether element `i` orders strictly before element `j`.
    #[inline]
    pub fn less(&mut self, i: usize, j: usize) -> bool {
        (self.cmp)(&self.data.get(i), &self.data.get(j)) == Ordering::Less
    }

    /// Exchange elements `i` and `j`.
    #[inline]
    pub fn swap(&self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let a = self.data.get(i);
        let b = self.data.get(j);
        self.data.set(i, b);
        self.data.set(j, a);
    }

    /// Sort without preserving the order of equal elements.
    pub fn sort_unstable(mut self) {
        let n = self.len();
        if n < 2 {
            return;
        }
        let depth = 2 * (usize::BITS - n.leading_zeros()) as usize;
        self.quick_sort(0, n, depth);
    }

    /// Sort preserving the order of equal elements.
    pub fn sort_stable(mut self) {
        let n = self.len();
        let mut block = STABLE_BLOCK_SIZE;

        let mut a = 0;
        while a + block <= n {
            self.insertion_sort(a, a + block);
            a += block;
        }
        self.insertion_sort(a, n);

        while block < n {
            let mut a = 0;
            while a + 2 * block <= n {
                self.sym_merge(a, a + block, a + 2 * block);
                a += 2 * block;
            }
            if a + block < n {
                self.sym_merge(a, a + block, n);
            }
            block *= 2;
        }
    }

    fn insertion_sort(&mut self, a: usize, b: usize) {
        for i in a + 1..b {
            let mut j = i;
            while j > a && self.less(j, j - 1) {
                self.swap(j, j - 1);
                j -= 1;
            }
        }
    }

    fn sift_down(&mut self, mut root: usize, hi: usize, first: usize) {
        loop {
            let mut child = 2 * root + 1;
            if child >= hi {
                return;
            }
            if child + 1 < hi && self.less(first + child, first + child + 1) {
                child += 1;
            }
            if !self.less(first + root, first + child) {
                return;
            }
            self.swap(first + root, first + child);
            root = child;
        }
    }

    fn heap_sort(&mut self, a: usize, b: usize) {
        let n = b - a;
        for i in (0..n / 2).rev() {
            self.sift_down(i, n, a);
        }
        for i in (1..n).rev() {
            self.swap(a, a + i);
            self.sift_down(0, i, a);
        }
    }

    /// Leaves the median of `x`, `y`, `z` at `y`.
    fn median_of_three(&mut self, x: usize, y: usize, z: usize) {
        if self.less(y, x) {
            self.swap(y, x);
        }
        if self.less(z, y) {
            self.swap(z, y);
            if self.less(y, x) {
                self.swap(y, x);
            }
        }
    }

    /// Partition `[a, b)` around a median-of-three pivot; returns its final index.
    fn partition(&mut self, a: usize, b: usize) -> usize {
        let mid = a + (b - a) / 2;
        self.median_of_three(a, mid, b - 1);
        self.swap(a, mid);

        let mut store = a + 1;
        for i in a + 1..b {
            if self.less(i, a) {
                self.swap(i, store);
                store += 1;
            }
        }
        self.swap(a, store - 1);
        store - 1
    }

    fn quick_sort(&mut self, mut a: usize, mut b: usize, mut depth: usize) {
        while b - a > INSERTION_SORT_THRESHOLD {
            if depth == 0 {
                self.heap_sort(a, b);
                return;
            }
            depth -= 1;

            let p = self.partition(a, b);
            // Recurse into the smaller side, loop on the larger.
            if p - a < b - p {
                self.quick_sort(a, p, depth);
                a = p + 1;
            } else {
                self.quick_sort(p + 1, b, depth);
                b = p;
            }
        }
        if b - a > 1 {
            self.insertion_sort(a, b);
        }
    }

    fn reverse_range(&self, mut a: usize, mut b: usize) {
        while a + 1 < b {
            b -= 1;
            self.swap(a, b);
            a += 1;
        }
    }

    /// `[a, m)` and `[m, b)` trade places.
    fn rotate(&self, a: usize, m: usize, b: usize) {
        self.reverse_range(a, m);
        self.reverse_range(m, b);
        self.reverse_range(a, b);
    }

    /// Merge the sorted runs `[a, m)` and `[m, b)` in place.
    fn sym_merge(&mut self, a: usize, m: usize, b: usize) {
        if m - a == 1 {
            // Single element on the left: place it before the first element
            // of the right run that is not less than it.
            let (mut i, mut j) = (m, b);
            while i < j {
                let h = i + (j - i) / 2;
                if self.less(h, a) {
                    i = h + 1;
                } else {
                    j = h;
                }
            }
            for k in a..i - 1 {
                self.swap(k, k + 1);
            }
            return;
        }
        if b - m == 1 {
            // Single element on the right: place it after every element of
            // the left run that is not greater than it.
            let (mut i, mut j) = (a, m);
            while i < j {
                let h = i + (j - i) / 2;
                if !self.less(m, h) {
                    i = h + 1;
                } else {
                    j = h;
                }
            }
            for k in (i + 1..=m).rev() {
                self.swap(k, k - 1);
            }
            return;
        }

        let mid = a + (b - a) / 2;
        let n = mid + m;
        let (mut start, mut r) = if m > mid { (n - b, mid) } else { (a, m) };
        let p = n - 1;
        while start < r {
            let c = start + (r - start) / 2;
            if !self.less(p - c, c) {
                start = c + 1;
            } else {
                r = c;
            }
        }

        let end = n - start;
        if start < m && m < end {
            self.rotate(start, m, end);
        }
        if a < start && start < mid {
            self.sym_merge(a, start, mid);
        }
        if mid < end && end < b {
            self.sym_merge(mid, end, b);
        }
    }
}
