//! Compaction, deletion and reversal
//!
//! Removal happens in place: kept elements move down, the slots they vacate
//! at the end of the old length are reset to `Elem::default()`, and a
//! shorter view over the same storage is returned.

use super::growth::{append_seq, clear};
use super::search::{index_func, values};
use crate::containers::Indexable;
use crate::error::{Result, check_range, fatal};

/// Collapse each run of consecutive elements equal under `eq` to its first
/// element.
///
/// Only neighbors are compared; equal elements that are not adjacent are all
/// kept. Returns `s` unchanged when there is nothing to collapse.
pub fn compact_func<S, F>(s: S, mut eq: F) -> S
where
    S: Indexable,
    S::Elem: Default,
    F: FnMut(&S::Elem, &S::Elem) -> bool,
{
    let n = s.len();
    if n < 2 {
        return s;
    }
    let mut first_dup = None;
    let mut prev = s.get(0);
    for k in 1..n {
        let cur = s.get(k);
        if eq(&cur, &prev) {
            first_dup = Some(k);
            break;
        }
        prev = cur;
    }
    let Some(mut write) = first_dup else {
        return s;
    };

    // `prev` is the last kept element, sitting at `write - 1`.
    for read in write + 1..n {
        let cur = s.get(read);
        if !eq(&cur, &prev) {
            s.set(write, cur);
            prev = s.get(write);
            write += 1;
        }
    }

    clear(&s.slice(write, n, s.cap()));
    s.slice(0, write, s.cap())
}

/// [`compact_func`] using `==`.
pub fn compact<S>(s: S) -> S
where
    S: Indexable,
    S::Elem: Default + PartialEq,
{
    compact_func(s, |a, b| a == b)
}

/// Remove every element satisfying `pred`, keeping the rest in order.
pub fn delete_func<S, F>(s: S, mut pred: F) -> S
where
    S: Indexable,
    S::Elem: Default,
    F: FnMut(&S::Elem) -> bool,
{
    let Some(first) = index_func(&s, &mut pred) else {
        return s;
    };
    let n = s.len();
    let mut write = first;
    for read in first + 1..n {
        let cur = s.get(read);
        if !pred(&cur) {
            s.set(write, cur);
            write += 1;
        }
    }

    clear(&s.slice(write, n, s.cap()));
    s.slice(0, write, s.cap())
}

/// Remove `[i, j)`.
pub fn try_delete<S>(s: S, i: usize, j: usize) -> Result<S>
where
    S: Indexable,
    S::Elem: Default,
{
    let n = s.len();
    check_range(i, j, n)?;
    if i == j {
        return Ok(s);
    }

    let head = s.slice(0, i, s.cap());
    let tail = s.slice(j, n, s.cap());
    // The head keeps the full capacity, so appending never reallocates and the
    // tail is moved down within the same storage.
    let out = append_seq(head, values(&tail));
    clear(&s.slice(out.len(), n, s.cap()));
    Ok(out)
}

/// Panicking form of [`try_delete`].
///
/// # Panics
///
/// Panics unless `i <= j <= s.len()`.
#[track_caller]
pub fn delete<S>(s: S, i: usize, j: usize) -> S
where
    S: Indexable,
    S::Elem: Default,
{
    match try_delete(s, i, j) {
        Ok(s) => s,
        Err(e) => fatal(e),
    }
}

/// Reverse in place.
pub fn reverse<S: Indexable>(s: &S) {
    let n = s.len();
    let (mut i, mut j) = (0, n);
    while i + 1 < j {
        j -= 1;
        let a = s.get(i);
        let b = s.get(j);
        s.set(i, b);
        s.set(j, a);
        i += 1;
    }
}
