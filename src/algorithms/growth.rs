//! Construction and growth
//!
//! Growth is amortized by the container: these functions only ask for the
//! exact deficit (`new_len - cap`) and only when capacity is short, and a
//! container's `grow` decides how much extra room to hand back.

use super::search::values;
use super::view::copy;
use crate::containers::Indexable;
use crate::error::{Result, SoaError, check_range, fatal};

/// Largest length any container may reach.
const MAX_LEN: usize = isize::MAX as usize;

#[inline]
fn checked_len(len: Option<usize>, operation: &'static str) -> Result<usize> {
    len.filter(|&n| n <= MAX_LEN)
        .ok_or(SoaError::length_overflow(operation))
}

/// Make a container of length `len` and capacity `cap` with one `grow` call.
pub fn try_make<S: Indexable>(len: usize, cap: usize) -> Result<S> {
    if len > cap || cap > MAX_LEN {
        return Err(SoaError::slice_bounds(0, len, cap, cap));
    }
    let s = S::default().grow(cap);
    Ok(s.slice(0, len, cap))
}

/// Panicking form of [`try_make`].
///
/// # Panics
///
/// Panics if `len > cap`.
#[track_caller]
pub fn make<S: Indexable>(len: usize, cap: usize) -> S {
    match try_make(len, cap) {
        Ok(s) => s,
        Err(e) => fatal(e),
    }
}

/// Append `elems` to `s`, growing at most once.
///
/// ```rust
/// use soa_slice::{Column, Indexable, append};
///
/// let s = append(Column::default(), [1, 2, 3]);
/// let s = append(s, vec![4]);
/// assert_eq!(s.len(), 4);
/// assert_eq!(s.get(3), 4);
/// ```
pub fn append<S, I>(s: S, elems: I) -> S
where
    S: Indexable,
    I: IntoIterator<Item = S::Elem>,
    I::IntoIter: ExactSizeIterator,
{
    let elems = elems.into_iter();
    let old_len = s.len();
    let new_len = match checked_len(old_len.checked_add(elems.len()), "append") {
        Ok(n) => n,
        Err(e) => fatal(e),
    };

    let deficit = new_len.saturating_sub(s.cap());
    let s = s.grow(deficit);
    let s = s.slice(0, new_len, s.cap());
    for (i, e) in elems.enumerate() {
        s.set(old_len + i, e);
    }
    s
}

/// Append every element of `seq`, one at a time.
pub fn append_seq<S, I>(s: S, seq: I) -> S
where
    S: Indexable,
    I: IntoIterator<Item = S::Elem>,
{
    seq.into_iter()
        .fold(s, |s, e| append(s, std::iter::once(e)))
}

/// Collect `seq` into a fresh container.
pub fn collect<S, I>(seq: I) -> S
where
    S: Indexable,
    I: IntoIterator<Item = S::Elem>,
{
    append_seq(S::default(), seq)
}

/// Insert `values` at index `i`, shifting `[i, len)` to the right.
pub fn try_insert<S, I>(s: S, i: usize, values: I) -> Result<S>
where
    S: Indexable,
    I: IntoIterator<Item = S::Elem>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    let n = s.len();
    if i > n {
        return Err(SoaError::out_of_bounds(i, n));
    }
    let k = values.len();
    if k == 0 {
        return Ok(s);
    }
    let new_len = checked_len(n.checked_add(k), "insert")?;

    let deficit = new_len.saturating_sub(s.cap());
    let s = s.grow(deficit);
    let s = s.slice(0, new_len, s.cap());
    // Back to front so nothing is overwritten before it is read.
    for j in (i..n).rev() {
        s.set(j + k, s.get(j));
    }
    for (offset, v) in values.enumerate() {
        s.set(i + offset, v);
    }
    Ok(s)
}

/// Panicking form of [`try_insert`].
///
/// # Panics
///
/// Panics if `i > s.len()`.
#[track_caller]
pub fn insert<S, I>(s: S, i: usize, values: I) -> S
where
    S: Indexable,
    I: IntoIterator<Item = S::Elem>,
    I::IntoIter: ExactSizeIterator,
{
    match try_insert(s, i, values) {
        Ok(s) => s,
        Err(e) => fatal(e),
    }
}

/// Replace `[i, j)` with `values`.
///
/// When the result is shorter, the vacated tail of the old length is reset to
/// `Elem::default()`.
pub fn try_replace<S, I>(s: S, i: usize, j: usize, values: I) -> Result<S>
where
    S: Indexable,
    S::Elem: Default,
    I: IntoIterator<Item = S::Elem>,
    I::IntoIter: ExactSizeIterator,
{
    let values = values.into_iter();
    let n = s.len();
    check_range(i, j, n)?;
    let k = values.len();
    let new_len = checked_len((n - (j - i)).checked_add(k), "replace")?;

    let s = if new_len > n {
        let deficit = new_len.saturating_sub(s.cap());
        let s = s.grow(deficit);
        let s = s.slice(0, new_len, s.cap());
        let shift = new_len - n;
        for idx in (j..n).rev() {
            s.set(idx + shift, s.get(idx));
        }
        s
    } else {
        let shift = n - new_len;
        if shift > 0 {
            for idx in j..n {
                s.set(idx - shift, s.get(idx));
            }
            clear(&s.slice(new_len, n, s.cap()));
        }
        s.slice(0, new_len, s.cap())
    };

    for (offset, v) in values.enumerate() {
        s.set(i + offset, v);
    }
    Ok(s)
}

/// Panicking form of [`try_replace`].
///
/// # Panics
///
/// Panics unless `i <= j <= s.len()`.
#[track_caller]
pub fn replace<S, I>(s: S, i: usize, j: usize, values: I) -> S
where
    S: Indexable,
    S::Elem: Default,
    I: IntoIterator<Item = S::Elem>,
    I::IntoIter: ExactSizeIterator,
{
    match try_replace(s, i, j, values) {
        Ok(s) => s,
        Err(e) => fatal(e),
    }
}

/// A new container holding `count` back-to-back copies of `s`.
///
/// The size is checked with a multiplication that cannot wrap before
/// anything is allocated.
pub fn try_repeat<S: Indexable>(s: &S, count: usize) -> Result<S> {
    let n = s.len();
    let total = checked_len(n.checked_mul(count), "repeat")?;
    let out: S = try_make(total, total)?;
    if total == 0 {
        return Ok(out);
    }

    let mut filled = copy(&out, s);
    while filled < total {
        let dst = out.slice(filled, total, total);
        let src = out.slice(0, filled, filled);
        filled += copy(&dst, &src);
    }
    Ok(out)
}

/// Panicking form of [`try_repeat`].
///
/// # Panics
///
/// Panics if `s.len() * count` overflows.
#[track_caller]
pub fn repeat<S: Indexable>(s: &S, count: usize) -> S {
    match try_repeat(s, count) {
        Ok(out) => out,
        Err(e) => fatal(e),
    }
}

/// Concatenate `slices` into one freshly allocated container.
pub fn try_concat<S: Indexable>(slices: &[S]) -> Result<S> {
    let mut total: usize = 0;
    for s in slices {
        total = checked_len(total.checked_add(s.len()), "concat")?;
    }

    let out = S::default().grow(total);
    Ok(slices
        .iter()
        .fold(out, |out, s| append_seq(out, values(s))))
}

/// Panicking form of [`try_concat`].
///
/// # Panics
///
/// Panics if the summed length overflows.
#[track_caller]
pub fn concat<S: Indexable>(slices: &[S]) -> S {
    match try_concat(slices) {
        Ok(out) => out,
        Err(e) => fatal(e),
    }
}

/// Reset every visible element to `Elem::default()`.
pub fn clear<S>(s: &S)
where
    S: Indexable,
    S::Elem: Default,
{
    for i in 0..s.len() {
        s.set(i, S::Elem::default());
    }
}
