//! Generic slice algorithms over structure-of-arrays containers
//!
//! Every function here is written against [`Indexable`](crate::Indexable)
//! alone and never looks at how a container lays out its fields.
//!
//! Operations that can change length or capacity take the container by value
//! and return the new one; the caller rebinds and must not keep using views
//! taken before the call, since growth may have moved the storage.
//! Element-level operations (`sort_func`, `reverse`, `clear`, ...) work in
//! place through a shared reference.
//!
//! ## Modules
//!
//! - **growth** - construction, append, insert, replace, repeat, concat
//! - **view** - grow, clip, clone, chunk, copy
//! - **search** - traversal iterators, linear and binary search, extrema
//! - **ordering** - comparison, equality, sorting
//! - **compaction** - compact, delete, reverse
//! - **sort** - the sort adapter and the sort routines behind `ordering`

pub mod compaction;
pub mod growth;
pub mod ordering;
pub mod search;
pub mod sort;
pub mod view;

pub use compaction::{compact, compact_func, delete, delete_func, reverse, try_delete};
pub use growth::{
    append, append_seq, clear, collect, concat, insert, make, repeat, replace, try_concat,
    try_insert, try_make, try_repeat, try_replace,
};
pub use ordering::{
    compare, compare_func, equal, equal_func, sort, sort_func, sort_stable, sort_stable_func,
    sorted, sorted_func, sorted_stable_func,
};
pub use search::{
    All, Values, all, backward, binary_search, binary_search_func, contains, contains_func,
    index, index_func, is_sorted, is_sorted_func, max, max_func, min, min_func, try_max_func,
    try_min_func, values,
};
pub use sort::SortAdapter;
pub use view::{Chunks, chunk, clip, clone, copy, grow, try_chunk};
