//! # soa-slice: Generic Slice Algorithms for Structure-of-Arrays Containers
//!
//! A structure-of-arrays (SoA) container stores each field of a record in its
//! own backing array instead of storing whole records contiguously. This crate
//! provides:
//!
//! - **A capability contract**: [`Sliceable`] and [`Indexable`], the minimal
//!   interface every SoA container implements
//! - **A storage unit**: [`Column<T>`], one backing array with three-index
//!   slice semantics (views alias, growth detaches)
//! - **A generator**: [`soa_slice!`] declares a record and its container
//! - **Generic algorithms**: construction, append/insert/replace/delete,
//!   compaction, search, comparison, sorting, chunking and traversal, written
//!   once against the contract
//! - **A growth policy**: [`GrowthConfig`], tunable from `SOA_*` environment
//!   variables or a JSON file
//!
//! ## Quick Start
//!
//! ```rust
//! use soa_slice::{soa_slice, Indexable};
//!
//! soa_slice! {
//!     #[derive(Debug, Clone, Default, PartialEq)]
//!     pub struct User {
//!         pub id: u64,
//!         pub name: String,
//!     }
//!
//!     #[derive(Debug)]
//!     pub struct UserSlice;
//! }
//!
//! let users = soa_slice::append(
//!     UserSlice::default(),
//!     [
//!         User { id: 2, name: "b".into() },
//!         User { id: 1, name: "a".into() },
//!     ],
//! );
//! soa_slice::sort_func(&users, |x, y| x.id.cmp(&y.id));
//!
//! assert_eq!(users.id.to_vec(), vec![1, 2]);
//! assert_eq!(soa_slice::index_func(&users, |u| u.name == "b"), Some(1));
//! ```
//!
//! ## Error handling
//!
//! Broken caller contracts (bad indices or windows, overflowing sizes, extrema
//! of an empty container) panic with a [`SoaError`] message. Operations whose
//! arguments commonly come from outside also have a `try_*` form returning
//! [`Result`].

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

#[macro_use]
mod macros;

pub mod algorithms;
pub mod config;
pub mod containers;
pub mod error;

// Re-export core types
pub use config::{GrowthConfig, growth_policy, install_growth_policy};
pub use containers::{Column, Indexable, Sliceable};
pub use error::{Result, SoaError};

// Re-export the algorithms at the crate root
pub use algorithms::{
    All, Chunks, SortAdapter, Values, all, append, append_seq, backward, binary_search,
    binary_search_func, chunk, clear, clip, clone, collect, compact, compact_func, compare,
    compare_func, concat, contains, contains_func, copy, delete, delete_func, equal, equal_func,
    grow, index, index_func, insert, is_sorted, is_sorted_func, make, max, max_func, min,
    min_func, repeat, replace, reverse, sort, sort_func, sort_stable, sort_stable_func, sorted,
    sorted_func, sorted_stable_func, try_chunk, try_concat, try_delete, try_insert, try_make,
    try_max_func, try_min_func, try_repeat, try_replace, values,
};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library.
///
/// Resolves the process-wide growth policy up front so that configuration
/// problems are logged at startup rather than on the first reallocation.
pub fn init() {
    log::debug!("Initializing soa-slice v{}", VERSION);
    let policy = growth_policy();
    log::debug!("Growth policy: {:?}", policy);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_version_info() {
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }

    #[test]
    fn test_re_exports() {
        let s: Column<i32> = make(0, 4);
        let s = append(s, [3, 1, 2]);
        sort(&s);
        assert_eq!(s.to_vec(), vec![1, 2, 3]);

        let err = SoaError::empty("max_func");
        assert_eq!(err.category(), "empty");
        assert!(std::any::type_name::<Result<()>>().contains("SoaError"));
    }

    #[test]
    fn test_multiple_init_calls() {
        use crate::config::Config;

        init();
        init();
        assert!(growth_policy().validate().is_ok());
    }
}
