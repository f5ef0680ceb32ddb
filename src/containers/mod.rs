//! Container types and the capability contract
//!
//! - **[`Sliceable`] / [`Indexable`]** - the contract the generic algorithms
//!   are written against
//! - **[`Column<T>`]** - a single backing array with three-index slice
//!   semantics; the storage unit of containers generated by
//!   [`soa_slice!`](crate::soa_slice), and a one-field container on its own

mod column;
mod traits;

pub use column::Column;
pub use traits::{Indexable, Sliceable};
