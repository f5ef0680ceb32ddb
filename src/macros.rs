//! Container generation
//!
//! [`soa_slice!`](crate::soa_slice) takes a record declaration and emits both
//! the record and a structure-of-arrays container for it: one
//! [`Column`](crate::Column) per field, with `get`/`set` marshaling each field
//! to and from its column, `len`/`cap` taken as the minimum across columns, and
//! `slice`/`grow` applied to every column.

/// Declare a record and its structure-of-arrays container.
///
/// ```rust
/// use soa_slice::{soa_slice, Indexable};
///
/// soa_slice! {
///     #[derive(Debug, Clone, Default, PartialEq)]
///     pub struct Point {
///         pub x: f32,
///         pub y: f32,
///     }
///
///     #[derive(Debug, PartialEq)]
///     pub struct PointSlice;
/// }
///
/// let s = soa_slice::append(PointSlice::default(), [Point { x: 1.0, y: 2.0 }]);
/// assert_eq!(s.x.to_vec(), vec![1.0]);
/// assert_eq!(s.get(0), Point { x: 1.0, y: 2.0 });
/// ```
///
/// The container always derives `Default` (the zero container); do not list
/// it again. Every field type must be `Clone + Default`. At least one field is
/// required.
#[macro_export]
macro_rules! soa_slice {
    (
        $(#[$rmeta:meta])*
        $rvis:vis struct $record:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),+ $(,)?
        }

        $(#[$smeta:meta])*
        $svis:vis struct $slice:ident;
    ) => {
        $(#[$rmeta])*
        $rvis struct $record {
            $( $(#[$fmeta])* $fvis $field: $fty ),+
        }

        $(#[$smeta])*
        #[derive(Default)]
        $svis struct $slice {
            $( $fvis $field: $crate::Column<$fty> ),+
        }

        impl $crate::Sliceable for $slice {
            fn slice(&self, low: usize, high: usize, max: usize) -> Self {
                Self {
                    $( $field: self.$field.slice(low, high, max) ),+
                }
            }

            fn grow(self, n: usize) -> Self {
                Self {
                    $( $field: $crate::Sliceable::grow(self.$field, n) ),+
                }
            }
        }

        impl $crate::Indexable for $slice {
            type Elem = $record;

            fn get(&self, i: usize) -> $record {
                $record {
                    $( $field: self.$field.get(i) ),+
                }
            }

            fn set(&self, i: usize, elem: $record) {
                $( self.$field.set(i, elem.$field); )+
            }

            fn len(&self) -> usize {
                let mut len = usize::MAX;
                $( len = len.min(self.$field.len()); )+
                len
            }

            fn cap(&self) -> usize {
                let mut cap = usize::MAX;
                $( cap = cap.min(self.$field.capacity()); )+
                cap
            }
        }

        impl ::std::iter::FromIterator<$record> for $slice {
            fn from_iter<I: ::std::iter::IntoIterator<Item = $record>>(iter: I) -> Self {
                $crate::collect(iter)
            }
        }
    };
}
