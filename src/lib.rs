//! Fixed-rank, fixed-extent dense arrays with pluggable memory layouts.
//!
//! This crate bundles the ndfix crates:
//!
//! - [`ndfix_core`]: the capability contracts ([`Array`], [`MutableArray`], [`Layout`], [`LayoutSpec`], [`Dimensions`]) and the generic [`ewise`] operations.
//! - [`ndfix_basic`]: shape descriptors [`D1`] to [`D6`] and the row-major and column-major layouts.
//! - [`ndfix_dense`]: [`DenseArray`], the owning container.
//!
//! ```
//! use ndfix::prelude::*;
//!
//! let a = DenseArray::<i32, dims![2, 3]>::from_fn(|[i, j]| (3 * i + j) as i32);
//! let b = ColumnMajorArray::<i32, dims![2, 3]>::from_fn(|[i, j]| (3 * i + j) as i32);
//!
//! assert_eq!(a[[1, 2]], b[[1, 2]]);
//! assert_eq!(a.stride(), &[3, 1]);
//! assert_eq!(b.stride(), &[1, 2]);
//! assert_eq!(&a + &a, a.map(|x| 2 * x));
//! ```

#![no_std]

pub use ndfix_core::{
    Array, ArrayError, Coordinate, Dimensions, Indices, Layout, LayoutSpec, MutableArray, coord,
    ewise,
};

pub use ndfix_basic::{
    ColumnMajor, ColumnMajorSpec, D1, D2, D3, D4, D5, D6, RowMajor, RowMajorSpec, dims,
};

pub use ndfix_dense::{ColumnMajorArray, DenseArray, LayoutOf, swap};

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use ndfix_basic::{ColumnMajorSpec, RowMajorSpec, dims};
    pub use ndfix_core::prelude::*;
    pub use ndfix_dense::{ColumnMajorArray, DenseArray};
}
