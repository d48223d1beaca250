//! Basic implementors of the `ndfix-core` contracts: the row-major and column-major layouts, and shape descriptors of rank 1 to 6.

#![no_std]
#[cfg(test)]
extern crate std;

pub mod dims;
pub mod layout;

pub use dims::{D1, D2, D3, D4, D5, D6};
pub use layout::{ColumnMajor, ColumnMajorSpec, RowMajor, RowMajorSpec};
