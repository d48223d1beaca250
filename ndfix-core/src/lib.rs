//! Core crate of ndfix.
//!
//! This crate holds the capability contracts every other ndfix crate is written against. Nothing here owns storage: a container, a layout or a shape descriptor becomes usable with the rest of the stack by implementing the traits below, not by inheriting from a base type.
//!
//! - [`Coordinate`]: fixed-arity coordinate, shape and stride values.
//! - [`Dimensions`]: compile-time shape descriptor (rank, extents, size).
//! - [`Layout`] and [`LayoutSpec`]: coordinate to linear-offset mapping, and the policy selecting one.
//! - [`Array`] and [`MutableArray`]: what a container must expose.
//! - [`ewise`]: element-wise operations defined once over [`Array`].

#![warn(missing_docs)]
#![no_std]
#[cfg(test)]
extern crate std;

// core concepts

pub mod coord;

pub mod dims;

pub mod layout;

pub mod array;

// functionalitys built on core concepts

pub mod ewise;

// common

pub mod error;

pub use array::{Array, MutableArray};
pub use coord::{Coordinate, Indices};
pub use dims::Dimensions;
pub use error::ArrayError;
pub use layout::{Layout, LayoutSpec};

pub mod prelude {
    //! A prelude module re-exporting commonly used items.

    pub use crate::array::*;
    pub use crate::coord::{Coordinate, Indices};
    pub use crate::dims::*;
    pub use crate::error::*;
    pub use crate::layout::*;
}
