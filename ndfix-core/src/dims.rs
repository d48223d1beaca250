//! Shape descriptor concept: rank and extents known before any instance exists.

use crate::coord::Coordinate;

/// Compile-time shape descriptor.
///
/// Implemented by zero-sized marker types carrying their extents as const parameters (see `ndfix-basic`). Containers read the shape from here to size their buffer and to build their layout; the descriptor itself is never instantiated or mutated.
///
/// # Invariants
///
/// The implementor MUST ensure `SIZE` equals the product of the components of `SHAPE`, and `SHAPE` has at least one axis.
pub trait Dimensions: 'static {
    /// The coordinate type of this shape, which fixes the rank.
    type Shape: Coordinate;
    /// The extent of each axis.
    const SHAPE: Self::Shape;
    /// The number of axes.
    const RANK: usize = <Self::Shape as Coordinate>::RANK;
    /// The total number of elements.
    const SIZE: usize;
}
