//! Layout concept: mapping from a coordinate to a linear buffer offset.

use core::fmt::Debug;

use crate::coord::Coordinate;

/// Interface of a memory layout for shapes of coordinate type `S`.
///
/// A layout is built once from a shape, caching whatever it needs (typically a stride per axis), and afterwards maps coordinates to offsets in O(rank). Containers are written against this trait only, so a new layout (blocked, tiled, ...) plugs in without touching them.
///
/// # Invariants
///
/// For a layout built from `shape`, `linear_index` MUST map the coordinates within `shape` one-to-one onto `0..size`, where `size` is the product of the extents.
///
/// For coordinates outside `shape` the result is unspecified. No bounds check is performed here; callers check bounds when they need to.
pub trait Layout<S: Coordinate>: Clone + Debug {
    /// Builds the layout for `shape`.
    fn new(shape: &S) -> Self;
    /// Returns the linear offset of `index`.
    fn linear_index(&self, index: &S) -> usize;
    /// Returns the cached stride.
    fn stride(&self) -> &S;
}

/// Layout-selection policy.
///
/// A container names a policy instead of a concrete layout type, and the policy picks the layout for whatever coordinate type the container's shape has.
pub trait LayoutSpec: 'static {
    /// The layout used for shapes of coordinate type `S`.
    type Layout<S: Coordinate>: Layout<S>;
}
