//! Array concept: containers addressed by fixed-arity coordinates.

use crate::coord::Coordinate;

/// Minimal interface for read-only arrays.
///
/// A type is an array if it exposes its shape, reads an element by coordinate, and iterates its elements in physical (storage) order in both directions. How it stores elements is its own business; anything implementing this trait works with [`ewise`](crate::ewise) as is.
///
/// # Invariants
///
/// The implementor MUST ensure the following:
///
/// - `shape()` returns `SHAPE` and never changes for the same object.
/// - `iter()` visits every stored element exactly once, in the same physical order for every call and for every object of the same type.
pub trait Array {
    /// Element type.
    type Elem;
    /// Coordinate type, which fixes the rank.
    type Shape: Coordinate;
    /// The shape shared by every object of this type.
    const SHAPE: Self::Shape;

    /// Iterator over elements in physical order. Reverse iteration is `iter().rev()`.
    type Iter<'a>: DoubleEndedIterator<Item = &'a Self::Elem> + ExactSizeIterator
    where
        Self: 'a;

    /// Returns the shape.
    fn shape(&self) -> &Self::Shape;
    /// Returns the element at `index`.
    ///
    /// The behavior for coordinates outside the shape is up to the implementor, but MUST NOT be undefined.
    fn at(&self, index: Self::Shape) -> &Self::Elem;
    /// Returns an iterator over the elements in physical order.
    fn iter(&self) -> Self::Iter<'_>;
}

/// Arrays whose elements can be written in place.
pub trait MutableArray: Array {
    /// Mutable iterator over elements in physical order.
    type IterMut<'a>: DoubleEndedIterator<Item = &'a mut Self::Elem> + ExactSizeIterator
    where
        Self: 'a;

    /// Returns a mutable reference to the element at `index`.
    fn at_mut(&mut self, index: Self::Shape) -> &mut Self::Elem;
    /// Returns a mutable iterator over the elements in physical order.
    fn iter_mut(&mut self) -> Self::IterMut<'_>;
}
