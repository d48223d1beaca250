//! Fixed-arity coordinates, shapes and strides.

use core::{fmt::Debug, hash::Hash, iter::FusedIterator};

/// A sequence of `usize`, one per axis, whose length is part of the type.
///
/// The same type serves as a coordinate, a shape and a stride. Because the arity is fixed by the type, supplying the wrong number of coordinates to a rank-`R` array does not compile.
///
/// Implemented for `[usize; R]` for every `R`.
pub trait Coordinate: Copy + Debug + Eq + Hash + AsRef<[usize]> + AsMut<[usize]> + 'static {
    /// The number of axes.
    const RANK: usize;
    /// Returns the value with every component set to zero.
    fn zeroed() -> Self;
}

impl<const R: usize> Coordinate for [usize; R] {
    const RANK: usize = R;
    fn zeroed() -> Self {
        [0; R]
    }
}

/// Dot product of two coordinates.
#[inline]
pub fn dot<S: Coordinate>(a: &S, b: &S) -> usize {
    a.as_ref()
        .iter()
        .zip(b.as_ref())
        .map(|(x, y)| x * y)
        .sum()
}

/// Returns `true` if every component of `index` is strictly below the matching extent of `shape`.
#[inline]
pub fn in_bounds<S: Coordinate>(shape: &S, index: &S) -> bool {
    shape
        .as_ref()
        .iter()
        .zip(index.as_ref())
        .all(|(extent, i)| i < extent)
}

/// Product of the extents of `shape`.
pub fn size_of<S: Coordinate>(shape: &S) -> usize {
    shape.as_ref().iter().product()
}

/// Iterator over every coordinate of a shape in logical order: the last axis varies fastest.
///
/// This order does not depend on any layout. A shape with a zero extent yields nothing.
#[derive(Debug, Clone)]
pub struct Indices<S: Coordinate> {
    shape: S,
    next: Option<S>,
    remaining: usize,
}

impl<S: Coordinate> Indices<S> {
    /// Creates the iterator over all coordinates of `shape`.
    pub fn new(shape: S) -> Self {
        let remaining = size_of(&shape);
        let next = if remaining == 0 {
            None
        } else {
            Some(S::zeroed())
        };
        Self {
            shape,
            next,
            remaining,
        }
    }
}

impl<S: Coordinate> Iterator for Indices<S> {
    type Item = S;

    fn next(&mut self) -> Option<S> {
        let current = self.next?;

        // odometer step, carrying from the last axis
        let mut succ = current;
        let mut exhausted = true;
        for (i, extent) in succ
            .as_mut()
            .iter_mut()
            .zip(self.shape.as_ref())
            .rev()
        {
            *i += 1;
            if *i < *extent {
                exhausted = false;
                break;
            }
            *i = 0;
        }

        self.next = if exhausted { None } else { Some(succ) };
        self.remaining -= 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<S: Coordinate> ExactSizeIterator for Indices<S> {}
impl<S: Coordinate> FusedIterator for Indices<S> {}
