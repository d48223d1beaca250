//! Strided layouts.

use ndfix_core::{
    coord::{Coordinate, dot},
    layout::{Layout, LayoutSpec},
};

/// C-order layout: the last axis varies fastest.
///
/// `stride[last] = 1` and `stride[i] = stride[i + 1] * extent[i + 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowMajor<S> {
    stride: S,
}

impl<S: Coordinate> Layout<S> for RowMajor<S> {
    fn new(shape: &S) -> Self {
        let mut stride = S::zeroed();
        let extents = shape.as_ref();
        let s = stride.as_mut();
        if let Some(last) = s.last_mut() {
            *last = 1;
        }
        // right-to-left running product over all extents but the first
        for i in (0..S::RANK.saturating_sub(1)).rev() {
            s[i] = s[i + 1] * extents[i + 1];
        }
        Self { stride }
    }

    #[inline]
    fn linear_index(&self, index: &S) -> usize {
        dot(&self.stride, index)
    }

    fn stride(&self) -> &S {
        &self.stride
    }
}

/// Fortran-order layout: the first axis varies fastest.
///
/// `stride[0] = 1` and `stride[i] = stride[i - 1] * extent[i - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnMajor<S> {
    stride: S,
}

impl<S: Coordinate> Layout<S> for ColumnMajor<S> {
    fn new(shape: &S) -> Self {
        let mut stride = S::zeroed();
        let extents = shape.as_ref();
        let s = stride.as_mut();
        if let Some(first) = s.first_mut() {
            *first = 1;
        }
        for i in 1..S::RANK {
            s[i] = s[i - 1] * extents[i - 1];
        }
        Self { stride }
    }

    #[inline]
    fn linear_index(&self, index: &S) -> usize {
        dot(&self.stride, index)
    }

    fn stride(&self) -> &S {
        &self.stride
    }
}

/// Selects [`RowMajor`]. This is the default policy of the dense container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowMajorSpec;

impl LayoutSpec for RowMajorSpec {
    type Layout<S: Coordinate> = RowMajor<S>;
}

/// Selects [`ColumnMajor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColumnMajorSpec;

impl LayoutSpec for ColumnMajorSpec {
    type Layout<S: Coordinate> = ColumnMajor<S>;
}
