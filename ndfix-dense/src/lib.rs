//! Owned dense array for ndfix.
//!
//! [`DenseArray<T, D, P>`] owns one contiguous buffer of `D::SIZE` elements and addresses it through the layout selected by `P` (row-major unless stated otherwise). Shape and layout are fixed by the type; only the buffer contents change.
//!
//! ```
//! use ndfix_basic::{ColumnMajorSpec, dims};
//! use ndfix_dense::DenseArray;
//!
//! let mut a = DenseArray::<i32, dims![2, 3]>::new();
//! let mut b = DenseArray::<i32, dims![2, 3], ColumnMajorSpec>::new();
//! for (v, [i, j]) in (1..).zip(a.indices()) {
//!     a[[i, j]] = v;
//!     b[[i, j]] = v;
//! }
//! assert_eq!(a.as_slice(), &[1, 2, 3, 4, 5, 6]);
//! assert_eq!(b.as_slice(), &[1, 4, 2, 5, 3, 6]);
//! ```
//!
//! # Concurrency
//!
//! All operations are synchronous. A `DenseArray` is `Send` and `Sync` when `T` is; writing requires `&mut`, so sharing one array between threads for writing needs external synchronization (a `Mutex`, for example), exactly as for `Vec`.

#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod arith;

use alloc::{vec, vec::Vec};
use core::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
    slice,
};

use ndfix_basic::{ColumnMajorSpec, RowMajorSpec};
use ndfix_core::{
    array::{Array, MutableArray},
    coord::{Indices, in_bounds},
    dims::Dimensions,
    error::ArrayError,
    ewise,
    layout::{Layout, LayoutSpec},
};
use num_traits::{One, Zero};

/// The layout a `DenseArray<_, D, P>` uses.
pub type LayoutOf<D, P> = <P as LayoutSpec>::Layout<<D as Dimensions>::Shape>;

/// Dense array stored in column-major order.
pub type ColumnMajorArray<T, D> = DenseArray<T, D, ColumnMajorSpec>;

/// Fixed-shape dense array owning a contiguous buffer.
///
/// Element `index` lives at `buffer[layout.linear_index(index)]`. Iteration walks the buffer directly, so it follows physical order, which depends on `P`.
///
/// # Coordinates
///
/// Coordinates are `[usize; R]` with `R` the rank of `D`; any other arity is a type error. Out-of-range coordinates are a caller bug: debug builds panic on them; release builds use the computed offset as is, which either reaches some other element or panics on the buffer bound check. [`get`](Self::get) and [`get_mut`](Self::get_mut) check bounds and return `None` instead.
pub struct DenseArray<T, D: Dimensions, P: LayoutSpec = RowMajorSpec> {
    data: Vec<T>,
    shape: D::Shape,
    layout: LayoutOf<D, P>,
    _marker: PhantomData<fn() -> (D, P)>,
}

impl<T, D: Dimensions, P: LayoutSpec> DenseArray<T, D, P> {
    /// Wraps a buffer given in physical order. Callers supply `D::SIZE` elements, or none for an emptied array.
    fn from_buffer(data: Vec<T>) -> Self {
        let shape = D::SHAPE;
        let layout = <LayoutOf<D, P> as Layout<D::Shape>>::new(&shape);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            rank = D::RANK,
            size = D::SIZE,
            stride = ?layout.stride(),
            "dense array allocated"
        );
        Self {
            data,
            shape,
            layout,
            _marker: PhantomData,
        }
    }

    /// Creates an array with every element set to `T::default()`.
    pub fn new() -> Self
    where
        T: Default,
    {
        let mut data = Vec::with_capacity(D::SIZE);
        data.resize_with(D::SIZE, T::default);
        Self::from_buffer(data)
    }

    /// Creates an array with every element set to `elem`.
    pub fn from_elem(elem: T) -> Self
    where
        T: Clone,
    {
        Self::from_buffer(vec![elem; D::SIZE])
    }

    /// Creates an array of zeros.
    pub fn zeros() -> Self
    where
        T: Clone + Zero,
    {
        Self::from_elem(T::zero())
    }

    /// Creates an array of ones.
    pub fn ones() -> Self
    where
        T: Clone + One,
    {
        Self::from_elem(T::one())
    }

    /// Creates an array whose element at each coordinate is `f(coordinate)`.
    ///
    /// `f` is called in logical order (last axis fastest) regardless of the layout.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(D::Shape) -> T,
    {
        let layout = <LayoutOf<D, P> as Layout<D::Shape>>::new(&D::SHAPE);
        let mut slots: Vec<Option<T>> = Vec::with_capacity(D::SIZE);
        slots.resize_with(D::SIZE, || None);
        for index in Indices::new(D::SHAPE) {
            slots[layout.linear_index(&index)] = Some(f(index));
        }
        // the layout is a bijection onto 0..SIZE, so every slot is filled
        let data: Vec<T> = slots.into_iter().flatten().collect();
        debug_assert_eq!(data.len(), D::SIZE);
        Self::from_buffer(data)
    }

    /// Creates an array from a buffer given in physical order.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::LengthMismatch`] if `data.len() != D::SIZE`.
    pub fn from_vec(data: Vec<T>) -> Result<Self, ArrayError> {
        if data.len() != D::SIZE {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                expected = D::SIZE,
                found = data.len(),
                "rejected buffer of wrong length"
            );
            return Err(ArrayError::LengthMismatch {
                expected: D::SIZE,
                found: data.len(),
            });
        }
        Ok(Self::from_buffer(data))
    }

    /// Consumes the array, returning the buffer in physical order.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns the shape.
    pub fn shape(&self) -> &D::Shape {
        &self.shape
    }

    /// Returns the number of axes.
    pub fn rank(&self) -> usize {
        D::RANK
    }

    /// Returns the number of elements the shape holds, `D::SIZE`.
    ///
    /// Unlike [`len`](Self::len) this does not change when the buffer is moved out with [`take`](Self::take).
    pub fn size(&self) -> usize {
        D::SIZE
    }

    /// Returns the number of elements currently stored.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if no element is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the layout.
    pub fn layout(&self) -> &LayoutOf<D, P> {
        &self.layout
    }

    /// Returns the stride of the layout.
    pub fn stride(&self) -> &D::Shape {
        self.layout.stride()
    }

    #[inline]
    fn offset(&self, index: &D::Shape) -> usize {
        debug_assert!(
            in_bounds(&self.shape, index),
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape
        );
        self.layout.linear_index(index)
    }

    /// Returns the element at `index`, or `None` if `index` is out of bounds.
    pub fn get(&self, index: D::Shape) -> Option<&T> {
        if !in_bounds(&self.shape, &index) {
            return None;
        }
        self.data.get(self.layout.linear_index(&index))
    }

    /// Returns the element at `index` mutably, or `None` if `index` is out of bounds.
    pub fn get_mut(&mut self, index: D::Shape) -> Option<&mut T> {
        if !in_bounds(&self.shape, &index) {
            return None;
        }
        let offset = self.layout.linear_index(&index);
        self.data.get_mut(offset)
    }

    /// Returns the buffer in physical order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns the buffer in physical order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates the elements in physical order. Use `.rev()` for the reverse.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates the elements mutably in physical order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Iterates every coordinate of the shape in logical order (last axis fastest).
    pub fn indices(&self) -> Indices<D::Shape> {
        Indices::new(D::SHAPE)
    }

    /// Iterates `(coordinate, element)` pairs in logical order.
    pub fn indexed_iter(&self) -> impl Iterator<Item = (D::Shape, &T)> + '_ {
        self.indices().map(move |index| (index, &self[index]))
    }

    /// Sets every element to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data.fill(value);
    }

    /// Applies `f` to every element, producing an array of the same shape and layout.
    pub fn map<U, F>(&self, f: F) -> DenseArray<U, D, P>
    where
        F: FnMut(&T) -> U,
    {
        DenseArray::from_buffer(self.data.iter().map(f).collect())
    }

    /// Exchanges the contents of two arrays.
    ///
    /// Only the buffers move; shape and layout are the same for both by construction.
    pub fn swap(&mut self, other: &mut Self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(size = D::SIZE, "swapping dense array buffers");
        core::mem::swap(&mut self.data, &mut other.data);
    }

    /// Moves the contents out, leaving `self` empty.
    ///
    /// Afterwards `self` iterates zero elements and compares unequal to any populated array; coordinate access on it panics. Assigning a populated array to it restores it.
    pub fn take(&mut self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(size = self.data.len(), "moving dense array buffer out");
        Self {
            data: core::mem::take(&mut self.data),
            shape: self.shape,
            layout: self.layout.clone(),
            _marker: PhantomData,
        }
    }
}

/// Exchanges the contents of two arrays. See [`DenseArray::swap`].
pub fn swap<T, D: Dimensions, P: LayoutSpec>(
    a: &mut DenseArray<T, D, P>,
    b: &mut DenseArray<T, D, P>,
) {
    a.swap(b);
}

impl<T: Default, D: Dimensions, P: LayoutSpec> Default for DenseArray<T, D, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, D: Dimensions, P: LayoutSpec> Clone for DenseArray<T, D, P> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            shape: self.shape,
            layout: self.layout.clone(),
            _marker: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
    }
}

impl<T: PartialEq, D: Dimensions, P: LayoutSpec> PartialEq for DenseArray<T, D, P> {
    fn eq(&self, other: &Self) -> bool {
        ewise::equal(self, other)
    }
}

impl<T: Eq, D: Dimensions, P: LayoutSpec> Eq for DenseArray<T, D, P> {}

impl<T: fmt::Debug, D: Dimensions, P: LayoutSpec> fmt::Debug for DenseArray<T, D, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseArray")
            .field("shape", &self.shape)
            .field("stride", self.layout.stride())
            .field("data", &self.data)
            .finish()
    }
}

impl<T, D: Dimensions, P: LayoutSpec> Index<D::Shape> for DenseArray<T, D, P> {
    type Output = T;

    #[inline]
    fn index(&self, index: D::Shape) -> &T {
        &self.data[self.offset(&index)]
    }
}

impl<T, D: Dimensions, P: LayoutSpec> IndexMut<D::Shape> for DenseArray<T, D, P> {
    #[inline]
    fn index_mut(&mut self, index: D::Shape) -> &mut T {
        let offset = self.offset(&index);
        &mut self.data[offset]
    }
}

impl<T, D: Dimensions, P: LayoutSpec> Array for DenseArray<T, D, P> {
    type Elem = T;
    type Shape = D::Shape;
    const SHAPE: D::Shape = D::SHAPE;
    type Iter<'a>
        = slice::Iter<'a, T>
    where
        Self: 'a;

    fn shape(&self) -> &D::Shape {
        &self.shape
    }
    fn at(&self, index: D::Shape) -> &T {
        &self[index]
    }
    fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T, D: Dimensions, P: LayoutSpec> MutableArray for DenseArray<T, D, P> {
    type IterMut<'a>
        = slice::IterMut<'a, T>
    where
        Self: 'a;

    fn at_mut(&mut self, index: D::Shape) -> &mut T {
        &mut self[index]
    }
    fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.data.iter_mut()
    }
}

impl<T, D: Dimensions, P: LayoutSpec> IntoIterator for DenseArray<T, D, P> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, D: Dimensions, P: LayoutSpec> IntoIterator for &'a DenseArray<T, D, P> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, D: Dimensions, P: LayoutSpec> IntoIterator for &'a mut DenseArray<T, D, P> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}
