//! Element-wise operations over any [`Array`].
//!
//! Every function here walks its operands in physical order and, where it produces an array, returns a fresh value of the operand type built with `Default`. Operands of one type share shape and layout, so pairing elements by physical position pairs them by coordinate too.
//!
//! Arithmetic bounds are on owned elements (`Elem: Clone + Add<Output = Elem>`); each element is cloned once per use.
//!
//! Containers typically forward their `core::ops` implementations to these functions.

use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use crate::array::{Array, MutableArray};

/// Applies `f` to every element of `a`.
pub fn map<A, F>(a: &A, mut f: F) -> A
where
    A: MutableArray + Default,
    F: FnMut(&A::Elem) -> A::Elem,
{
    let mut res = A::default();
    res.iter_mut().zip(a.iter()).for_each(|(r, x)| *r = f(x));
    res
}

/// Combines `lhs` and `rhs` position by position with `f`.
///
/// Both operands must hold the same number of elements; debug builds panic otherwise (an operand emptied by a move, for example).
pub fn zip_with<A, F>(lhs: &A, rhs: &A, mut f: F) -> A
where
    A: MutableArray + Default,
    F: FnMut(&A::Elem, &A::Elem) -> A::Elem,
{
    debug_assert_eq!(
        lhs.iter().len(),
        rhs.iter().len(),
        "element-wise operands differ in length"
    );
    let mut res = A::default();
    res.iter_mut()
        .zip(lhs.iter().zip(rhs.iter()))
        .for_each(|(out, (l, r))| *out = f(l, r));
    res
}

/// Updates `lhs` in place with `f` applied position by position against `rhs`.
///
/// Both operands must hold the same number of elements; debug builds panic otherwise.
pub fn zip_assign<A, F>(lhs: &mut A, rhs: &A, mut f: F)
where
    A: MutableArray,
    F: FnMut(&mut A::Elem, &A::Elem),
{
    debug_assert_eq!(
        lhs.iter().len(),
        rhs.iter().len(),
        "element-wise operands differ in length"
    );
    lhs.iter_mut().zip(rhs.iter()).for_each(|(l, r)| f(l, r));
}

/// Element-wise additive inverse.
pub fn negate<A>(a: &A) -> A
where
    A: MutableArray + Default,
    A::Elem: Clone + Neg<Output = A::Elem>,
{
    map(a, |x| -x.clone())
}

/// Element-wise sum.
pub fn add<A>(lhs: &A, rhs: &A) -> A
where
    A: MutableArray + Default,
    A::Elem: Clone + Add<Output = A::Elem>,
{
    zip_with(lhs, rhs, |l, r| l.clone() + r.clone())
}

/// Element-wise difference.
pub fn sub<A>(lhs: &A, rhs: &A) -> A
where
    A: MutableArray + Default,
    A::Elem: Clone + Sub<Output = A::Elem>,
{
    zip_with(lhs, rhs, |l, r| l.clone() - r.clone())
}

/// In-place element-wise sum.
pub fn add_assign<A>(lhs: &mut A, rhs: &A)
where
    A: MutableArray,
    A::Elem: for<'x> AddAssign<&'x A::Elem>,
{
    zip_assign(lhs, rhs, |l, r| *l += r);
}

/// In-place element-wise difference.
pub fn sub_assign<A>(lhs: &mut A, rhs: &A)
where
    A: MutableArray,
    A::Elem: for<'x> SubAssign<&'x A::Elem>,
{
    zip_assign(lhs, rhs, |l, r| *l -= r);
}

/// Returns `true` if every physical position holds equal values.
///
/// Operands of different lengths (an emptied array against a full one) compare unequal.
pub fn equal<A>(lhs: &A, rhs: &A) -> bool
where
    A: Array,
    A::Elem: PartialEq,
{
    lhs.iter().eq(rhs.iter())
}

/// Negation of [`equal`].
pub fn not_equal<A>(lhs: &A, rhs: &A) -> bool
where
    A: Array,
    A::Elem: PartialEq,
{
    !equal(lhs, rhs)
}
