//! Fixed-extent shape descriptors.
//!
//! `D3<2, 3, 4>` describes a rank-3 shape with extents 2, 3 and 4. The [`dims!`](crate::dims!) macro spells the same type as `dims![2, 3, 4]`.

use ndfix_core::dims::Dimensions;

macro_rules! impl_dims {
    ($name:ident, $rank:literal; $($e:ident),+) => {
        #[doc = concat!("Shape descriptor of rank ", stringify!($rank), ".")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $name<$(const $e: usize),+>;

        impl<$(const $e: usize),+> Dimensions for $name<$($e),+> {
            type Shape = [usize; $rank];
            const SHAPE: [usize; $rank] = [$($e),+];
            const SIZE: usize = 1 $(* $e)+;
        }
    };
}

impl_dims!(D1, 1; A);
impl_dims!(D2, 2; A, B);
impl_dims!(D3, 3; A, B, C);
impl_dims!(D4, 4; A, B, C, D);
impl_dims!(D5, 5; A, B, C, D, E);
impl_dims!(D6, 6; A, B, C, D, E, F);

/// Names the shape descriptor for the given extents.
///
/// ```
/// use ndfix_basic::{D3, dims};
/// use ndfix_core::Dimensions;
///
/// type Shape = dims![2, 3, 4];
/// assert_eq!(<Shape as Dimensions>::SHAPE, <D3<2, 3, 4> as Dimensions>::SHAPE);
/// assert_eq!(<Shape as Dimensions>::SIZE, 24);
/// ```
#[macro_export]
macro_rules! dims {
    ($a:expr $(,)?) => {
        $crate::D1<{ $a }>
    };
    ($a:expr, $b:expr $(,)?) => {
        $crate::D2<{ $a }, { $b }>
    };
    ($a:expr, $b:expr, $c:expr $(,)?) => {
        $crate::D3<{ $a }, { $b }, { $c }>
    };
    ($a:expr, $b:expr, $c:expr, $d:expr $(,)?) => {
        $crate::D4<{ $a }, { $b }, { $c }, { $d }>
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr $(,)?) => {
        $crate::D5<{ $a }, { $b }, { $c }, { $d }, { $e }>
    };
    ($a:expr, $b:expr, $c:expr, $d:expr, $e:expr, $f:expr $(,)?) => {
        $crate::D6<{ $a }, { $b }, { $c }, { $d }, { $e }, { $f }>
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dims_constants_test() {
        assert_eq!(<D3<2, 3, 4> as Dimensions>::SHAPE, [2, 3, 4]);
        assert_eq!(<D3<2, 3, 4> as Dimensions>::RANK, 3);
        assert_eq!(<D3<2, 3, 4> as Dimensions>::SIZE, 24);
        assert_eq!(<D1<5> as Dimensions>::SIZE, 5);
        assert_eq!(<D6<1, 2, 1, 2, 1, 2> as Dimensions>::SIZE, 8);
    }

    #[test]
    fn zero_extent_size_test() {
        assert_eq!(<D2<3, 0> as Dimensions>::SIZE, 0);
        assert_eq!(<D2<3, 0> as Dimensions>::RANK, 2);
    }

    #[test]
    fn dims_macro_test() {
        assert_eq!(<crate::dims![2, 3] as Dimensions>::SHAPE, [2, 3]);
        assert_eq!(<crate::dims![4] as Dimensions>::SIZE, 4);
    }
}
