use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use ndfix_core::{dims::Dimensions, ewise, layout::LayoutSpec};

use crate::DenseArray;

macro_rules! impl_neg {
    ($a:ty $(,$life:lifetime)* ) => {
        impl<$($life,)* T, D: Dimensions, P: LayoutSpec> Neg for $a
        where
            T: Default + Clone + Neg<Output = T>,
        {
            type Output = DenseArray<T, D, P>;
            fn neg(self) -> Self::Output {
                ewise::negate::<DenseArray<T, D, P>>(&self)
            }
        }
    };
}

impl_neg!(DenseArray<T, D, P>);
impl_neg!(&'a DenseArray<T, D, P>,'a);

// 4 combinations of Lhs/Rhs being owned/borrowed

macro_rules! impl_binary {
    ($tr:ident, $method:ident, $l:ty, $r:ty $(,$life:lifetime)* ) => {
        impl<$($life,)* T, D: Dimensions, P: LayoutSpec> $tr<$r> for $l
        where
            T: Default + Clone + $tr<Output = T>,
        {
            type Output = DenseArray<T, D, P>;
            fn $method(self, rhs: $r) -> Self::Output {
                ewise::$method::<DenseArray<T, D, P>>(&self, &rhs)
            }
        }
    };
}

impl_binary!(Add, add, DenseArray<T, D, P>, DenseArray<T, D, P>);
impl_binary!(Add, add, &'l DenseArray<T, D, P>, DenseArray<T, D, P>,'l);
impl_binary!(Add, add, DenseArray<T, D, P>, &'r DenseArray<T, D, P>,'r);
impl_binary!(Add, add, &'l DenseArray<T, D, P>, &'r DenseArray<T, D, P>,'l,'r);
impl_binary!(Sub, sub, DenseArray<T, D, P>, DenseArray<T, D, P>);
impl_binary!(Sub, sub, &'l DenseArray<T, D, P>, DenseArray<T, D, P>,'l);
impl_binary!(Sub, sub, DenseArray<T, D, P>, &'r DenseArray<T, D, P>,'r);
impl_binary!(Sub, sub, &'l DenseArray<T, D, P>, &'r DenseArray<T, D, P>,'l,'r);

macro_rules! impl_assign {
    ($tr:ident, $method:ident, $r:ty $(,$life:lifetime)* ) => {
        impl<$($life,)* T, D: Dimensions, P: LayoutSpec> $tr<$r> for DenseArray<T, D, P>
        where
            T: for<'x> $tr<&'x T>,
        {
            fn $method(&mut self, rhs: $r) {
                ewise::$method::<DenseArray<T, D, P>>(self, &rhs);
            }
        }
    };
}

impl_assign!(AddAssign, add_assign, DenseArray<T, D, P>);
impl_assign!(AddAssign, add_assign, &'r DenseArray<T, D, P>,'r);
impl_assign!(SubAssign, sub_assign, DenseArray<T, D, P>);
impl_assign!(SubAssign, sub_assign, &'r DenseArray<T, D, P>,'r);

#[cfg(test)]
mod tests {
    use std::vec;

    use itertools::iproduct;
    use ndfix_basic::dims;
    use num_complex::Complex64;

    use ndfix_core::ewise;

    use crate::{ColumnMajorArray, DenseArray};

    #[test]
    fn neg_test() -> anyhow::Result<()> {
        let a = DenseArray::<i32, dims![2, 2]>::from_vec(vec![1, -2, 3, 0])?;
        let b = -&a;
        assert_eq!(b.as_slice(), &[-1, 2, -3, 0]);
        assert_eq!(-b, a);
        Ok(())
    }

    #[test]
    fn add_sub_test() -> anyhow::Result<()> {
        let a = DenseArray::<i32, dims![3]>::from_vec(vec![1, 2, 3])?;
        let b = DenseArray::<i32, dims![3]>::from_vec(vec![10, 20, 30])?;

        let sum = &a + &b;
        assert_eq!(sum.as_slice(), &[11, 22, 33]);
        assert_eq!(&sum - &b, a);
        assert_eq!(sum.clone() - a.clone(), b);
        assert_eq!(a.clone() + &b, sum);
        assert_eq!(&b + a.clone(), sum);
        Ok(())
    }

    #[test]
    fn assign_test() -> anyhow::Result<()> {
        let mut a = DenseArray::<f64, dims![2]>::from_vec(vec![1.0, 2.0])?;
        let b = DenseArray::<f64, dims![2]>::from_vec(vec![0.5, 0.5])?;
        a += &b;
        assert_eq!(a.as_slice(), &[1.5, 2.5]);
        a -= b.clone();
        a -= b;
        assert_eq!(a.as_slice(), &[0.5, 1.5]);
        Ok(())
    }

    #[test]
    fn column_major_add_test() {
        let a = ColumnMajorArray::<usize, dims![2, 3]>::from_fn(|[i, _]| i);
        let b = ColumnMajorArray::<usize, dims![2, 3]>::from_fn(|[_, j]| 10 * j);
        let c = a + b;
        for (i, j) in iproduct!(0..2, 0..3) {
            assert_eq!(c[[i, j]], i + 10 * j);
        }
    }

    #[test]
    fn complex_test() {
        let i = Complex64::new(0.0, 1.0);
        let a = DenseArray::<Complex64, dims![2]>::from_elem(i);
        let b = DenseArray::<Complex64, dims![2]>::ones();
        let c = &a + &b;
        assert!(c.iter().all(|&z| z == Complex64::new(1.0, 1.0)));
        assert_eq!(-&c + &b, -a);
    }

    #[test]
    fn ewise_infers_dense_operands_test() -> anyhow::Result<()> {
        let a = DenseArray::<i32, dims![3]>::from_vec(vec![1, 2, 3])?;
        let b = DenseArray::<i32, dims![3]>::from_vec(vec![0, 0, 3])?;

        let s: DenseArray<i32, dims![3]> = ewise::add(&a, &b);
        assert_eq!(s.as_slice(), &[1, 2, 6]);
        assert_eq!(ewise::sub(&s, &b), a);
        assert_eq!(ewise::negate(&a).as_slice(), &[-1, -2, -3]);

        let mut c = a.clone();
        ewise::add_assign(&mut c, &b);
        assert_eq!(c, s);
        Ok(())
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "differ in length")]
    fn emptied_operand_panics_in_debug_test() {
        let mut a = DenseArray::<i32, dims![2, 3]>::ones();
        let b = DenseArray::<i32, dims![2, 3]>::ones();
        let _moved = a.take();
        let _ = &a + &b;
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "differ in length")]
    fn emptied_operand_assign_panics_in_debug_test() {
        let mut a = DenseArray::<i32, dims![2, 3]>::ones();
        let mut b = DenseArray::<i32, dims![2, 3]>::ones();
        let _moved = b.take();
        a += &b;
    }
}
