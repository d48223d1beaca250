//! Property-based tests for the element-wise operations and the layouts.

use ndfix::prelude::*;
use ndfix::{ColumnMajor, Layout, RowMajor};
use proptest::prelude::*;

type Row = DenseArray<i64, dims![2, 3, 4]>;
type Col = ColumnMajorArray<i64, dims![2, 3, 4]>;

fn buffer_strategy() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1000i64..1000, 24)
}

fn index_strategy() -> impl Strategy<Value = [usize; 3]> {
    (0usize..2, 0usize..3, 0usize..4).prop_map(|(i, j, k)| [i, j, k])
}

proptest! {
    /// Property: equality is reflexive
    #[test]
    fn prop_eq_reflexive(v in buffer_strategy()) {
        let a = Row::from_vec(v).unwrap();
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(a.clone(), a);
    }

    /// Property: negation is an involution
    #[test]
    fn prop_double_negation(v in buffer_strategy()) {
        let a = Col::from_vec(v).unwrap();
        prop_assert_eq!(-(-&a), a);
    }

    /// Property: subtraction undoes addition
    #[test]
    fn prop_add_then_sub(v in buffer_strategy(), w in buffer_strategy()) {
        let a = Row::from_vec(v).unwrap();
        let b = Row::from_vec(w).unwrap();
        prop_assert_eq!(&(&a + &b) - &b, a.clone());
        prop_assert_eq!(&a + &b, &b + &a);
        prop_assert_eq!(&a - &a, Row::zeros());
    }

    /// Property: compound assignment agrees with the binary operators
    #[test]
    fn prop_assign_matches_binary(v in buffer_strategy(), w in buffer_strategy()) {
        let a = Col::from_vec(v).unwrap();
        let b = Col::from_vec(w).unwrap();
        let mut c = a.clone();
        c += &b;
        prop_assert_eq!(&c, &(&a + &b));
        c -= b;
        prop_assert_eq!(c, a);
    }

    /// Property: element-wise results hold at every coordinate
    #[test]
    fn prop_add_pointwise(v in buffer_strategy(), w in buffer_strategy(), index in index_strategy()) {
        let a = Col::from_vec(v).unwrap();
        let b = Col::from_vec(w).unwrap();
        prop_assert_eq!((&a + &b)[index], a[index] + b[index]);
        prop_assert_eq!((-&a)[index], -a[index]);
    }

    /// Property: swap exchanges contents exactly
    #[test]
    fn prop_swap_exchanges(v in buffer_strategy(), w in buffer_strategy()) {
        let mut a = Row::from_vec(v.clone()).unwrap();
        let mut b = Row::from_vec(w.clone()).unwrap();
        ndfix::swap(&mut a, &mut b);
        prop_assert_eq!(a.into_vec(), w);
        prop_assert_eq!(b.into_vec(), v);
    }

    /// Property: a single write is visible at its coordinate only
    #[test]
    fn prop_write_is_local(index in index_strategy(), value in -1000i64..1000) {
        let mut a = Col::new();
        a[index] = value;
        for other in a.indices() {
            let expected = if other == index { value } else { 0 };
            prop_assert_eq!(a[other], expected);
        }
    }

    /// Property: both layouts map coordinates into range, one to one
    #[test]
    fn prop_layouts_in_range(index in index_strategy()) {
        let row = RowMajor::new(&[2usize, 3, 4]);
        let col = ColumnMajor::new(&[2usize, 3, 4]);
        let [i, j, k] = index;
        prop_assert_eq!(row.linear_index(&index), 12 * i + 4 * j + k);
        prop_assert_eq!(col.linear_index(&index), i + 2 * j + 6 * k);
        prop_assert!(row.linear_index(&index) < 24);
        prop_assert!(col.linear_index(&index) < 24);
    }
}
