//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use ctor::ctor;
use proptest::prelude::*;
use rust_leftist_heaps::comparator::{NaturalOrder, ReverseOrder};
use rust_leftist_heaps::wb_leftist::WBLeftistHeap;
use rust_leftist_heaps::Comparator;

/// Routes `log` output through the test harness; set `RUST_LOG` to see it
#[ctor]
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Clone)]
enum Op {
    Insert(i32),
    DeleteMinimum,
    Merge(Vec<i32>),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (-100i32..100).prop_map(Op::Insert),
        3 => Just(Op::DeleteMinimum),
        2 => prop::collection::vec(-100i32..100, 0..20).prop_map(Op::Merge),
        1 => Just(Op::Clear),
    ]
}

/// ⌊log₂(n + 1)⌋
fn spine_bound(n: usize) -> usize {
    (usize::BITS - (n + 1).leading_zeros() - 1) as usize
}

/// Full structural check: heap order, weights and the right-spine bound
fn check_structure<T, C: Comparator<T>>(heap: &WBLeftistHeap<T, C>) -> Result<(), TestCaseError> {
    prop_assert_eq!(heap.check_invariants(), Ok(()));
    prop_assert!(
        heap.right_spine_len() <= spine_bound(heap.size()),
        "right spine {} exceeds bound for {} elements",
        heap.right_spine_len(),
        heap.size()
    );
    Ok(())
}

proptest! {
    #[test]
    fn test_invariants_hold_after_every_op(ops in prop::collection::vec(op_strategy(), 0..150)) {
        let mut heap = WBLeftistHeap::new();
        let mut model: Vec<i32> = Vec::new();

        for op in ops {
            match op {
                Op::Insert(value) => {
                    heap.insert(value);
                    model.push(value);
                }
                Op::DeleteMinimum => {
                    let expected = model.iter().copied().min();
                    prop_assert_eq!(heap.minimum().ok().copied(), expected);
                    if let Some(min) = expected {
                        heap.delete_minimum().unwrap();
                        let pos = model.iter().position(|&v| v == min).unwrap();
                        model.swap_remove(pos);
                    } else {
                        prop_assert!(heap.delete_minimum().is_err());
                    }
                }
                Op::Merge(values) => {
                    model.extend(values.iter().copied());
                    heap.merge(WBLeftistHeap::from_iterable(NaturalOrder, values));
                }
                Op::Clear => {
                    heap.clear();
                    model.clear();
                }
            }

            check_structure(&heap)?;
            prop_assert_eq!(heap.size(), model.len());
            prop_assert_eq!(heap.is_empty(), model.is_empty());
            prop_assert_eq!(heap.minimum().ok().copied(), model.iter().copied().min());
        }
    }

    #[test]
    fn test_sorted_extraction(values in prop::collection::vec(any::<i32>(), 0..300)) {
        let mut heap = WBLeftistHeap::from_iterable(NaturalOrder, values.clone());
        check_structure(&heap)?;

        let mut extracted = Vec::with_capacity(values.len());
        while let Ok(&min) = heap.minimum() {
            extracted.push(min);
            heap.delete_minimum().unwrap();
            check_structure(&heap)?;
        }

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(extracted, expected);
    }

    #[test]
    fn test_merge_is_multiset_union(
        xs in prop::collection::vec(-50i32..50, 0..100),
        ys in prop::collection::vec(-50i32..50, 0..100)
    ) {
        let mut a = WBLeftistHeap::from_iterable(ReverseOrder, xs.clone());
        let b = WBLeftistHeap::from_iterable(ReverseOrder, ys.clone());
        a.merge(b);
        check_structure(&a)?;
        prop_assert_eq!(a.size(), xs.len() + ys.len());

        let mut expected: Vec<i32> = xs.into_iter().chain(ys).collect();
        expected.sort_by(|x, y| y.cmp(x));
        prop_assert_eq!(a.into_sorted_vec(), expected);
    }

    #[test]
    fn test_bulk_build_matches_inserts(values in prop::collection::vec(-1000i32..1000, 0..200)) {
        let built = WBLeftistHeap::from_iterable(NaturalOrder, values.clone());
        let mut inserted = WBLeftistHeap::new();
        for &v in &values {
            inserted.insert(v);
        }
        check_structure(&built)?;
        check_structure(&inserted)?;
        prop_assert_eq!(built.into_sorted_vec(), inserted.into_sorted_vec());
    }

    #[test]
    fn test_copy_independence(
        values in prop::collection::vec(-100i32..100, 0..100),
        extra in prop::collection::vec(-100i32..100, 1..20)
    ) {
        let mut original = WBLeftistHeap::from_iterable(NaturalOrder, values.clone());
        let copy = WBLeftistHeap::copy_of(&original);
        prop_assert_eq!(copy.to_string(), original.to_string());

        for v in extra {
            original.insert(v);
        }
        original.delete_minimum().unwrap();

        check_structure(&copy)?;
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(copy.into_sorted_vec(), expected);
    }
}
