#![cfg(test)]

use super::*;

/// Every in-place sort gets the same workout; a macro keeps the cases in one table.
macro_rules! test_slice_sort {
    ($sort:ident) => {
        let mut values: [i32; 0] = [];
        $sort(&mut values);
        assert_eq!(values, [], "Sorting an empty slice should be a no-op.");

        let mut values = [1];
        $sort(&mut values);
        assert_eq!(values, [1]);

        let mut values = [1, 2, 3, 4, 5];
        $sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5], "Sorted input should pass through unchanged.");

        let mut values = [5, 4, 3, 2, 1];
        $sort(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5], "Reversed input should be fully reordered.");

        let mut values = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
        $sort(&mut values);
        assert_eq!(
            values,
            [1, 1, 2, 3, 3, 4, 5, 5, 6, 9],
            "Duplicates should all survive the sort."
        );

        let mut words = ["pear", "apple", "orange", "banana"];
        $sort(&mut words);
        assert_eq!(words, ["apple", "banana", "orange", "pear"]);
    };
}

#[test]
fn test_insertion_sort() {
    test_slice_sort!(insertion_sort);
}

#[test]
fn test_merge_sort() {
    test_slice_sort!(merge_sort);
}

#[test]
fn test_quick_sort() {
    test_slice_sort!(quick_sort);
}

#[test]
fn test_heap_sort() {
    assert_eq!(heap_sort(Vec::<i32>::new()), []);
    assert_eq!(heap_sort(vec![1]), [1]);
    assert_eq!(heap_sort(vec![5, 4, 3, 2, 1]), [1, 2, 3, 4, 5]);
    assert_eq!(
        heap_sort(vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3]),
        [1, 1, 2, 3, 3, 4, 5, 5, 6, 9]
    );
}

#[test]
fn test_merge_sort_is_stable() {
    // Sort pairs by their first component only; equal keys must keep their original order.
    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Keyed(u8, char);

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.0.cmp(&other.0)
        }
    }

    let mut values = [Keyed(2, 'a'), Keyed(1, 'b'), Keyed(2, 'c'), Keyed(1, 'd')];
    merge_sort(&mut values);
    assert_eq!(
        values,
        [Keyed(1, 'b'), Keyed(1, 'd'), Keyed(2, 'a'), Keyed(2, 'c')],
        "Equal keys should keep their original relative order."
    );
}

#[test]
fn test_linear_search() {
    let values = [4, 2, 7, 2];
    assert_eq!(linear_search(&values, &7), Some(2));
    assert_eq!(
        linear_search(&values, &2),
        Some(1),
        "The first of several matches should be returned."
    );
    assert_eq!(linear_search(&values, &5), None);
    assert_eq!(linear_search(&[] as &[i32], &5), None);
}

#[test]
fn test_binary_search() {
    let values = [1, 3, 5, 7, 9, 11];
    for (index, value) in values.iter().enumerate() {
        assert_eq!(
            binary_search(&values, value),
            Ok(index),
            "Every present value should be found at its own index."
        );
    }

    assert_eq!(binary_search(&values, &0), Err(0));
    assert_eq!(
        binary_search(&values, &6),
        Err(3),
        "A missing value should report where it would be inserted."
    );
    assert_eq!(binary_search(&values, &12), Err(6));
    assert_eq!(binary_search(&[] as &[i32], &1), Err(0));
}

#[test]
fn test_exponential_search() {
    let values: Vec<i32> = (0..100).map(|i| i * 2).collect();
    for target in [0, 2, 26, 128, 198] {
        assert_eq!(
            exponential_search(&values, &target),
            binary_search(&values, &target),
            "Exponential search should agree with binary search on hits."
        );
    }
    for target in [-1, 13, 99, 250] {
        assert_eq!(
            exponential_search(&values, &target),
            binary_search(&values, &target),
            "Exponential search should agree with binary search on misses."
        );
    }
    assert_eq!(exponential_search(&[] as &[i32], &1), Err(0));
}
