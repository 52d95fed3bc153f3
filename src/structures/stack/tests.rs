#![cfg(test)]

use super::*;
use crate::structures::traits::Container;
use crate::util::counter::DropCounter;

#[test]
fn test_push_pop_order() {
    let mut stack = Stack::new();
    for value in 1..=5 {
        stack.push(value);
    }

    assert_eq!(stack.len(), 5);
    assert_eq!(stack.top(), Some(&5), "The most recent push should be on top.");
    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        [5, 4, 3, 2, 1],
        "Iteration should walk the Stack in pop order."
    );

    assert_eq!(stack.pop(), Some(5));
    assert_eq!(stack.pop(), Some(4));
    assert_eq!(stack.len(), 3, "Popping should shrink the length.");

    stack.push(9);
    assert_eq!(
        stack.into_iter().collect::<Vec<_>>(),
        [9, 3, 2, 1],
        "Owned iteration should drain in pop order."
    );
}

#[test]
fn test_empty_access() {
    let mut stack: Stack<u8> = Stack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.top(), None, "Top of an empty Stack should be the empty condition.");
    assert_eq!(stack.pop(), None, "Popping an empty Stack should be the empty condition.");
}

#[test]
fn test_mutation_through_iterator() {
    let mut stack: Stack<i32> = (1..=4).collect();
    for value in stack.iter_mut() {
        *value *= 10;
    }
    assert_eq!(
        stack.iter().copied().collect::<Vec<_>>(),
        [40, 30, 20, 10],
        "Mutable iteration should update every element in place."
    );
}

#[test]
fn test_contains_and_clear() {
    let mut stack: Stack<i32> = (0..10).collect();
    assert!(stack.contains(&7));
    assert!(!stack.contains(&10));

    stack.clear();
    assert!(stack.is_empty(), "Clearing should remove every element.");
    assert_eq!(stack.pop(), None);

    stack.push(1);
    assert_eq!(stack.len(), 1, "A cleared Stack should be reusable.");
}

#[test]
fn test_drop_releases_all_nodes() {
    let counter = DropCounter::new();
    let stack: Stack<DropCounter> = std::iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(stack);
    assert_eq!(counter.dropped(), 10, "Dropping the Stack should drop every element.");
}
