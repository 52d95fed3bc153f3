use std::borrow::Borrow;
use std::cmp::{self, Ordering};
use std::fmt::{self, Debug, Formatter};
use std::mem;
use std::ops::{Deref, DerefMut};

use crate::util::option::OptionExtension;

#[derive(Clone)]
pub(crate) struct Branch<T: Ord>(pub Option<Box<AvlNode<T>>>);

#[derive(Clone)]
pub(crate) struct AvlNode<T: Ord> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
    pub height: usize,
}

impl<T: Ord> AvlNode<T> {
    pub fn leaf(value: T) -> AvlNode<T> {
        AvlNode {
            left: None.into(),
            right: None.into(),
            value,
            height: 1,
        }
    }

    /// Recomputes the cached height from the children's cached heights.
    pub fn update_height(&mut self) {
        self.height = 1 + cmp::max(self.left.height(), self.right.height());
    }

    /// Left subtree height minus right subtree height. The tree keeps this within `-1..=1` for
    /// every node between mutations.
    pub fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }
}

impl<T: Ord> Branch<T> {
    pub fn height(&self) -> usize {
        match &self.0 {
            Some(node) => node.height,
            None => 0,
        }
    }

    pub fn balance_factor(&self) -> isize {
        match &self.0 {
            Some(node) => node.balance_factor(),
            None => 0,
        }
    }

    /// Inserts the value into the subtree, returning false if an equal value was already present
    /// (which leaves the subtree untouched). The subtree is height-balanced again by the time the
    /// call returns.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = match &mut self.0 {
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.insert(value),
                Ordering::Greater => node.right.insert(value),
                // An equal value is already stored and the new one is discarded.
                Ordering::Equal => false,
            },
            None => {
                self.0 = Some(Box::new(AvlNode::leaf(value)));
                true
            },
        };
        if inserted {
            self.rebalance();
        }
        inserted
    }

    /// Removes the value comparing equal to the provided one, returning it if it was present. The
    /// subtree is height-balanced again by the time the call returns.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = match &mut self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.remove(value),
                Ordering::Greater => node.right.remove(value),
                Ordering::Equal => {
                    // UNWRAP: We've already matched self.0 as a Some, but we need ownership of the
                    // node to detach it.
                    let mut node = unsafe { self.0.take().unreachable() };
                    if node.left.is_some() && node.right.is_some() {
                        // Two children: the node stays in place and its value is replaced by the
                        // in-order successor, which is detached from the right subtree instead.
                        // UNWRAP: The right subtree is non-empty, so it has a first value.
                        let successor = unsafe { node.right.take_first().unreachable() };
                        let removed = mem::replace(&mut node.value, successor);
                        self.0 = Some(node);
                        Some(removed)
                    } else {
                        // At most one child: splice it up into the removed node's position.
                        let AvlNode { left, right, value, .. } = *node;
                        self.0 = left.0.or(right.0);
                        Some(value)
                    }
                },
            },
            None => None,
        };
        if removed.is_some() {
            self.rebalance();
        }
        removed
    }

    /// Detaches and returns the smallest value in the subtree, rebalancing on the way back up.
    pub fn take_first(&mut self) -> Option<T> {
        let taken = match &mut self.0 {
            Some(node) => match node.left.take_first() {
                Some(value) => Some(value),
                None => {
                    // UNWRAP: We've already matched self.0 as a Some, but we need ownership of the
                    // node to detach it.
                    let node = unsafe { self.0.take().unreachable() };
                    let AvlNode { right, value, .. } = *node;
                    self.0 = right.0;
                    Some(value)
                },
            },
            None => None,
        };
        if taken.is_some() {
            self.rebalance();
        }
        taken
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match &self.0 {
            Some(node) => match value.cmp(node.value.borrow()) {
                Ordering::Less => node.left.get(value),
                Ordering::Greater => node.right.get(value),
                Ordering::Equal => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn first(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.left.first() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    pub fn last(&self) -> Option<&T> {
        match &self.0 {
            Some(node) => match node.right.last() {
                Some(value) => Some(value),
                None => Some(&node.value),
            },
            None => None,
        }
    }

    /// Recomputes the height of every node from scratch, returning [`None`] as soon as any node's
    /// balance factor leaves `-1..=1`. This deliberately ignores the cached heights so it can act
    /// as an independent check of the invariant the mutating operations maintain incrementally.
    pub fn check_height(&self) -> Option<usize> {
        match &self.0 {
            Some(node) => {
                let left = node.left.check_height()?;
                let right = node.right.check_height()?;
                (left.abs_diff(right) <= 1).then(|| 1 + cmp::max(left, right))
            },
            None => Some(0),
        }
    }

    /// Restores the balance invariant at the root of this subtree after one of its child subtrees
    /// gained or lost height, applying at most one single or double rotation.
    ///
    /// The single/double discrimination is made on the heavier child's balance factor: a child
    /// leaning the same way as its parent is the straight-line case fixed by one rotation, while a
    /// child leaning the opposite way is first rotated into line. After an insertion the heavier
    /// child can never be level, so this reduces to the textbook inserted-side rule; after a
    /// removal a level child takes the single-rotation path.
    pub fn rebalance(&mut self) {
        let Some(node) = &mut self.0 else { return };
        node.update_height();
        match node.balance_factor() {
            2 => {
                if node.left.balance_factor() < 0 {
                    // Left-Right: rotate the left child left, reducing to Left-Left.
                    node.left.rotate_left();
                }
                self.rotate_right();
            },
            -2 => {
                if node.right.balance_factor() > 0 {
                    // Right-Left: rotate the right child right, reducing to Right-Right.
                    node.right.rotate_right();
                }
                self.rotate_left();
            },
            _ => {},
        }
    }

    /// Rotates the subtree right around its root, making the left child the new root. Heights are
    /// recomputed child before parent. The caller guarantees the root and its left child exist by
    /// only rotating right when the subtree is left-heavy.
    pub fn rotate_right(&mut self) {
        // UNWRAP: Rotations are only requested for subtrees that were measured as left-heavy,
        // which cannot be empty.
        let mut root = unsafe { self.0.take().unreachable() };
        // UNWRAP: A left-heavy root always has a left child.
        let mut pivot = unsafe { root.left.take().unreachable() };
        root.left = Branch(pivot.right.take());
        root.update_height();
        pivot.right = Branch(Some(root));
        pivot.update_height();
        self.0 = Some(pivot);
    }

    /// Rotates the subtree left around its root, making the right child the new root. Heights are
    /// recomputed child before parent. The caller guarantees the root and its right child exist by
    /// only rotating left when the subtree is right-heavy.
    pub fn rotate_left(&mut self) {
        // UNWRAP: Rotations are only requested for subtrees that were measured as right-heavy,
        // which cannot be empty.
        let mut root = unsafe { self.0.take().unreachable() };
        // UNWRAP: A right-heavy root always has a right child.
        let mut pivot = unsafe { root.right.take().unreachable() };
        root.right = Branch(pivot.left.take());
        root.update_height();
        pivot.left = Branch(Some(root));
        pivot.update_height();
        self.0 = Some(pivot);
    }
}

impl<T: Ord> Deref for Branch<T> {
    type Target = Option<Box<AvlNode<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T: Ord> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T: Ord> From<Option<Box<AvlNode<T>>>> for Branch<T> {
    fn from(value: Option<Box<AvlNode<T>>>) -> Self {
        Branch(value)
    }
}

impl<T: Ord + Debug> Debug for Branch<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(node) => write!(
                f,
                "{}\n({:?}, h{})\n{}",
                format!("{:?}", node.left)
                    .lines()
                    .map(|l| String::from("┌    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n"),
                node.value,
                node.height,
                format!("{:?}", node.right)
                    .lines()
                    .map(|l| String::from("└    ") + l)
                    .collect::<Vec<_>>()
                    .join("\n")
            ),
            None => write!(f, "-"),
        }
    }
}
