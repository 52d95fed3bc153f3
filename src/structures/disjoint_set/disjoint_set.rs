use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use crate::structures::traits::Container;
#[doc(inline)]
pub use crate::util::error::MissingElement;

/// A union-find structure over interned elements, using union by rank and path compression.
///
/// Elements are added as singleton sets with [`make_set`](DisjointSet::make_set) and merged with
/// [`union_sets`](DisjointSet::union_sets). Each element is interned to a dense index on first
/// sight, and the parent/rank/size bookkeeping runs on the indices, so the per-operation cost is
/// the near-constant inverse Ackermann bound regardless of the element type.
///
/// Operations that resolve a representative take `&mut self` even when they answer a query,
/// because the lookup flattens the parent chains it walks (path compression). This mirrors how
/// the amortized bound is actually achieved rather than pretending lookups are pure reads.
pub struct DisjointSet<T: Hash + Eq + Clone> {
    pub(crate) indices: HashMap<T, usize>,
    pub(crate) items: Vec<T>,
    pub(crate) parents: Vec<usize>,
    pub(crate) ranks: Vec<u32>,
    pub(crate) sizes: Vec<usize>,
    pub(crate) set_count: usize,
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    /// Creates a new DisjointSet holding no elements.
    pub fn new() -> DisjointSet<T> {
        DisjointSet {
            indices: HashMap::new(),
            items: Vec::new(),
            parents: Vec::new(),
            ranks: Vec::new(),
            sizes: Vec::new(),
            set_count: 0,
        }
    }

    /// Returns the number of elements across all sets.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if no elements have been added.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.set_count
    }

    /// Returns true if the provided element has been added.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.indices.contains_key(item)
    }

    /// Adds the provided element as a new singleton set, returning false if it was already
    /// present (in which case its set membership is untouched).
    ///
    /// # Examples
    /// ```
    /// # use dsa_lib::structures::disjoint_set::DisjointSet;
    /// let mut sets = DisjointSet::new();
    /// assert!(sets.make_set("a"));
    /// assert!(!sets.make_set("a"));
    /// assert_eq!(sets.set_count(), 1);
    /// ```
    pub fn make_set(&mut self, item: T) -> bool {
        if self.indices.contains_key(&item) {
            return false;
        }
        let index = self.items.len();
        self.indices.insert(item.clone(), index);
        self.items.push(item);
        self.parents.push(index);
        self.ranks.push(0);
        self.sizes.push(1);
        self.set_count += 1;
        true
    }

    /// Returns the representative element of the set containing the provided element, or [`None`]
    /// if the element was never added. Two elements are in the same set exactly when their
    /// representatives are identical.
    pub fn find<Q>(&mut self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.indices.get(item)?;
        let root = self.find_root(index);
        Some(&self.items[root])
    }

    /// Merges the sets containing the two provided elements. Returns true if two distinct sets
    /// were merged and false if the elements were already together.
    ///
    /// # Errors
    /// Fails with [`MissingElement`] if either element was never added.
    pub fn union_sets<Q>(&mut self, a: &Q, b: &Q) -> Result<bool, MissingElement>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index_a = *self.indices.get(a).ok_or(MissingElement)?;
        let index_b = *self.indices.get(b).ok_or(MissingElement)?;
        let root_a = self.find_root(index_a);
        let root_b = self.find_root(index_b);
        if root_a == root_b {
            return Ok(false);
        }

        // Union by rank: the shallower tree goes under the deeper one, so the depth only grows
        // when two equally ranked trees meet.
        let (upper, lower) = if self.ranks[root_a] >= self.ranks[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parents[lower] = upper;
        self.sizes[upper] += self.sizes[lower];
        if self.ranks[upper] == self.ranks[lower] {
            self.ranks[upper] += 1;
        }
        self.set_count -= 1;
        Ok(true)
    }

    /// Returns true if the two provided elements are in the same set.
    ///
    /// # Errors
    /// Fails with [`MissingElement`] if either element was never added.
    pub fn connected<Q>(&mut self, a: &Q, b: &Q) -> Result<bool, MissingElement>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index_a = *self.indices.get(a).ok_or(MissingElement)?;
        let index_b = *self.indices.get(b).ok_or(MissingElement)?;
        Ok(self.find_root(index_a) == self.find_root(index_b))
    }

    /// Returns the number of elements in the set containing the provided element.
    ///
    /// # Errors
    /// Fails with [`MissingElement`] if the element was never added.
    pub fn set_size<Q>(&mut self, item: &Q) -> Result<usize, MissingElement>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = *self.indices.get(item).ok_or(MissingElement)?;
        let root = self.find_root(index);
        Ok(self.sizes[root])
    }

    /// Removes every element and set.
    pub fn clear(&mut self) {
        self.indices.clear();
        self.items.clear();
        self.parents.clear();
        self.ranks.clear();
        self.sizes.clear();
        self.set_count = 0;
    }
}

impl<T: Hash + Eq + Clone> DisjointSet<T> {
    /// Walks the parent chain without mutating it.
    pub(crate) fn root_of(&self, index: usize) -> usize {
        let mut root = index;
        while self.parents[root] != root {
            root = self.parents[root];
        }
        root
    }

    /// Walks the parent chain to the root, then points every node on the walked path directly at
    /// the root so the next walk is a single hop.
    pub(crate) fn find_root(&mut self, index: usize) -> usize {
        let root = self.root_of(index);
        let mut current = index;
        while current != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        root
    }
}

impl<T: Hash + Eq + Clone> Container for DisjointSet<T> {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.clear();
    }
}

impl<T: Hash + Eq + Clone> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone> FromIterator<T> for DisjointSet<T> {
    /// Collects every distinct element into its own singleton set.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut sets = DisjointSet::new();
        sets.extend(iter);
        sets
    }
}

impl<T: Hash + Eq + Clone> Extend<T> for DisjointSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.make_set(item);
        }
    }
}

impl<T: Hash + Eq + Clone + Debug> Debug for DisjointSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DisjointSet")
            .field("items", &self.items)
            .field("parents", &self.parents)
            .field("set_count", &self.set_count)
            .finish()
    }
}

impl<T: Hash + Eq + Clone + Debug> Display for DisjointSet<T> {
    /// Renders the sets in first-seen order, e.g. `{"a", "b"} {"c"}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut positions: HashMap<usize, usize> = HashMap::new();
        let mut groups: Vec<Vec<&T>> = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let root = self.root_of(index);
            let next_position = groups.len();
            let position = *positions.entry(root).or_insert(next_position);
            if position == groups.len() {
                groups.push(Vec::new());
            }
            groups[position].push(item);
        }

        write!(
            f,
            "{}",
            groups
                .iter()
                .map(|group| format!(
                    "{{{}}}",
                    group
                        .iter()
                        .map(|item| format!("{item:?}"))
                        .collect::<Vec<_>>()
                        .join(", ")
                ))
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}
