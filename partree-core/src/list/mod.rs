//! Circular singly-linked list of partial trees.
//!
//! Nodes live in an index arena: `next[slot]` links each node to its
//! successor and `rear` names the last node, whose successor is the logical
//! front. Vacated slots are recycled through a free list so a run that merges
//! trees never grows the arena past its initial size.

use std::iter::FusedIterator;

use crate::{error::ListError, graph::VertexId, roots::RootTable, tree::PartialTree};

/// Ring of [`PartialTree`]s supporting O(1) append and remove-front.
///
/// # Examples
/// ```
/// use partree_core::{PartialTree, PartialTreeList, VertexId};
///
/// let mut list = PartialTreeList::new();
/// list.append(PartialTree::new(VertexId::new(0)));
/// list.append(PartialTree::new(VertexId::new(1)));
/// assert_eq!(list.len(), 2);
///
/// let front = list.remove_front()?;
/// assert_eq!(front.root(), VertexId::new(0));
/// # Ok::<(), partree_core::ListError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct PartialTreeList {
    trees: Vec<Option<PartialTree>>,
    next: Vec<usize>,
    free: Vec<usize>,
    rear: Option<usize>,
    size: usize,
}

impl PartialTreeList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` trees.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trees: Vec::with_capacity(capacity),
            next: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Returns the number of trees in the ring.
    #[must_use]
    #[rustfmt::skip]
    pub const fn len(&self) -> usize { self.size }

    /// Returns `true` when the ring holds no trees.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Adds `tree` after the current rear, making it the new rear.
    pub fn append(&mut self, tree: PartialTree) {
        let slot = self.allocate(tree);
        match self.rear {
            None => self.next[slot] = slot,
            Some(rear) => {
                self.next[slot] = self.next[rear];
                self.next[rear] = slot;
            }
        }
        self.rear = Some(slot);
        self.size = self.size.saturating_add(1);
    }

    /// Removes and returns the tree at the front of the ring.
    ///
    /// # Errors
    /// Returns [`ListError::EmptyCollection`] when the list is empty.
    pub fn remove_front(&mut self) -> Result<PartialTree, ListError> {
        let rear = self.rear.ok_or(ListError::EmptyCollection)?;
        let front = self.next[rear];
        self.unlink(rear, front)
    }

    /// Removes and returns the first tree, scanning from the front, whose root
    /// shares a root with `vertex`.
    ///
    /// # Errors
    /// Returns [`ListError::NoMatchingTree`] when a full cycle of the ring
    /// finds no match, including when the list is empty.
    pub fn remove_tree_containing(
        &mut self,
        vertex: VertexId,
        roots: &mut impl RootTable,
    ) -> Result<PartialTree, ListError> {
        let Some(rear) = self.rear else {
            return Err(ListError::NoMatchingTree { vertex });
        };
        let target = roots.find(vertex);

        let mut prev = rear;
        let mut current = self.next[rear];
        for _ in 0..self.size {
            let tree = self.tree_at(current)?;
            if roots.find(tree.root()) == target {
                return self.unlink(prev, current);
            }
            prev = current;
            current = self.next[current];
        }
        Err(ListError::NoMatchingTree { vertex })
    }

    /// Returns an iterator over the trees from front to rear.
    ///
    /// Each call starts a fresh pass at the current front.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.rear.map(|rear| self.next[rear]),
            rest: self.size,
        }
    }

    fn allocate(&mut self, tree: PartialTree) -> usize {
        if let Some(slot) = self.free.pop() {
            self.trees[slot] = Some(tree);
            return slot;
        }
        self.trees.push(Some(tree));
        self.next.push(self.next.len());
        self.next.len() - 1
    }

    fn tree_at(&self, slot: usize) -> Result<&PartialTree, ListError> {
        self.trees
            .get(slot)
            .and_then(Option::as_ref)
            .ok_or(ListError::InvariantViolation {
                invariant: "ring links must point at occupied slots",
                slot,
            })
    }

    /// Detaches `current`, whose predecessor in the ring is `prev`.
    fn unlink(&mut self, prev: usize, current: usize) -> Result<PartialTree, ListError> {
        let tree = self
            .trees
            .get_mut(current)
            .and_then(Option::take)
            .ok_or(ListError::InvariantViolation {
                invariant: "removed node must hold a tree",
                slot: current,
            })?;

        if prev == current {
            self.rear = None;
        } else {
            self.next[prev] = self.next[current];
            if self.rear == Some(current) {
                self.rear = Some(prev);
            }
        }
        self.next[current] = current;
        self.free.push(current);
        self.size = self.size.saturating_sub(1);
        Ok(tree)
    }
}

impl<'a> IntoIterator for &'a PartialTreeList {
    type Item = &'a PartialTree;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only, single-pass iterator over a [`PartialTreeList`].
///
/// The iterator borrows the list immutably and cannot remove trees; see
/// [`Iter::remove`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    list: &'a PartialTreeList,
    cursor: Option<usize>,
    rest: usize,
}

impl Iter<'_> {
    /// Rejects removal through the iterator.
    ///
    /// # Errors
    /// Always returns [`ListError::UnsupportedOperation`].
    pub const fn remove(&mut self) -> Result<(), ListError> {
        Err(ListError::UnsupportedOperation {
            operation: "remove",
        })
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PartialTree;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest == 0 {
            return None;
        }
        let slot = self.cursor?;
        let tree = self.list.trees.get(slot)?.as_ref()?;
        self.cursor = self.list.next.get(slot).copied();
        self.rest -= 1;
        Some(tree)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest, Some(self.rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}
