use std::collections::TryReserveError;
use std::fmt::{Debug, Formatter};

use crate::list::iterator::{IntoIter, Iter};

pub mod iterator;

mod algorithms;

/// Index of the ghost node in the arena of every list.
pub(crate) const GHOST: usize = 0;

/// The `List` is a doubly-linked list implemented as a cyclic list, whose nodes
/// live in an arena owned by the list and are addressed by index.
///
/// It allows inserting, removing and relinking elements at any known node in
/// constant time. In compromise, reaching a node by position takes *O*(*n*) time.
///
/// The arena contains:
/// - the ghost node at slot 0, which carries no element, and whose `next` and
///   `prev` point to the first and the last element;
/// - a node for every element of the list;
/// - free slots left behind by removed elements, chained through their `next`
///   link and reused by later insertions.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    nodes: Vec<Node<T>>,
    /// head of the free slot chain, or `GHOST` if there is none
    free: usize,
}

pub(crate) struct Node<T> {
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) element: Option<T>,
}

impl<T> Node<T> {
    fn ghost() -> Self {
        Self {
            next: GHOST,
            prev: GHOST,
            element: None,
        }
    }
}

// link primitives
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> usize {
        GHOST
    }
    pub(crate) fn front_node(&self) -> usize {
        self.nodes[GHOST].next
    }
    pub(crate) fn back_node(&self) -> usize {
        self.nodes[GHOST].prev
    }
    pub(crate) fn next(&self, node: usize) -> usize {
        self.nodes[node].next
    }
    pub(crate) fn prev(&self, node: usize) -> usize {
        self.nodes[node].prev
    }
    pub(crate) fn element(&self, node: usize) -> Option<&T> {
        self.nodes[node].element.as_ref()
    }
    pub(crate) fn element_mut(&mut self, node: usize) -> Option<&mut T> {
        self.nodes[node].element.as_mut()
    }

    pub(crate) fn connect(&mut self, prev: usize, next: usize) {
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
    }

    /// Link a detached node `node` right before the linked node `at`.
    ///
    /// Pushing front is `link_before(node, front_node)`, and pushing back is
    /// `link_before(node, ghost_node)`.
    pub(crate) fn link_before(&mut self, node: usize, at: usize) {
        let prev = self.prev(at);
        #[cfg(debug_assertions)]
        self.assert_adjacent(prev, at);
        self.connect(prev, node);
        self.connect(node, at);
    }

    /// Unlink `node` from the ring. The links of `node` itself are left stale.
    pub(crate) fn unlink(&mut self, node: usize) {
        debug_assert_ne!(node, GHOST, "Cannot unlink the ghost node");
        self.connect(self.prev(node), self.next(node));
    }

    /// Move a single node `node` to the position right before `at`.
    pub(crate) fn move_to(&mut self, node: usize, at: usize) {
        self.move_range(node, node, at);
    }

    /// Move the range `front..=back` to the position right before `at`.
    ///
    /// Only the links at the boundaries are touched. `at` must not be inside
    /// `front..=back`.
    pub(crate) fn move_range(&mut self, front: usize, back: usize, at: usize) {
        self.connect(self.prev(front), self.next(back));
        self.connect(self.prev(at), front);
        self.connect(back, at);
    }

    /// Move the range `front..=back` to the position right after `anchor`.
    pub(crate) fn splice_range(&mut self, anchor: usize, front: usize, back: usize) {
        let at = self.next(anchor);
        self.move_range(front, back, at);
    }

    /// Reverse the range `front..=back` in place.
    ///
    /// Every node in the range gets its `next` and `prev` swapped, then the
    /// range boundary is reconnected to its old neighbors.
    pub(crate) fn reverse_range(&mut self, front: usize, back: usize) {
        let (before, after) = (self.prev(front), self.next(back));
        let mut node = front;
        loop {
            let next = self.next(node);
            let Node { next: n, prev: p, .. } = &mut self.nodes[node];
            std::mem::swap(n, p);
            if node == back {
                break;
            }
            node = next;
        }
        self.connect(before, back);
        self.connect(front, after);
    }

    /// Unlink the range `front..=back` and drop all its elements, returning the
    /// number of dropped elements.
    pub(crate) fn remove_range(&mut self, front: usize, back: usize) -> usize {
        let after = self.next(back);
        self.connect(self.prev(front), after);
        let mut removed = 0;
        let mut node = front;
        while node != after {
            // `node.next` is overwritten by `free_slot`, read it first.
            let next = self.next(node);
            drop(self.free_slot(node));
            removed += 1;
            node = next;
        }
        removed
    }

    /// Unlink a node from the list and give its element back.
    pub(crate) fn release(&mut self, node: usize) -> Option<T> {
        self.unlink(node);
        self.free_slot(node)
    }

    fn free_slot(&mut self, node: usize) -> Option<T> {
        let slot = &mut self.nodes[node];
        slot.next = self.free;
        slot.prev = node;
        self.free = node;
        slot.element.take()
    }

    /// Put `element` in a detached slot, reusing a free slot if there is any.
    fn alloc(&mut self, element: T) -> usize {
        if self.free != GHOST {
            let node = self.free;
            let slot = &mut self.nodes[node];
            self.free = slot.next;
            slot.next = node;
            slot.element = Some(element);
            return node;
        }
        let node = self.nodes.len();
        self.nodes.push(Node {
            next: node,
            prev: node,
            element: Some(element),
        });
        node
    }

    /// Like [`List::alloc`], but fails instead of aborting when the arena
    /// cannot grow.
    fn try_alloc(&mut self, element: T) -> Result<usize, TryReserveError> {
        if self.free == GHOST {
            self.nodes.try_reserve(1)?;
        }
        Ok(self.alloc(element))
    }

    #[cfg(test)]
    /// Returns `true` if the ring is cyclic and every link is mirrored
    /// (`n.next.prev == n`), and every arena slot is either linked or free.
    pub(crate) fn check_links(&self) -> bool {
        let mut linked = 0;
        let mut node = GHOST;
        loop {
            let next = self.next(node);
            if next >= self.nodes.len() || self.prev(next) != node {
                return false;
            }
            linked += 1;
            node = next;
            if node == GHOST {
                break;
            }
            if linked > self.nodes.len() {
                return false;
            }
        }
        let mut free = 0;
        let mut slot = self.free;
        while slot != GHOST {
            if self.nodes[slot].element.is_some() || free > self.nodes.len() {
                return false;
            }
            free += 1;
            slot = self.next(slot);
        }
        linked + free == self.nodes.len()
    }

    #[cfg(debug_assertions)]
    fn assert_adjacent(&self, prev: usize, next: usize) {
        assert_eq!(self.next(prev), next);
        assert_eq!(self.prev(next), prev);
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::List;
    /// let list: List<u32> = List::new();
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::ghost()],
            free: GHOST,
        }
    }

    /// Create an empty `List`, or fail if the ghost node cannot be allocated.
    pub fn try_new() -> Result<Self, TryReserveError> {
        let mut nodes = Vec::new();
        nodes.try_reserve(1)?;
        nodes.push(Node::ghost());
        Ok(Self { nodes, free: GHOST })
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(list.is_empty());
    ///
    /// list.push_front("foo");
    /// assert!(!list.is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == GHOST
    }

    /// Returns `true` if the `List` has exactly one element.
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Returns the length of the `List` by walking through it.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.len(), 1);
    ///
    /// list.push_back(3);
    /// assert_eq!(list.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`, and gives back the arena slots.
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.nodes[GHOST] = Node::ghost();
        self.free = GHOST;
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.front(), None);
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.element(self.front_node())
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.element(self.back_node())
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in amortized *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_front(2);
    /// assert_eq!(list.front(), Some(&2));
    ///
    /// list.push_front(1);
    /// assert_eq!(list.front(), Some(&1));
    /// ```
    pub fn push_front(&mut self, elt: T) {
        let node = self.alloc(elt);
        self.link_before(node, self.front_node());
    }

    /// Appends an element to the back of a list.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// list.push_back(1);
    /// list.push_back(3);
    /// assert_eq!(list.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, elt: T) {
        let node = self.alloc(elt);
        self.link_before(node, GHOST);
    }

    /// Like [`List::push_front`], but reports an arena that cannot grow
    /// instead of aborting. The list is not modified on failure.
    pub fn try_push_front(&mut self, elt: T) -> Result<(), TryReserveError> {
        let node = self.try_alloc(elt)?;
        self.link_before(node, self.front_node());
        Ok(())
    }

    /// Like [`List::push_back`], but reports an arena that cannot grow
    /// instead of aborting. The list is not modified on failure.
    pub fn try_push_back(&mut self, elt: T) -> Result<(), TryReserveError> {
        let node = self.try_alloc(elt)?;
        self.link_before(node, GHOST);
        Ok(())
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.release(self.front_node())
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.release(self.back_node())
    }

    /// Provides a forward iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    ///
    /// list.push_back(0);
    /// list.push_back(1);
    /// list.push_back(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Moves all elements from `other` to the end of the list. After this
    /// operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// If `self` is empty the arenas are swapped in *O*(1) time. Otherwise
    /// every element of `other` moves into the arena of `self`, which takes
    /// *O*(*m*) time, where *m* is the length of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list1 = List::from(['a']);
    /// let mut list2 = List::from(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1.into_vec(), vec!['a', 'b', 'c']);
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if self.is_empty() {
            std::mem::swap(self, other);
            other.clear();
            return;
        }
        while let Some(elt) = other.pop_front() {
            self.push_back(elt);
        }
        other.clear();
    }

    /// Collects the elements into a `Vec`, consuming the list.
    pub fn into_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Copies the elements into a `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> From<[T; N]> for List<T> {
    fn from(array: [T; N]) -> Self {
        array.into_iter().collect()
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
