//! A chain of sorted queues, reduced into one by k-way merging.

use crate::list::iterator::Iter;
use crate::list::List;
use crate::queue::Queue;

/// An entry of a [`QueueChain`]: one queue and its element count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainEntry {
    queue: Queue,
    size: usize,
}

impl ChainEntry {
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// The cached number of elements in [`ChainEntry::queue`].
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn into_queue(self) -> Queue {
        self.queue
    }

    /// Merge the queue of `other` into this one, taking over its count.
    fn absorb(&mut self, mut other: ChainEntry, descending: bool) {
        self.queue.merge_from(&mut other.queue, descending);
        self.size += other.size;
    }
}

/// A cyclic list of queues, each already sorted in the same direction.
///
/// [`QueueChain::merge`] reduces the chain to a single entry holding every
/// element in sorted order.
///
/// # Examples
///
/// ```
/// use cyclic_queue::{Queue, QueueChain};
///
/// let mut chain = QueueChain::new();
/// chain.push(Queue::from_iter(["a", "c"]));
/// chain.push(Queue::from_iter(["b"]));
/// chain.push(Queue::from_iter(["d"]));
///
/// assert_eq!(chain.merge(false), 4);
/// let merged = chain.into_first().unwrap().into_queue();
/// assert_eq!(merged.iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueChain {
    entries: List<ChainEntry>,
}

impl QueueChain {
    pub fn new() -> Self {
        Self {
            entries: List::new(),
        }
    }

    /// Append `queue` to the chain, recording its current size.
    pub fn push(&mut self, queue: Queue) {
        let size = queue.size();
        self.entries.push_back(ChainEntry { queue, size });
    }

    /// Number of entries in the chain.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&ChainEntry> {
        self.entries.front()
    }

    pub fn into_first(mut self) -> Option<ChainEntry> {
        self.entries.pop_front()
    }

    pub fn iter(&self) -> Iter<'_, ChainEntry> {
        self.entries.iter()
    }

    /// Merge every queue of the chain into the first one, and return the total
    /// number of elements. All queues must be sorted in the direction given by
    /// `descending`.
    ///
    /// Each pass pairs the entries from both ends inwards: the first with the
    /// last, the second with the second to last, and so on. The later entry of
    /// a pair is merged into the earlier one and removed from the chain. Passes
    /// go on until a single entry is left.
    ///
    /// An empty chain merges to 0.
    pub fn merge(&mut self, descending: bool) -> usize {
        let mut pass = 0;
        loop {
            let len = self.entries.len();
            if len <= 1 {
                break;
            }
            let (mut front, mut back) = (self.entries.front_node(), self.entries.back_node());
            for _ in 0..len / 2 {
                let prev = self.entries.prev(back);
                if let Some(absorbed) = self.entries.release(back) {
                    if let Some(entry) = self.entries.element_mut(front) {
                        entry.absorb(absorbed, descending);
                    }
                }
                front = self.entries.next(front);
                back = prev;
            }
            pass += 1;
            debug!(pass, entries = len - len / 2, "merged queue pairs");
        }
        let size = self.first().map_or(0, ChainEntry::size);
        trace!(size, descending, "merge chain");
        size
    }
}

impl Extend<Queue> for QueueChain {
    fn extend<I: IntoIterator<Item = Queue>>(&mut self, iter: I) {
        iter.into_iter().for_each(|queue| self.push(queue));
    }
}

impl FromIterator<Queue> for QueueChain {
    fn from_iter<I: IntoIterator<Item = Queue>>(iter: I) -> Self {
        let mut chain = QueueChain::new();
        chain.extend(iter);
        chain
    }
}
