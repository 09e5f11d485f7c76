//! The string queue on top of [`List`].

use std::collections::TryReserveError;
use std::fmt;

use crate::error::QueueError;
use crate::list::List;

/// A queue of owned strings, kept in a cyclic doubly-linked [`List`].
///
/// Besides insertion and removal at both ends, the queue can be reshaped in
/// place: reversed, reversed by groups, pairwise swapped, sorted, filtered
/// into a monotonic sequence, and stripped of duplicated runs. None of these
/// copy the strings; they only relink nodes.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b")?;
/// queue.insert_tail("c")?;
/// queue.insert_head("a")?;
/// assert_eq!(queue.size(), 3);
///
/// let mut buf = [0u8; 8];
/// let element = queue.remove_head(Some(&mut buf[..]))?.unwrap();
/// assert_eq!(element.value(), "a");
/// assert_eq!(&buf[..2], b"a\0");
/// # Ok::<(), cyclic_queue::QueueError>(())
/// ```
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Queue {
    list: List<String>,
}

/// An element removed from a [`Queue`]. It owns the removed string.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element {
    value: String,
}

impl Element {
    /// The text carried by this element.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Release the element, keeping its text.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.value
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Copy `text` into a freshly allocated string, treating `None` as empty.
fn copy_text(text: Option<&str>) -> Result<String, TryReserveError> {
    let text = text.unwrap_or_default();
    let mut value = String::new();
    value.try_reserve_exact(text.len())?;
    value.push_str(text);
    Ok(value)
}

/// Copy `value` into `buf` like `strncpy`: at most `buf.len() - 1` bytes, and
/// the rest of `buf` filled with NUL bytes. `buf` must not be empty.
fn copy_out(value: &str, buf: &mut [u8]) {
    let len = value.len().min(buf.len() - 1);
    buf[..len].copy_from_slice(&value.as_bytes()[..len]);
    buf[len..].fill(0);
}

impl Queue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Create an empty queue, or report an [`AllocationFailure`] instead of
    /// aborting.
    ///
    /// [`AllocationFailure`]: QueueError::AllocationFailure
    pub fn try_new() -> Result<Self, QueueError> {
        Ok(Self {
            list: List::try_new()?,
        })
    }

    /// Insert a copy of `text` at the head of the queue. `None` inserts an
    /// empty string.
    ///
    /// Either the element is inserted, or an error is returned and the queue
    /// is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::new();
    /// queue.insert_head("world")?;
    /// queue.insert_head(None)?;
    /// queue.insert_head("hello")?;
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["hello", "", "world"]);
    /// # Ok::<(), cyclic_queue::QueueError>(())
    /// ```
    pub fn insert_head<'s>(&mut self, text: impl Into<Option<&'s str>>) -> Result<(), QueueError> {
        let value = copy_text(text.into()).map_err(|err| {
            debug!(error = %err, "cannot allocate text for the head");
            err
        })?;
        self.list.try_push_front(value).map_err(|err| {
            debug!(error = %err, "cannot allocate a node for the head");
            err
        })?;
        Ok(())
    }

    /// Insert a copy of `text` at the tail of the queue. `None` inserts an
    /// empty string.
    ///
    /// Either the element is inserted, or an error is returned and the queue
    /// is untouched.
    pub fn insert_tail<'s>(&mut self, text: impl Into<Option<&'s str>>) -> Result<(), QueueError> {
        let value = copy_text(text.into()).map_err(|err| {
            debug!(error = %err, "cannot allocate text for the tail");
            err
        })?;
        self.list.try_push_back(value).map_err(|err| {
            debug!(error = %err, "cannot allocate a node for the tail");
            err
        })?;
        Ok(())
    }

    /// Remove the head element and give it to the caller, or `Ok(None)` if
    /// the queue is empty.
    ///
    /// If `buf` is given, the removed text is also copied into it, truncated
    /// to `buf.len() - 1` bytes and terminated by a NUL byte. An empty `buf`
    /// is rejected with [`QueueError::InvalidInput`] before anything is
    /// removed.
    pub fn remove_head(&mut self, buf: Option<&mut [u8]>) -> Result<Option<Element>, QueueError> {
        self.remove_with(buf, List::pop_front)
    }

    /// Remove the tail element and give it to the caller, or `Ok(None)` if
    /// the queue is empty. See [`Queue::remove_head`] for `buf`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["alpha", "omega"]);
    /// let mut buf = [0xffu8; 4];
    /// let element = queue.remove_tail(Some(&mut buf[..]))?.unwrap();
    /// assert_eq!(element.value(), "omega");
    /// assert_eq!(&buf, b"ome\0");
    /// # Ok::<(), cyclic_queue::QueueError>(())
    /// ```
    pub fn remove_tail(&mut self, buf: Option<&mut [u8]>) -> Result<Option<Element>, QueueError> {
        self.remove_with(buf, List::pop_back)
    }

    fn remove_with(
        &mut self,
        buf: Option<&mut [u8]>,
        pop: fn(&mut List<String>) -> Option<String>,
    ) -> Result<Option<Element>, QueueError> {
        if self.list.is_empty() {
            return Ok(None);
        }
        if buf.as_ref().map_or(false, |buf| buf.is_empty()) {
            return Err(QueueError::InvalidInput("copy-out buffer has no room for the terminator"));
        }
        let value = match pop(&mut self.list) {
            Some(value) => value,
            None => return Ok(None),
        };
        if let Some(buf) = buf {
            copy_out(&value, buf);
        }
        Ok(Some(Element { value }))
    }

    /// Like [`Queue::remove_head`] without copy-out, but an empty queue is an
    /// error.
    pub fn pop_head(&mut self) -> Result<Element, QueueError> {
        self.remove_head(None)?.ok_or(QueueError::EmptyContainer)
    }

    /// Like [`Queue::remove_tail`] without copy-out, but an empty queue is an
    /// error.
    pub fn pop_tail(&mut self) -> Result<Element, QueueError> {
        self.remove_tail(None)?.ok_or(QueueError::EmptyContainer)
    }

    /// Number of elements, counted by walking the queue.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn head(&self) -> Option<&str> {
        self.list.front().map(String::as_str)
    }

    pub fn tail(&self) -> Option<&str> {
        self.list.back().map(String::as_str)
    }

    /// Iterate over the texts from head to tail.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.list.iter().map(String::as_str)
    }

    /// Release every element and the queue itself.
    pub fn free(self) {
        trace!(size = self.size(), "free queue");
        drop(self);
    }

    /// Delete the middle element, the one at index ⌊*n* / 2⌋. Returns `false`
    /// if the queue is empty.
    pub fn delete_mid(&mut self) -> bool {
        let deleted = self.list.remove_mid().is_some();
        trace!(deleted, "delete middle");
        deleted
    }

    /// Delete every element whose text is equal to an adjacent one, so that
    /// no duplicated text survives. Returns the number of deleted elements.
    ///
    /// The queue is expected to be sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["a", "a", "b", "c", "c", "c"]);
    /// assert_eq!(queue.delete_dup(), 5);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["b"]);
    /// ```
    pub fn delete_dup(&mut self) -> usize {
        let deleted = self.list.remove_duplicates();
        trace!(deleted, "delete duplicates");
        deleted
    }

    /// Swap every two adjacent elements.
    pub fn swap(&mut self) {
        self.list.swap_pairs();
        trace!("swap pairs");
    }

    /// Reverse the queue.
    pub fn reverse(&mut self) {
        self.list.reverse();
        trace!("reverse");
    }

    /// Reverse every group of `k` elements, leaving a trailing partial group
    /// as it is.
    pub fn reverse_k(&mut self, k: usize) {
        self.list.reverse_groups(k);
        trace!(k, "reverse groups");
    }

    /// Sort the texts in lexicographic byte order, ascending or descending.
    /// Equal texts keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["pear", "apple", "fig"]);
    /// queue.sort(true);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["pear", "fig", "apple"]);
    /// ```
    pub fn sort(&mut self, descending: bool) {
        if descending {
            self.list.sort_by(|a, b| b.cmp(a));
        } else {
            self.list.sort();
        }
        trace!(descending, "sort");
    }

    /// Delete every element that has a strictly smaller text anywhere on its
    /// right. Returns the number of remaining elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_iter(["5", "3", "8", "4", "9"]);
    /// assert_eq!(queue.ascend(), 3);
    /// assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["3", "4", "9"]);
    /// ```
    pub fn ascend(&mut self) -> usize {
        let kept = self.list.retain_ascending();
        trace!(kept, "ascend");
        kept
    }

    /// Delete every element that has a strictly greater text anywhere on its
    /// right. Returns the number of remaining elements.
    pub fn descend(&mut self) -> usize {
        let kept = self.list.retain_descending();
        trace!(kept, "descend");
        kept
    }

    /// Merge the sorted queue `other` into this sorted queue, leaving `other`
    /// empty. Both must be sorted in the direction given by `descending`.
    /// On equal texts, elements of `self` come first.
    pub fn merge_from(&mut self, other: &mut Queue, descending: bool) {
        if descending {
            self.list.merge_by(&mut other.list, |a, b| a > b);
        } else {
            self.list.merge_by(&mut other.list, |a, b| a < b);
        }
    }

    #[cfg(test)]
    pub(crate) fn check_links(&self) -> bool {
        self.list.check_links()
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Queue").field(&self.list).finish()
    }
}

impl<'s> FromIterator<&'s str> for Queue {
    fn from_iter<I: IntoIterator<Item = &'s str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}

impl FromIterator<String> for Queue {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            list: List::from_iter(iter),
        }
    }
}

impl Extend<String> for Queue {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.list.extend(iter);
    }
}

impl IntoIterator for Queue {
    type Item = String;
    type IntoIter = crate::list::iterator::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.list.into_iter()
    }
}
