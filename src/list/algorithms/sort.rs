use crate::list::List;
use std::cmp::Ordering;

impl<T> List<T> {
    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and *O*(log(*n*))
    /// memory for the recursion.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort. Each range is split at
    /// its midpoint, found by a slow/fast walk, and the sorted halves are merged
    /// by relinking nodes. There is no extra temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut list = List::from([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut v = List::from([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v.to_vec(), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v.to_vec(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut v = List::from([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v.into_vec(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }

    /// Merge the sorted list `other` into this sorted list, leaving `other`
    /// empty. Elements of `other` move into the arena of `self`.
    ///
    /// `less` must describe the order both lists are sorted by. When elements
    /// compare equal, those of `self` stay in front.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* + *m*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// let mut list = List::from([1, 3, 5]);
    /// let mut other = List::from([2, 3, 6, 7]);
    ///
    /// list.merge_by(&mut other, |a, b| a < b);
    ///
    /// assert_eq!(list.into_vec(), vec![1, 2, 3, 3, 5, 6, 7]);
    /// assert!(other.is_empty());
    /// ```
    pub fn merge_by<F>(&mut self, other: &mut List<T>, mut less: F)
    where
        F: FnMut(&T, &T) -> bool,
    {
        let ghost = self.ghost_node();
        let mut merged = self.front_node();
        while let Some(to_merge) = other.front() {
            // Find a position of `merged`, where `*to_merge` < `*merged`.
            while merged != ghost && !self.element(merged).map_or(false, |m| less(to_merge, m)) {
                merged = self.next(merged);
            }
            if merged == ghost {
                break;
            }
            if let Some(elt) = other.pop_front() {
                let node = self.alloc(elt);
                self.link_before(node, merged);
            }
        }
        self.append(other);
    }
}

pub(crate) fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    let (start, end) = (list.front_node(), list.ghost_node());
    if !list.is_empty() && !list.is_singular() {
        merge_sort_range(list, start, end, &mut less);
    }
}

/// Find the middle node of `start..end` by advancing a fast pointer two
/// nodes for every node the slow pointer advances. Returns the middle node
/// and the length of the range.
fn mid_of_range<T>(list: &List<T>, mut start: usize, end: usize) -> (usize, usize) {
    let mut mid = start;
    let mut len = 0;
    while start != end {
        len += 1;
        start = list.next(start);
        if start != end {
            len += 1;
            start = list.next(start);
            mid = list.next(mid);
        }
    }
    (mid, len)
}

/// Sort `start..end` and return the node that starts the range afterwards.
fn merge_sort_range<T, F>(list: &mut List<T>, mut start: usize, end: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let (mut mid, len) = mid_of_range(list, start, end);
    if len < 2 {
        return start;
    }

    if list.next(start) != mid {
        start = merge_sort_range(list, start, mid, less);
    }
    if list.next(mid) != end {
        mid = merge_sort_range(list, mid, end, less);
    }

    merge_range(list, start, mid, end, less)
}

fn merge_range<T, F>(list: &mut List<T>, mut start: usize, mid: usize, end: usize, less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    // The range is logically partitioned into two sub-ranges, both of which
    // are internally sorted:
    // - merged range: `start..mid`,
    // - unmerged range: `mid..end`.
    //
    // Runs of the unmerged range are spliced into the merged range one by one.
    let (mut merged, merged_back, mut to_merge) = (start, list.prev(mid), mid);
    // If the back of merged range <= the front of unmerged range,
    // it is fully sorted, the algorithm stops here.
    while to_merge != end && list.node_less(to_merge, merged_back, less) {
        // Find a position of `merged` in the merged range,
        // where the element of the current node to merge < `*merged`.
        while merged != to_merge && !list.node_less(to_merge, merged, less) {
            merged = list.next(merged);
        }
        if merged == to_merge {
            break;
        }

        // Find a sub-range `to_merge..next_to_merge` in the unmerged range,
        // where all the element in it is < `*merged`.
        let mut next_to_merge = list.next(to_merge);
        while next_to_merge != end && list.node_less(next_to_merge, merged, less) {
            next_to_merge = list.next(next_to_merge);
        }
        if merged == start {
            start = to_merge;
        }
        // Splice the sub-range `to_merge..next_to_merge` right after the
        // node before `merged`.
        let anchor = list.prev(merged);
        list.splice_range(anchor, to_merge, list.prev(next_to_merge));
        to_merge = next_to_merge;
    }
    start
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use rstest::rstest;

    #[rstest]
    #[case(vec![])]
    #[case(vec![1])]
    #[case(vec![2, 1])]
    #[case(vec![3, 1, 2])]
    #[case(vec![5, 1, 4, 2, 3, 9, 0, 8, 7, 6])]
    #[case(vec![1, 1, 1, 0, 0, 0])]
    #[case((0..100).rev().collect())]
    #[case((0..37).map(|i| (i * 17) % 11).collect())]
    fn list_sort(#[case] values: Vec<i32>) {
        let mut list = List::from_iter(values.clone());
        list.sort();
        assert!(list.check_links());
        let mut expected = values;
        expected.sort();
        assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn list_sort_is_stable() {
        let values: Vec<(u8, usize)> = [3, 1, 2, 1, 3, 2, 1, 0, 2]
            .iter()
            .enumerate()
            .map(|(i, &k)| (k, i))
            .collect();
        let mut list = List::from_iter(values.clone());
        list.sort_by_key(|&(k, _)| k);
        let mut expected = values.clone();
        expected.sort_by_key(|&(k, _)| k);
        assert_eq!(list.to_vec(), expected);

        list.sort_by(|a, b| b.0.cmp(&a.0));
        let mut expected = values;
        expected.sort_by(|a, b| b.0.cmp(&a.0));
        assert_eq!(list.into_vec(), expected);
    }

    #[rstest]
    #[case(vec![1, 3, 5], vec![2, 4], vec![1, 2, 3, 4, 5])]
    #[case(vec![], vec![2, 4], vec![2, 4])]
    #[case(vec![1, 3], vec![], vec![1, 3])]
    #[case(vec![5, 6], vec![1, 2], vec![1, 2, 5, 6])]
    #[case(vec![1, 2], vec![5, 6], vec![1, 2, 5, 6])]
    fn list_merge_by(#[case] left: Vec<i32>, #[case] right: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut list = List::from_iter(left);
        let mut other = List::from_iter(right);
        list.merge_by(&mut other, |a, b| a < b);
        assert!(list.check_links());
        assert!(other.is_empty());
        assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn list_merge_by_keeps_self_first_on_ties() {
        let mut list = List::from([(1, 'a'), (2, 'a')]);
        let mut other = List::from([(1, 'b'), (2, 'b')]);
        list.merge_by(&mut other, |a, b| a.0 < b.0);
        assert_eq!(list.into_vec(), vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }
}
