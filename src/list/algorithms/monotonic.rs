use crate::list::List;

impl<T> List<T> {
    /// Removes every element that has a strictly smaller element anywhere on
    /// its right, and returns the number of remaining elements.
    ///
    /// The remaining elements are in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from([5, 3, 8, 4, 9]);
    /// assert_eq!(list.retain_ascending(), 3);
    /// assert_eq!(list.into_vec(), vec![3, 4, 9]);
    /// ```
    pub fn retain_ascending(&mut self) -> usize
    where
        T: Ord,
    {
        retain_monotonic(self, |elt, min| elt > min)
    }

    /// Removes every element that has a strictly greater element anywhere on
    /// its right, and returns the number of remaining elements.
    ///
    /// The remaining elements are in descending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from([5, 9, 3, 8, 4]);
    /// assert_eq!(list.retain_descending(), 3);
    /// assert_eq!(list.into_vec(), vec![9, 8, 4]);
    /// ```
    pub fn retain_descending(&mut self) -> usize
    where
        T: Ord,
    {
        retain_monotonic(self, |elt, max| elt < max)
    }
}

/// Scan the list from back to front with a running extremum, removing each
/// element for which `dominated(elt, extremum)` holds and adopting every other
/// element as the new extremum.
///
/// The list is reversed so the scan runs forward, then reversed back.
fn retain_monotonic<T, F>(list: &mut List<T>, mut dominated: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() {
        return 0;
    }
    list.reverse();
    let ghost = list.ghost_node();
    // The former last element always survives and seeds the extremum.
    let mut extremum = list.front_node();
    let mut kept = 1;
    let mut node = list.next(extremum);
    while node != ghost {
        let next = list.next(node);
        if list.node_less(node, extremum, &mut dominated) {
            drop(list.release(node));
        } else {
            extremum = node;
            kept += 1;
        }
        node = next;
    }
    list.reverse();
    kept
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![7])]
    #[case(vec![5, 3, 8, 4, 9], vec![3, 4, 9])]
    #[case(vec![1, 2, 3], vec![1, 2, 3])]
    #[case(vec![3, 2, 1], vec![1])]
    #[case(vec![2, 2, 1, 1], vec![1, 1])]
    fn list_retain_ascending(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut list = List::from_iter(values);
        assert_eq!(list.retain_ascending(), expected.len());
        assert!(list.check_links());
        assert_eq!(list.into_vec(), expected);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![7], vec![7])]
    #[case(vec![5, 3, 8, 4, 9], vec![9])]
    #[case(vec![5, 2, 13, 3, 8], vec![13, 8])]
    #[case(vec![1, 2, 3], vec![3])]
    #[case(vec![2, 2, 1, 1], vec![2, 2, 1, 1])]
    fn list_retain_descending(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut list = List::from_iter(values);
        assert_eq!(list.retain_descending(), expected.len());
        assert!(list.check_links());
        assert_eq!(list.into_vec(), expected);
    }
}
