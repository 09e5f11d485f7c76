use crate::list::List;

impl<T> List<T> {
    /// Removes the middle element and returns it, or `None` if the list is
    /// empty.
    ///
    /// The middle is found by a slow/fast walk from the front: for a list of
    /// length *n* it is the element at index ⌊*n* / 2⌋.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4]);
    /// assert_eq!(list.remove_mid(), Some(3));
    /// assert_eq!(list.remove_mid(), Some(2));
    /// assert_eq!(list.into_vec(), vec![1, 4]);
    /// ```
    pub fn remove_mid(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let ghost = self.ghost_node();
        let (mut slow, mut fast) = (self.front_node(), self.front_node());
        while fast != ghost && self.next(fast) != ghost {
            fast = self.next(self.next(fast));
            slow = self.next(slow);
        }
        self.release(slow)
    }

    /// Removes every element that equals one of its neighbors, so that no
    /// duplicated element survives. Returns the number of removed elements.
    ///
    /// Only adjacent elements are compared, so the list is expected to be
    /// sorted.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from([1, 1, 2, 3, 3, 3, 4]);
    /// assert_eq!(list.remove_duplicates(), 5);
    /// assert_eq!(list.into_vec(), vec![2, 4]);
    /// ```
    pub fn remove_duplicates(&mut self) -> usize
    where
        T: PartialEq,
    {
        let ghost = self.ghost_node();
        let mut removed = 0;
        let mut front = self.front_node();
        while front != ghost {
            // Extend `front..=back` to the whole run of elements equal to `*front`.
            let mut back = front;
            while self.next(back) != ghost && self.element(self.next(back)) == self.element(front) {
                back = self.next(back);
            }
            let after = self.next(back);
            if back != front {
                removed += self.remove_range(front, back);
            }
            front = after;
        }
        removed
    }

    /// Swaps every two adjacent elements. A trailing odd element stays where
    /// it is.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5]);
    /// list.swap_pairs();
    /// assert_eq!(list.into_vec(), vec![2, 1, 4, 3, 5]);
    /// ```
    pub fn swap_pairs(&mut self) {
        let ghost = self.ghost_node();
        let mut node = self.front_node();
        while node != ghost && self.next(node) != ghost {
            self.move_to(self.next(node), node);
            node = self.next(node);
        }
    }

    /// Reverses the list in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from([1, 2, 3]);
    /// list.reverse();
    /// assert_eq!(list.into_vec(), vec![3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) {
        let ghost = self.ghost_node();
        let mut node = ghost;
        loop {
            let slot = &mut self.nodes[node];
            std::mem::swap(&mut slot.next, &mut slot.prev);
            // the old `next` now lives in `prev`
            node = slot.prev;
            if node == ghost {
                break;
            }
        }
    }

    /// Reverses every group of `k` consecutive elements. A trailing group with
    /// less than `k` elements is left as it is, and `k <= 1` changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from([1, 2, 3, 4, 5, 6, 7, 8]);
    /// list.reverse_groups(3);
    /// assert_eq!(list.into_vec(), vec![3, 2, 1, 6, 5, 4, 7, 8]);
    /// ```
    pub fn reverse_groups(&mut self, k: usize) {
        if k <= 1 {
            return;
        }
        let ghost = self.ghost_node();
        let mut front = self.front_node();
        while front != ghost {
            let (mut back, mut len) = (front, 1);
            while len < k && self.next(back) != ghost {
                back = self.next(back);
                len += 1;
            }
            if len < k {
                break;
            }
            let after = self.next(back);
            self.reverse_range(front, back);
            front = after;
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], None, vec![])]
    #[case(vec![1], Some(1), vec![])]
    #[case(vec![1, 2], Some(2), vec![1])]
    #[case(vec![1, 2, 3], Some(2), vec![1, 3])]
    #[case(vec![1, 2, 3, 4, 5, 6, 7], Some(4), vec![1, 2, 3, 5, 6, 7])]
    fn list_remove_mid(#[case] values: Vec<i32>, #[case] mid: Option<i32>, #[case] rest: Vec<i32>) {
        let mut list = List::from_iter(values);
        assert_eq!(list.remove_mid(), mid);
        assert!(list.check_links());
        assert_eq!(list.into_vec(), rest);
    }

    #[rstest]
    #[case(vec![], 0, vec![])]
    #[case(vec![1, 2, 3], 0, vec![1, 2, 3])]
    #[case(vec![1, 1], 2, vec![])]
    #[case(vec![1, 1, 2, 3, 3, 3], 5, vec![2])]
    #[case(vec![0, 1, 1, 2, 2, 3], 4, vec![0, 3])]
    #[case(vec![1, 2, 1], 0, vec![1, 2, 1])]
    fn list_remove_duplicates(#[case] values: Vec<i32>, #[case] removed: usize, #[case] rest: Vec<i32>) {
        let mut list = List::from_iter(values);
        assert_eq!(list.remove_duplicates(), removed);
        assert!(list.check_links());
        assert_eq!(list.into_vec(), rest);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![1, 2], vec![2, 1])]
    #[case(vec![1, 2, 3, 4], vec![2, 1, 4, 3])]
    #[case(vec![1, 2, 3, 4, 5], vec![2, 1, 4, 3, 5])]
    fn list_swap_pairs(#[case] values: Vec<i32>, #[case] expected: Vec<i32>) {
        let mut list = List::from_iter(values);
        list.swap_pairs();
        assert!(list.check_links());
        assert_eq!(list.into_vec(), expected);
    }

    #[test]
    fn list_reverse() {
        let mut list = List::<i32>::new();
        list.reverse();
        assert!(list.is_empty());
        assert!(list.check_links());

        let mut list = List::from([1, 2, 3, 4]);
        list.reverse();
        assert!(list.check_links());
        assert_eq!(list.to_vec(), vec![4, 3, 2, 1]);
        list.reverse();
        assert_eq!(list.to_vec(), vec![1, 2, 3, 4]);
    }

    #[rstest]
    #[case(2, vec![2, 1, 4, 3, 5])]
    #[case(3, vec![3, 2, 1, 4, 5])]
    #[case(5, vec![5, 4, 3, 2, 1])]
    #[case(0, vec![1, 2, 3, 4, 5])]
    #[case(1, vec![1, 2, 3, 4, 5])]
    #[case(6, vec![1, 2, 3, 4, 5])]
    fn list_reverse_groups(#[case] k: usize, #[case] expected: Vec<i32>) {
        let mut list = List::from([1, 2, 3, 4, 5]);
        list.reverse_groups(k);
        assert!(list.check_links());
        assert_eq!(list.into_vec(), expected);
    }
}
