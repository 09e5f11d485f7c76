//! Property-based tests for the queue operations.
//!
//! Every reshaping operation is checked against a model computed on a `Vec`,
//! and against the ring being readable the same way in both directions.

use cyclic_queue::{Queue, QueueChain};
use proptest::prelude::*;
use rstest::rstest;

fn texts() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-e]{0,3}", 0..40)
}

fn contents(queue: &Queue) -> Vec<String> {
    queue.iter().map(String::from).collect()
}

/// Walking the queue backwards must visit the same elements as walking it
/// forwards, and `size` must agree with both.
fn assert_well_linked(queue: &Queue) {
    let forward: Vec<&str> = queue.iter().collect();
    let mut backward: Vec<&str> = queue.iter().rev().collect();
    backward.reverse();
    assert_eq!(forward, backward);
    assert_eq!(queue.size(), forward.len());
}

fn keep_ascending(values: &[String]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|(i, v)| values[i + 1..].iter().all(|right| right >= *v))
        .map(|(_, v)| v.clone())
        .collect()
}

fn keep_descending(values: &[String]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|(i, v)| values[i + 1..].iter().all(|right| right <= *v))
        .map(|(_, v)| v.clone())
        .collect()
}

fn without_duplicates(values: &[String]) -> Vec<String> {
    values
        .iter()
        .enumerate()
        .filter(|&(i, v)| (i == 0 || values[i - 1] != *v) && values.get(i + 1) != Some(v))
        .map(|(_, v)| v.clone())
        .collect()
}

proptest! {
    #[test]
    fn prop_sort_orders_a_permutation(values in texts(), descending in any::<bool>()) {
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        queue.sort(descending);
        assert_well_linked(&queue);

        let mut expected = values.clone();
        expected.sort();
        if descending {
            expected.reverse();
        }
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn prop_sort_is_idempotent(values in texts(), descending in any::<bool>()) {
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        queue.sort(descending);
        let sorted = contents(&queue);
        queue.sort(descending);
        prop_assert_eq!(contents(&queue), sorted);
    }

    #[test]
    fn prop_reverse_twice_is_identity(values in texts()) {
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        queue.reverse();
        assert_well_linked(&queue);
        let reversed: Vec<String> = values.iter().rev().cloned().collect();
        prop_assert_eq!(contents(&queue), reversed);
        queue.reverse();
        prop_assert_eq!(contents(&queue), values);
    }

    #[test]
    fn prop_reverse_k_matches_chunks(values in texts(), k in 0usize..8) {
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        queue.reverse_k(k);
        assert_well_linked(&queue);

        let mut expected = values.clone();
        if k > 1 {
            for chunk in expected.chunks_exact_mut(k) {
                chunk.reverse();
            }
        }
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn prop_swap_matches_pairs(values in texts()) {
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        queue.swap();
        assert_well_linked(&queue);

        let mut expected = values.clone();
        for pair in expected.chunks_exact_mut(2) {
            pair.swap(0, 1);
        }
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn prop_delete_dup_drops_every_repeated_run(values in texts()) {
        let mut values = values;
        values.sort();
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        let expected = without_duplicates(&values);
        prop_assert_eq!(queue.delete_dup(), values.len() - expected.len());
        assert_well_linked(&queue);
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn prop_delete_mid_removes_one(values in texts()) {
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        prop_assert_eq!(queue.delete_mid(), !values.is_empty());
        assert_well_linked(&queue);
        let mut expected = values.clone();
        if !expected.is_empty() {
            expected.remove(values.len() / 2);
        }
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn prop_monotonic_filters(values in texts()) {
        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        let expected = keep_ascending(&values);
        prop_assert_eq!(queue.ascend(), expected.len());
        assert_well_linked(&queue);
        prop_assert_eq!(contents(&queue), expected);

        let mut queue = Queue::from_iter(values.iter().map(String::as_str));
        let expected = keep_descending(&values);
        prop_assert_eq!(queue.descend(), expected.len());
        assert_well_linked(&queue);
        prop_assert_eq!(contents(&queue), expected);
    }

    #[test]
    fn prop_insert_and_remove_track_a_deque(ops in prop::collection::vec((any::<bool>(), any::<bool>(), "[a-z]{0,4}"), 0..60)) {
        let mut queue = Queue::new();
        let mut model = std::collections::VecDeque::new();
        for (insert, at_head, text) in ops {
            match (insert, at_head) {
                (true, true) => {
                    queue.insert_head(text.as_str()).unwrap();
                    model.push_front(text);
                }
                (true, false) => {
                    queue.insert_tail(text.as_str()).unwrap();
                    model.push_back(text);
                }
                (false, true) => {
                    let removed = queue.remove_head(None).unwrap().map(|e| e.into_value());
                    prop_assert_eq!(removed, model.pop_front());
                }
                (false, false) => {
                    let removed = queue.remove_tail(None).unwrap().map(|e| e.into_value());
                    prop_assert_eq!(removed, model.pop_back());
                }
            }
            assert_well_linked(&queue);
        }
        prop_assert_eq!(contents(&queue), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn prop_merge_equals_sorted_concat(
        queues in prop::collection::vec(texts(), 0..8),
        descending in any::<bool>()
    ) {
        let mut chain = QueueChain::new();
        let mut expected = Vec::new();
        for mut values in queues.clone() {
            values.sort();
            if descending {
                values.reverse();
            }
            expected.extend(values.iter().cloned());
            chain.push(Queue::from_iter(values.iter().map(String::as_str)));
        }
        expected.sort();
        if descending {
            expected.reverse();
        }

        prop_assert_eq!(chain.merge(descending), expected.len());
        let merged = chain.into_first().map(|entry| entry.into_queue()).unwrap_or_default();
        assert_well_linked(&merged);
        prop_assert_eq!(contents(&merged), expected);
    }
}

#[rstest]
#[case(vec!["a", "a", "b", "c", "c", "c"], vec!["b"])]
#[case(vec!["a", "b", "c"], vec!["a", "b", "c"])]
#[case(vec![], vec![])]
fn delete_dup_examples(#[case] values: Vec<&str>, #[case] expected: Vec<&str>) {
    let mut queue = Queue::from_iter(values);
    queue.delete_dup();
    assert_eq!(queue.iter().collect::<Vec<_>>(), expected);
}

#[rstest]
fn monotonic_filter_examples() {
    let mut queue = Queue::from_iter(["5", "3", "8", "4", "9"]);
    assert_eq!(queue.ascend(), 3);
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["3", "4", "9"]);

    let mut queue = Queue::from_iter(["5", "3", "8", "4", "9"]);
    assert_eq!(queue.descend(), 1);
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec!["9"]);
}

#[rstest]
fn merge_example() {
    let mut chain: QueueChain = [vec!["a", "c"], vec!["b"], vec!["d"]]
        .into_iter()
        .map(|values| Queue::from_iter(values))
        .collect();
    assert_eq!(chain.merge(false), 4);
    let merged = chain.into_first().unwrap().into_queue();
    assert_eq!(merged.iter().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
}
