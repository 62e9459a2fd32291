//! Property tests for the min-heap
//!
//! These exercise arbitrary insert/extract sequences and check the heap
//! invariant plus extraction order.

use proptest::prelude::*;
use task_heap::{MinHeap, QueueError, Task, Timestamp};

#[derive(Debug, Clone)]
enum Op {
    Insert(Task),
    Extract,
}

fn arb_task() -> impl Strategy<Value = Task> {
    // Small ranges so ties on the timestamp actually happen
    (2020i32..2023, 1u32..3, 1u32..3, 0u32..2, 0u32..2, "[a-e]{1,3}").prop_map(
        |(year, month, day, hour, minute, name)| {
            Task::new(name, Timestamp::new(year, month, day, hour, minute)).unwrap()
        },
    )
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => arb_task().prop_map(Op::Insert),
        1 => Just(Op::Extract),
    ]
}

proptest! {
    #[test]
    fn heap_property_holds_after_any_sequence(ops in prop::collection::vec(arb_op(), 0..200)) {
        let mut heap = MinHeap::new();
        let mut expected_len = 0usize;

        for op in ops {
            match op {
                Op::Insert(task) => {
                    heap.insert(task);
                    expected_len += 1;
                }
                Op::Extract => {
                    let before = heap.as_slice().iter().min().cloned();
                    match heap.extract_min() {
                        Ok(task) => {
                            prop_assert_eq!(Some(task), before);
                            expected_len -= 1;
                        }
                        Err(e) => {
                            prop_assert!(matches!(e, QueueError::EmptyQueue));
                            prop_assert_eq!(expected_len, 0);
                        }
                    }
                }
            }
            prop_assert!(heap.is_valid());
            prop_assert_eq!(heap.len(), expected_len);
        }
    }

    #[test]
    fn extraction_yields_sorted_order(tasks in prop::collection::vec(arb_task(), 0..100)) {
        let mut heap = MinHeap::new();
        for task in tasks.iter().cloned() {
            heap.insert(task);
        }

        let mut expected = tasks;
        expected.sort();

        let mut drained = Vec::new();
        while let Ok(task) = heap.extract_min() {
            drained.push(task);
        }
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn snapshot_matches_drain_and_preserves_heap(values in prop::collection::vec(any::<i16>(), 0..100)) {
        let mut heap = MinHeap::new();
        for v in &values {
            heap.insert(*v);
        }

        let first = heap.ascending_snapshot();
        let second = heap.ascending_snapshot();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(heap.len(), values.len());
        prop_assert!(heap.is_valid());

        let mut drained = Vec::new();
        while let Ok(v) = heap.extract_min() {
            drained.push(v);
        }
        prop_assert_eq!(first, drained);
    }
}
