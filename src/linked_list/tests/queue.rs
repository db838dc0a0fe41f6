extern crate std;

use std::{collections::VecDeque, format, panic, vec, vec::Vec};

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::{queue::LinkedQueue, traits::Queue};

#[test]
fn test_queue_enqueue_dequeue() {
    let mut queue = LinkedQueue::new();
    assert!(queue.is_empty());

    queue.enqueue(55);
    queue.enqueue(78);
    queue.enqueue(32);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some(&55));

    assert_eq!(queue.dequeue(), Some(55));
    assert_eq!(queue.dequeue(), Some(78));
    assert_eq!(queue.dequeue(), Some(32));
    assert!(queue.is_empty());
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_queue_dequeue_empty() {
    let mut queue = LinkedQueue::<i32>::new();
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.peek(), None);
    assert_eq!(queue.len(), 0);

    queue.enqueue(1);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!(queue.dequeue(), None);
    assert_eq!(queue.len(), 0);
}

#[test]
fn test_queue_refill_after_drain() {
    let mut queue = LinkedQueue::new();
    queue.enqueue("a");
    assert_eq!(queue.dequeue(), Some("a"));

    queue.enqueue("b");
    queue.enqueue("c");
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
}

#[test]
fn test_queue_from_iter_keeps_order() {
    let queue: LinkedQueue<_> = (1..=5).collect();
    assert_eq!(queue.len(), 5);
    assert_eq!(format!("{:?}", queue), "[1, 2, 3, 4, 5]");

    let copy = queue.clone();
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!(copy.len(), 5);

    let mut queue = copy;
    queue.extend([6, 7]);
    assert_eq!(queue.dequeue(), Some(1));
    assert_eq!((&queue).into_iter().last(), Some(&7));
}

#[test]
fn test_queue_extend_len_survives_panicking_source() {
    let mut queue: LinkedQueue<u8> = [1].into_iter().collect();

    let result = panic::catch_unwind(panic::AssertUnwindSafe(|| {
        queue.extend((2..8).map(|v| if v == 4 { panic!("source failed") } else { v }));
    }));
    assert!(result.is_err());

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.iter().len(), 3);
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_queue_matches_vecdeque_model() {
    let mut rng = StdRng::seed_from_u64(0xf1f0);
    let mut queue = LinkedQueue::new();
    let mut model = VecDeque::new();

    for step in 0..5_000u32 {
        if rng.random_bool(0.55) {
            queue.enqueue(step);
            model.push_back(step);
        } else {
            assert_eq!(queue.dequeue(), model.pop_front());
        }
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.peek(), model.front());
    }

    assert!(queue.iter().eq(model.iter()));
}
