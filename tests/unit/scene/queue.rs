use super::*;
use crate::stage::arena::Stage;

fn three() -> [AnimRef; 3] {
    let mut stage = Stage::new();
    [
        stage.wait(1.0).unwrap(),
        stage.wait(2.0).unwrap(),
        stage.wait(3.0).unwrap(),
    ]
}

#[test]
fn pops_in_fifo_order() {
    let [a, b, c] = three();
    let mut queue = AnimationQueue::new();
    queue.push(a);
    queue.push(b);
    queue.push(c);
    assert_eq!(queue.pop_front(), Some(a));
    assert_eq!(queue.pop_front(), Some(b));
    assert_eq!(queue.pop_front(), Some(c));
    assert_eq!(queue.pop_front(), None);
}

#[test]
fn pop_back_removes_the_tail() {
    let [a, b, _] = three();
    let mut queue = AnimationQueue::new();
    queue.push(a);
    queue.push(b);
    assert_eq!(queue.pop_back(), Some(b));
    assert_eq!(queue.iter().collect::<Vec<_>>(), vec![a]);
}

#[test]
fn indexed_access_counts_from_the_head() {
    let [a, b, c] = three();
    let mut queue = AnimationQueue::new();
    queue.push(a);
    queue.push(b);
    queue.pop_front();
    assert_eq!(queue.get(0), Some(b));
    assert!(queue.set(0, c));
    assert!(!queue.set(1, a));
    assert_eq!(queue.get(1), None);
    assert!(queue.contains(c.id()));
    assert!(!queue.contains(a.id()));
}

#[test]
fn the_same_animation_may_be_queued_twice() {
    let [a, ..] = three();
    let mut queue = AnimationQueue::new();
    queue.push(a);
    queue.push(a);
    assert_eq!(queue.len(), 2);
    queue.clear();
    assert!(queue.is_empty());
}
