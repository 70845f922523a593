//! Tests for the List data structure.

use super::*;

fn values<T: Clone>(list: &List<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

fn values_backward<T: Clone>(list: &List<T>) -> Vec<T> {
    let mut out = Vec::new();
    let mut cur = list.back();
    while let Some(id) = cur {
        out.push(list.get(id).unwrap().clone());
        cur = list.prev(id);
    }
    out
}

#[test]
fn test_new_list_is_empty() {
    let list = List::<i32>::new();
    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.front_value(), None);
    assert_eq!(list.back_value(), None);
    assert_eq!(list.iter().next(), None);
}

#[test]
fn test_push_back_pop_front_fifo() {
    let mut list = List::new();
    for i in 0..10 {
        list.push_back(i);
    }
    assert_eq!(list.len(), 10);

    for i in 0..4 {
        assert_eq!(list.pop_front(), Some(i));
    }
    assert_eq!(list.len(), 6);

    for i in 4..10 {
        assert_eq!(list.pop_front(), Some(i));
    }
    assert_eq!(list.pop_front(), None);
    assert!(list.is_empty());
}

#[test]
fn test_push_front_pop_back() {
    let mut list = List::new();
    list.push_front(1);
    list.push_front(2);
    list.push_front(3);

    assert_eq!(values(&list), vec![3, 2, 1]);
    assert_eq!(list.pop_back(), Some(1));
    assert_eq!(list.pop_back(), Some(2));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_back(), None);
}

#[test]
fn test_navigation() {
    let mut list = List::new();
    let a = list.push_back('a');
    let b = list.push_back('b');
    let c = list.push_back('c');

    assert_eq!(list.front(), Some(a));
    assert_eq!(list.back(), Some(c));
    assert_eq!(list.next(a), Some(b));
    assert_eq!(list.next(b), Some(c));
    assert_eq!(list.next(c), None); // would reach the sentinel
    assert_eq!(list.prev(a), None);
    assert_eq!(list.prev(c), Some(b));
    assert_eq!(values_backward(&list), vec!['c', 'b', 'a']);
}

#[test]
fn test_insert_before_after() {
    let mut list = List::new();
    let b = list.push_back("b");
    let d = list.push_back("d");

    list.insert_before("a", b).unwrap();
    list.insert_after("c", b).unwrap();
    list.insert_after("e", d).unwrap();

    assert_eq!(values(&list), vec!["a", "b", "c", "d", "e"]);
    assert_eq!(values_backward(&list), vec!["e", "d", "c", "b", "a"]);
    assert_eq!(list.back_value(), Some(&"e"));
    assert_eq!(list.len(), 5);
}

#[test]
fn test_insert_with_foreign_mark() {
    let mut list = List::new();
    let mut other = List::new();
    list.push_back(1);
    let foreign = other.push_back(2);

    assert_eq!(list.insert_before(0, foreign), Err(ListError::ForeignNode));
    assert_eq!(list.insert_after(0, foreign), Err(ListError::ForeignNode));
    assert_eq!(values(&list), vec![1]);
    assert_eq!(values(&other), vec![2]);
}

#[test]
fn test_remove() {
    let mut list = List::new();
    let a = list.push_back(1);
    let b = list.push_back(2);
    let c = list.push_back(3);

    assert_eq!(list.remove(b), Ok(2));
    assert_eq!(list.len(), 2);
    assert_eq!(list.next(a), Some(c));
    assert_eq!(list.prev(c), Some(a));

    // Handle is dead after removal.
    assert!(!list.contains(b));
    assert_eq!(list.remove(b), Err(ListError::ForeignNode));
    assert_eq!(list.get(b), None);
    assert_eq!(list.next(b), None);
    assert_eq!(list.len(), 2);
}

#[test]
fn test_remove_foreign() {
    let mut list = List::new();
    let mut other = List::new();
    list.push_back(1);
    let foreign = other.push_back(1);

    assert_eq!(list.remove(foreign), Err(ListError::ForeignNode));
    assert_eq!(list.len(), 1);
    assert_eq!(other.len(), 1);
}

#[test]
fn test_removed_value_can_be_reinserted() {
    let mut list = List::new();
    let mut other = List::new();
    let id = list.push_back(String::from("node"));

    let value = list.remove(id).unwrap();
    let moved = other.push_back(value);
    assert_eq!(other.get(moved).map(String::as_str), Some("node"));

    let value = other.remove(moved).unwrap();
    let again = list.push_front(value);
    assert_eq!(list.front(), Some(again));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_stale_handle_after_slot_reuse() {
    let mut list = List::new();
    let old = list.push_back(1);
    list.remove(old).unwrap();

    // The freed slot is reused for the next insert.
    let new = list.push_back(2);
    assert_ne!(old, new);
    assert_eq!(list.get(old), None);
    assert_eq!(list.get(new), Some(&2));
    assert_eq!(list.move_to_front(old), Err(ListError::ForeignNode));
}

#[test]
fn test_get_mut() {
    let mut list = List::new();
    let id = list.push_back(10);
    *list.get_mut(id).unwrap() += 5;
    assert_eq!(list.get(id), Some(&15));
}

#[test]
fn test_move_to_front_back() {
    let mut list: List<i32> = (1..=4).collect();
    let ids: Vec<NodeId> = list.ids().collect();

    list.move_to_front(ids[2]).unwrap();
    assert_eq!(values(&list), vec![3, 1, 2, 4]);

    list.move_to_back(ids[0]).unwrap();
    assert_eq!(values(&list), vec![3, 2, 4, 1]);

    // Already in place.
    list.move_to_front(ids[2]).unwrap();
    list.move_to_back(ids[0]).unwrap();
    assert_eq!(values(&list), vec![3, 2, 4, 1]);
    assert_eq!(values_backward(&list), vec![1, 4, 2, 3]);
    assert_eq!(list.len(), 4);
}

#[test]
fn test_move_before_after() {
    let mut list: List<i32> = (1..=5).collect();
    let ids: Vec<NodeId> = list.ids().collect();

    list.move_before(ids[4], ids[0]).unwrap();
    assert_eq!(values(&list), vec![5, 1, 2, 3, 4]);

    list.move_after(ids[0], ids[3]).unwrap();
    assert_eq!(values(&list), vec![5, 2, 3, 4, 1]);

    // Already immediately before / after the mark.
    list.move_before(ids[1], ids[2]).unwrap();
    list.move_after(ids[3], ids[2]).unwrap();
    assert_eq!(values(&list), vec![5, 2, 3, 4, 1]);

    // Relative to itself.
    list.move_before(ids[2], ids[2]).unwrap();
    list.move_after(ids[2], ids[2]).unwrap();
    assert_eq!(values(&list), vec![5, 2, 3, 4, 1]);
    assert_eq!(values_backward(&list), vec![1, 4, 3, 2, 5]);
}

#[test]
fn test_move_with_foreign_nodes() {
    let mut list: List<i32> = (1..=3).collect();
    let mut other: List<i32> = (1..=3).collect();
    let mine = list.front().unwrap();
    let theirs = other.back().unwrap();

    assert_eq!(list.move_to_front(theirs), Err(ListError::ForeignNode));
    assert_eq!(list.move_to_back(theirs), Err(ListError::ForeignNode));
    assert_eq!(list.move_before(mine, theirs), Err(ListError::ForeignNode));
    assert_eq!(list.move_after(theirs, mine), Err(ListError::ForeignNode));
    assert_eq!(values(&list), vec![1, 2, 3]);

    assert_eq!(other.move_after(mine, theirs), Err(ListError::ForeignNode));
    assert_eq!(values(&other), vec![1, 2, 3]);
}

#[test]
fn test_push_back_list() {
    let other: List<String> = ["x", "y"].iter().map(|s| s.to_string()).collect();
    let mut list: List<String> = ["a"].iter().map(|s| s.to_string()).collect();

    list.push_back_list(&other);
    assert_eq!(values(&list), vec!["a", "x", "y"]);
    assert_eq!(other.len(), 2);
    assert_eq!(values(&other), vec!["x", "y"]);

    // New nodes are not aliases of the source nodes.
    for id in other.ids() {
        assert!(!list.contains(id));
    }
    for id in list.ids() {
        assert!(!other.contains(id));
    }
}

#[test]
fn test_push_front_list() {
    let other: List<i32> = (1..=3).collect();
    let mut list: List<i32> = (4..=5).collect();

    list.push_front_list(&other);
    assert_eq!(values(&list), vec![1, 2, 3, 4, 5]);
    assert_eq!(values_backward(&list), vec![5, 4, 3, 2, 1]);
    assert_eq!(other.len(), 3);
}

#[test]
fn test_push_list_from_empty() {
    let empty = List::<i32>::new();
    let mut list: List<i32> = (1..=2).collect();
    list.push_back_list(&empty);
    list.push_front_list(&empty);
    assert_eq!(values(&list), vec![1, 2]);
}

#[test]
fn test_splice_copies_are_independent() {
    let other: List<Vec<i32>> = [vec![1], vec![2]].into_iter().collect();
    let mut list = List::new();
    list.push_back_list(&other);

    let first = list.front().unwrap();
    list.get_mut(first).unwrap().push(99);

    assert_eq!(list.front_value(), Some(&vec![1, 99]));
    assert_eq!(other.front_value(), Some(&vec![1]));
}

#[test]
fn test_clear() {
    let mut list: List<i32> = (1..=3).collect();
    let old = list.front().unwrap();

    list.clear();
    assert_eq!(list.len(), 0);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
    assert_eq!(list.pop_front(), None);

    // Handles issued before the clear no longer resolve.
    let new = list.push_back(7);
    assert!(!list.contains(old));
    assert_eq!(list.remove(old), Err(ListError::ForeignNode));
    assert_eq!(list.get(new), Some(&7));
    assert_eq!(values(&list), vec![7]);
}

#[test]
fn test_len_tracks_pushes_and_pops() {
    let mut list = List::new();
    for n in 0..20 {
        list.push_back(n);
    }
    for k in 1..=20 {
        list.pop_front();
        assert_eq!(list.len(), 20 - k);
    }
}

#[test]
fn test_iterators() {
    let list: List<i32> = (1..=4).collect();

    assert_eq!(list.iter().len(), 4);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);

    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&4));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);

    let ids: Vec<NodeId> = list.ids().rev().collect();
    assert_eq!(ids.first().copied(), list.back());
    assert_eq!(ids.last().copied(), list.front());

    let sum: i32 = (&list).into_iter().sum();
    assert_eq!(sum, 10);

    assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn test_extend_eq_debug() {
    let mut list: List<i32> = List::default();
    list.extend([1, 2]);
    list.extend(vec![3]);

    let other: List<i32> = (1..=3).collect();
    assert_eq!(list, other);
    assert_eq!(format!("{:?}", list), "[1, 2, 3]");

    list.pop_back();
    assert_ne!(list, other);
}

#[test]
fn test_clone_has_fresh_identity() {
    let list: List<i32> = (1..=3).collect();
    let copy = list.clone();

    assert_eq!(copy, list);
    let id = list.front().unwrap();
    assert!(!copy.contains(id));
    assert!(list.contains(id));
}

#[test]
fn test_list_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<List<String>>();
    assert_send_sync::<NodeId>();
    assert_send_sync::<ListError>();
}

#[test]
fn test_error_display() {
    assert_eq!(
        ListError::ForeignNode.to_string(),
        "list: node is not linked into this list"
    );
}
