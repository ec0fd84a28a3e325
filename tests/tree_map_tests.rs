//! Unit tests for `RedBlackTreeMap`.

use crimson::tree::{KeyNotFoundError, RedBlackTreeMap};
use rstest::rstest;

// =============================================================================
// Basic Construction Tests
// =============================================================================

#[rstest]
fn test_new_creates_empty_map() {
    let map = RedBlackTreeMap::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

#[rstest]
fn test_default_creates_empty_map() {
    let map = RedBlackTreeMap::default();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
}

// =============================================================================
// Insert and Find Tests
// =============================================================================

#[rstest]
fn test_insert_single_entry() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");

    assert_eq!(map.len(), 1);
    assert_eq!(map.find(1), Ok("one"));
}

#[rstest]
fn test_insert_multiple_entries() {
    let mut map = RedBlackTreeMap::new();
    map.insert(2, "two");
    map.insert(1, "one");
    map.insert(3, "three");

    assert_eq!(map.len(), 3);
    assert_eq!(map.find(1), Ok("one"));
    assert_eq!(map.find(2), Ok("two"));
    assert_eq!(map.find(3), Ok("three"));
}

#[rstest]
fn test_find_nonexistent_key_reports_not_found() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");

    assert_eq!(map.find(2), Err(KeyNotFoundError { key: 2 }));
}

#[rstest]
fn test_find_on_empty_map_reports_not_found() {
    let map = RedBlackTreeMap::new();
    assert_eq!(map.find(1), Err(KeyNotFoundError { key: 1 }));
}

#[rstest]
fn test_contains_key() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");

    assert!(map.contains_key(1));
    assert!(!map.contains_key(2));
}

#[rstest]
fn test_key_not_found_error_display() {
    let error = KeyNotFoundError { key: 42 };
    assert_eq!(format!("{error}"), "key 42 not found");
}

// =============================================================================
// Duplicate Key Tests
// =============================================================================

#[rstest]
fn test_insert_duplicate_key_creates_new_entry() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");
    map.insert(1, "uno");

    assert_eq!(map.len(), 2);
    let payloads: Vec<&str> = map.payloads().collect();
    assert_eq!(payloads, vec!["one", "uno"]);
}

#[rstest]
fn test_find_duplicate_returns_first_match_on_search_path() {
    let mut map = RedBlackTreeMap::new();
    map.insert(5, "first");
    map.insert(5, "second");

    // The first insertion stays closest to the root.
    assert_eq!(map.find(5), Ok("first"));
}

#[rstest]
fn test_remove_duplicate_removes_exactly_one_entry() {
    let mut map = RedBlackTreeMap::new();
    map.insert(5, "first");
    map.insert(5, "second");
    map.insert(5, "third");

    map.remove(5).unwrap();
    assert_eq!(map.len(), 2);
    assert!(map.contains_key(5));

    map.remove(5).unwrap();
    map.remove(5).unwrap();
    assert!(!map.contains_key(5));
    assert_eq!(map.remove(5), Err(KeyNotFoundError { key: 5 }));
}

// =============================================================================
// Remove Tests
// =============================================================================

#[rstest]
fn test_remove_existing_key() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(3, "three");

    assert_eq!(map.remove(2), Ok(()));
    assert_eq!(map.len(), 2);
    assert_eq!(map.find(2), Err(KeyNotFoundError { key: 2 }));
    assert_eq!(map.find(1), Ok("one"));
    assert_eq!(map.find(3), Ok("three"));
}

#[rstest]
fn test_remove_nonexistent_key_leaves_map_untouched() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");

    assert_eq!(map.remove(99), Err(KeyNotFoundError { key: 99 }));
    assert_eq!(map.len(), 1);
    assert_eq!(map.find(1), Ok("one"));
}

#[rstest]
fn test_remove_on_empty_map_reports_not_found() {
    let mut map = RedBlackTreeMap::new();
    assert_eq!(map.remove(1), Err(KeyNotFoundError { key: 1 }));
}

#[rstest]
fn test_remove_all_entries_in_insertion_order() {
    let keys = [7, 3, 18, 10, 22, 8, 11, 26, 2, 6];
    let mut map = RedBlackTreeMap::new();
    for key in keys {
        map.insert(key, "payload");
    }

    for (index, key) in keys.into_iter().enumerate() {
        map.remove(key).unwrap();
        assert_eq!(map.len(), keys.len() - index - 1);
    }
    assert!(map.is_empty());
}

#[rstest]
fn test_size_conservation_across_mixed_operations() {
    let mut map = RedBlackTreeMap::new();
    for key in 0..50 {
        map.insert(key, "payload");
    }
    for key in (0..50).step_by(2) {
        map.remove(key).unwrap();
    }

    assert_eq!(map.len(), 25);
    let keys: Vec<i64> = map.keys().collect();
    let expected: Vec<i64> = (0..50).filter(|key| key % 2 == 1).collect();
    assert_eq!(keys, expected);
}

// =============================================================================
// Clear Tests
// =============================================================================

#[rstest]
fn test_clear_empties_the_map() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");
    map.insert(2, "two");

    map.clear();
    assert!(map.is_empty());
    assert_eq!(map.find(1), Err(KeyNotFoundError { key: 1 }));
}

#[rstest]
fn test_clear_on_empty_map_is_safe() {
    let mut map = RedBlackTreeMap::new();
    map.clear();
    assert!(map.is_empty());
}

#[rstest]
fn test_map_is_usable_after_clear() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");
    map.clear();
    map.insert(2, "two");

    assert_eq!(map.len(), 1);
    assert_eq!(map.find(2), Ok("two"));
}

// =============================================================================
// Golden Scenario Tests
// =============================================================================

#[rstest]
fn test_golden_insert_sequence_enumerates_ascending() {
    let mut map = RedBlackTreeMap::new();
    for key in [7, 3, 18, 10, 20, 8, 11, 26, 23, 21, 2, 6] {
        map.insert(key, "payload");
    }

    let keys: Vec<i64> = map.keys().collect();
    assert_eq!(keys, vec![2, 3, 6, 7, 8, 10, 11, 18, 20, 21, 23, 26]);
}

#[rstest]
fn test_golden_removal_scenario_payload_order() {
    let entries = [
        (7, "a"),
        (3, "b"),
        (18, "c"),
        (10, "d"),
        (22, "e"),
        (8, "f"),
        (11, "g"),
        (26, "h"),
        (2, "i"),
        (6, "j"),
    ];
    let mut map = RedBlackTreeMap::new();
    for (key, payload) in entries {
        map.insert(key, payload);
    }

    let payloads: Vec<&str> = map.payloads().collect();
    assert_eq!(payloads, vec!["i", "b", "j", "a", "f", "d", "g", "c", "e", "h"]);

    map.remove(18).unwrap();
    map.remove(11).unwrap();
    map.remove(3).unwrap();

    let payloads: Vec<&str> = map.payloads().collect();
    assert_eq!(payloads, vec!["i", "j", "a", "f", "d", "e", "h"]);
}

#[rstest]
fn test_find_after_mutation() {
    let entries = [
        (7, "a"),
        (3, "b"),
        (18, "c"),
        (10, "d"),
        (22, "e"),
        (8, "f"),
        (11, "g"),
        (26, "h"),
        (2, "i"),
        (6, "j"),
    ];
    let mut map = RedBlackTreeMap::new();
    for (key, payload) in entries {
        map.insert(key, payload);
    }

    map.remove(18).unwrap();
    map.remove(11).unwrap();
    map.remove(3).unwrap();

    assert_eq!(map.find(8), Ok("f"));
}

// =============================================================================
// Iteration Tests
// =============================================================================

#[rstest]
fn test_iter_yields_entries_in_ascending_key_order() {
    let mut map = RedBlackTreeMap::new();
    map.insert(3, "three");
    map.insert(1, "one");
    map.insert(2, "two");

    let entries: Vec<(i64, &str)> = map.iter().collect();
    assert_eq!(entries, vec![(1, "one"), (2, "two"), (3, "three")]);
}

#[rstest]
fn test_iter_is_restartable() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");
    map.insert(2, "two");

    let first: Vec<(i64, &str)> = map.iter().collect();
    let second: Vec<(i64, &str)> = map.entries().collect();
    assert_eq!(first, second);
}

#[rstest]
fn test_iter_is_exact_size() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");
    map.insert(2, "two");
    map.insert(3, "three");

    let mut iterator = map.iter();
    assert_eq!(iterator.len(), 3);
    iterator.next();
    assert_eq!(iterator.len(), 2);
}

#[rstest]
fn test_into_iterator_yields_owned_entries() {
    let mut map = RedBlackTreeMap::new();
    map.insert(2, "two");
    map.insert(1, "one");

    let entries: Vec<(i64, String)> = map.into_iter().collect();
    assert_eq!(
        entries,
        vec![(1, String::from("one")), (2, String::from("two"))]
    );
}

#[rstest]
fn test_borrowed_into_iterator() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");

    let mut seen = Vec::new();
    for (key, payload) in &map {
        seen.push((key, payload));
    }
    assert_eq!(seen, vec![(1, "one")]);
}

#[rstest]
fn test_from_iterator_and_extend() {
    let mut map: RedBlackTreeMap = [(3, "three"), (1, "one")].into_iter().collect();
    map.extend([(2, "two")]);

    let keys: Vec<i64> = map.keys().collect();
    assert_eq!(keys, vec![1, 2, 3]);
}

// =============================================================================
// Trait Implementation Tests
// =============================================================================

#[rstest]
fn test_display_empty_map() {
    let map = RedBlackTreeMap::new();
    assert_eq!(format!("{map}"), "{}");
}

#[rstest]
fn test_display_renders_sorted_entries() {
    let mut map = RedBlackTreeMap::new();
    map.insert(3, "three");
    map.insert(1, "one");
    map.insert(2, "two");

    assert_eq!(format!("{map}"), "{1: one, 2: two, 3: three}");
}

#[rstest]
fn test_equality_ignores_insertion_order() {
    let first: RedBlackTreeMap = [(1, "one"), (2, "two")].into_iter().collect();
    let second: RedBlackTreeMap = [(2, "two"), (1, "one")].into_iter().collect();

    assert_eq!(first, second);
}

#[rstest]
fn test_inequality_on_different_payloads() {
    let first: RedBlackTreeMap = [(1, "one")].into_iter().collect();
    let second: RedBlackTreeMap = [(1, "uno")].into_iter().collect();

    assert_ne!(first, second);
}

#[rstest]
fn test_clone_is_independent() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");

    let mut copy = map.clone();
    copy.insert(2, "two");

    assert_eq!(map.len(), 1);
    assert_eq!(copy.len(), 2);
}

#[rstest]
fn test_debug_renders_map_entries() {
    let mut map = RedBlackTreeMap::new();
    map.insert(1, "one");

    assert_eq!(format!("{map:?}"), "{1: \"one\"}");
}
