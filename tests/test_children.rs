use ukkonen::model::{Children, Symbol};

fn sym(c: char) -> Symbol {
    Symbol::Char(c)
}

fn filled(keys: &str, capacity: usize) -> Children {
    let mut children = Children::new();
    for (i, c) in keys.chars().enumerate() {
        children.insert(sym(c), i + 1, capacity);
    }
    children
}

// ============= List Storage Tests =============
#[test]
fn test_new_children_are_empty_list() {
    let children = Children::new();
    assert!(children.is_empty());
    assert!(!children.is_table());
    assert_eq!(children.get(sym('a')), None);
}

#[test]
fn test_insert_and_get() {
    let children = filled("xyz", 6);
    assert_eq!(children.len(), 3);
    assert_eq!(children.get(sym('y')), Some(2));
    assert_eq!(children.get(Symbol::Terminator), None);
    assert!(children.contains(sym('z')));
}

#[test]
#[should_panic]
fn test_insert_duplicate_key_panics() {
    let mut children = filled("ab", 6);
    children.insert(sym('a'), 9, 6);
}

#[test]
fn test_replace_keeps_slot() {
    let mut children = filled("abc", 6);
    let old = children.replace(sym('b'), 42);
    assert_eq!(old, 2);
    assert_eq!(children.get(sym('b')), Some(42));
    assert_eq!(children.indices().collect::<Vec<_>>(), vec![1, 42, 3]);
}

#[test]
#[should_panic]
fn test_replace_missing_key_panics() {
    let mut children = filled("ab", 6);
    children.replace(sym('q'), 7);
}

// ============= List -> Table Migration Tests =============
#[test]
fn test_stays_list_up_to_capacity() {
    let children = filled("abcdef", 6);
    assert!(!children.is_table());
    assert_eq!(children.len(), 6);
}

#[test]
fn test_exceeding_capacity_migrates_all_children() {
    let children = filled("abcdefg", 6);
    assert!(children.is_table());
    assert_eq!(children.len(), 7);
    for (i, c) in "abcdefg".chars().enumerate() {
        assert_eq!(children.get(sym(c)), Some(i + 1), "child {c} reachable");
    }
}

#[test]
fn test_migration_keeps_insertion_order() {
    let children = filled("gfedcba", 3);
    let keys: Vec<Symbol> = children.iter().map(|(key, _)| key).collect();
    let expected: Vec<Symbol> = "gfedcba".chars().map(sym).collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_table_replace_and_duplicate_detection() {
    let mut children = filled("abcdefgh", 2);
    assert!(children.is_table());
    assert_eq!(children.replace(sym('e'), 100), 5);
    assert_eq!(children.get(sym('e')), Some(100));
    assert_eq!(children.iter().nth(4), Some((sym('e'), 100)));
    assert_eq!(children.len(), 8);
}

#[test]
#[should_panic]
fn test_table_insert_duplicate_key_panics() {
    let mut children = filled("abcd", 1);
    children.insert(sym('c'), 50, 1);
}

#[test]
fn test_zero_capacity_starts_as_table() {
    let mut children = Children::new();
    children.insert(Symbol::Terminator, 3, 0);
    assert!(children.is_table());
    assert_eq!(children.get(Symbol::Terminator), Some(3));
}

#[test]
fn test_iter_reversed() {
    let children = filled("abc", 6);
    let reversed: Vec<usize> = children.indices().rev().collect();
    assert_eq!(reversed, vec![3, 2, 1]);

    let table = filled("abc", 0);
    let reversed: Vec<usize> = table.indices().rev().collect();
    assert_eq!(reversed, vec![3, 2, 1]);
}
