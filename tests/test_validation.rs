mod common;

use common::XorShift;
use ukkonen::{InvariantViolation, SuffixTreeBuilder, build_suffix_tree};

#[test]
fn test_built_trees_are_valid() {
    for text in ["", "a", "abc", "banana", "aaaa", "mississippi", "abcabxabcd"] {
        assert_eq!(build_suffix_tree(text).validate(), Ok(()), "text {text:?}");
    }
}

#[test]
fn test_random_trees_are_valid_for_every_list_capacity() {
    let mut rng = XorShift::new(7);
    let alphabet: Vec<char> = "abcdefghij".chars().collect();
    for capacity in [0, 1, 3, 6] {
        let builder = SuffixTreeBuilder::new().with_list_capacity(capacity);
        for _ in 0..100 {
            let text = rng.string(50, &alphabet);
            assert_eq!(builder.build(&text).validate(), Ok(()), "text {text:?}");
        }
    }
}

#[test]
fn test_violation_messages() {
    assert_eq!(
        InvariantViolation::LeafCount { expected: 5, actual: 4 }.to_string(),
        "tree has 4 leaves, expected 5"
    );
    assert_eq!(
        InvariantViolation::MissingSuffixLink(3).to_string(),
        "internal node 3 has no suffix link"
    );
    assert_eq!(
        InvariantViolation::ChildKeyMismatch {
            child: 2,
            key: 'a'.into(),
            actual: ukkonen::model::Symbol::Terminator,
        }
        .to_string(),
        "node 2 is stored under a but its edge starts with <end>"
    );
}
