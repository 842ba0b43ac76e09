#![allow(dead_code)]

use ukkonen::SuffixTree;

/// Deterministic xorshift generator for test inputs.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        XorShift(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }

    pub fn string(&mut self, max_len: usize, alphabet: &[char]) -> String {
        let len = self.below(max_len + 1);
        (0..len).map(|_| alphabet[self.below(alphabet.len())]).collect()
    }
}

/// Path labels of all leaves, sorted.
pub fn leaf_labels(tree: &SuffixTree) -> Vec<String> {
    let mut labels: Vec<String> = tree.leaves().map(|leaf| tree.path_label(leaf)).collect();
    labels.sort();
    labels
}

/// Every suffix of `text` followed by `terminator`, sorted.
pub fn expected_suffixes(text: &str, terminator: char) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut suffixes: Vec<String> = (0..=chars.len())
        .map(|k| chars[k..].iter().chain(std::iter::once(&terminator)).collect())
        .collect();
    suffixes.sort();
    suffixes
}

/// Labels of the children of the root, in insertion order.
pub fn root_labels(tree: &SuffixTree) -> Vec<String> {
    tree.children_of(tree.root_index())
        .map(|child| tree.label_of(child))
        .collect()
}

/// Start indices (in characters) of `pattern` in `text`, by brute force.
pub fn naive_find_all(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    (0..=text.len())
        .filter(|&i| text[i..].starts_with(&pattern))
        .collect()
}
