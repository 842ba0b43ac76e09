//! Indexed view of the string a suffix tree is built over.
//!
//! Positions in a suffix tree are indices into the text counted in Unicode
//! scalar values, not bytes. The index `len()` is one past the last real
//! character and reads as [Symbol::Terminator], the implicit unique end
//! marker every suffix tree needs. The caller's string is never modified.

use std::fmt;

// =#========================================================================#=
// SYMBOL
// =#========================================================================#=
/// A single position of the text: either a real character or the terminator.
///
/// The terminator compares unequal to every character, which is what makes
/// each suffix end in a leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Symbol {
    /// A character of the original text
    Char(char),
    /// The implicit unique end marker following the last character
    Terminator,
}

impl Symbol {
    /// Returns the character, or `None` for the terminator.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(*c),
            Symbol::Terminator => None,
        }
    }

    /// Returns `true` if this is the terminator.
    pub fn is_terminator(&self) -> bool {
        matches!(self, Symbol::Terminator)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Symbol::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Terminator => write!(f, "<end>"),
        }
    }
}

// =#========================================================================#=
// TEXT
// =#========================================================================#=
/// Owned copy of the source string together with its characters.
#[derive(Debug, Clone)]
pub struct Text {
    source: String,
    chars: Vec<char>,
}

impl Text {
    /// Creates a new text from the given string.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_owned(),
            chars: source.chars().collect(),
        }
    }

    /// Returns the original string.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns the characters of the text.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Returns the number of characters, not counting the terminator.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if the text has no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Returns the symbol at `index`, the terminator if `index == len()`.
    ///
    /// # Panics
    /// Panics if `index > len()`.
    pub fn symbol(&self, index: usize) -> Symbol {
        match self.chars.get(index) {
            Some(c) => Symbol::Char(*c),
            None => {
                assert!(
                    index == self.chars.len(),
                    "text index {index} beyond terminator at {}",
                    self.chars.len()
                );
                Symbol::Terminator
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_past_end_is_terminator() {
        let text = Text::new("ab");
        assert_eq!(text.symbol(0), Symbol::Char('a'));
        assert_eq!(text.symbol(1), Symbol::Char('b'));
        assert_eq!(text.symbol(2), Symbol::Terminator);
    }

    #[test]
    fn test_indices_count_characters_not_bytes() {
        let text = Text::new("añb");
        assert_eq!(text.len(), 3);
        assert_eq!(text.symbol(1), Symbol::Char('ñ'));
        assert_eq!(text.as_str(), "añb");
    }

    #[test]
    #[should_panic]
    fn test_symbol_beyond_terminator_panics() {
        Text::new("ab").symbol(3);
    }
}
