//! Lexicon - the fixed-length word membership oracle
//!
//! Words are stored uppercase as raw ASCII bytes so the scanner can test a
//! window of tiles without building a `String`.

use std::path::Path;

use rustc_hash::FxHashSet;

use crate::error::LexiconError;

/// Read-only set of valid words, all of length `word_len`
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    word_len: usize,
    words: FxHashSet<Vec<u8>>,
}

impl Lexicon {
    /// A lexicon with no words; nothing ever matches.
    pub fn empty(word_len: usize) -> Self {
        Self {
            word_len,
            words: FxHashSet::default(),
        }
    }

    /// Build from any word iterator.
    ///
    /// Words are trimmed and uppercased. Words of the wrong length or with
    /// non-letter characters are dropped since no tile run could spell them.
    /// Duplicates collapse.
    pub fn from_words<I, S>(words: I, word_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::empty(word_len);
        for word in words {
            let word = word.as_ref().trim();
            if word.len() != word_len || !word.bytes().all(|b| b.is_ascii_alphabetic()) {
                continue;
            }
            lexicon.words.insert(word.to_ascii_uppercase().into_bytes());
        }
        lexicon
    }

    /// Parse a newline-delimited word list
    pub fn parse(text: &str, word_len: usize) -> Self {
        Self::from_words(text.lines(), word_len)
    }

    /// Load a newline-delimited word list from disk
    pub fn load(path: &Path, word_len: usize) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path).map_err(|e| LexiconError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let lexicon = Self::parse(&text, word_len);
        tracing::info!(path = %path.display(), words = lexicon.len(), "loaded word list");
        Ok(lexicon)
    }

    /// Load a word list, degrading to an empty lexicon if it cannot be read.
    pub fn load_or_empty(path: &Path, word_len: usize) -> Self {
        match Self::load(path, word_len) {
            Ok(lexicon) => lexicon,
            Err(err) => {
                tracing::warn!(error = %err, "continuing with an empty word list");
                Self::empty(word_len)
            }
        }
    }

    pub fn word_len(&self) -> usize {
        self.word_len
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership test on uppercase ASCII bytes
    #[inline]
    pub fn contains(&self, word: &[u8]) -> bool {
        word.len() == self.word_len && self.words.contains(word)
    }

    /// Membership test on a string (case-insensitive)
    pub fn contains_str(&self, word: &str) -> bool {
        self.contains(word.to_ascii_uppercase().as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases_and_filters() {
        let lex = Lexicon::parse("crane\nCRANE\n  slate \nab\ncr4ne\nhello\n", 5);
        assert_eq!(lex.len(), 3);
        assert!(lex.contains(b"CRANE"));
        assert!(lex.contains(b"SLATE"));
        assert!(lex.contains_str("hello"));
        assert!(!lex.contains(b"AB"));
        assert!(!lex.contains(b"crane"));
    }

    #[test]
    fn empty_lexicon_never_matches() {
        let lex = Lexicon::empty(5);
        assert!(lex.is_empty());
        assert!(!lex.contains(b"CRANE"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let path = Path::new("/definitely/not/here/words.txt");
        assert!(matches!(
            Lexicon::load(path, 5),
            Err(LexiconError::Read { .. })
        ));
        assert!(Lexicon::load_or_empty(path, 5).is_empty());
    }
}
