//! Word list shared by every variable's initial domain.

use std::collections::HashMap;

/// Index of a word inside a [`Lexicon`].
pub type WordId = usize;

/// A candidate word, stored both as text and as indexable letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    text: String,
    letters: Vec<char>,
}

impl Word {
    fn new(text: String) -> Self {
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// The word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Letter at `offset`.
    pub fn letter(&self, offset: usize) -> Option<char> {
        self.letters.get(offset).copied()
    }

    /// Number of letters (chars, not bytes).
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    /// Whether the word has no letters.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// A deduplicated word list.
///
/// Word ids follow the order in which words first appear in the input,
/// which gives the solver its canonical value order.
///
/// # Examples
///
/// ```
/// use u_crossword::crossword::Lexicon;
///
/// let lexicon = Lexicon::new(["dog", "cat", " cat ", "", "dog"]);
/// assert_eq!(lexicon.len(), 2);
/// assert_eq!(lexicon.word(0).as_str(), "dog");
/// assert_eq!(lexicon.find("cat"), Some(1));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: Vec<Word>,
    index: HashMap<String, WordId>,
}

impl Lexicon {
    /// Builds a lexicon, trimming whitespace and skipping blank entries.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for word in words {
            let text = word.as_ref().trim();
            if text.is_empty() || lexicon.index.contains_key(text) {
                continue;
            }
            lexicon.index.insert(text.to_string(), lexicon.words.len());
            lexicon.words.push(Word::new(text.to_string()));
        }
        lexicon
    }

    /// Builds a lexicon with every word upper-cased first.
    ///
    /// Words differing only in case collapse into one entry.
    pub fn uppercase<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(words.into_iter().map(|w| w.as_ref().to_uppercase()))
    }

    /// The word with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a valid id of this lexicon.
    pub fn word(&self, id: WordId) -> &Word {
        &self.words[id]
    }

    /// The word with the given id, if it exists.
    pub fn get(&self, id: WordId) -> Option<&Word> {
        self.words.get(id)
    }

    /// Looks up the id of `text`.
    pub fn find(&self, text: &str) -> Option<WordId> {
        self.index.get(text).copied()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the lexicon is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterates `(id, word)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (WordId, &Word)> {
        self.words.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let lexicon = Lexicon::new(["train", "toast", "train", "cat", " toast"]);
        let words: Vec<_> = lexicon.iter().map(|(_, w)| w.as_str()).collect();
        assert_eq!(words, vec!["train", "toast", "cat"]);
        assert_eq!(lexicon.find("cat"), Some(2));
        assert_eq!(lexicon.find("dog"), None);
    }

    #[test]
    fn test_uppercase_folds_case() {
        let lexicon = Lexicon::uppercase(["Wind", "WIND", "rain"]);
        assert_eq!(lexicon.len(), 2);
        assert_eq!(lexicon.find("WIND"), Some(0));
        assert_eq!(lexicon.find("RAIN"), Some(1));
        assert_eq!(lexicon.find("wind"), None);
    }

    #[test]
    fn test_letters_are_chars() {
        let lexicon = Lexicon::new(["café"]);
        let word = lexicon.word(0);
        assert_eq!(word.len(), 4);
        assert_eq!(word.letter(3), Some('é'));
        assert_eq!(word.letter(4), None);
    }
}
