//! Dictionary service built on the word trie.
//!
//! [`SpellChecker`] is the layer between front ends and the trie: it loads
//! word lists, enforces the minimum prefix length, ranks suggestions by
//! frequency and sorts listings alphabetically. [`SharedSpellChecker`] wraps
//! it for hosts that serve concurrent callers.

pub mod loader;
pub mod ranking;
pub mod shared;

use std::fs::File;
use std::io::{BufRead, BufWriter};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::search::SearchConfig;
use crate::config::SpellbookConfig;
use crate::data_structures::{merge_sort, TrieError, WordFrequency, WordTrie};
use crate::error::dictionary::DictionaryError;

pub use loader::{parse_line, write_word_list, WordListReader};
pub use ranking::rank_by_frequency;
pub use shared::SharedSpellChecker;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Spell checker holding one word list in a trie.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    /// Words and frequencies
    trie: WordTrie,

    /// Prefix length and suggestion limits
    search: SearchConfig,

    /// File the current word list came from, if any
    source: Option<PathBuf>,
}

impl SpellChecker {
    /// Creates an empty spell checker.
    pub fn new(search: SearchConfig) -> Self {
        Self {
            trie: WordTrie::new(),
            search,
            source: None,
        }
    }

    /// Creates a spell checker from the configured word list.
    pub fn from_config(config: &SpellbookConfig) -> DictionaryResult<Self> {
        Self::from_word_list(&config.dictionary.word_list, config.search.clone())
    }

    /// Creates a spell checker loaded from a word list file.
    ///
    /// An empty file yields an empty dictionary.
    pub fn from_word_list<P: AsRef<Path>>(path: P, search: SearchConfig) -> DictionaryResult<Self> {
        let path = path.as_ref();
        let entries = read_entries(path)?;
        let trie = build_trie(entries)?;
        info!(path = %path.display(), words = trie.len(), "Word list loaded");

        Ok(Self {
            trie,
            search,
            source: Some(path.to_path_buf()),
        })
    }

    /// Inserts every entry from `reader` into the current word list.
    ///
    /// The whole input is parsed before anything is inserted, so a bad line
    /// leaves the dictionary unchanged.
    ///
    /// # Returns
    ///
    /// The number of entries read.
    pub fn load_reader<R: BufRead>(&mut self, reader: R) -> DictionaryResult<usize> {
        let entries = WordListReader::new(reader).collect::<DictionaryResult<Vec<_>>>()?;
        let count = entries.len();
        for (word, frequency) in entries {
            self.trie.insert(word, frequency)?;
        }

        info!(entries = count, words = self.trie.len(), "Entries loaded");
        Ok(count)
    }

    /// Replaces the current word list with the one in `path`.
    ///
    /// The current trie is kept if the file cannot be read, holds a bad line,
    /// or has no entries.
    ///
    /// # Returns
    ///
    /// The number of words in the new list.
    pub fn change_word_list<P: AsRef<Path>>(&mut self, path: P) -> DictionaryResult<usize> {
        let path = path.as_ref();
        let trie = read_replacement(path)?;
        Ok(self.install(path, trie))
    }

    /// Swaps in a replacement trie read from `path`.
    pub(crate) fn install(&mut self, path: &Path, trie: WordTrie) -> usize {
        self.trie = trie;
        self.source = Some(path.to_path_buf());
        info!(path = %path.display(), words = self.trie.len(), "Word list changed");
        self.trie.len()
    }

    /// Writes the word list to `path` in alphabetical order.
    pub fn save_word_list<P: AsRef<Path>>(&self, path: P) -> DictionaryResult<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        write_word_list(BufWriter::new(file), &self.all_words_sorted())?;
        info!(path = %path.display(), words = self.trie.len(), "Word list saved");
        Ok(())
    }

    /// Returns the frequency of `word` if it is spelled correctly.
    pub fn check<W: AsRef<str>>(&self, word: W) -> DictionaryResult<f64> {
        let word = word.as_ref();
        let result = self.trie.get(word);
        debug!(word, found = result.is_ok(), "Word checked");
        Ok(result?)
    }

    /// Returns the most frequent words starting with `prefix`.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<WordFrequency>)` - Up to `max_suggestions` words, most frequent first.
    /// * `Err(DictionaryError::Trie(TrieError::PrefixTooShort))` - If the prefix has
    ///   fewer than `min_prefix_len` letters.
    /// * `Err(DictionaryError::Trie(TrieError::PrefixNotFound))` - If no word starts
    ///   with the prefix.
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> DictionaryResult<Vec<WordFrequency>> {
        let prefix = prefix.as_ref();
        if prefix.chars().count() < self.search.min_prefix_len {
            return Err(TrieError::PrefixTooShort {
                prefix: prefix.to_string(),
                min_len: self.search.min_prefix_len,
            }
            .into());
        }

        let completions = self.trie.find_prefix(prefix)?;
        debug!(prefix, completions = completions.len(), "Prefix searched");
        Ok(rank_by_frequency(completions, self.search.max_suggestions))
    }

    /// Returns every word in alphabetical order.
    pub fn all_words_sorted(&self) -> Vec<WordFrequency> {
        merge_sort(self.trie.all_words())
    }

    /// Adds a word or replaces its frequency.
    ///
    /// Entries the word list format cannot hold are rejected with
    /// [`DictionaryError::InvalidEntry`]: words containing whitespace and
    /// frequencies that are not finite.
    pub fn insert<W: AsRef<str>>(&mut self, word: W, frequency: f64) -> DictionaryResult<()> {
        let word = word.as_ref();
        validate_entry(word, frequency)?;
        self.trie.insert(word, frequency)?;
        debug!(word, frequency, "Word inserted");
        Ok(())
    }

    /// Removes a word, returning the frequency it had.
    pub fn remove<W: AsRef<str>>(&mut self, word: W) -> DictionaryResult<f64> {
        let word = word.as_ref();
        let frequency = self.trie.remove(word)?;
        debug!(word, frequency, "Word removed");
        Ok(frequency)
    }

    /// Returns the underlying trie.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    /// Returns the search limits in use.
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Returns the file the current word list was loaded from.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Checks if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn read_entries(path: &Path) -> DictionaryResult<Vec<WordFrequency>> {
    WordListReader::open(path)?.collect()
}

/// Reads a word list meant to replace the current one. An empty list is refused.
pub(crate) fn read_replacement(path: &Path) -> DictionaryResult<WordTrie> {
    let entries = read_entries(path)?;
    if entries.is_empty() {
        warn!(path = %path.display(), "Refusing to switch to an empty word list");
        return Err(DictionaryError::EmptyWordList(path.to_path_buf()));
    }
    build_trie(entries)
}

fn build_trie(entries: Vec<WordFrequency>) -> DictionaryResult<WordTrie> {
    let mut trie = WordTrie::new();
    for (word, frequency) in entries {
        trie.insert(word, frequency)?;
    }
    Ok(trie)
}

fn validate_entry(word: &str, frequency: f64) -> DictionaryResult<()> {
    let reason = if word.chars().any(char::is_whitespace) {
        "words cannot contain whitespace"
    } else if !frequency.is_finite() {
        "frequency must be a finite number"
    } else {
        return Ok(());
    };

    Err(DictionaryError::InvalidEntry {
        word: word.to_string(),
        reason: reason.to_string(),
    })
}
