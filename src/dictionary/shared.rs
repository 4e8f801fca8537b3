//! Shared spell checker handle.
//!
//! The trie holds no locks of its own. Hosts serving several callers at once
//! (a web handler, worker threads) go through this handle, which allows many
//! concurrent readers or a single writer.

use std::path::Path;
use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{read_replacement, DictionaryResult, SpellChecker};
use crate::data_structures::WordFrequency;

/// Clonable, thread-safe handle to one [`SpellChecker`].
#[derive(Debug, Clone, Default)]
pub struct SharedSpellChecker {
    inner: Arc<RwLock<SpellChecker>>,
}

impl SharedSpellChecker {
    /// Wraps a spell checker.
    pub fn new(checker: SpellChecker) -> Self {
        Self {
            inner: Arc::new(RwLock::new(checker)),
        }
    }

    /// Acquires shared read access.
    pub fn read(&self) -> RwLockReadGuard<'_, SpellChecker> {
        self.inner.read()
    }

    /// Acquires exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, SpellChecker> {
        self.inner.write()
    }

    /// See [`SpellChecker::check`].
    pub fn check<W: AsRef<str>>(&self, word: W) -> DictionaryResult<f64> {
        self.read().check(word)
    }

    /// See [`SpellChecker::suggest`].
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> DictionaryResult<Vec<WordFrequency>> {
        self.read().suggest(prefix)
    }

    /// See [`SpellChecker::all_words_sorted`].
    pub fn all_words_sorted(&self) -> Vec<WordFrequency> {
        self.read().all_words_sorted()
    }

    /// See [`SpellChecker::insert`].
    pub fn insert<W: AsRef<str>>(&self, word: W, frequency: f64) -> DictionaryResult<()> {
        self.write().insert(word, frequency)
    }

    /// See [`SpellChecker::remove`].
    pub fn remove<W: AsRef<str>>(&self, word: W) -> DictionaryResult<f64> {
        self.write().remove(word)
    }

    /// See [`SpellChecker::change_word_list`].
    ///
    /// The new list is read and parsed before the write lock is taken, so
    /// readers are only blocked for the swap.
    pub fn change_word_list<P: AsRef<Path>>(&self, path: P) -> DictionaryResult<usize> {
        let path = path.as_ref();
        let trie = read_replacement(path)?;
        Ok(self.write().install(path, trie))
    }
}

impl From<SpellChecker> for SharedSpellChecker {
    fn from(checker: SpellChecker) -> Self {
        Self::new(checker)
    }
}
