//! The rhyming engine.
//!
//! A [`Rhymer`] owns a loaded [`Dictionary`] and the rhyme trie built over
//! it. Construction is the only phase that mutates anything; afterwards the
//! engine is read-only, so a single instance behind an `Arc` serves any
//! number of threads. Queries never fail: unknown words come back as empty
//! collections or [`Verdict::Unknown`].

use std::collections::HashSet;
use std::path::Path;

use crate::dictionary::{Dictionary, DictionaryError, Pronunciation};
use crate::rhyme::{self, Verdict};
use crate::trie::{RhymeTrie, Scope};

/// A pronunciation dictionary with its rhyme index.
#[derive(Debug)]
pub struct Rhymer {
    dictionary: Dictionary,
    trie: RhymeTrie,
}

impl Rhymer {
    /// Builds the engine over an already-loaded dictionary, indexing every
    /// pronunciation variant of every word.
    pub fn new(dictionary: Dictionary) -> Rhymer {
        let mut trie = RhymeTrie::new();
        for (word, variants) in dictionary.iter() {
            for pronunciation in variants {
                trie.insert(word, pronunciation);
            }
        }
        log::debug!("indexed rhyme keys for {} words", dictionary.len());
        Rhymer { dictionary, trie }
    }

    /// Loads the dictionary file at `path` and builds the engine over it.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Rhymer, DictionaryError> {
        Ok(Rhymer::new(Dictionary::from_file(path)?))
    }

    /// Returns all pronunciation variants of `word`; empty if unknown.
    pub fn pronounce(&self, word: &str) -> &[Pronunciation] {
        self.dictionary.pronounce(word)
    }

    /// Returns whether `a` and `b` rhyme.
    ///
    /// Words with several pronunciations rhyme if any pairing of readings
    /// does. A word absent from the dictionary makes the answer `Unknown`
    /// rather than `No`.
    pub fn rhymes(&self, a: &str, b: &str) -> Verdict {
        let a_variants = self.dictionary.pronounce(a);
        let b_variants = self.dictionary.pronounce(b);
        if a_variants.is_empty() || b_variants.is_empty() {
            return Verdict::Unknown;
        }

        for a_pron in a_variants {
            for b_pron in b_variants {
                if rhyme::sounds_rhyme(a_pron, b_pron) {
                    return Verdict::Yes;
                }
            }
        }
        Verdict::No
    }

    /// Returns whether `word` rhymes with a literal phoneme sequence.
    ///
    /// `Unknown` iff the word has no dictionary entry; otherwise `Yes` when
    /// any of the word's pronunciations rhymes with `sound`.
    pub fn rhymes_with_sound(&self, word: &str, sound: &[String]) -> Verdict {
        let variants = self.dictionary.pronounce(word);
        if variants.is_empty() {
            return Verdict::Unknown;
        }
        if variants.iter().any(|pron| rhyme::sounds_rhyme(pron, sound)) {
            Verdict::Yes
        } else {
            Verdict::No
        }
    }

    /// Returns every known word ending in the rhyming tail of `sound`.
    pub fn find_rhymes(&self, sound: &[String]) -> HashSet<String> {
        self.trie.find(sound, Scope::Broad)
    }

    /// Like [`Rhymer::find_rhymes`], with an explicit match scope.
    pub fn find_rhymes_in_scope(&self, sound: &[String], scope: Scope) -> HashSet<String> {
        self.trie.find(sound, scope)
    }

    /// Returns every known word rhyming with `word`'s primary (first listed)
    /// pronunciation. Unknown words rhyme with nothing.
    pub fn find_rhymes_by_word(&self, word: &str) -> HashSet<String> {
        match self.dictionary.pronounce(word).first() {
            Some(primary) => self.find_rhymes(primary),
            None => HashSet::new(),
        }
    }

    /// The dictionary backing this engine.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
