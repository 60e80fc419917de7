//! A suffix trie over rhyme keys.
//!
//! Every pronunciation is reduced to its rhyming tail and threaded into the
//! trie one phoneme at a time from the end of the word toward the front, so
//! words ending in the same sound share a path from the root. Answering
//! "which words end with this sound" is then a walk bounded by the query's
//! length, not by the size of the dictionary.

use std::collections::{HashMap, HashSet};

use crate::phoneme;

/// How much of the trie below a matched rhyme key to report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// Every word whose rhyme key ends with the query's reduction, however
    /// many phonemes precede it. A query for `[AE, T]` finds "cat" and
    /// "acrobat" alike.
    Broad,
    /// Only words whose whole rhyme key equals the query's reduction.
    Exact,
}

/// One trie node: children keyed by phoneme, plus the words whose rhyme key
/// terminates exactly here. A node with no words is just a branch point.
#[derive(Debug, Default)]
pub struct RhymeTrie {
    children: HashMap<String, RhymeTrie>,
    words: HashSet<String>,
}

impl RhymeTrie {
    /// Creates an empty trie.
    pub fn new() -> RhymeTrie {
        RhymeTrie::default()
    }

    /// Indexes `word` under the rhyming tail of `pronunciation`.
    ///
    /// A pronunciation that reduces to nothing is not indexed at all; the
    /// word stays reachable through the dictionary and direct comparison.
    pub fn insert(&mut self, word: &str, pronunciation: &[String]) {
        let key = phoneme::rhyming_tail(pronunciation);
        if key.is_empty() {
            log::debug!("not indexing {:?}: no rhyming tail in {:?}", word, pronunciation);
            return;
        }
        let mut node = self;
        for ph in key.iter().rev() {
            node = node
                .children
                .entry(ph.clone())
                .or_insert_with(RhymeTrie::new);
        }
        node.words.insert(word.to_uppercase());
    }

    /// Returns every indexed word whose rhyme key matches the rhyming tail
    /// of `sound`, under the given scope.
    ///
    /// A sound that reduces to nothing matches nothing, and so does a
    /// reduction with no path in the trie. The returned set is unordered.
    pub fn find(&self, sound: &[String], scope: Scope) -> HashSet<String> {
        let key = phoneme::rhyming_tail(sound);
        if key.is_empty() {
            return HashSet::new();
        }
        let mut node = self;
        for ph in key.iter().rev() {
            match node.children.get(ph) {
                Some(child) => node = child,
                None => return HashSet::new(),
            }
        }
        match scope {
            Scope::Exact => node.words.clone(),
            Scope::Broad => node.collect_words(),
        }
    }

    /// Gathers the words of this node and every node below it.
    ///
    /// Iterative on a work list, so trie depth never grows the call stack.
    fn collect_words(&self) -> HashSet<String> {
        let mut found = HashSet::new();
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            found.extend(node.words.iter().cloned());
            pending.extend(node.children.values());
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(symbols: &[&str]) -> Vec<String> {
        symbols.iter().map(|s| String::from(*s)).collect()
    }

    fn names(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| String::from(*w)).collect()
    }

    fn sample_trie() -> RhymeTrie {
        let mut trie = RhymeTrie::new();
        trie.insert("CAT", &seq(&["K", "AE", "T"]));
        trie.insert("BAT", &seq(&["B", "AE", "T"]));
        trie.insert("ACROBAT", &seq(&["AE", "K", "R", "AH", "B", "AE", "T"]));
        trie.insert("DOG", &seq(&["D", "AA", "G"]));
        trie.insert("RANT", &seq(&["R", "AE", "N", "T"]));
        trie
    }

    #[test]
    fn test_broad_find_includes_longer_rhyme_keys() {
        let trie = sample_trie();
        // ACROBAT's whole key ends in [AE, T], so it counts even though the
        // key runs several phonemes further toward the front of the word.
        assert_eq!(
            trie.find(&seq(&["K", "AE", "T"]), Scope::Broad),
            names(&["CAT", "BAT", "ACROBAT"])
        );
    }

    #[test]
    fn test_exact_find_matches_whole_keys_only() {
        let trie = sample_trie();
        assert_eq!(
            trie.find(&seq(&["K", "AE", "T"]), Scope::Exact),
            names(&["CAT", "BAT"])
        );
        assert_eq!(
            trie.find(&seq(&["AE", "K", "R", "AH", "B", "AE", "T"]), Scope::Exact),
            names(&["ACROBAT"])
        );
    }

    #[test]
    fn test_find_reduces_the_query_first() {
        let trie = sample_trie();
        // [S, AE, T] reduces to [AE, T]: leading consonants don't constrain.
        assert_eq!(
            trie.find(&seq(&["S", "AE", "T"]), Scope::Broad),
            names(&["CAT", "BAT", "ACROBAT"])
        );
    }

    #[test]
    fn test_find_misses_where_no_path_exists() {
        let trie = sample_trie();
        assert!(trie.find(&seq(&["AO", "T"]), Scope::Broad).is_empty());
        assert!(trie.find(&seq(&["T", "K", "O"]), Scope::Broad).is_empty());
    }

    #[test]
    fn test_vowelless_query_matches_nothing() {
        let trie = sample_trie();
        assert!(trie.find(&seq(&["T", "T"]), Scope::Broad).is_empty());
        assert!(trie.find(&seq(&[]), Scope::Broad).is_empty());
        assert!(trie.find(&seq(&[""]), Scope::Broad).is_empty());
    }

    #[test]
    fn test_partial_key_is_a_branch_point_not_a_word() {
        let trie = sample_trie();
        // [N, T] walks to RANT's branch; only RANT terminates below it.
        assert_eq!(
            trie.find(&seq(&["EH", "N", "T"]), Scope::Broad),
            HashSet::new()
        );
        assert_eq!(
            trie.find(&seq(&["AE", "N", "T"]), Scope::Broad),
            names(&["RANT"])
        );
    }

    #[test]
    fn test_vowelless_pronunciation_is_not_indexed() {
        let mut trie = RhymeTrie::new();
        trie.insert("HMM", &seq(&["HH", "M"]));
        assert!(trie.find(&seq(&["HH", "M"]), Scope::Broad).is_empty());
    }

    #[test]
    fn test_same_word_under_two_variants() {
        let mut trie = RhymeTrie::new();
        trie.insert("AUNT", &seq(&["AE", "N", "T"]));
        trie.insert("AUNT", &seq(&["AO", "N", "T"]));
        trie.insert("RANT", &seq(&["R", "AE", "N", "T"]));
        assert_eq!(
            trie.find(&seq(&["AE", "N", "T"]), Scope::Broad),
            names(&["AUNT", "RANT"])
        );
        assert_eq!(
            trie.find(&seq(&["AO", "N", "T"]), Scope::Broad),
            names(&["AUNT"])
        );
    }

    #[test]
    fn test_find_on_empty_trie() {
        let trie = RhymeTrie::new();
        assert!(trie.find(&seq(&["AE", "T"]), Scope::Broad).is_empty());
    }
}
