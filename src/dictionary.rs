//! The pronunciation dictionary.
//!
//! This maps words to phonetic transcriptions using most of the ARPABET
//! 2-letter phonemes, which are described here:
//! <https://en.wikipedia.org/wiki/ARPABET>
//!
//! The on-disk format is one entry per line, holding a word and one
//! pronunciation. A word with several pronunciations is listed on several
//! lines:
//!
//! ```text
//! CAT K AE T
//! AUNT AE N T
//! AUNT AO N T
//! ```
//!
//! The feed is expected to be pre-cleaned: uppercase symbols without stress
//! digits, duplicates already removed. The parser still strips a residual
//! stress digit (`AE1` becomes `AE`) and tolerates duplicate lines, but it
//! refuses structurally malformed entries outright, before the engine ever
//! answers a query.

use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// One way to say a word: an ordered sequence of uppercase phoneme symbols,
/// e.g. `["K", "AE", "T"]`.
pub type Pronunciation = Vec<String>;

/// Errors raised while loading a dictionary.
///
/// Loading is the only fallible phase. Lookups on a loaded dictionary never
/// fail; absence is an empty result.
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dictionary entry at line {line}: {text:?}")]
    MalformedLine { line: usize, text: String },
}

/// An in-memory map from uppercase words to their pronunciation variants.
///
/// Built once, read-only afterwards.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, Vec<Pronunciation>>,
}

impl Dictionary {
    /// Creates a new empty Dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            entries: HashMap::new(),
        }
    }

    /// Creates a dictionary populated from the given text file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Dictionary, DictionaryError> {
        let f = std::fs::File::open(path)?;
        Dictionary::from_reader(std::io::BufReader::new(f))
    }

    /// Creates a dictionary populated from `WORD PH PH PH` lines.
    ///
    /// Blank lines are skipped and `#` starts a comment running to the end
    /// of the line. A line with a word but no phonemes, or with a token that
    /// is not an uppercase phoneme symbol, is a [`DictionaryError`].
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Dictionary, DictionaryError> {
        let mut dict = Dictionary::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some((word, pronunciation)) = parse_line(&line, i + 1)? {
                dict.insert(&word, pronunciation);
            }
        }
        log::info!("loaded {} words", dict.len());
        Ok(dict)
    }

    /// Adds one pronunciation variant for `word`.
    ///
    /// The word is normalized to uppercase. Variants accumulate in insertion
    /// order, first listed is primary; duplicate variants are kept as given.
    pub fn insert(&mut self, word: &str, pronunciation: Pronunciation) {
        self.entries
            .entry(word.to_uppercase())
            .or_insert_with(Vec::new)
            .push(pronunciation);
    }

    /// Returns all pronunciation variants of `word`, or an empty slice if
    /// the word is not listed.
    ///
    /// Lookup is case-insensitive. No input is an error here: unknown words,
    /// the empty string, and non-alphabetic strings all come back empty.
    pub fn pronounce(&self, word: &str) -> &[Pronunciation] {
        match self.entries.get(&word.to_uppercase()) {
            Some(variants) => variants,
            None => &[],
        }
    }

    /// Returns the number of distinct words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(word, variants)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<Pronunciation>)> {
        self.entries.iter()
    }
}

/// Parses one dictionary line into a word and its pronunciation.
///
/// Returns `Ok(None)` for lines with nothing on them (blank or comment-only).
fn parse_line(line: &str, num: usize) -> Result<Option<(String, Pronunciation)>, DictionaryError> {
    lazy_static! {
        // Matches one phoneme symbol with an optional residual stress
        // digit, e.g. "AE", "T", "AE1". Capture 1 is the bare symbol.
        static ref PHONEME_RE: Regex = Regex::new(r"^([A-Z]+)[0-2]?$").unwrap();
    }

    // Strip comments if present ('#' through the end of line).
    let text = match line.find('#') {
        Some(i) => &line[..i],
        None => line,
    };

    let mut tokens = text.split_whitespace();
    let word = match tokens.next() {
        Some(w) => w,
        None => return Ok(None),
    };

    let malformed = || DictionaryError::MalformedLine {
        line: num,
        text: line.to_string(),
    };

    let mut pronunciation: Pronunciation = Vec::new();
    for token in tokens {
        let cap = PHONEME_RE.captures(token).ok_or_else(malformed)?;
        pronunciation.push(String::from(&cap[1]));
    }
    if pronunciation.is_empty() {
        return Err(malformed());
    }

    Ok(Some((word.to_string(), pronunciation)))
}
