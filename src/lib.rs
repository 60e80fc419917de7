//! A phonetic rhyming dictionary.
//!
//! Words are looked up in a pronunciation dictionary mapping each word to
//! one or more phonetic transcriptions: ordered sequences of uppercase
//! ARPABET-style phoneme symbols with stress digits already stripped, e.g.
//!
//! ```text
//! CAT K AE T
//! AUNT AE N T
//! AUNT AO N T
//! ```
//!
//! Two pronunciations rhyme when they agree from the first vowel sound of
//! the shorter rhymable tail through the end of the word. On top of that
//! check sit a word-by-word comparator with a tri-state verdict (rhymes,
//! doesn't, unknown word) and a suffix trie over reduced pronunciations that
//! enumerates every known word ending in a given sound.
//!
//! The main object is [`Rhymer`], built once from a dictionary and read-only
//! afterwards:
//!
//! ```
//! use rhymer::{Dictionary, Rhymer, Verdict};
//!
//! let mut dict = Dictionary::new();
//! dict.insert("cat", vec!["K".to_string(), "AE".to_string(), "T".to_string()]);
//! dict.insert("bat", vec!["B".to_string(), "AE".to_string(), "T".to_string()]);
//!
//! let engine = Rhymer::new(dict);
//! assert_eq!(engine.rhymes("cat", "bat"), Verdict::Yes);
//! assert_eq!(engine.rhymes("cat", "bat").score(), 1);
//! ```

pub mod dictionary;
pub mod engine;
pub mod phoneme;
pub mod rhyme;
pub mod trie;

pub use crate::dictionary::{Dictionary, DictionaryError, Pronunciation};
pub use crate::engine::Rhymer;
pub use crate::rhyme::Verdict;
pub use crate::trie::Scope;
