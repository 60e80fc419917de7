//! Phoneme classification and rhyme reductions.
//!
//! A pronunciation is an ordered sequence of uppercase ARPABET-style phoneme
//! symbols, e.g. `["K", "AE", "T"]` for "cat", with stress digits already
//! stripped. A symbol is a vowel sound iff its first character is one of
//! A, E, I, O, U; everything else counts as a consonant sound.
//!
//! The two reductions here pick out the part of a pronunciation that matters
//! for rhyming. Both return subslices of their input and both give up with
//! an empty result on malformed input (an empty symbol anywhere in the
//! sequence), so bad data degrades to "no rhyme" instead of a wrong match.

/// Returns whether the phoneme symbol is a vowel sound.
///
/// The empty symbol is not a vowel. It only shows up in malformed input, and
/// the reductions below treat it as poisoning the whole sequence.
pub fn is_vowel(phoneme: &str) -> bool {
    match phoneme.chars().next() {
        Some('A') | Some('E') | Some('I') | Some('O') | Some('U') => true,
        _ => false,
    }
}

/// Returns the index of the first vowel sound in the sequence.
///
/// Returns `None` for an empty sequence, a sequence with no vowel sound, or
/// one holding an empty symbol before any vowel is found.
pub fn vowel_offset(phonemes: &[String]) -> Option<usize> {
    for (i, ph) in phonemes.iter().enumerate() {
        if ph.is_empty() {
            return None;
        }
        if is_vowel(ph) {
            return Some(i);
        }
    }
    None
}

/// Reduces a pronunciation to the part that has to match for two words to
/// fully rhyme: everything from the first vowel sound through the end.
///
/// This is the maximal rhyme requirement, and also the key under which words
/// are indexed in the rhyme trie. The result is empty when the sequence has
/// no vowel sound or contains an empty symbol.
pub fn rhyming_tail(phonemes: &[String]) -> &[String] {
    if phonemes.iter().any(|ph| ph.is_empty()) {
        return &[];
    }
    match vowel_offset(phonemes) {
        Some(start) => &phonemes[start..],
        None => &[],
    }
}

/// Reduces a pronunciation to the rime of its final syllable: the last
/// contiguous run of vowel sounds plus the consonants trailing it. The onset
/// consonant in front of that nucleus is excluded.
///
/// This is the minimal rhyme unit, independent of how long the word is. The
/// result is empty when the sequence has no vowel sound or contains an empty
/// symbol.
pub fn last_syllable_rime(phonemes: &[String]) -> &[String] {
    if phonemes.iter().any(|ph| ph.is_empty()) {
        return &[];
    }
    let mut vowel_seen = false;
    for (i, ph) in phonemes.iter().enumerate().rev() {
        if is_vowel(ph) {
            vowel_seen = true;
        } else if vowel_seen {
            return &phonemes[i + 1..];
        }
    }
    if vowel_seen {
        phonemes
    } else {
        &[]
    }
}
