//! Pairwise rhyme comparison.
//!
//! Two pronunciations rhyme when they sound the same from the first vowel of
//! the one with the shorter rhymable tail through the end. The side with the
//! longer tail may have anything in front; only the alignment at the end
//! matters. Word-level checks sit on top of this and answer with a tri-state
//! [`Verdict`], since "not in the dictionary" is a different answer than
//! "does not rhyme".

use crate::phoneme;

/// Outcome of a word-level rhyme check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// The words rhyme under at least one pairing of their pronunciations.
    Yes,
    /// Both words are known and no pairing of pronunciations rhymes.
    No,
    /// One or both words have no dictionary entry.
    Unknown,
}

impl Verdict {
    /// The numeric form: `1` rhymes, `0` does not, `-1` unknown.
    pub fn score(self) -> i32 {
        match self {
            Verdict::Yes => 1,
            Verdict::No => 0,
            Verdict::Unknown => -1,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Verdict::Yes => "yes",
            Verdict::No => "no",
            Verdict::Unknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Checks that `shorter`'s rhymable tail appears, right-aligned, at the end
/// of `longer`.
///
/// Callers resolve the roles first: `shorter` is the side whose tail from
/// its first vowel onward is no longer than `longer`'s.
fn tails_match(longer: &[String], shorter: &[String]) -> bool {
    let offset = match phoneme::vowel_offset(shorter) {
        Some(i) => i,
        None => return false,
    };
    let tail = &shorter[offset..];
    let start = match longer.len().checked_sub(tail.len()) {
        Some(s) => s,
        None => return false,
    };
    tail.iter().zip(&longer[start..]).all(|(s, l)| s == l)
}

/// Returns whether two pronunciations rhyme, in either argument order.
///
/// A sequence without a vowel sound (including malformed sequences holding
/// an empty symbol before any vowel) never rhymes.
pub fn sounds_rhyme(a: &[String], b: &[String]) -> bool {
    let (a_offset, b_offset) = match (phoneme::vowel_offset(a), phoneme::vowel_offset(b)) {
        (Some(x), Some(y)) => (x, y),
        _ => return false,
    };

    // The side with more phonemes from its first vowel onward sets the pace.
    if a.len() - a_offset > b.len() - b_offset {
        tails_match(a, b)
    } else {
        tails_match(b, a)
    }
}
