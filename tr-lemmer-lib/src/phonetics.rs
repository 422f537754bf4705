// Phonetic attribute computation for roots and suffix surfaces.

use crate::alphabet;
use crate::attributes::{PhoneticAttribute as P, PhoneticAttributes};

// Attributes of a vowel-less fragment that always hold, regardless of what
// preceded it.
const NO_VOWEL_ATTRIBUTES: &[P] = &[P::LastLetterConsonant, P::FirstLetterConsonant, P::HasNoVowel];

// Letter-level attributes of the predecessor that a vowel-less fragment
// overrides.
const NO_VOWEL_OVERRIDDEN: &[P] = &[
    P::HasVowel,
    P::LastLetterVowel,
    P::FirstLetterVowel,
    P::LastLetterVoiced,
    P::LastLetterVoiceless,
    P::LastLetterVoicelessStop,
    P::LastLetterVoicedStop,
    P::ExpectsVowel,
    P::ExpectsConsonant,
];

/// Phonetic attributes of `word` (lowercase, normalized).
///
/// An empty word yields `predecessor` unchanged. A word without vowels keeps
/// the predecessor's harmony attributes, since a consonant-only fragment such
/// as a dropped-vowel stem takes its harmony from what came before.
pub fn compute(word: &str, predecessor: PhoneticAttributes) -> PhoneticAttributes {
    let (first, last) = match (word.chars().next(), word.chars().next_back()) {
        (Some(f), Some(l)) => (f, l),
        _ => return predecessor,
    };

    let mut attrs = if alphabet::contains_vowel(word) {
        PhoneticAttributes::of(&[P::HasVowel])
    } else {
        let mut inherited = predecessor;
        for &a in NO_VOWEL_OVERRIDDEN {
            inherited.remove(a);
        }
        inherited.union(&PhoneticAttributes::of(NO_VOWEL_ATTRIBUTES))
    };

    if alphabet::is_vowel(last) {
        attrs.insert(P::LastLetterVowel);
    } else {
        attrs.insert(P::LastLetterConsonant);
        if alphabet::is_voiceless(last) {
            attrs.insert(P::LastLetterVoiceless);
            if alphabet::is_voiceless_stop(last) {
                attrs.insert(P::LastLetterVoicelessStop);
            }
        } else {
            attrs.insert(P::LastLetterVoiced);
            if alphabet::is_voiced_stop(last) {
                attrs.insert(P::LastLetterVoicedStop);
            }
        }
    }

    if let Some(v) = alphabet::last_vowel(word) {
        for a in [P::LastVowelBack, P::LastVowelFrontal, P::LastVowelRounded, P::LastVowelUnrounded] {
            attrs.remove(a);
        }
        attrs.insert(if alphabet::is_back_vowel(v) {
            P::LastVowelBack
        } else {
            P::LastVowelFrontal
        });
        attrs.insert(if alphabet::is_rounded_vowel(v) {
            P::LastVowelRounded
        } else {
            P::LastVowelUnrounded
        });
    }

    attrs.insert(if alphabet::is_vowel(first) {
        P::FirstLetterVowel
    } else {
        P::FirstLetterConsonant
    });

    attrs
}

/// Attributes of a word with no predecessor context.
pub fn of_word(word: &str) -> PhoneticAttributes {
    compute(word, PhoneticAttributes::empty())
}
