// Turkish letter classes, case mapping and voicing helpers.

// ---------------------------------------------------------------------------
// Letter classes
// ---------------------------------------------------------------------------

const VOWELS: &[char] = &['a', 'e', 'ı', 'i', 'o', 'ö', 'u', 'ü', 'â', 'î', 'û'];

// Back vowels; every other vowel is front.
const BACK_VOWELS: &[char] = &['a', 'ı', 'o', 'u', 'â', 'û'];

const ROUNDED_VOWELS: &[char] = &['o', 'ö', 'u', 'ü', 'û'];

const VOICELESS_CONSONANTS: &[char] = &['ç', 'f', 'h', 'k', 'p', 's', 'ş', 't'];

const VOICELESS_STOPS: &[char] = &['ç', 'k', 'p', 't'];

const VOICED_STOPS: &[char] = &['b', 'c', 'd', 'g', 'ğ'];

pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

pub fn is_consonant(c: char) -> bool {
    c.is_alphabetic() && !is_vowel(c)
}

pub fn is_back_vowel(c: char) -> bool {
    BACK_VOWELS.contains(&c)
}

pub fn is_rounded_vowel(c: char) -> bool {
    ROUNDED_VOWELS.contains(&c)
}

pub fn is_voiceless(c: char) -> bool {
    VOICELESS_CONSONANTS.contains(&c)
}

pub fn is_voiceless_stop(c: char) -> bool {
    VOICELESS_STOPS.contains(&c)
}

pub fn is_voiced_stop(c: char) -> bool {
    VOICED_STOPS.contains(&c)
}

/// Stop consonants that trigger automatic voicing on multi-syllable roots.
/// `g` is included for loan words such as {psikolog} → {psikoloğa}.
pub fn is_voicing_stop(c: char) -> bool {
    is_voiceless_stop(c) || c == 'g'
}

// ---------------------------------------------------------------------------
// Voicing
// ---------------------------------------------------------------------------

/// Voiced counterpart of a consonant, or the letter itself.
pub fn voice(c: char) -> char {
    match c {
        'ç' => 'c',
        'k' => 'ğ',
        'p' => 'b',
        't' => 'd',
        'g' => 'ğ',
        'ş' => 'j',
        's' => 'z',
        'f' => 'v',
        other => other,
    }
}

/// Voiceless counterpart of a consonant, or the letter itself.
pub fn devoice(c: char) -> char {
    match c {
        'c' => 'ç',
        'd' => 't',
        'b' => 'p',
        'g' => 'k',
        'ğ' => 'k',
        'j' => 'ş',
        'z' => 's',
        'v' => 'f',
        other => other,
    }
}

// ---------------------------------------------------------------------------
// Word-level helpers
// ---------------------------------------------------------------------------

pub fn contains_vowel(word: &str) -> bool {
    word.chars().any(is_vowel)
}

pub fn vowel_count(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

/// Last vowel of the word, scanning backwards.
pub fn last_vowel(word: &str) -> Option<char> {
    word.chars().rev().find(|&c| is_vowel(c))
}

pub fn last_char(word: &str) -> Option<char> {
    word.chars().next_back()
}

/// Lowercase with the Turkish dotted/dotless i rules (I → ı, İ → i).
pub fn to_lower(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for c in word.chars() {
        match c {
            'I' => out.push('ı'),
            'İ' => out.push('i'),
            other => out.extend(other.to_lowercase()),
        }
    }
    out
}

pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Replace circumflexed vowels with their plain forms (â → a, î → i, û → u).
pub fn normalize_circumflex(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'â' => 'a',
            'î' => 'i',
            'û' => 'u',
            'Â' => 'A',
            'Î' => 'İ',
            'Û' => 'U',
            other => other,
        })
        .collect()
}
