// Suffix surface templates.
//
//   I   high vowel (ı i u ü) chosen by harmony
//   A   low vowel (a e) chosen by harmony
//   +I  +A   vowel dropped when it opens the suffix after a vowel
//   +c  letter emitted only after a vowel (buffer consonant)
//   >c  first letter, devoiced after a voiceless consonant (d → t, c → ç)
//   ~c  final letter; the next suffix must start with a consonant
//   !c  final letter; the next suffix must start with a vowel

use crate::alphabet;
use crate::attributes::{PhoneticAttribute, PhoneticAttributes};
use crate::error::GrammarError;
use crate::phonetics;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToken {
    Letter(char),
    HighVowel { optional: bool },
    LowVowel { optional: bool },
    Append(char),
    DevoiceFirst(char),
    LastVoiced(char),
    LastNotVoiced(char),
}

/// A parsed surface template. Empty templates mark epsilon transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixTemplate {
    source: String,
    tokens: Vec<TemplateToken>,
}

fn is_template_letter(c: char) -> bool {
    c.is_alphabetic() && c.is_lowercase()
}

impl SuffixTemplate {
    pub fn parse(source: &str) -> Result<Self, GrammarError> {
        let bad = |message: String| GrammarError::BadTemplate {
            template: source.to_string(),
            message,
        };

        let chars: Vec<char> = source.chars().collect();
        let mut tokens = Vec::with_capacity(chars.len());
        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let token = match c {
                '+' | '>' | '~' | '!' => {
                    let next = *chars
                        .get(i + 1)
                        .ok_or_else(|| bad(format!("dangling modifier '{c}'")))?;
                    i += 1;
                    match (c, next) {
                        ('+', 'I') => TemplateToken::HighVowel { optional: true },
                        ('+', 'A') => TemplateToken::LowVowel { optional: true },
                        ('+', l) if is_template_letter(l) => TemplateToken::Append(l),
                        ('>', l) if is_template_letter(l) && alphabet::is_consonant(l) => {
                            TemplateToken::DevoiceFirst(l)
                        }
                        ('~', l) if is_template_letter(l) => TemplateToken::LastVoiced(l),
                        ('!', l) if is_template_letter(l) => TemplateToken::LastNotVoiced(l),
                        _ => return Err(bad(format!("'{c}' cannot modify '{next}'"))),
                    }
                }
                'I' => TemplateToken::HighVowel { optional: false },
                'A' => TemplateToken::LowVowel { optional: false },
                l if is_template_letter(l) => TemplateToken::Letter(l),
                other => return Err(bad(format!("unknown token '{other}'"))),
            };
            if matches!(token, TemplateToken::LastVoiced(_) | TemplateToken::LastNotVoiced(_))
                && i + 1 != chars.len()
            {
                return Err(bad(format!("'{c}' must mark the final letter")));
            }
            tokens.push(token);
            i += 1;
        }

        Ok(Self {
            source: source.to_string(),
            tokens,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[TemplateToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last_token(&self) -> Option<TemplateToken> {
        self.tokens.last().copied()
    }

    /// Phonological guard implied by the first token: a suffix starting with
    /// a consonant cannot follow a stem that expects a vowel, and a suffix
    /// starting with a vowel or buffer cannot follow one that expects a
    /// consonant.
    pub fn implied_guard(&self) -> Option<PhoneticAttribute> {
        match self.tokens.first()? {
            TemplateToken::Letter(c)
            | TemplateToken::LastVoiced(c)
            | TemplateToken::LastNotVoiced(c) => Some(if alphabet::is_vowel(*c) {
                PhoneticAttribute::ExpectsConsonant
            } else {
                PhoneticAttribute::ExpectsVowel
            }),
            TemplateToken::DevoiceFirst(_) => Some(PhoneticAttribute::ExpectsVowel),
            TemplateToken::HighVowel { .. } | TemplateToken::LowVowel { .. } | TemplateToken::Append(_) => {
                Some(PhoneticAttribute::ExpectsConsonant)
            }
        }
    }

    /// Realize the template after text with the `predecessor` attributes.
    pub fn generate(&self, predecessor: PhoneticAttributes) -> String {
        use PhoneticAttribute::*;

        let mut out = String::new();
        for (index, token) in self.tokens.iter().enumerate() {
            let attrs = phonetics::compute(&out, predecessor);
            match *token {
                TemplateToken::Letter(c) | TemplateToken::LastVoiced(c) | TemplateToken::LastNotVoiced(c) => {
                    out.push(c)
                }
                TemplateToken::HighVowel { optional } => {
                    if optional && index == 0 && predecessor.contains(LastLetterVowel) {
                        continue;
                    }
                    out.push(match (attrs.contains(LastVowelBack), attrs.contains(LastVowelRounded)) {
                        (true, true) => 'u',
                        (true, false) => 'ı',
                        (false, true) => 'ü',
                        (false, false) => 'i',
                    });
                }
                TemplateToken::LowVowel { optional } => {
                    if optional && index == 0 && predecessor.contains(LastLetterVowel) {
                        continue;
                    }
                    out.push(if attrs.contains(LastVowelBack) { 'a' } else { 'e' });
                }
                TemplateToken::Append(c) => {
                    if attrs.contains(LastLetterVowel) {
                        out.push(c);
                    }
                }
                TemplateToken::DevoiceFirst(c) => {
                    out.push(if attrs.contains(LastLetterVoiceless) {
                        alphabet::devoice(c)
                    } else {
                        c
                    });
                }
            }
        }
        out
    }
}
