use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Primary part of speech of a dictionary item or morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimaryPos {
    Noun,
    #[serde(rename = "Adj")]
    Adjective,
    #[serde(rename = "Adv")]
    Adverb,
    #[serde(rename = "Conj")]
    Conjunction,
    #[serde(rename = "Interj")]
    Interjection,
    Verb,
    #[serde(rename = "Pron")]
    Pronoun,
    #[serde(rename = "Num")]
    Numeral,
    #[serde(rename = "Det")]
    Determiner,
    #[serde(rename = "Postp")]
    PostPositive,
    #[serde(rename = "Ques")]
    Question,
    #[serde(rename = "Dup")]
    Duplicator,
    #[serde(rename = "Punc")]
    Punctuation,
    #[serde(rename = "Unk")]
    Unknown,
}

impl PrimaryPos {
    pub const ALL: &'static [PrimaryPos] = &[
        PrimaryPos::Noun,
        PrimaryPos::Adjective,
        PrimaryPos::Adverb,
        PrimaryPos::Conjunction,
        PrimaryPos::Interjection,
        PrimaryPos::Verb,
        PrimaryPos::Pronoun,
        PrimaryPos::Numeral,
        PrimaryPos::Determiner,
        PrimaryPos::PostPositive,
        PrimaryPos::Question,
        PrimaryPos::Duplicator,
        PrimaryPos::Punctuation,
        PrimaryPos::Unknown,
    ];

    /// Short form used in lexicon files, item ids and formatted output.
    pub fn short_form(self) -> &'static str {
        match self {
            PrimaryPos::Noun => "Noun",
            PrimaryPos::Adjective => "Adj",
            PrimaryPos::Adverb => "Adv",
            PrimaryPos::Conjunction => "Conj",
            PrimaryPos::Interjection => "Interj",
            PrimaryPos::Verb => "Verb",
            PrimaryPos::Pronoun => "Pron",
            PrimaryPos::Numeral => "Num",
            PrimaryPos::Determiner => "Det",
            PrimaryPos::PostPositive => "Postp",
            PrimaryPos::Question => "Ques",
            PrimaryPos::Duplicator => "Dup",
            PrimaryPos::Punctuation => "Punc",
            PrimaryPos::Unknown => "Unk",
        }
    }
}

impl fmt::Display for PrimaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

impl FromStr for PrimaryPos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryPos::ALL
            .iter()
            .copied()
            .find(|p| p.short_form() == s)
            .ok_or_else(|| s.to_string())
    }
}

/// Secondary part of speech. `None` means no secondary tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryPos {
    #[serde(rename = "Unk")]
    Unknown,
    #[serde(rename = "Demons")]
    Demonstrative,
    Time,
    #[serde(rename = "Quant")]
    Quantitive,
    #[serde(rename = "Ques")]
    Question,
    #[serde(rename = "Prop")]
    ProperNoun,
    #[serde(rename = "Pers")]
    Personal,
    #[serde(rename = "Reflex")]
    Reflexive,
    None,
    #[serde(rename = "Ord")]
    Ordinal,
    #[serde(rename = "Card")]
    Cardinal,
    #[serde(rename = "Percent")]
    Percentage,
    Ratio,
    Range,
    Real,
    #[serde(rename = "Dist")]
    Distribution,
    Clock,
    Date,
    Email,
    Url,
    Mention,
    HashTag,
    Emoticon,
    RomanNumeral,
    #[serde(rename = "RegAbbrv")]
    RegularAbbreviation,
    #[serde(rename = "Abbrv")]
    Abbreviation,
    PCDat,
    PCAcc,
    PCIns,
    PCNom,
    PCGen,
    PCAbl,
}

impl SecondaryPos {
    pub const ALL: &'static [SecondaryPos] = &[
        SecondaryPos::Unknown,
        SecondaryPos::Demonstrative,
        SecondaryPos::Time,
        SecondaryPos::Quantitive,
        SecondaryPos::Question,
        SecondaryPos::ProperNoun,
        SecondaryPos::Personal,
        SecondaryPos::Reflexive,
        SecondaryPos::None,
        SecondaryPos::Ordinal,
        SecondaryPos::Cardinal,
        SecondaryPos::Percentage,
        SecondaryPos::Ratio,
        SecondaryPos::Range,
        SecondaryPos::Real,
        SecondaryPos::Distribution,
        SecondaryPos::Clock,
        SecondaryPos::Date,
        SecondaryPos::Email,
        SecondaryPos::Url,
        SecondaryPos::Mention,
        SecondaryPos::HashTag,
        SecondaryPos::Emoticon,
        SecondaryPos::RomanNumeral,
        SecondaryPos::RegularAbbreviation,
        SecondaryPos::Abbreviation,
        SecondaryPos::PCDat,
        SecondaryPos::PCAcc,
        SecondaryPos::PCIns,
        SecondaryPos::PCNom,
        SecondaryPos::PCGen,
        SecondaryPos::PCAbl,
    ];

    pub fn short_form(self) -> &'static str {
        match self {
            SecondaryPos::Unknown => "Unk",
            SecondaryPos::Demonstrative => "Demons",
            SecondaryPos::Time => "Time",
            SecondaryPos::Quantitive => "Quant",
            SecondaryPos::Question => "Ques",
            SecondaryPos::ProperNoun => "Prop",
            SecondaryPos::Personal => "Pers",
            SecondaryPos::Reflexive => "Reflex",
            SecondaryPos::None => "None",
            SecondaryPos::Ordinal => "Ord",
            SecondaryPos::Cardinal => "Card",
            SecondaryPos::Percentage => "Percent",
            SecondaryPos::Ratio => "Ratio",
            SecondaryPos::Range => "Range",
            SecondaryPos::Real => "Real",
            SecondaryPos::Distribution => "Dist",
            SecondaryPos::Clock => "Clock",
            SecondaryPos::Date => "Date",
            SecondaryPos::Email => "Email",
            SecondaryPos::Url => "Url",
            SecondaryPos::Mention => "Mention",
            SecondaryPos::HashTag => "HashTag",
            SecondaryPos::Emoticon => "Emoticon",
            SecondaryPos::RomanNumeral => "RomanNumeral",
            SecondaryPos::RegularAbbreviation => "RegAbbrv",
            SecondaryPos::Abbreviation => "Abbrv",
            SecondaryPos::PCDat => "PCDat",
            SecondaryPos::PCAcc => "PCAcc",
            SecondaryPos::PCIns => "PCIns",
            SecondaryPos::PCNom => "PCNom",
            SecondaryPos::PCGen => "PCGen",
            SecondaryPos::PCAbl => "PCAbl",
        }
    }
}

impl fmt::Display for SecondaryPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_form())
    }
}

impl FromStr for SecondaryPos {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SecondaryPos::ALL
            .iter()
            .copied()
            .find(|p| p.short_form() == s)
            .ok_or_else(|| s.to_string())
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// One morpheme of an analysis with the text it consumed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MorphemeReport {
    pub morpheme: String,
    /// Empty for morphemes with no surface form (e.g. A3sg).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub surface: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub derivational: bool,
}

/// Serializable view of a single analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub lemma: String,
    /// Dictionary id, e.g. `kitap_Noun`.
    pub id: String,
    pub pos: PrimaryPos,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_pos: Option<SecondaryPos>,
    pub morphemes: Vec<MorphemeReport>,
    /// Index of the first morpheme of each inflectional group.
    pub group_boundaries: Vec<usize>,
    /// Lexical format, e.g. `[kitap:Noun] kitab:Noun + A3sg + a:Dat`.
    pub formatted: String,
}

/// All analyses for a single token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub analyses: Vec<AnalysisReport>,
}

/// Per-token analyses of a sentence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    pub input: String,
    pub words: Vec<WordAnalysis>,
}

/// Unique lemmas of a token; the token itself when it could not be analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordLemmas {
    pub word: String,
    pub lemmas: Vec<String>,
}
