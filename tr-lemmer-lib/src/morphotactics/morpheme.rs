// Morpheme identities used by the Turkish morphotactics.

use std::fmt;

use crate::types::PrimaryPos;

/// A grammatical unit. Derivational morphemes open a new inflectional group.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Morpheme {
    pub id: &'static str,
    pub name: &'static str,
    pub pos: Option<PrimaryPos>,
    pub derivational: bool,
}

impl Morpheme {
    const fn root(id: &'static str, name: &'static str, pos: PrimaryPos) -> Self {
        Self {
            id,
            name,
            pos: Some(pos),
            derivational: false,
        }
    }

    const fn inflection(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            pos: None,
            derivational: false,
        }
    }

    const fn derivation(id: &'static str, name: &'static str) -> Self {
        Self {
            id,
            name,
            pos: None,
            derivational: true,
        }
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id)
    }
}

// ---------------------------------------------------------------------------
// Parts of speech
// ---------------------------------------------------------------------------

pub static NOUN: Morpheme = Morpheme::root("Noun", "Noun", PrimaryPos::Noun);
pub static ADJ: Morpheme = Morpheme::root("Adj", "Adjective", PrimaryPos::Adjective);
pub static ADV: Morpheme = Morpheme::root("Adv", "Adverb", PrimaryPos::Adverb);
pub static CONJ: Morpheme = Morpheme::root("Conj", "Conjunction", PrimaryPos::Conjunction);
pub static INTERJ: Morpheme = Morpheme::root("Interj", "Interjection", PrimaryPos::Interjection);
pub static VERB: Morpheme = Morpheme::root("Verb", "Verb", PrimaryPos::Verb);
pub static PRON: Morpheme = Morpheme::root("Pron", "Pronoun", PrimaryPos::Pronoun);
pub static NUM: Morpheme = Morpheme::root("Num", "Numeral", PrimaryPos::Numeral);
pub static DET: Morpheme = Morpheme::root("Det", "Determiner", PrimaryPos::Determiner);
pub static POSTP: Morpheme = Morpheme::root("Postp", "PostPositive", PrimaryPos::PostPositive);
pub static QUES: Morpheme = Morpheme::root("Ques", "Question", PrimaryPos::Question);
pub static DUP: Morpheme = Morpheme::root("Dup", "Duplicator", PrimaryPos::Duplicator);
pub static PUNC: Morpheme = Morpheme::root("Punc", "Punctuation", PrimaryPos::Punctuation);

// ---------------------------------------------------------------------------
// Agreement, possession and case
// ---------------------------------------------------------------------------

pub static A1SG: Morpheme = Morpheme::inflection("A1sg", "FirstPersonSingular");
pub static A2SG: Morpheme = Morpheme::inflection("A2sg", "SecondPersonSingular");
pub static A3SG: Morpheme = Morpheme::inflection("A3sg", "ThirdPersonSingular");
pub static A1PL: Morpheme = Morpheme::inflection("A1pl", "FirstPersonPlural");
pub static A2PL: Morpheme = Morpheme::inflection("A2pl", "SecondPersonPlural");
pub static A3PL: Morpheme = Morpheme::inflection("A3pl", "ThirdPersonPlural");

/// Default possessive, elided from analyses.
pub static PNON: Morpheme = Morpheme::inflection("Pnon", "NoPosession");
pub static P1SG: Morpheme = Morpheme::inflection("P1sg", "FirstPersonSingularPossessive");
pub static P2SG: Morpheme = Morpheme::inflection("P2sg", "SecondPersonSingularPossessive");
pub static P3SG: Morpheme = Morpheme::inflection("P3sg", "ThirdPersonSingularPossessive");
pub static P1PL: Morpheme = Morpheme::inflection("P1pl", "FirstPersonPluralPossessive");
pub static P2PL: Morpheme = Morpheme::inflection("P2pl", "SecondPersonPluralPossessive");
pub static P3PL: Morpheme = Morpheme::inflection("P3pl", "ThirdPersonPluralPossessive");

/// Default case, elided from analyses.
pub static NOM: Morpheme = Morpheme::inflection("Nom", "Nominal");
pub static DAT: Morpheme = Morpheme::inflection("Dat", "Dative");
pub static ACC: Morpheme = Morpheme::inflection("Acc", "Accusative");
pub static ABL: Morpheme = Morpheme::inflection("Abl", "Ablative");
pub static LOC: Morpheme = Morpheme::inflection("Loc", "Locative");
pub static INS: Morpheme = Morpheme::inflection("Ins", "Instrumental");
pub static GEN: Morpheme = Morpheme::inflection("Gen", "Genitive");
pub static EQU: Morpheme = Morpheme::inflection("Equ", "Equ");

// ---------------------------------------------------------------------------
// Nominal derivations
// ---------------------------------------------------------------------------

pub static DIM: Morpheme = Morpheme::derivation("Dim", "Diminutive");
pub static NESS: Morpheme = Morpheme::derivation("Ness", "Ness");
pub static AGT: Morpheme = Morpheme::derivation("Agt", "Agentive");
pub static WITH: Morpheme = Morpheme::derivation("With", "With");
pub static WITHOUT: Morpheme = Morpheme::derivation("Without", "Without");
pub static REL: Morpheme = Morpheme::derivation("Rel", "Relation");
pub static BECOME: Morpheme = Morpheme::derivation("Become", "Become");
pub static ACQUIRE: Morpheme = Morpheme::derivation("Acquire", "Acquire");
pub static LY: Morpheme = Morpheme::derivation("Ly", "Ly");
pub static ZERO: Morpheme = Morpheme::derivation("Zero", "Zero");

// ---------------------------------------------------------------------------
// Verbal morphemes
// ---------------------------------------------------------------------------

pub static NEG: Morpheme = Morpheme::inflection("Neg", "Negative");
pub static PAST: Morpheme = Morpheme::inflection("Past", "PastTense");
pub static NARR: Morpheme = Morpheme::inflection("Narr", "NarrativeTense");
pub static FUT: Morpheme = Morpheme::inflection("Fut", "Future");
pub static PROG1: Morpheme = Morpheme::inflection("Prog1", "Progressive_Iyor");
pub static AOR: Morpheme = Morpheme::inflection("Aor", "Aorist");
pub static COND: Morpheme = Morpheme::inflection("Cond", "Condition");
pub static IMP: Morpheme = Morpheme::inflection("Imp", "Imparative");

pub static CAUS: Morpheme = Morpheme::derivation("Caus", "Causative");
pub static PASS: Morpheme = Morpheme::derivation("Pass", "Passive");
pub static ABLE: Morpheme = Morpheme::derivation("Able", "Ability");
pub static INF1: Morpheme = Morpheme::derivation("Inf1", "Infinitive1");
pub static PAST_PART: Morpheme = Morpheme::derivation("PastPart", "PastParticiple");
pub static BY_DOING_SO: Morpheme = Morpheme::derivation("ByDoingSo", "ByDoingSo");

/// Root morpheme for a dictionary part of speech.
pub fn for_pos(pos: PrimaryPos) -> &'static Morpheme {
    match pos {
        PrimaryPos::Noun | PrimaryPos::Unknown => &NOUN,
        PrimaryPos::Adjective => &ADJ,
        PrimaryPos::Adverb => &ADV,
        PrimaryPos::Conjunction => &CONJ,
        PrimaryPos::Interjection => &INTERJ,
        PrimaryPos::Verb => &VERB,
        PrimaryPos::Pronoun => &PRON,
        PrimaryPos::Numeral => &NUM,
        PrimaryPos::Determiner => &DET,
        PrimaryPos::PostPositive => &POSTP,
        PrimaryPos::Question => &QUES,
        PrimaryPos::Duplicator => &DUP,
        PrimaryPos::Punctuation => &PUNC,
    }
}
