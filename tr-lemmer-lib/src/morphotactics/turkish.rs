// Turkish morphotactics: the grammar graph for nouns, adjectives,
// pronouns, numerals, verbs and the closed word classes, plus the stem
// transitions of a lexicon.
//
// State names end in _ST when a word may end there and _S otherwise.

use std::sync::Arc;

use tracing::info;

use crate::attributes::{PhoneticAttribute as P, PhoneticAttributes, RootAttribute as R};
use crate::condition::Condition;
use crate::error::{GrammarError, Result};
use crate::lexicon::{DictionaryItem, Lexicon};
use crate::types::{PrimaryPos, SecondaryPos};

use super::morpheme::{self as m, Morpheme};
use super::stem::{StemTransition, StemTransitions};
use super::{MorphotacticsGraph, StateId};

const BEN: &str = "ben_Pron_Pers";
const SEN: &str = "sen_Pron_Pers";
const BIZ: &str = "biz_Pron_Pers";
const SIZ: &str = "siz_Pron_Pers";

// ---------------------------------------------------------------------------
// States
// ---------------------------------------------------------------------------

/// Graph entry points, one per kind of dictionary root.
#[derive(Debug, Clone, Copy)]
pub struct RootStates {
    pub noun: StateId,
    pub noun_compound: StateId,
    pub noun_compound_root: StateId,
    pub adjective: StateId,
    pub numeral: StateId,
    pub adverb: StateId,
    pub pronoun: StateId,
    pub verb: StateId,
    pub verb_vowel_drop: StateId,
    pub conjunction: StateId,
    pub interjection: StateId,
    pub determiner: StateId,
    pub postpositive: StateId,
    pub question: StateId,
    pub duplicator: StateId,
    pub punctuation: StateId,
}

impl RootStates {
    /// State a stem enters. Compound roots and vowel-dropped verb stems have
    /// their own entry states.
    pub fn for_stem(&self, item: &DictionaryItem, attributes: PhoneticAttributes) -> StateId {
        if item.has_attribute(R::CompoundP3sg) {
            return self.noun_compound;
        }
        if item.has_attribute(R::CompoundP3sgRoot) {
            return self.noun_compound_root;
        }
        match item.primary_pos {
            PrimaryPos::Noun | PrimaryPos::Unknown => self.noun,
            PrimaryPos::Adjective => self.adjective,
            PrimaryPos::Adverb => self.adverb,
            PrimaryPos::Conjunction => self.conjunction,
            PrimaryPos::Interjection => self.interjection,
            PrimaryPos::Verb if attributes.contains(P::LastLetterDropped) => self.verb_vowel_drop,
            PrimaryPos::Verb => self.verb,
            PrimaryPos::Pronoun => self.pronoun,
            PrimaryPos::Numeral => self.numeral,
            PrimaryPos::Determiner => self.determiner,
            PrimaryPos::PostPositive => self.postpositive,
            PrimaryPos::Question => self.question,
            PrimaryPos::Duplicator => self.duplicator,
            PrimaryPos::Punctuation => self.punctuation,
        }
    }
}

struct Nominal {
    a3sg: StateId,
    a3pl: StateId,
    a3sg_com: StateId,
    a3pl_com: StateId,
    pnon: StateId,
    p1sg: StateId,
    p2sg: StateId,
    p3sg: StateId,
    p1pl: StateId,
    p2pl: StateId,
    p3pl: StateId,
    nom: StateId,
    dat: StateId,
    acc: StateId,
    loc: StateId,
    abl: StateId,
    gen: StateId,
    ins: StateId,
    equ: StateId,
    dim: StateId,
    ness: StateId,
    agt: StateId,
    with: StateId,
    without: StateId,
    rel: StateId,
    become_: StateId,
    acquire: StateId,
    zero: StateId,
    ly: StateId,
}

struct Pronominal {
    a1sg: StateId,
    a2sg: StateId,
    a3sg: StateId,
    a1pl: StateId,
    a2pl: StateId,
    a3pl: StateId,
    pnon: StateId,
    nom: StateId,
    dat: StateId,
    acc: StateId,
    loc: StateId,
    abl: StateId,
    gen: StateId,
    ins: StateId,
}

struct Verbal {
    neg: StateId,
    neg_prog: StateId,
    past: StateId,
    narr: StateId,
    fut: StateId,
    prog1: StateId,
    aor: StateId,
    cond: StateId,
    imp: StateId,
    past_after_tense: StateId,
    a1sg: StateId,
    a2sg: StateId,
    a3sg: StateId,
    a1pl: StateId,
    a2pl: StateId,
    a3pl: StateId,
    imp_a2sg: StateId,
    imp_a3sg: StateId,
    imp_a2pl: StateId,
    imp_a3pl: StateId,
    caus_t: StateId,
    caus_dir: StateId,
    pass: StateId,
    able: StateId,
    inf1: StateId,
    past_part: StateId,
    by_doing_so: StateId,
}

fn state(g: &mut MorphotacticsGraph, name: &'static str, morpheme: &'static Morpheme) -> StateId {
    g.add_state(name, morpheme, false, false)
}

fn terminal(g: &mut MorphotacticsGraph, name: &'static str, morpheme: &'static Morpheme) -> StateId {
    g.add_state(name, morpheme, true, false)
}

fn derivation(g: &mut MorphotacticsGraph, name: &'static str, morpheme: &'static Morpheme) -> StateId {
    g.add_state(name, morpheme, false, true)
}

fn add_roots(g: &mut MorphotacticsGraph) -> RootStates {
    RootStates {
        noun: state(g, "noun_S", &m::NOUN),
        noun_compound: state(g, "nounCompound_S", &m::NOUN),
        noun_compound_root: state(g, "nounCompoundRoot_S", &m::NOUN),
        adjective: terminal(g, "adjectiveRoot_ST", &m::ADJ),
        numeral: terminal(g, "numeralRoot_ST", &m::NUM),
        adverb: terminal(g, "advRoot_ST", &m::ADV),
        pronoun: state(g, "pronoun_S", &m::PRON),
        verb: state(g, "verbRoot_S", &m::VERB),
        verb_vowel_drop: state(g, "verbRoot_VowelDrop_S", &m::VERB),
        conjunction: terminal(g, "conjRoot_ST", &m::CONJ),
        interjection: terminal(g, "interjRoot_ST", &m::INTERJ),
        determiner: terminal(g, "detRoot_ST", &m::DET),
        postpositive: terminal(g, "postpRoot_ST", &m::POSTP),
        question: terminal(g, "quesRoot_ST", &m::QUES),
        duplicator: terminal(g, "dupRoot_ST", &m::DUP),
        punctuation: terminal(g, "puncRoot_ST", &m::PUNC),
    }
}

fn add_nominal_states(g: &mut MorphotacticsGraph) -> Nominal {
    Nominal {
        a3sg: state(g, "a3sg_S", &m::A3SG),
        a3pl: state(g, "a3pl_S", &m::A3PL),
        a3sg_com: state(g, "a3sgCom_S", &m::A3SG),
        a3pl_com: state(g, "a3plCom_S", &m::A3PL),
        pnon: state(g, "pnon_S", &m::PNON),
        p1sg: state(g, "p1sg_S", &m::P1SG),
        p2sg: state(g, "p2sg_S", &m::P2SG),
        p3sg: state(g, "p3sg_S", &m::P3SG),
        p1pl: state(g, "p1pl_S", &m::P1PL),
        p2pl: state(g, "p2pl_S", &m::P2PL),
        p3pl: state(g, "p3pl_S", &m::P3PL),
        nom: terminal(g, "nom_ST", &m::NOM),
        dat: terminal(g, "dat_ST", &m::DAT),
        acc: terminal(g, "acc_ST", &m::ACC),
        loc: terminal(g, "loc_ST", &m::LOC),
        abl: terminal(g, "abl_ST", &m::ABL),
        gen: terminal(g, "gen_ST", &m::GEN),
        ins: terminal(g, "ins_ST", &m::INS),
        equ: terminal(g, "equ_ST", &m::EQU),
        dim: derivation(g, "dim_S", &m::DIM),
        ness: derivation(g, "ness_S", &m::NESS),
        agt: derivation(g, "agt_S", &m::AGT),
        with: derivation(g, "with_S", &m::WITH),
        without: derivation(g, "without_S", &m::WITHOUT),
        rel: derivation(g, "rel_S", &m::REL),
        become_: derivation(g, "become_S", &m::BECOME),
        acquire: derivation(g, "acquire_S", &m::ACQUIRE),
        zero: derivation(g, "zero_S", &m::ZERO),
        ly: derivation(g, "ly_S", &m::LY),
    }
}

fn add_pronominal_states(g: &mut MorphotacticsGraph) -> Pronominal {
    Pronominal {
        a1sg: state(g, "pA1sg_S", &m::A1SG),
        a2sg: state(g, "pA2sg_S", &m::A2SG),
        a3sg: state(g, "pA3sg_S", &m::A3SG),
        a1pl: state(g, "pA1pl_S", &m::A1PL),
        a2pl: state(g, "pA2pl_S", &m::A2PL),
        a3pl: state(g, "pA3pl_S", &m::A3PL),
        pnon: state(g, "pPnon_S", &m::PNON),
        nom: terminal(g, "pNom_ST", &m::NOM),
        dat: terminal(g, "pDat_ST", &m::DAT),
        acc: terminal(g, "pAcc_ST", &m::ACC),
        loc: terminal(g, "pLoc_ST", &m::LOC),
        abl: terminal(g, "pAbl_ST", &m::ABL),
        gen: terminal(g, "pGen_ST", &m::GEN),
        ins: terminal(g, "pIns_ST", &m::INS),
    }
}

fn add_verbal_states(g: &mut MorphotacticsGraph) -> Verbal {
    Verbal {
        neg: state(g, "vNeg_S", &m::NEG),
        neg_prog: state(g, "vNegProg1_S", &m::NEG),
        past: state(g, "vPast_S", &m::PAST),
        narr: state(g, "vNarr_S", &m::NARR),
        fut: state(g, "vFut_S", &m::FUT),
        prog1: state(g, "vProg1_S", &m::PROG1),
        aor: state(g, "vAor_S", &m::AOR),
        cond: state(g, "vCond_S", &m::COND),
        imp: state(g, "vImp_S", &m::IMP),
        past_after_tense: state(g, "vPastAfterTense_S", &m::PAST),
        a1sg: terminal(g, "vA1sg_ST", &m::A1SG),
        a2sg: terminal(g, "vA2sg_ST", &m::A2SG),
        a3sg: terminal(g, "vA3sg_ST", &m::A3SG),
        a1pl: terminal(g, "vA1pl_ST", &m::A1PL),
        a2pl: terminal(g, "vA2pl_ST", &m::A2PL),
        a3pl: terminal(g, "vA3pl_ST", &m::A3PL),
        imp_a2sg: terminal(g, "vImpA2sg_ST", &m::A2SG),
        imp_a3sg: terminal(g, "vImpA3sg_ST", &m::A3SG),
        imp_a2pl: terminal(g, "vImpA2pl_ST", &m::A2PL),
        imp_a3pl: terminal(g, "vImpA3pl_ST", &m::A3PL),
        caus_t: derivation(g, "vCausT_S", &m::CAUS),
        caus_dir: derivation(g, "vCausTır_S", &m::CAUS),
        pass: derivation(g, "vPass_S", &m::PASS),
        able: derivation(g, "vAble_S", &m::ABLE),
        inf1: derivation(g, "vInf1_S", &m::INF1),
        past_part: derivation(g, "vPastPart_S", &m::PAST_PART),
        by_doing_so: derivation(g, "vByDoingSo_S", &m::BY_DOING_SO),
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

fn always() -> Condition {
    Condition::always()
}

fn connect_nouns(
    g: &mut MorphotacticsGraph,
    r: &RootStates,
    n: &Nominal,
    v: &Verbal,
) -> std::result::Result<(), GrammarError> {
    // Number.
    g.add_empty(r.noun, n.a3sg, always())?;
    g.add(r.noun, n.a3pl, "lAr", always())?;

    // Possession. Participles always carry one: geldiğim, not geldik.
    let possessable = !Condition::LastDerivationIsAny(vec![v.past_part]);
    g.add_empty(n.a3sg, n.pnon, possessable.clone())?;
    g.add_empty(n.a3pl, n.pnon, possessable)?;
    g.add(n.a3sg, n.p1sg, "+Im", always())?;
    g.add(n.a3sg, n.p2sg, "+In", always())?;
    g.add(n.a3sg, n.p3sg, "+sI", always())?;
    g.add(n.a3sg, n.p1pl, "+ImIz", always())?;
    g.add(n.a3sg, n.p2pl, "+InIz", always())?;
    g.add(n.a3sg, n.p3pl, "lArI", always())?;

    g.add(n.a3pl, n.p1sg, "Im", always())?;
    g.add(n.a3pl, n.p2sg, "In", always())?;
    g.add(n.a3pl, n.p3sg, "I", always())?;
    g.add(n.a3pl, n.p1pl, "ImIz", always())?;
    g.add(n.a3pl, n.p2pl, "InIz", always())?;
    g.add(n.a3pl, n.p3pl, "I", always())?;

    // Case after no possession.
    g.add_empty(n.pnon, n.nom, always())?;
    g.add(n.pnon, n.dat, "+yA", always())?;
    g.add(n.pnon, n.acc, "+yI", always())?;
    g.add(n.pnon, n.loc, ">dA", always())?;
    g.add(n.pnon, n.abl, ">dAn", always())?;
    g.add(n.pnon, n.gen, "+nIn", always())?;
    g.add(n.pnon, n.ins, "+ylA", always())?;
    g.add(n.pnon, n.equ, ">cA", always())?;

    // Case after first and second person possession.
    for p in [n.p1sg, n.p2sg, n.p1pl, n.p2pl] {
        g.add_empty(p, n.nom, always())?;
        g.add(p, n.dat, "A", always())?;
        g.add(p, n.acc, "I", always())?;
        g.add(p, n.loc, "dA", always())?;
        g.add(p, n.abl, "dAn", always())?;
        g.add(p, n.gen, "In", always())?;
        g.add(p, n.ins, "lA", always())?;
    }

    // Case after third person possession takes an n buffer.
    for p in [n.p3sg, n.p3pl] {
        g.add_empty(p, n.nom, always())?;
        g.add(p, n.dat, "nA", always())?;
        g.add(p, n.acc, "nI", always())?;
        g.add(p, n.loc, "ndA", always())?;
        g.add(p, n.abl, "ndAn", always())?;
        g.add(p, n.gen, "nIn", always())?;
        g.add(p, n.ins, "+ylA", always())?;
    }

    g.add(n.loc, n.rel, "ki", always())?;
    g.add_empty(n.rel, r.adjective, always())?;

    // Derivations take the bare noun: kitaplık, not kitaplarlık.
    let bare = Condition::NoSurfaceAfterDerivation;
    g.add(n.nom, n.dim, ">cI~k", bare.clone())?;
    g.add(n.nom, n.dim, ">cI!ğ", bare.clone())?;
    g.add(n.nom, n.ness, "lI~k", bare.clone())?;
    g.add(n.nom, n.ness, "lI!ğ", bare.clone())?;
    g.add(n.nom, n.agt, ">cI", bare.clone())?;
    g.add(n.nom, n.with, "lI", bare.clone())?;
    g.add(n.nom, n.without, "sIz", bare.clone())?;
    // Adjectives reach Become directly, not through a zero derivation.
    let not_after_zero = bare.clone().and_not(Condition::LastDerivationIs(n.zero));
    g.add(n.nom, n.become_, "lAş", not_after_zero.clone())?;
    g.add(n.nom, n.acquire, "lAn", not_after_zero)?;

    for d in [n.dim, n.ness, n.agt] {
        g.add_empty(d, r.noun, always())?;
    }
    for d in [n.with, n.without] {
        g.add_empty(d, r.adjective, always())?;
    }
    for d in [n.become_, n.acquire] {
        g.add_empty(d, r.verb, always())?;
    }

    // P3sg compounds: zeytinyağı, zeytinyağına, zeytinyağları.
    g.add_empty(r.noun_compound, n.a3sg_com, always())?;
    g.add_empty(n.a3sg_com, n.p3sg, always())?;
    g.add(r.noun_compound_root, n.a3pl_com, "lAr", always())?;
    g.add(n.a3pl_com, n.p3sg, "I", always())?;
    g.add(n.a3pl_com, n.p3pl, "I", always())?;

    Ok(())
}

fn connect_adjectives(g: &mut MorphotacticsGraph, r: &RootStates, n: &Nominal) -> std::result::Result<(), GrammarError> {
    for root in [r.adjective, r.numeral] {
        g.add_empty(root, n.zero, Condition::HasTail)?;
    }
    g.add_empty(n.zero, r.noun, always())?;
    g.add(r.adjective, n.become_, "lAş", always())?;
    g.add(r.adjective, n.ly, ">cA", always())?;
    g.add_empty(n.ly, r.adverb, always())?;
    Ok(())
}

fn connect_pronouns(g: &mut MorphotacticsGraph, r: &RootStates, p: &Pronominal) -> std::result::Result<(), GrammarError> {
    use Condition as C;

    g.add_empty(r.pronoun, p.a1sg, C::root_is(BEN))?;
    g.add_empty(r.pronoun, p.a2sg, C::root_is(SEN))?;
    g.add_empty(r.pronoun, p.a1pl, C::root_is(BIZ))?;
    g.add_empty(r.pronoun, p.a2pl, C::root_is(SIZ))?;
    g.add_empty(r.pronoun, p.a3sg, C::root_is_none(&[BEN, SEN, BIZ, SIZ]))?;
    g.add(r.pronoun, p.a3pl, "+nlAr", C::SecondaryPosIs(SecondaryPos::Demonstrative))?;
    g.add(r.pronoun, p.a3pl, "lAr", C::SecondaryPosIs(SecondaryPos::Question))?;
    for a in [p.a1sg, p.a2sg, p.a3sg, p.a1pl, p.a2pl, p.a3pl] {
        g.add_empty(a, p.pnon, always())?;
    }

    // ban- and san- take only the dative; ben and sen never do.
    let unmodified = C::not_have(P::ModifiedPronoun);
    let dative = C::root_is_none(&[BEN, SEN]).or(C::has(P::ModifiedPronoun));
    g.add_empty(p.pnon, p.nom, unmodified.clone())?;

    // bunu, ona, kendinde.
    let buffered = C::SecondaryPosIs(SecondaryPos::Demonstrative).or(C::SecondaryPosIs(SecondaryPos::Reflexive));
    let plural = C::ContainsMorpheme(vec![&m::A3PL]);
    g.add(p.pnon, p.dat, "+nA", buffered.clone())?;
    g.add(p.pnon, p.acc, "+nI", buffered.clone())?;
    g.add(p.pnon, p.loc, "+ndA", buffered.clone())?;
    g.add(p.pnon, p.abl, "+ndAn", buffered.clone())?;
    g.add(p.pnon, p.gen, "+nIn", buffered.clone())?;
    g.add(p.pnon, p.ins, "+nInlA", buffered.clone().and_not(plural.clone()))?;
    g.add(p.pnon, p.ins, "lA", buffered.clone().and(plural))?;

    // bana, beni, bende, benim, kime, neyi.
    let plain = !buffered;
    g.add(p.pnon, p.dat, "+yA", plain.clone().and(dative))?;
    g.add(p.pnon, p.acc, "+yI", plain.clone().and(unmodified.clone()))?;
    g.add(p.pnon, p.loc, ">dA", plain.clone().and(unmodified.clone()))?;
    g.add(p.pnon, p.abl, ">dAn", plain.clone().and(unmodified.clone()))?;
    g.add(p.pnon, p.gen, "im", C::root_is_any(&[BEN, BIZ]).and(unmodified.clone()))?;
    g.add(
        p.pnon,
        p.gen,
        "+yIn",
        plain.clone().and(C::root_is_none(&[BEN, BIZ])).and(unmodified.clone()),
    )?;
    g.add(p.pnon, p.ins, "+ylA", plain.and(unmodified))?;
    Ok(())
}

fn connect_past_agreement(g: &mut MorphotacticsGraph, from: StateId, v: &Verbal) -> std::result::Result<(), GrammarError> {
    g.add(from, v.a1sg, "m", always())?;
    g.add(from, v.a2sg, "n", always())?;
    g.add_empty(from, v.a3sg, always())?;
    g.add(from, v.a1pl, "k", always())?;
    g.add(from, v.a2pl, "nIz", always())?;
    g.add(from, v.a3pl, "lAr", always())?;
    Ok(())
}

// Narrative, future, progressive and aorist share one paradigm.
fn connect_present_agreement(
    g: &mut MorphotacticsGraph,
    from: StateId,
    v: &Verbal,
    first_person: Condition,
) -> std::result::Result<(), GrammarError> {
    g.add(from, v.a1sg, "+yIm", first_person.clone())?;
    g.add(from, v.a2sg, "sIn", always())?;
    g.add_empty(from, v.a3sg, always())?;
    g.add(from, v.a1pl, "+yIz", first_person)?;
    g.add(from, v.a2pl, "sInIz", always())?;
    g.add(from, v.a3pl, "lAr", always())?;
    g.add(from, v.past_after_tense, ">dI", always())?;
    Ok(())
}

fn connect_verbs(g: &mut MorphotacticsGraph, r: &RootStates, v: &Verbal) -> std::result::Result<(), GrammarError> {
    use Condition as C;

    // arıyor, okuyor: vowel-dropped stems take only the progressive and
    // the passive.
    g.add(r.verb_vowel_drop, v.prog1, "Iyor", C::has_root(R::ProgressiveVowelDrop))?;
    g.add(r.verb_vowel_drop, v.pass, "Il", C::has_root(R::LastVowelDrop))?;

    // Tense, aspect, mood.
    g.add(r.verb, v.neg, "mA", always())?;
    g.add(r.verb, v.neg_prog, "m", always())?;
    g.add(v.neg_prog, v.prog1, "Iyor", always())?;
    g.add(r.verb, v.past, ">dI", always())?;
    g.add(r.verb, v.narr, "mIş", always())?;
    g.add(r.verb, v.fut, "+yAcA~k", always())?;
    g.add(r.verb, v.fut, "+yAcA!ğ", always())?;
    g.add(r.verb, v.prog1, "Iyor", C::not_have(P::LastLetterVowel))?;
    g.add(
        r.verb,
        v.aor,
        "+Ar",
        C::has_root(R::Aorist_A).and_not(C::HasDerivation),
    )?;
    g.add(r.verb, v.aor, "+Ir", C::has_root(R::Aorist_I).or(C::HasDerivation))?;
    g.add_empty(r.verb, v.imp, always())?;
    g.add(r.verb, v.cond, "sA", always())?;

    g.add(v.neg, v.past, ">dI", always())?;
    g.add(v.neg, v.narr, "mIş", always())?;
    g.add(v.neg, v.fut, "+yAcA~k", always())?;
    g.add(v.neg, v.fut, "+yAcA!ğ", always())?;
    g.add_empty(v.neg, v.imp, always())?;
    g.add(v.neg, v.cond, "sA", always())?;
    g.add(v.neg, v.aor, "z", always())?;

    // Agreement.
    connect_past_agreement(g, v.past, v)?;
    connect_past_agreement(g, v.cond, v)?;
    connect_past_agreement(g, v.past_after_tense, v)?;
    for tense in [v.narr, v.fut, v.prog1] {
        connect_present_agreement(g, tense, v, always())?;
    }
    // gelmezim and gelmeziz are not words.
    connect_present_agreement(g, v.aor, v, !C::PreviousMorphemeIs(&m::NEG))?;

    g.add_empty(v.imp, v.imp_a2sg, always())?;
    g.add(v.imp, v.imp_a3sg, "sIn", always())?;
    g.add(v.imp, v.imp_a2pl, "+yIn", always())?;
    g.add(v.imp, v.imp_a2pl, "+yInIz", always())?;
    g.add(v.imp, v.imp_a3pl, "sInlAr", always())?;

    // Derivations.
    g.add(r.verb, v.able, "+yAbil", always())?;
    let causative_t = C::has_root(R::Causative_t).and_not(C::HasDerivation);
    g.add(
        r.verb,
        v.caus_t,
        "t",
        causative_t.clone().or(C::LastDerivationIs(v.caus_dir)),
    )?;
    g.add(
        r.verb,
        v.caus_dir,
        ">dIr",
        (!causative_t).and_not(C::LastDerivationIs(v.caus_dir)),
    )?;
    let passive_in = C::has_root(R::Passive_In).and_not(C::HasDerivation);
    g.add(r.verb, v.pass, "+In", passive_in.clone())?;
    g.add(r.verb, v.pass, "+Il", !passive_in)?;
    g.add(r.verb, v.inf1, "mA~k", always())?;
    g.add(r.verb, v.past_part, ">dI~k", always())?;
    g.add(r.verb, v.past_part, ">dI!ğ", always())?;
    g.add(r.verb, v.by_doing_so, "+yArAk", always())?;

    for d in [v.able, v.caus_t, v.caus_dir, v.pass] {
        g.add_empty(d, r.verb, always())?;
    }
    g.add_empty(v.inf1, r.noun, always())?;
    g.add_empty(v.past_part, r.noun, always())?;
    g.add_empty(v.by_doing_so, r.adverb, always())?;
    Ok(())
}

// ---------------------------------------------------------------------------
// TurkishMorphotactics
// ---------------------------------------------------------------------------

/// The Turkish grammar graph bound to a lexicon's stems.
#[derive(Debug)]
pub struct TurkishMorphotactics {
    lexicon: Arc<Lexicon>,
    graph: MorphotacticsGraph,
    roots: RootStates,
    stems: StemTransitions,
}

impl TurkishMorphotactics {
    pub fn new(lexicon: Arc<Lexicon>) -> Result<Self> {
        let (graph, roots) = build_graph()?;
        let stems = StemTransitions::build(&lexicon, |item, attrs| roots.for_stem(item, attrs))?;
        info!(
            items = lexicon.len(),
            stems = stems.len(),
            states = graph.state_count(),
            transitions = graph.transition_count(),
            "morphotactics ready"
        );
        Ok(Self {
            lexicon,
            graph,
            roots,
            stems,
        })
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn graph(&self) -> &MorphotacticsGraph {
        &self.graph
    }

    pub fn roots(&self) -> &RootStates {
        &self.roots
    }

    pub fn stems(&self) -> &StemTransitions {
        &self.stems
    }

    pub fn prefix_matches(&self, word: &str) -> Vec<Arc<StemTransition>> {
        self.stems.prefix_matches(word)
    }
}

pub fn build_graph() -> std::result::Result<(MorphotacticsGraph, RootStates), GrammarError> {
    let mut g = MorphotacticsGraph::new();
    let roots = add_roots(&mut g);
    let nominal = add_nominal_states(&mut g);
    let pronominal = add_pronominal_states(&mut g);
    let verbal = add_verbal_states(&mut g);

    connect_nouns(&mut g, &roots, &nominal, &verbal)?;
    connect_adjectives(&mut g, &roots, &nominal)?;
    connect_pronouns(&mut g, &roots, &pronominal)?;
    connect_verbs(&mut g, &roots, &verbal)?;
    Ok((g, roots))
}
