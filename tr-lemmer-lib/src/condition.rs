// Transition guards: predicates over a search path, composable with
// and / or / not.

use std::ops;

use crate::attributes::{PhoneticAttribute, RootAttribute, RootAttributes};
use crate::morphotactics::morpheme::Morpheme;
use crate::morphotactics::StateId;
use crate::path::SearchPath;
use crate::types::{PrimaryPos, SecondaryPos};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    Or,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    // -- lexical ----------------------------------------------------------
    HasRootAttribute(RootAttribute),
    HasAnyRootAttribute(RootAttributes),
    HasPhoneticAttribute(PhoneticAttribute),
    /// Dictionary item id.
    DictionaryItemIs(String),
    DictionaryItemIsAny(Vec<String>),
    DictionaryItemIsNone(Vec<String>),
    RootPrimaryPosIs(PrimaryPos),
    SecondaryPosIs(SecondaryPos),
    RootSurfaceIs(String),
    RootSurfaceIsAny(Vec<String>),

    // -- graph position ---------------------------------------------------
    CurrentStateIs(StateId),
    CurrentStateIsNot(StateId),
    PreviousStateIs(StateId),
    PreviousStateIsNot(StateId),
    PreviousStateIsAny(Vec<StateId>),
    CurrentMorphemeIs(&'static Morpheme),
    CurrentMorphemeIsAny(Vec<&'static Morpheme>),
    PreviousMorphemeIs(&'static Morpheme),
    PreviousMorphemeIsAny(Vec<&'static Morpheme>),

    // -- consumed text ----------------------------------------------------
    HasAnySuffixSurface,
    HasTail,
    HasNoTail,
    /// The path ends with exactly these morphemes.
    HasTailSequence(Vec<&'static Morpheme>),
    ContainsMorphemeSequence(Vec<&'static Morpheme>),
    ContainsMorpheme(Vec<&'static Morpheme>),

    // -- derivations and inflectional groups -----------------------------
    LastDerivationIs(StateId),
    LastDerivationIsAny(Vec<StateId>),
    HasDerivation,
    /// No suffix since the last derivation (or the stem) produced text.
    NoSurfaceAfterDerivation,
    CurrentGroupContainsAny(Vec<StateId>),
    PreviousGroupContains(Vec<StateId>),
    PreviousGroupContainsMorpheme(Vec<&'static Morpheme>),

    // -- composition ------------------------------------------------------
    Not(Box<Condition>),
    Combined {
        op: Operator,
        conditions: Vec<Condition>,
    },
}

impl Condition {
    /// The condition every path passes.
    pub fn always() -> Self {
        Condition::Combined {
            op: Operator::And,
            conditions: Vec::new(),
        }
    }

    pub fn has(attribute: PhoneticAttribute) -> Self {
        Condition::HasPhoneticAttribute(attribute)
    }

    pub fn not_have(attribute: PhoneticAttribute) -> Self {
        !Condition::HasPhoneticAttribute(attribute)
    }

    pub fn has_root(attribute: RootAttribute) -> Self {
        Condition::HasRootAttribute(attribute)
    }

    pub fn not_have_root(attribute: RootAttribute) -> Self {
        !Condition::HasRootAttribute(attribute)
    }

    pub fn not_have_any(attributes: &[RootAttribute]) -> Self {
        !Condition::HasAnyRootAttribute(RootAttributes::of(attributes))
    }

    pub fn root_is(id: &str) -> Self {
        Condition::DictionaryItemIs(id.to_string())
    }

    pub fn root_is_not(id: &str) -> Self {
        !Condition::root_is(id)
    }

    pub fn root_is_any(ids: &[&str]) -> Self {
        Condition::DictionaryItemIsAny(ids.iter().map(|s| s.to_string()).collect())
    }

    pub fn root_is_none(ids: &[&str]) -> Self {
        Condition::DictionaryItemIsNone(ids.iter().map(|s| s.to_string()).collect())
    }

    pub fn and(self, other: Condition) -> Self {
        self.combine(Operator::And, other)
    }

    pub fn or(self, other: Condition) -> Self {
        self.combine(Operator::Or, other)
    }

    pub fn and_not(self, other: Condition) -> Self {
        self.and(!other)
    }

    pub fn or_not(self, other: Condition) -> Self {
        self.or(!other)
    }

    // Members of a combination with the same operator are spliced in, so
    // `a.and(b).and(c)` is one three-way AND.
    fn combine(self, op: Operator, other: Condition) -> Self {
        let mut conditions = Vec::new();
        for c in [self, other] {
            match c {
                Condition::Combined { op: inner, conditions: members } if inner == op => {
                    conditions.extend(members)
                }
                c => conditions.push(c),
            }
        }
        Condition::Combined { op, conditions }
    }

    /// Number of leaf predicates.
    pub fn len(&self) -> usize {
        match self {
            Condition::Not(inner) => inner.len(),
            Condition::Combined { conditions, .. } => conditions.iter().map(Condition::len).sum(),
            _ => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn accept(&self, path: &SearchPath) -> bool {
        use Condition::*;

        let item = path.dict_item();
        match self {
            HasRootAttribute(a) => item.has_attribute(*a),
            HasAnyRootAttribute(set) => item.has_any_attribute(set),
            HasPhoneticAttribute(a) => path.attributes().contains(*a),
            DictionaryItemIs(id) => item.id == *id,
            DictionaryItemIsAny(ids) => ids.iter().any(|id| item.id == *id),
            DictionaryItemIsNone(ids) => !ids.iter().any(|id| item.id == *id),
            RootPrimaryPosIs(pos) => item.primary_pos == *pos,
            SecondaryPosIs(pos) => item.secondary_pos == *pos,
            RootSurfaceIs(s) => path.stem_transition().surface == *s,
            RootSurfaceIsAny(all) => all.iter().any(|s| path.stem_transition().surface == *s),

            CurrentStateIs(s) => path.current_state() == *s,
            CurrentStateIsNot(s) => path.current_state() != *s,
            PreviousStateIs(s) => path.previous_transition().is_some_and(|t| t.state == *s),
            PreviousStateIsNot(s) => path.previous_transition().map_or(true, |t| t.state != *s),
            PreviousStateIsAny(states) => path
                .previous_transition()
                .is_some_and(|t| states.contains(&t.state)),
            CurrentMorphemeIs(m) => path.last_transition().morpheme == *m,
            CurrentMorphemeIsAny(ms) => ms.contains(&path.last_transition().morpheme),
            PreviousMorphemeIs(m) => path.previous_transition().is_some_and(|t| t.morpheme == *m),
            PreviousMorphemeIsAny(ms) => path
                .previous_transition()
                .is_some_and(|t| ms.contains(&t.morpheme)),

            HasAnySuffixSurface => path.contains_suffix_with_surface(),
            HasTail => !path.tail().is_empty(),
            HasNoTail => path.tail().is_empty(),
            HasTailSequence(ms) => {
                ms.len() <= path.transition_count()
                    && path
                        .backwards()
                        .zip(ms.iter().rev())
                        .all(|(t, m)| t.morpheme == *m)
            }
            ContainsMorphemeSequence(ms) => contains_sequence(path, ms),
            ContainsMorpheme(ms) => path.backwards().any(|t| ms.contains(&t.morpheme)),

            LastDerivationIs(s) => last_derivation(path).is_some_and(|d| d == *s),
            LastDerivationIsAny(states) => last_derivation(path).is_some_and(|d| states.contains(&d)),
            HasDerivation => path.contains_derivation(),
            NoSurfaceAfterDerivation => {
                for t in path.suffixes_backwards() {
                    if t.derivative {
                        return true;
                    }
                    if !t.surface.is_empty() {
                        return false;
                    }
                }
                true
            }
            CurrentGroupContainsAny(states) => {
                for t in path.backwards() {
                    if states.contains(&t.state) {
                        return true;
                    }
                    if t.derivative {
                        return false;
                    }
                }
                false
            }
            PreviousGroupContains(states) => previous_group(path).any(|t| states.contains(&t.state)),
            PreviousGroupContainsMorpheme(ms) => previous_group(path).any(|t| ms.contains(&t.morpheme)),

            Not(inner) => !inner.accept(path),
            Combined { op, conditions } => match (conditions.as_slice(), op) {
                ([], _) => true,
                ([only], _) => only.accept(path),
                (all, Operator::And) => all.iter().all(|c| c.accept(path)),
                (all, Operator::Or) => all.iter().any(|c| c.accept(path)),
            },
        }
    }
}

impl ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::Not(Box::new(self))
    }
}

fn last_derivation(path: &SearchPath) -> Option<StateId> {
    path.suffixes_backwards().find(|t| t.derivative).map(|t| t.state)
}

/// Transitions of the inflectional group before the current one, newest
/// first. The group ends at (and includes) the derivation that opened it, or
/// at the root transition when it is the first group.
fn previous_group(path: &SearchPath) -> impl Iterator<Item = &crate::path::SurfaceTransition> {
    let mut history = path.backwards();
    // Skip the current group and the derivation that opened it.
    let found = history.by_ref().any(|t| t.derivative);
    let mut done = !found;
    history.take_while(move |t| {
        if done {
            return false;
        }
        if t.derivative {
            done = true;
        }
        true
    })
}

fn contains_sequence(path: &SearchPath, sequence: &[&'static Morpheme]) -> bool {
    if sequence.is_empty() || sequence.len() > path.transition_count() {
        return false;
    }
    let morphemes: Vec<_> = path.transitions().iter().map(|t| t.morpheme).collect();
    morphemes.windows(sequence.len()).any(|w| w == sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::attributes::{PhoneticAttribute as P, PhoneticAttributes};
    use crate::lexicon::{DictionaryItem, Lexicon};
    use crate::morphotactics::morpheme::*;
    use crate::morphotactics::{stem, MorphotacticsGraph};
    use crate::phonetics;

    fn leaf() -> Condition {
        Condition::has(P::CannotTerminate)
    }

    fn op_of(c: &Condition) -> Option<Operator> {
        match c {
            Condition::Combined { op, .. } => Some(*op),
            _ => None,
        }
    }

    #[test]
    fn test_len_counts_leaves() {
        assert_eq!(leaf().len(), 1);
        assert_eq!(leaf().and(leaf()).len(), 2);
        assert_eq!(leaf().or(leaf()).len(), 2);
        assert_eq!(leaf().and(leaf()).and(leaf()).len(), 3);
        assert_eq!((!leaf().and(leaf())).len(), 2);
        assert_eq!(Condition::always().len(), 0);
    }

    #[test]
    fn test_and_flattens() {
        let c = leaf().and(leaf()).and(leaf());
        match &c {
            Condition::Combined { op, conditions } => {
                assert_eq!(*op, Operator::And);
                assert_eq!(conditions.len(), 3);
                assert!(conditions.iter().all(|m| op_of(m).is_none()));
            }
            other => panic!("expected a combination, got {other:?}"),
        }

        let c = leaf().and(leaf().and(leaf()));
        assert_eq!(c.len(), 3);
        assert_eq!(op_of(&c), Some(Operator::And));
    }

    #[test]
    fn test_or_flattens() {
        let c = leaf().or(leaf()).or(leaf());
        match &c {
            Condition::Combined { op, conditions } => {
                assert_eq!(*op, Operator::Or);
                assert_eq!(conditions.len(), 3);
            }
            other => panic!("expected a combination, got {other:?}"),
        }
    }

    #[test]
    fn test_mixed_operators_nest() {
        let c = leaf().and(leaf().or(Condition::has_root(RootAttribute::CompoundP3sgRoot)));
        assert_eq!(op_of(&c), Some(Operator::And));
        assert_eq!(c.len(), 3);
        if let Condition::Combined { conditions, .. } = &c {
            assert_eq!(conditions.len(), 2);
            assert_eq!(op_of(&conditions[1]), Some(Operator::Or));
        }

        let c = leaf().or(leaf().and(leaf()));
        assert_eq!(op_of(&c), Some(Operator::Or));
        assert_eq!(c.len(), 3);
    }

    #[test]
    fn test_negation_helpers() {
        assert_eq!(Condition::not_have(P::ExpectsVowel), !Condition::has(P::ExpectsVowel));
        assert_eq!(
            leaf().and_not(Condition::HasTail),
            leaf().and(Condition::Not(Box::new(Condition::HasTail)))
        );
    }

    // -----------------------------------------------------------------------
    // Predicates over real paths
    // -----------------------------------------------------------------------

    /// A tiny noun grammar: noun, a3sg, pnon, dat, and a ness derivation
    /// that re-enters the noun state.
    struct Fixture {
        graph: MorphotacticsGraph,
        noun: StateId,
        a3sg: StateId,
        pnon: StateId,
        dat: StateId,
        ness: StateId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut graph = MorphotacticsGraph::new();
            let noun = graph.add_state("noun_S", &NOUN, false, false);
            let a3sg = graph.add_state("a3sg_S", &A3SG, false, false);
            let pnon = graph.add_state("pnon_S", &PNON, false, false);
            let dat = graph.add_state("dat_S", &DAT, true, false);
            let ness = graph.add_state("ness_S", &NESS, false, true);
            Self {
                graph,
                noun,
                a3sg,
                pnon,
                dat,
                ness,
            }
        }

        fn start(&self, word: &str) -> SearchPath {
            let lexicon = Lexicon::from_lines(["kitap [A:Voicing]"]).unwrap();
            let item = lexicon.iter().next().unwrap().clone();
            let noun = self.noun;
            let stems = stem::generate(&item, &|_: &DictionaryItem, _: PhoneticAttributes| noun).unwrap();
            let kitap = Arc::new(stems[0].clone());
            SearchPath::initial(kitap, Arc::from(word), self.graph.state(self.noun)).unwrap()
        }

        fn step(&self, path: &SearchPath, surface: &str, to: StateId) -> SearchPath {
            let attributes = phonetics::compute(surface, path.attributes());
            path.extend(surface, self.graph.state(to), attributes).unwrap()
        }

        /// kitap + A3sg + Pnon, with `lığa` still to consume.
        fn first_group(&self) -> SearchPath {
            let p = self.start("kitaplığa");
            let p = self.step(&p, "", self.a3sg);
            self.step(&p, "", self.pnon)
        }

        /// kitap + A3sg + Pnon | lığ:Ness + Noun + A3sg + Pnon + a:Dat
        fn derived(&self) -> SearchPath {
            let p = self.step(&self.first_group(), "lığ", self.ness);
            let p = self.step(&p, "", self.noun);
            let p = self.step(&p, "", self.a3sg);
            let p = self.step(&p, "", self.pnon);
            self.step(&p, "a", self.dat)
        }
    }

    #[test]
    fn test_lexical_predicates() {
        let f = Fixture::new();
        let p = f.first_group();
        assert!(Condition::has_root(RootAttribute::Voicing).accept(&p));
        assert!(!Condition::has_root(RootAttribute::Doubling).accept(&p));
        assert!(Condition::HasAnyRootAttribute(RootAttributes::of(&[RootAttribute::Doubling, RootAttribute::Voicing]))
            .accept(&p));
        assert!(Condition::not_have_any(&[RootAttribute::Doubling]).accept(&p));
        assert!(Condition::has(P::LastLetterVoicelessStop).accept(&p));
        assert!(Condition::root_is("kitap_Noun").accept(&p));
        assert!(Condition::root_is_not("kalem_Noun").accept(&p));
        assert!(Condition::root_is_any(&["kalem_Noun", "kitap_Noun"]).accept(&p));
        assert!(!Condition::root_is_none(&["kitap_Noun"]).accept(&p));
        assert!(Condition::root_is_none(&["kalem_Noun"]).accept(&p));
        assert!(Condition::RootPrimaryPosIs(PrimaryPos::Noun).accept(&p));
        assert!(!Condition::RootPrimaryPosIs(PrimaryPos::Verb).accept(&p));
        assert!(Condition::SecondaryPosIs(SecondaryPos::None).accept(&p));
        assert!(Condition::RootSurfaceIs("kitap".to_string()).accept(&p));
        assert!(Condition::RootSurfaceIsAny(vec!["kitab".to_string(), "kitap".to_string()]).accept(&p));
        assert!(!Condition::RootSurfaceIsAny(vec!["kitab".to_string()]).accept(&p));
    }

    #[test]
    fn test_graph_position_predicates() {
        let f = Fixture::new();
        let root = f.start("kitap");
        assert!(Condition::CurrentStateIs(f.noun).accept(&root));
        // The root has no predecessor.
        assert!(!Condition::PreviousStateIs(f.noun).accept(&root));
        assert!(Condition::PreviousStateIsNot(f.noun).accept(&root));
        assert!(!Condition::PreviousMorphemeIs(&NOUN).accept(&root));

        let p = f.first_group();
        assert!(Condition::CurrentStateIs(f.pnon).accept(&p));
        assert!(Condition::CurrentStateIsNot(f.a3sg).accept(&p));
        assert!(Condition::PreviousStateIs(f.a3sg).accept(&p));
        assert!(!Condition::PreviousStateIsNot(f.a3sg).accept(&p));
        assert!(Condition::PreviousStateIsAny(vec![f.noun, f.a3sg]).accept(&p));
        assert!(!Condition::PreviousStateIsAny(vec![f.noun]).accept(&p));
        assert!(Condition::CurrentMorphemeIs(&PNON).accept(&p));
        assert!(Condition::CurrentMorphemeIsAny(vec![&DAT, &PNON]).accept(&p));
        assert!(Condition::PreviousMorphemeIs(&A3SG).accept(&p));
        assert!(Condition::PreviousMorphemeIsAny(vec![&NOUN, &A3SG]).accept(&p));
        assert!(!Condition::PreviousMorphemeIsAny(vec![&NOUN]).accept(&p));
    }

    #[test]
    fn test_consumed_text_predicates() {
        let f = Fixture::new();
        let p = f.first_group();
        assert!(!Condition::HasAnySuffixSurface.accept(&p));
        assert!(Condition::HasTail.accept(&p));
        assert!(!Condition::HasNoTail.accept(&p));
        assert!(Condition::HasTailSequence(vec![&A3SG, &PNON]).accept(&p));
        assert!(Condition::HasTailSequence(vec![&NOUN, &A3SG, &PNON]).accept(&p));
        assert!(!Condition::HasTailSequence(vec![&NOUN, &PNON]).accept(&p));
        assert!(!Condition::HasTailSequence(vec![&NOUN, &NOUN, &A3SG, &PNON]).accept(&p));

        let d = f.derived();
        assert!(Condition::HasAnySuffixSurface.accept(&d));
        assert!(Condition::HasNoTail.accept(&d));
        assert!(Condition::ContainsMorphemeSequence(vec![&PNON, &NESS, &NOUN]).accept(&d));
        assert!(!Condition::ContainsMorphemeSequence(vec![&NESS, &A3SG]).accept(&d));
        assert!(!Condition::ContainsMorphemeSequence(vec![]).accept(&d));
        assert!(Condition::ContainsMorpheme(vec![&NESS]).accept(&d));
        assert!(!Condition::ContainsMorpheme(vec![&ACC, &GEN]).accept(&d));
    }

    #[test]
    fn test_derivation_predicates() {
        let f = Fixture::new();
        let p = f.first_group();
        assert!(!Condition::HasDerivation.accept(&p));
        assert!(!Condition::LastDerivationIs(f.ness).accept(&p));
        assert!(Condition::NoSurfaceAfterDerivation.accept(&p));
        assert!(Condition::CurrentGroupContainsAny(vec![f.a3sg]).accept(&p));
        // The first group includes the root.
        assert!(Condition::CurrentGroupContainsAny(vec![f.noun]).accept(&p));
        assert!(!Condition::CurrentGroupContainsAny(vec![f.dat]).accept(&p));

        let ness = f.step(&p, "lığ", f.ness);
        assert!(Condition::HasDerivation.accept(&ness));
        assert!(Condition::LastDerivationIs(f.ness).accept(&ness));
        assert!(Condition::LastDerivationIsAny(vec![f.dat, f.ness]).accept(&ness));
        assert!(Condition::NoSurfaceAfterDerivation.accept(&ness));

        let d = f.derived();
        assert!(!Condition::NoSurfaceAfterDerivation.accept(&d));
        assert!(Condition::CurrentGroupContainsAny(vec![f.dat]).accept(&d));
        assert!(Condition::CurrentGroupContainsAny(vec![f.noun]).accept(&d));
        // The derivation that opened the group belongs to it.
        assert!(Condition::CurrentGroupContainsAny(vec![f.ness]).accept(&d));
    }

    #[test]
    fn test_previous_group_reaches_the_root() {
        let f = Fixture::new();
        let d = f.derived();
        assert!(Condition::PreviousGroupContains(vec![f.noun]).accept(&d));
        assert!(Condition::PreviousGroupContains(vec![f.a3sg]).accept(&d));
        assert!(Condition::PreviousGroupContains(vec![f.pnon]).accept(&d));
        assert!(!Condition::PreviousGroupContains(vec![f.ness]).accept(&d));
        assert!(!Condition::PreviousGroupContains(vec![f.dat]).accept(&d));
        assert!(Condition::PreviousGroupContainsMorpheme(vec![&NOUN]).accept(&d));
        assert!(Condition::PreviousGroupContainsMorpheme(vec![&PNON]).accept(&d));
        assert!(!Condition::PreviousGroupContainsMorpheme(vec![&DAT]).accept(&d));

        // Without a derivation there is no previous group.
        let p = f.first_group();
        assert!(!Condition::PreviousGroupContains(vec![f.noun]).accept(&p));
        assert!(!Condition::PreviousGroupContainsMorpheme(vec![&NOUN]).accept(&p));
    }

    #[test]
    fn test_composition_over_paths() {
        let f = Fixture::new();
        let p = f.first_group();
        assert!(Condition::always().accept(&p));
        assert!(Condition::HasTail.and(Condition::CurrentStateIs(f.pnon)).accept(&p));
        assert!(!Condition::HasTail.and(Condition::HasNoTail).accept(&p));
        assert!(Condition::HasNoTail.or(Condition::HasTail).accept(&p));
        assert!(!Condition::HasNoTail.or(Condition::HasDerivation).accept(&p));
        assert!(Condition::HasTail.and_not(Condition::HasDerivation).accept(&p));
        assert!(Condition::HasNoTail.or_not(Condition::HasDerivation).accept(&p));
        assert!(!(!Condition::HasTail).accept(&p));
    }
}
