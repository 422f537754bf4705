// Morphotactics graph: grammar states and the suffix transitions between
// them, stored in flat vectors and addressed by index.

pub mod morpheme;
pub mod stem;
pub mod template;
pub mod turkish;

use std::fmt;

use crate::attributes::PhoneticAttributes;
use crate::condition::Condition;
use crate::error::GrammarError;
use crate::path::SearchPath;

use morpheme::Morpheme;
use template::SuffixTemplate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransitionId(pub usize);

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct MorphemeState {
    pub id: StateId,
    pub name: &'static str,
    pub morpheme: &'static Morpheme,
    /// A path with no tail may end here.
    pub terminal: bool,
    /// Entering this state opens a new inflectional group.
    pub derivative: bool,
    pub outgoing: Vec<TransitionId>,
}

#[derive(Debug, Clone)]
pub struct SuffixTransition {
    pub from: StateId,
    pub to: StateId,
    pub template: SuffixTemplate,
    pub condition: Condition,
}

impl SuffixTransition {
    pub fn has_surface_form(&self) -> bool {
        !self.template.is_empty()
    }

    pub fn can_pass(&self, path: &SearchPath) -> bool {
        self.condition.accept(path)
    }

    /// Surface of this suffix after text with the given attributes.
    pub fn generate_surface(&self, attributes: PhoneticAttributes) -> String {
        self.template.generate(attributes)
    }
}

#[derive(Debug, Default)]
pub struct MorphotacticsGraph {
    states: Vec<MorphemeState>,
    transitions: Vec<SuffixTransition>,
}

impl MorphotacticsGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state(
        &mut self,
        name: &'static str,
        morpheme: &'static Morpheme,
        terminal: bool,
        derivative: bool,
    ) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(MorphemeState {
            id,
            name,
            morpheme,
            terminal,
            derivative,
            outgoing: Vec::new(),
        });
        id
    }

    /// Adds a suffix transition. The template's implied phonological guard
    /// is joined to `condition`.
    pub fn add(
        &mut self,
        from: StateId,
        to: StateId,
        template: &str,
        condition: Condition,
    ) -> Result<TransitionId, GrammarError> {
        for target in [from, to] {
            if target.0 >= self.states.len() {
                return Err(GrammarError::UnknownState {
                    from: self.name_of(from).to_string(),
                    target: target.0,
                });
            }
        }
        let template = SuffixTemplate::parse(template)?;
        let condition = match template.implied_guard() {
            Some(guard) => {
                let guard = Condition::not_have(guard);
                match condition {
                    Condition::Combined { ref conditions, .. } if conditions.is_empty() => guard,
                    condition => guard.and(condition),
                }
            }
            None => condition,
        };

        let id = TransitionId(self.transitions.len());
        self.transitions.push(SuffixTransition {
            from,
            to,
            template,
            condition,
        });
        self.states[from.0].outgoing.push(id);
        Ok(id)
    }

    pub fn add_empty(
        &mut self,
        from: StateId,
        to: StateId,
        condition: Condition,
    ) -> Result<TransitionId, GrammarError> {
        self.add(from, to, "", condition)
    }

    pub fn state(&self, id: StateId) -> &MorphemeState {
        &self.states[id.0]
    }

    pub fn transition(&self, id: TransitionId) -> &SuffixTransition {
        &self.transitions[id.0]
    }

    /// Outgoing transitions of a state in insertion order.
    pub fn outgoing(&self, id: StateId) -> impl Iterator<Item = &SuffixTransition> {
        self.states[id.0]
            .outgoing
            .iter()
            .map(move |t| &self.transitions[t.0])
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    pub fn states(&self) -> impl Iterator<Item = &MorphemeState> {
        self.states.iter()
    }

    fn name_of(&self, id: StateId) -> &'static str {
        self.states.get(id.0).map_or("?", |s| s.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::PhoneticAttribute;

    #[test]
    fn test_add_transitions() {
        let mut graph = MorphotacticsGraph::new();
        let noun = graph.add_state("noun_S", &morpheme::NOUN, false, false);
        let pl = graph.add_state("a3pl_S", &morpheme::A3PL, true, false);
        let sg = graph.add_state("a3sg_S", &morpheme::A3SG, true, false);
        graph.add(noun, pl, "lAr", Condition::always()).unwrap();
        graph.add_empty(noun, sg, Condition::always()).unwrap();

        assert_eq!(graph.state_count(), 3);
        assert_eq!(graph.transition_count(), 2);
        let out: Vec<_> = graph.outgoing(noun).collect();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].to, pl);
        assert!(out[0].has_surface_form());
        assert!(!out[1].has_surface_form());
        assert_eq!(graph.outgoing(pl).count(), 0);
    }

    #[test]
    fn test_implied_guard_is_joined() {
        let mut graph = MorphotacticsGraph::new();
        let a = graph.add_state("a", &morpheme::NOUN, false, false);
        let b = graph.add_state("b", &morpheme::DAT, true, false);

        let t = graph.add(a, b, "+yA", Condition::always()).unwrap();
        assert_eq!(
            graph.transition(t).condition,
            Condition::not_have(PhoneticAttribute::ExpectsConsonant)
        );

        let t = graph.add(a, b, "lAr", Condition::HasTail).unwrap();
        assert_eq!(graph.transition(t).condition.len(), 2);

        let t = graph.add_empty(a, b, Condition::HasTail).unwrap();
        assert_eq!(graph.transition(t).condition, Condition::HasTail);
    }

    #[test]
    fn test_bad_transitions() {
        let mut graph = MorphotacticsGraph::new();
        let a = graph.add_state("a", &morpheme::NOUN, false, false);
        assert!(matches!(
            graph.add(a, StateId(7), "lAr", Condition::always()),
            Err(GrammarError::UnknownState { target: 7, .. })
        ));
        assert!(matches!(
            graph.add(a, a, "l+", Condition::always()),
            Err(GrammarError::BadTemplate { .. })
        ));
    }
}
