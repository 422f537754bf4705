// Search paths: immutable snapshots of an in-progress analysis.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::attributes::PhoneticAttributes;
use crate::error::PathError;
use crate::lexicon::DictionaryItem;
use crate::morphotactics::morpheme::Morpheme;
use crate::morphotactics::stem::StemTransition;
use crate::morphotactics::{MorphemeState, StateId};

/// A transition taken by a path, with the text it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceTransition {
    pub surface: String,
    pub state: StateId,
    pub state_name: &'static str,
    pub morpheme: &'static Morpheme,
    pub derivative: bool,
}

impl SurfaceTransition {
    fn entering(state: &MorphemeState, surface: &str) -> Self {
        Self {
            surface: surface.to_string(),
            state: state.id,
            state_name: state.name,
            morpheme: state.morpheme,
            derivative: state.derivative,
        }
    }
}

// Transition history as a persistent list, newest first. Extending a path
// shares its whole history with the path it came from.
#[derive(Debug)]
struct Link {
    transition: SurfaceTransition,
    previous: Option<Arc<Link>>,
}

/// Iterates a path's transitions from the newest back to the stem.
pub struct Backwards<'a> {
    next: Option<&'a Link>,
}

impl<'a> Iterator for Backwards<'a> {
    type Item = &'a SurfaceTransition;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.next?;
        self.next = link.previous.as_deref();
        Some(&link.transition)
    }
}

#[derive(Debug, Clone)]
pub struct SearchPath {
    word: Arc<str>,
    consumed: usize,
    stem: Arc<StemTransition>,
    current_state: StateId,
    terminal: bool,
    attributes: PhoneticAttributes,
    last: Arc<Link>,
    len: usize,
    contains_derivation: bool,
    contains_suffix_with_surface: bool,
}

impl SearchPath {
    /// A path that has consumed only the stem. The first transition records
    /// the root state with the stem surface.
    pub fn initial(
        stem: Arc<StemTransition>,
        word: Arc<str>,
        root: &MorphemeState,
    ) -> Result<Self, PathError> {
        if !word.starts_with(stem.surface.as_str()) {
            return Err(PathError::SurfaceNotPrefix {
                surface: stem.surface.clone(),
                tail: word.to_string(),
            });
        }
        Ok(Self {
            consumed: stem.surface.len(),
            current_state: root.id,
            terminal: root.terminal,
            attributes: stem.attributes,
            last: Arc::new(Link {
                transition: SurfaceTransition::entering(root, &stem.surface),
                previous: None,
            }),
            len: 1,
            contains_derivation: false,
            contains_suffix_with_surface: false,
            word,
            stem,
        })
    }

    /// A new path that consumed `surface` and moved to `target`. The
    /// receiver is left untouched.
    pub fn extend(
        &self,
        surface: &str,
        target: &MorphemeState,
        attributes: PhoneticAttributes,
    ) -> Result<Self, PathError> {
        if !self.tail().starts_with(surface) {
            return Err(PathError::SurfaceNotPrefix {
                surface: surface.to_string(),
                tail: self.tail().to_string(),
            });
        }
        Ok(Self {
            word: Arc::clone(&self.word),
            consumed: self.consumed + surface.len(),
            stem: Arc::clone(&self.stem),
            current_state: target.id,
            terminal: target.terminal,
            attributes,
            last: Arc::new(Link {
                transition: SurfaceTransition::entering(target, surface),
                previous: Some(Arc::clone(&self.last)),
            }),
            len: self.len + 1,
            contains_derivation: self.contains_derivation || target.derivative,
            contains_suffix_with_surface: self.contains_suffix_with_surface || !surface.is_empty(),
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Input not consumed yet.
    pub fn tail(&self) -> &str {
        &self.word[self.consumed..]
    }

    pub fn stem_transition(&self) -> &StemTransition {
        &self.stem
    }

    pub fn dict_item(&self) -> &Arc<DictionaryItem> {
        &self.stem.item
    }

    pub fn current_state(&self) -> StateId {
        self.current_state
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn attributes(&self) -> PhoneticAttributes {
        self.attributes
    }

    pub fn contains_derivation(&self) -> bool {
        self.contains_derivation
    }

    /// Whether any suffix after the stem produced text.
    pub fn contains_suffix_with_surface(&self) -> bool {
        self.contains_suffix_with_surface
    }

    /// Number of transitions, the stem included.
    pub fn transition_count(&self) -> usize {
        self.len
    }

    pub fn last_transition(&self) -> &SurfaceTransition {
        &self.last.transition
    }

    /// The transition before the last one; for a one-suffix path this is the
    /// root transition, for a bare stem there is none.
    pub fn previous_transition(&self) -> Option<&SurfaceTransition> {
        self.last.previous.as_deref().map(|l| &l.transition)
    }

    /// Every transition newest first, ending with the root transition. Group
    /// predicates (current and previous inflectional group) and morpheme
    /// sequence checks walk this, so the root counts as part of the first
    /// group.
    pub fn backwards(&self) -> Backwards<'_> {
        Backwards {
            next: Some(&self.last),
        }
    }

    /// Suffix transitions newest first, the root transition excluded. Used
    /// where only suffixes matter: the last derivation and whether a suffix
    /// since it produced text.
    pub fn suffixes_backwards(&self) -> impl Iterator<Item = &SurfaceTransition> {
        self.backwards().take(self.len - 1)
    }

    /// Transitions in the order they were taken, stem first.
    pub fn transitions(&self) -> Vec<&SurfaceTransition> {
        let mut all: Vec<_> = self.backwards().collect();
        all.reverse();
        all
    }

    /// Whether some state occurs more than `max` times in the history.
    pub fn repeats_state(&self, max: usize) -> bool {
        let mut counts: HashMap<StateId, usize> = HashMap::new();
        for t in self.backwards() {
            let n = counts.entry(t.state).or_insert(0);
            *n += 1;
            if *n > max {
                return true;
            }
        }
        false
    }
}

impl fmt::Display for SearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})(", self.dict_item().id)?;
        let transitions = self.transitions();
        for (i, t) in transitions.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            if !t.surface.is_empty() {
                write!(f, "{}:", t.surface)?;
            }
            f.write_str(t.state_name)?;
        }
        write!(f, ")[{}]", self.tail())
    }
}
