// Stem transitions: the entry edges from dictionary roots into the graph.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::alphabet;
use crate::attributes::{PhoneticAttribute, PhoneticAttributes, RootAttribute};
use crate::error::LexiconError;
use crate::lexicon::{DictionaryItem, Lexicon};
use crate::phonetics;

use super::StateId;

/// A root surface with the attributes it hands to the first suffix.
#[derive(Debug, Clone, PartialEq)]
pub struct StemTransition {
    pub surface: String,
    pub item: Arc<DictionaryItem>,
    pub attributes: PhoneticAttributes,
    pub state: StateId,
}

// Personal pronouns whose dative changes the stem vowel (bana, sana).
const MODIFIED_PRONOUNS: [(&str, &str); 2] = [("ben_Pron_Pers", "ban"), ("sen_Pron_Pers", "san")];

const MODIFIERS: [RootAttribute; 5] = [
    RootAttribute::Voicing,
    RootAttribute::Doubling,
    RootAttribute::LastVowelDrop,
    RootAttribute::InverseHarmony,
    RootAttribute::ProgressiveVowelDrop,
];

/// All stem transitions of a lexicon, indexed by surface.
#[derive(Debug, Default)]
pub struct StemTransitions {
    by_surface: HashMap<String, Vec<Arc<StemTransition>>>,
    count: usize,
}

impl StemTransitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds transitions for every lexicon item. `root_state` picks the
    /// graph state a stem with the given attributes enters.
    pub fn build<F>(lexicon: &Lexicon, root_state: F) -> Result<Self, LexiconError>
    where
        F: Fn(&DictionaryItem, PhoneticAttributes) -> StateId,
    {
        let mut stems = Self::new();
        for item in lexicon.iter() {
            stems.add_item(item, &root_state)?;
        }
        debug!(stems = stems.count, surfaces = stems.by_surface.len(), "built stem transitions");
        Ok(stems)
    }

    pub fn add_item<F>(&mut self, item: &Arc<DictionaryItem>, root_state: &F) -> Result<(), LexiconError>
    where
        F: Fn(&DictionaryItem, PhoneticAttributes) -> StateId,
    {
        for stem in generate(item, root_state)? {
            self.count += 1;
            self.by_surface
                .entry(stem.surface.clone())
                .or_default()
                .push(Arc::new(stem));
        }
        Ok(())
    }

    /// Every transition whose surface is a prefix of `word`, shortest first.
    pub fn prefix_matches(&self, word: &str) -> Vec<Arc<StemTransition>> {
        let ends = word
            .char_indices()
            .skip(1)
            .map(|(i, _)| i)
            .chain((!word.is_empty()).then_some(word.len()));
        let mut matches = Vec::new();
        for end in ends {
            if let Some(stems) = self.by_surface.get(&word[..end]) {
                matches.extend(stems.iter().cloned());
            }
        }
        matches
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Stem transitions for one item: the root itself, plus a modified surface
/// when a root attribute changes the stem before some suffixes.
pub fn generate<F>(item: &Arc<DictionaryItem>, root_state: &F) -> Result<Vec<StemTransition>, LexiconError>
where
    F: Fn(&DictionaryItem, PhoneticAttributes) -> StateId,
{
    let make = |surface: String, attributes: PhoneticAttributes| StemTransition {
        state: root_state(item.as_ref(), attributes),
        surface,
        item: Arc::clone(item),
        attributes,
    };

    if let Some((_, modified)) = MODIFIED_PRONOUNS.iter().find(|(id, _)| item.id == *id) {
        let original = phonetics::of_word(&item.root).with(PhoneticAttribute::UnModifiedPronoun);
        let changed = phonetics::of_word(modified)
            .with(PhoneticAttribute::ModifiedPronoun)
            .with(PhoneticAttribute::CannotTerminate);
        return Ok(vec![
            make(item.root.clone(), original),
            make(modified.to_string(), changed),
        ]);
    }

    let mut original_attrs = phonetics::of_word(&item.pronunciation);
    if !MODIFIERS.iter().any(|&a| item.has_attribute(a)) {
        return Ok(vec![make(item.root.clone(), original_attrs)]);
    }

    let mut modified: Vec<char> = item.root.chars().collect();
    let mut modified_attrs = original_attrs;

    use PhoneticAttribute::*;
    for attribute in item.attributes.iter() {
        match attribute {
            RootAttribute::Voicing => {
                let Some(&last) = modified.last() else { continue };
                let before_last = modified.len().checked_sub(2).map(|i| modified[i]);
                let voiced = if last == 'k' && before_last == Some('n') {
                    'g'
                } else {
                    alphabet::voice(last)
                };
                if voiced == last {
                    return Err(LexiconError::CannotVoice {
                        root: item.root.clone(),
                    });
                }
                if let Some(l) = modified.last_mut() {
                    *l = voiced;
                }
                modified_attrs.remove(LastLetterVoicelessStop);
                original_attrs.insert(ExpectsConsonant);
                modified_attrs.insert(ExpectsVowel);
                modified_attrs.insert(CannotTerminate);
            }
            RootAttribute::Doubling => {
                if let Some(&last) = modified.last() {
                    modified.push(last);
                }
                original_attrs.insert(ExpectsConsonant);
                modified_attrs.insert(ExpectsVowel);
                modified_attrs.insert(CannotTerminate);
            }
            RootAttribute::LastVowelDrop => {
                let Some(&last) = modified.last() else { continue };
                if alphabet::is_vowel(last) {
                    modified.pop();
                    modified_attrs.insert(ExpectsConsonant);
                    modified_attrs.insert(CannotTerminate);
                } else if modified.len() >= 2 {
                    modified.remove(modified.len() - 2);
                    if item.primary_pos == crate::types::PrimaryPos::Verb {
                        modified_attrs.insert(LastLetterDropped);
                    } else {
                        original_attrs.insert(ExpectsConsonant);
                    }
                    modified_attrs.insert(ExpectsVowel);
                    modified_attrs.insert(CannotTerminate);
                }
            }
            RootAttribute::InverseHarmony => {
                for attrs in [&mut original_attrs, &mut modified_attrs] {
                    attrs.insert(LastVowelFrontal);
                    attrs.remove(LastVowelBack);
                }
            }
            RootAttribute::ProgressiveVowelDrop => {
                if modified.len() > 1 {
                    modified.pop();
                    let dropped: String = modified.iter().collect();
                    if alphabet::contains_vowel(&dropped) {
                        modified_attrs = phonetics::of_word(&dropped);
                    }
                    modified_attrs.insert(LastLetterDropped);
                }
            }
            _ => {}
        }
    }

    let original = make(item.root.clone(), original_attrs);
    let modified = make(modified.into_iter().collect(), modified_attrs);
    if original == modified {
        Ok(vec![original])
    } else {
        Ok(vec![original, modified])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stems_of(line: &str) -> Vec<StemTransition> {
        let lexicon = Lexicon::from_lines([line]).unwrap();
        let item = lexicon.iter().next().unwrap().clone();
        generate(&item, &|_: &DictionaryItem, _: PhoneticAttributes| StateId(0)).unwrap()
    }

    fn surfaces(stems: &[StemTransition]) -> Vec<&str> {
        stems.iter().map(|s| s.surface.as_str()).collect()
    }

    #[test]
    fn test_plain_root() {
        let stems = stems_of("elma");
        assert_eq!(surfaces(&stems), ["elma"]);
        assert!(stems[0].attributes.contains(PhoneticAttribute::LastLetterVowel));
    }

    #[test]
    fn test_voicing() {
        let stems = stems_of("kitap");
        assert_eq!(surfaces(&stems), ["kitap", "kitab"]);
        assert!(stems[0].attributes.contains(PhoneticAttribute::ExpectsConsonant));
        assert!(stems[1].attributes.contains(PhoneticAttribute::ExpectsVowel));
        assert!(stems[1].attributes.contains(PhoneticAttribute::CannotTerminate));
        assert!(!stems[1].attributes.contains(PhoneticAttribute::LastLetterVoicelessStop));

        assert_eq!(surfaces(&stems_of("renk")), ["renk", "reng"]);
    }

    #[test]
    fn test_cannot_voice() {
        let lexicon = Lexicon::from_lines(["kalem [A:Voicing]"]).unwrap();
        let item = lexicon.iter().next().unwrap().clone();
        let result = generate(&item, &|_: &DictionaryItem, _: PhoneticAttributes| StateId(0));
        assert!(matches!(result, Err(LexiconError::CannotVoice { .. })));
    }

    #[test]
    fn test_doubling_and_vowel_drop() {
        assert_eq!(surfaces(&stems_of("hak [A:Doubling]")), ["hak", "hakk"]);
        let stems = stems_of("burun [A:LastVowelDrop]");
        assert_eq!(surfaces(&stems), ["burun", "burn"]);
        assert!(stems[0].attributes.contains(PhoneticAttribute::ExpectsConsonant));
        assert!(stems[1].attributes.contains(PhoneticAttribute::CannotTerminate));
    }

    #[test]
    fn test_inverse_harmony_keeps_one_stem() {
        let stems = stems_of("saat [A:InverseHarmony]");
        assert_eq!(surfaces(&stems), ["saat"]);
        assert!(stems[0].attributes.contains(PhoneticAttribute::LastVowelFrontal));
        assert!(!stems[0].attributes.contains(PhoneticAttribute::LastVowelBack));
    }

    #[test]
    fn test_progressive_vowel_drop() {
        let stems = stems_of("aramak");
        assert_eq!(surfaces(&stems), ["ara", "ar"]);
        assert!(stems[1].attributes.contains(PhoneticAttribute::LastLetterDropped));
        assert!(stems[1].attributes.contains(PhoneticAttribute::LastVowelBack));
    }

    #[test]
    fn test_modified_pronouns() {
        let stems = stems_of("ben [P:Pron,Pers]");
        assert_eq!(surfaces(&stems), ["ben", "ban"]);
        assert!(stems[1].attributes.contains(PhoneticAttribute::ModifiedPronoun));
        assert!(stems[1].attributes.contains(PhoneticAttribute::CannotTerminate));
    }

    #[test]
    fn test_prefix_matches() {
        let lexicon = Lexicon::from_lines(["kitap", "kit", "elma"]).unwrap();
        let stems = StemTransitions::build(&lexicon, |_, _| StateId(0)).unwrap();
        assert_eq!(stems.len(), 4);
        let found: Vec<_> = stems
            .prefix_matches("kitaba")
            .iter()
            .map(|s| s.surface.clone())
            .collect();
        assert_eq!(found, ["kit", "kitab"]);
        assert!(stems.prefix_matches("armut").is_empty());
        assert!(stems.prefix_matches("").is_empty());
        assert_eq!(stems.prefix_matches("elma").len(), 1);
    }
}
