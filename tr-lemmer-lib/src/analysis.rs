// Accepted analyses, built from terminal search paths.

use std::fmt;
use std::sync::Arc;

use crate::attributes::RootAttribute;
use crate::lexicon::DictionaryItem;
use crate::morphotactics::morpheme::{self, Morpheme};
use crate::path::SearchPath;

/// A morpheme with the text it took in the analyzed word.
#[derive(Debug, Clone, PartialEq)]
pub struct MorphemeData {
    pub morpheme: &'static Morpheme,
    pub surface: String,
}

/// One complete analysis of a word.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleAnalysis {
    item: Arc<DictionaryItem>,
    morphemes: Vec<MorphemeData>,
    group_boundaries: Vec<usize>,
}

impl SingleAnalysis {
    /// The first morpheme is the root with the stem surface. Nominative case
    /// and the empty possessive are left out.
    pub fn from_path(path: &SearchPath) -> Self {
        let morphemes: Vec<MorphemeData> = path
            .transitions()
            .into_iter()
            .filter(|t| t.morpheme != &morpheme::NOM && t.morpheme != &morpheme::PNON)
            .map(|t| MorphemeData {
                morpheme: t.morpheme,
                surface: t.surface.clone(),
            })
            .collect();

        let mut group_boundaries = vec![0];
        group_boundaries.extend(
            morphemes
                .iter()
                .enumerate()
                .filter(|(_, m)| m.morpheme.derivational)
                .map(|(i, _)| i),
        );

        // Synthesized compound roots report the compound they stand for.
        let item = path.dict_item();
        let item = match &item.reference_item {
            Some(reference) if item.has_attribute(RootAttribute::Dummy) => Arc::clone(reference),
            _ => Arc::clone(item),
        };

        Self {
            item,
            morphemes,
            group_boundaries,
        }
    }

    pub fn item(&self) -> &Arc<DictionaryItem> {
        &self.item
    }

    pub fn morphemes(&self) -> &[MorphemeData] {
        &self.morphemes
    }

    pub fn group_boundaries(&self) -> &[usize] {
        &self.group_boundaries
    }

    /// Surface of the stem, possibly modified (kitab for kitaba).
    pub fn stem(&self) -> &str {
        self.morphemes.first().map_or("", |m| m.surface.as_str())
    }

    pub fn group_count(&self) -> usize {
        self.group_boundaries.len()
    }

    /// Morphemes of the `index`th inflectional group.
    pub fn group(&self, index: usize) -> &[MorphemeData] {
        let Some(&start) = self.group_boundaries.get(index) else {
            return &[];
        };
        let end = self
            .group_boundaries
            .get(index + 1)
            .copied()
            .unwrap_or(self.morphemes.len());
        &self.morphemes[start..end]
    }

    pub fn contains_morpheme(&self, morpheme: &Morpheme) -> bool {
        self.morphemes.iter().any(|m| m.morpheme == morpheme)
    }

    /// All consumed text: equals the analyzed word.
    pub fn surface(&self) -> String {
        self.morphemes.iter().map(|m| m.surface.as_str()).collect()
    }
}

impl fmt::Display for SingleAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::output::format_lexical(self))
    }
}
