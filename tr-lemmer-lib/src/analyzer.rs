// Rule-based analyzer: breadth-first search over the morphotactics graph.
//
// Every stem whose surface starts the word seeds a search path. Each round
// extends all open paths by every outgoing transition whose generated
// surface matches the remaining input and whose guard accepts the path.
// Paths with no input left in a terminal state are the analyses.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::analysis::SingleAnalysis;
use crate::attributes::PhoneticAttribute;
use crate::error::{ConfigError, Result};
use crate::lexicon::Lexicon;
use crate::morphotactics::template::TemplateToken;
use crate::morphotactics::turkish::TurkishMorphotactics;
use crate::output;
use crate::path::SearchPath;
use crate::phonetics;
use crate::sentence::{normalize_word, split_sentence};
use crate::types::{SentenceAnalysis, WordAnalysis, WordLemmas};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Search limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Open paths above which cyclic paths are pruned.
    pub prune_threshold: usize,
    /// Most times one state may occur in a path before it is pruned.
    pub max_repeating_state: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            prune_threshold: 30,
            max_repeating_state: 3,
        }
    }
}

impl AnalyzerConfig {
    pub fn from_json_file(path: &Path) -> std::result::Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.max_repeating_state == 0 {
            return Err(ConfigError::Invalid("max_repeating_state must be at least 1".to_string()));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub struct RuleBasedAnalyzer {
    morphotactics: TurkishMorphotactics,
    config: AnalyzerConfig,
}

impl RuleBasedAnalyzer {
    pub fn new(morphotactics: TurkishMorphotactics, config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { morphotactics, config })
    }

    /// Analyzer over `lexicon` with default limits.
    pub fn from_lexicon(lexicon: Lexicon) -> Result<Self> {
        Self::new(TurkishMorphotactics::new(Arc::new(lexicon))?, AnalyzerConfig::default())
    }

    /// Analyzer over the bundled lexicon with default limits.
    pub fn with_default_lexicon() -> Result<Self> {
        Self::from_lexicon(Lexicon::default_lexicon()?)
    }

    pub fn morphotactics(&self) -> &TurkishMorphotactics {
        &self.morphotactics
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// All analyses of an already normalized word. Empty when the word
    /// cannot be analyzed.
    pub fn analyze(&self, word: &str) -> Vec<SingleAnalysis> {
        let word: Arc<str> = Arc::from(word);
        let graph = self.morphotactics.graph();

        let mut paths = Vec::new();
        for stem in self.morphotactics.prefix_matches(&word) {
            let root = graph.state(stem.state);
            match SearchPath::initial(stem, Arc::clone(&word), root) {
                Ok(path) => paths.push(path),
                Err(e) => warn!(word = %word, error = %e, "discarded stem"),
            }
        }

        let results = self.search(paths);
        debug!(word = %word, analyses = results.len(), "analyzed");
        results.iter().map(SingleAnalysis::from_path).collect()
    }

    fn search(&self, mut current: Vec<SearchPath>) -> Vec<SearchPath> {
        let mut results = Vec::new();
        while !current.is_empty() {
            if current.len() > self.config.prune_threshold {
                current = self.prune_cyclic_paths(current);
            }
            let mut next = Vec::new();
            for path in current {
                if path.tail().is_empty()
                    && path.is_terminal()
                    && !path.attributes().contains(PhoneticAttribute::CannotTerminate)
                {
                    debug!(path = %path, "accepted");
                    results.push(path);
                    continue;
                }
                next.extend(self.advance(&path));
            }
            current = next;
        }
        results
    }

    /// Paths reachable from `path` by one transition.
    fn advance(&self, path: &SearchPath) -> Vec<SearchPath> {
        let graph = self.morphotactics.graph();
        let mut paths = Vec::new();

        for transition in graph.outgoing(path.current_state()) {
            if path.tail().is_empty() && transition.has_surface_form() {
                continue;
            }

            let surface = transition.generate_surface(path.attributes());
            if !path.tail().starts_with(&surface) {
                trace!(path = %path, surface = %surface, "surface mismatch");
                continue;
            }

            if !transition.can_pass(path) {
                trace!(path = %path, to = graph.state(transition.to).name, "guard rejected");
                continue;
            }

            let target = graph.state(transition.to);
            let attributes = if !transition.has_surface_form() {
                path.attributes()
            } else {
                let mut attributes = if path.tail() == surface {
                    path.attributes()
                } else {
                    phonetics::compute(&surface, path.attributes())
                };
                attributes.remove(PhoneticAttribute::CannotTerminate);
                match transition.template.last_token() {
                    Some(TemplateToken::LastVoiced(_)) => {
                        attributes.insert(PhoneticAttribute::ExpectsConsonant);
                    }
                    Some(TemplateToken::LastNotVoiced(_)) => {
                        attributes.insert(PhoneticAttribute::ExpectsVowel);
                        attributes.insert(PhoneticAttribute::CannotTerminate);
                    }
                    _ => {}
                }
                attributes
            };

            match path.extend(&surface, target, attributes) {
                Ok(next) => paths.push(next),
                Err(e) => warn!(path = %path, error = %e, "discarded extension"),
            }
        }
        paths
    }

    fn prune_cyclic_paths(&self, paths: Vec<SearchPath>) -> Vec<SearchPath> {
        let before = paths.len();
        let kept: Vec<_> = paths
            .into_iter()
            .filter(|p| !p.repeats_state(self.config.max_repeating_state))
            .collect();
        debug!(before, after = kept.len(), "pruned cyclic paths");
        kept
    }

    // -----------------------------------------------------------------------
    // Word, sentence and lemma helpers
    // -----------------------------------------------------------------------

    /// Normalizes and analyzes one token.
    pub fn analyze_word(&self, word: &str) -> WordAnalysis {
        let analyses = self.analyze(&normalize_word(word));
        WordAnalysis {
            word: word.to_string(),
            analyses: analyses.iter().map(output::to_report).collect(),
        }
    }

    pub fn analyze_sentence(&self, sentence: &str) -> SentenceAnalysis {
        SentenceAnalysis {
            input: sentence.to_string(),
            words: split_sentence(sentence)
                .iter()
                .map(|w| self.analyze_word(w))
                .collect(),
        }
    }

    /// Unique lemmas in analysis order, or the word itself when it cannot
    /// be analyzed.
    pub fn lemmatize_word(&self, word: &str) -> Vec<String> {
        let normalized = normalize_word(word);
        let mut lemmas: Vec<String> = Vec::new();
        for analysis in self.analyze(&normalized) {
            let lemma = &analysis.item().lemma;
            if !lemmas.contains(lemma) {
                lemmas.push(lemma.clone());
            }
        }
        if lemmas.is_empty() {
            lemmas.push(normalized);
        }
        lemmas
    }

    pub fn lemmatize_sentence(&self, sentence: &str) -> Vec<WordLemmas> {
        split_sentence(sentence)
            .into_iter()
            .map(|word| WordLemmas {
                lemmas: self.lemmatize_word(&word),
                word,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(lines: &[&str]) -> RuleBasedAnalyzer {
        RuleBasedAnalyzer::from_lexicon(Lexicon::from_lines(lines.iter().copied()).unwrap()).unwrap()
    }

    fn formatted(a: &RuleBasedAnalyzer, word: &str) -> Vec<String> {
        let mut all: Vec<_> = a.analyze(word).iter().map(output::format_morphemes).collect();
        all.sort();
        all
    }

    #[test]
    fn test_config_defaults() {
        let config: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
        assert_eq!(config.prune_threshold, 30);
        assert_eq!(config.max_repeating_state, 3);
        let config: AnalyzerConfig = serde_json::from_str(r#"{"prune_threshold": 5}"#).unwrap();
        assert_eq!(config.prune_threshold, 5);
        assert_eq!(config.max_repeating_state, 3);
    }

    #[test]
    fn test_config_validation() {
        let config = AnalyzerConfig {
            prune_threshold: 10,
            max_repeating_state: 0,
        };
        assert!(config.validate().is_err());
        assert!(AnalyzerConfig::from_json_file(Path::new("/nonexistent/config.json")).is_err());
    }

    #[test]
    fn test_noun_cases() {
        let a = analyzer(&["ev", "elma", "kitap"]);
        assert_eq!(formatted(&a, "evde"), ["ev:Noun + A3sg + de:Loc"]);
        assert_eq!(formatted(&a, "evden"), ["ev:Noun + A3sg + den:Abl"]);
        assert_eq!(formatted(&a, "elmaya"), ["elma:Noun + A3sg + ya:Dat"]);
        assert_eq!(
            formatted(&a, "elmanın"),
            ["elma:Noun + A3sg + n:P2sg + ın:Gen", "elma:Noun + A3sg + nın:Gen"]
        );
        assert_eq!(formatted(&a, "kitapta"), ["kitap:Noun + A3sg + ta:Loc"]);
        assert_eq!(formatted(&a, "kitap"), ["kitap:Noun + A3sg"]);
        assert_eq!(
            formatted(&a, "kitabı"),
            ["kitab:Noun + A3sg + ı:Acc", "kitab:Noun + A3sg + ı:P3sg"]
        );
    }

    #[test]
    fn test_voicing_blocks_wrong_stem() {
        let a = analyzer(&["kitap"]);
        assert!(a.analyze("kitab").is_empty());
        assert!(a.analyze("kitapa").is_empty());
    }

    #[test]
    fn test_possessives() {
        let a = analyzer(&["ev", "kedi"]);
        assert_eq!(formatted(&a, "evimde"), ["ev:Noun + A3sg + im:P1sg + de:Loc"]);
        assert_eq!(formatted(&a, "kedisine"), ["kedi:Noun + A3sg + si:P3sg + ne:Dat"]);
    }

    #[test]
    fn test_verbs() {
        let a = analyzer(&["gelmek [A:Aorist_I]", "aramak", "yapmak"]);
        assert_eq!(formatted(&a, "geldim"), ["gel:Verb + di:Past + m:A1sg"]);
        assert_eq!(formatted(&a, "geliyor"), ["gel:Verb + iyor:Prog1 + A3sg"]);
        assert_eq!(formatted(&a, "arıyor"), ["ar:Verb + ıyor:Prog1 + A3sg"]);
        assert_eq!(formatted(&a, "gelir"), ["gel:Verb + ir:Aor + A3sg"]);
        assert_eq!(formatted(&a, "yapar"), ["yap:Verb + ar:Aor + A3sg"]);
        assert_eq!(formatted(&a, "gelmez"), ["gel:Verb + me:Neg + z:Aor + A3sg"]);
        assert!(a.analyze("gelmezim").is_empty());
        assert_eq!(formatted(&a, "gelmiyor"), ["gel:Verb + m:Neg + iyor:Prog1 + A3sg"]);
    }

    #[test]
    fn test_cannot_terminate_blocks_bare_modified_stem() {
        let a = analyzer(&["kitap"]);
        // kitab is a stem that must be followed by a vowel.
        assert!(a.analyze("kitabl").is_empty());
    }

    #[test]
    fn test_no_stem() {
        let a = analyzer(&["ev"]);
        assert!(a.analyze("armut").is_empty());
        assert!(a.analyze("").is_empty());
    }

    #[test]
    fn test_pruning_keeps_short_paths() {
        let lexicon = Lexicon::from_lines(["ev"]).unwrap();
        let config = AnalyzerConfig {
            prune_threshold: 0,
            max_repeating_state: 1,
        };
        let a = RuleBasedAnalyzer::new(TurkishMorphotactics::new(Arc::new(lexicon)).unwrap(), config).unwrap();
        assert_eq!(a.analyze("evde").len(), 1);
    }

    #[test]
    fn test_pruning_drops_repeating_paths() {
        let strict = AnalyzerConfig {
            prune_threshold: 0,
            max_repeating_state: 1,
        };
        let morphotactics = || TurkishMorphotactics::new(Arc::new(Lexicon::from_lines(["kitap"]).unwrap())).unwrap();
        // kitap-lık passes through the noun root state twice.
        let a = RuleBasedAnalyzer::new(morphotactics(), strict).unwrap();
        assert!(a.analyze("kitaplık").is_empty());
        let a = RuleBasedAnalyzer::new(morphotactics(), AnalyzerConfig::default()).unwrap();
        assert_eq!(a.analyze("kitaplık").len(), 1);
    }

    #[test]
    fn test_lemmatize() {
        let a = analyzer(&["yaz", "yazmak", "ev"]);
        let mut lemmas = a.lemmatize_word("Yaz");
        lemmas.sort();
        assert_eq!(lemmas, ["yaz", "yazmak"]);
        assert_eq!(a.lemmatize_word("Xyz"), ["xyz"]);

        let sentence = a.lemmatize_sentence("Evde yaz.");
        assert_eq!(sentence.len(), 2);
        assert_eq!(sentence[0].word, "Evde");
        assert_eq!(sentence[0].lemmas, ["ev"]);
    }

    #[test]
    fn test_analyze_sentence() {
        let a = analyzer(&["ev", "Ankara"]);
        let result = a.analyze_sentence("Ankara'da ev!");
        assert_eq!(result.words.len(), 2);
        assert_eq!(result.words[0].word, "Ankara'da");
        assert_eq!(result.words[0].analyses[0].lemma, "Ankara");
        assert_eq!(result.words[1].analyses.len(), 1);
    }
}
