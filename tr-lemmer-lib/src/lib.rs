pub mod alphabet;
pub mod analysis;
pub mod analyzer;
pub mod attributes;
pub mod condition;
pub mod error;
pub mod lexicon;
pub mod morphotactics;
pub mod output;
pub mod path;
pub mod phonetics;
pub mod sentence;
pub mod types;

pub use analysis::SingleAnalysis;
pub use analyzer::{AnalyzerConfig, RuleBasedAnalyzer};
pub use error::{Error, Result};
pub use lexicon::{DictionaryItem, Lexicon};
pub use morphotactics::turkish::TurkishMorphotactics;
pub use types::{AnalysisReport, SentenceAnalysis, WordAnalysis, WordLemmas};
