// Error types for lexicon loading, grammar construction and configuration.
//
// Per-word analysis never fails: an unanalyzable word yields no analyses.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A problem in lexicon text or in building items from it.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("line {line:?}: {message}")]
    MalformedLine { line: String, message: String },

    #[error("line {line:?}: unknown metadata key {key:?}")]
    UnknownMetadataKey { line: String, key: String },

    #[error("line {line:?}: unknown part of speech {pos:?}")]
    UnknownPos { line: String, pos: String },

    #[error("line {line:?}: unknown root attribute {attribute:?}")]
    UnknownAttribute { line: String, attribute: String },

    #[error("line {line:?}: index {value:?} is not a number")]
    BadIndex { line: String, value: String },

    #[error("cannot voice the last letter of {root:?}")]
    CannotVoice { root: String },

    #[error("reference {reference:?} of {lemma:?} is not in the lexicon")]
    UnknownReference { lemma: String, reference: String },

    #[error("cannot read dictionary {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LexiconError {
    pub(crate) fn malformed(line: &str, message: impl Into<String>) -> Self {
        LexiconError::MalformedLine {
            line: line.to_string(),
            message: message.into(),
        }
    }
}

/// Invalid grammar data. Raised only while the morphotactics graph is built.
#[derive(Error, Debug, PartialEq)]
pub enum GrammarError {
    #[error("template {template:?}: {message}")]
    BadTemplate { template: String, message: String },

    #[error("transition from {from} refers to unknown state #{target}")]
    UnknownState { from: String, target: usize },
}

/// A search path extension that would break the consumed-plus-tail invariant.
#[derive(Error, Debug, PartialEq)]
pub enum PathError {
    #[error("surface {surface:?} is not a prefix of remaining {tail:?}")]
    SurfaceNotPrefix { surface: String, tail: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Invalid(String),
}

/// Any error the library can return.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
