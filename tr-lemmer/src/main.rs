use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tr_lemmer_lib::output::{self, TextFormat};
use tr_lemmer_lib::sentence::{normalize_word, split_sentence};
use tr_lemmer_lib::{AnalyzerConfig, Lexicon, RuleBasedAnalyzer, TurkishMorphotactics};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Morpheme chain with surfaces.
    Default,
    /// Lemma and part of speech, then the morpheme chain.
    Lexical,
    /// Universal Dependencies features.
    Ud,
    /// JSON reports.
    Json,
}

impl Format {
    fn text(self) -> Option<TextFormat> {
        match self {
            Format::Default => Some(TextFormat::Morphemes),
            Format::Lexical => Some(TextFormat::Lexical),
            Format::Ud => Some(TextFormat::Ud),
            Format::Json => None,
        }
    }
}

#[derive(Parser)]
#[command(name = "tr-lemmer", about = "Turkish morphological analyzer")]
struct Cli {
    /// Turkish text to analyze. If omitted, reads lines from stdin.
    input: Option<String>,

    /// Extra lexicon file, added on top of the bundled lexicon. Repeatable.
    #[arg(long = "dictionary", value_name = "FILE")]
    dictionaries: Vec<PathBuf>,

    /// Do not load the bundled lexicon.
    #[arg(long)]
    no_default_lexicon: bool,

    /// Analyzer configuration (JSON).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Open paths above which cyclic paths are pruned.
    #[arg(long)]
    prune_threshold: Option<usize>,

    /// Most times a grammar state may repeat in one path.
    #[arg(long = "max-repeat")]
    max_repeat: Option<usize>,

    /// Print lemmas only.
    #[arg(long)]
    lemmas: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Default)]
    format: Format,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let analyzer = match build_analyzer(&cli) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            error!("{e}");
            eprintln!("tr-lemmer: {e}");
            process::exit(1);
        }
    };

    match cli.input {
        Some(ref text) => process_line(text, &analyzer, &cli),
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(e) => {
                        eprintln!("tr-lemmer: failed to read stdin: {e}");
                        process::exit(1);
                    }
                };
                if !line.trim().is_empty() {
                    process_line(&line, &analyzer, &cli);
                }
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_analyzer(cli: &Cli) -> tr_lemmer_lib::Result<RuleBasedAnalyzer> {
    let mut lexicon = if cli.no_default_lexicon {
        Lexicon::new()
    } else {
        Lexicon::default_lexicon()?
    };
    for path in &cli.dictionaries {
        lexicon.add_file(path)?;
    }

    let mut config = match cli.config {
        Some(ref path) => AnalyzerConfig::from_json_file(path)?,
        None => AnalyzerConfig::default(),
    };
    if let Some(n) = cli.prune_threshold {
        config.prune_threshold = n;
    }
    if let Some(n) = cli.max_repeat {
        config.max_repeating_state = n;
    }

    let morphotactics = TurkishMorphotactics::new(Arc::new(lexicon))?;
    RuleBasedAnalyzer::new(morphotactics, config)
}

fn process_line(line: &str, analyzer: &RuleBasedAnalyzer, cli: &Cli) {
    if cli.lemmas {
        let lemmas = analyzer.lemmatize_sentence(line);
        if cli.format == Format::Json {
            print_json(&lemmas, cli.pretty);
        } else {
            println!("{}", output::lemmas_to_text(&lemmas));
        }
        return;
    }

    match cli.format.text() {
        Some(format) => {
            for word in split_sentence(line) {
                let analyses = analyzer.analyze(&normalize_word(&word));
                println!("{}", output::analyses_to_text(&word, &analyses, format));
            }
        }
        None => print_json(&analyzer.analyze_sentence(line), cli.pretty),
    }
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("tr-lemmer: cannot serialize output: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_option() {
        let cli = Cli::try_parse_from(["tr-lemmer", "evde"]).unwrap();
        assert_eq!(cli.format, Format::Default);
        assert_eq!(cli.format.text(), Some(TextFormat::Morphemes));

        let cli = Cli::try_parse_from(["tr-lemmer", "--format", "ud", "evde"]).unwrap();
        assert_eq!(cli.format.text(), Some(TextFormat::Ud));
        let cli = Cli::try_parse_from(["tr-lemmer", "--format", "lexical"]).unwrap();
        assert_eq!(cli.format.text(), Some(TextFormat::Lexical));
        let cli = Cli::try_parse_from(["tr-lemmer", "--format", "json", "--pretty"]).unwrap();
        assert_eq!(cli.format.text(), None);

        assert!(Cli::try_parse_from(["tr-lemmer", "--format", "xml"]).is_err());
    }
}
