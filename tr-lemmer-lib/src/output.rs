// Output formatting for analyses.

use crate::analysis::SingleAnalysis;
use crate::types::*;

/// Plain-text renderings of one analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Morpheme chain with surfaces.
    #[default]
    Morphemes,
    /// `[lemma:Pos]` followed by the morpheme chain.
    Lexical,
    /// Universal Dependencies feature string.
    Ud,
}

impl TextFormat {
    pub fn render(self, analysis: &SingleAnalysis) -> String {
        match self {
            TextFormat::Morphemes => format_morphemes(analysis),
            TextFormat::Lexical => format_lexical(analysis),
            TextFormat::Ud => format_ud(analysis),
        }
    }
}

/// Morpheme chain with surfaces.
///
/// Format:
///   Inflections:  `kitab:Noun + A3sg + a:Dat` (` + ` between morphemes)
///   Derivations:  `kitap:Noun + A3sg | lık:Ness→Noun + A3sg`
///   Surfaces are omitted for morphemes that took no text.
pub fn format_morphemes(analysis: &SingleAnalysis) -> String {
    format_morphemes_with(analysis, true)
}

/// Morpheme chain; `add_surface == false` drops every surface, the stem
/// included (`Noun + A3sg + Dat`).
pub fn format_morphemes_with(analysis: &SingleAnalysis, add_surface: bool) -> String {
    let morphemes = analysis.morphemes();
    let Some(first) = morphemes.first() else {
        return String::new();
    };

    let mut out = String::new();
    if add_surface {
        out.push_str(&first.surface);
        out.push(':');
    }
    out.push_str(first.morpheme.id);
    for (i, m) in morphemes.iter().enumerate().skip(1) {
        if m.morpheme.derivational {
            out.push_str(" | ");
        } else if !morphemes[i - 1].morpheme.derivational {
            out.push_str(" + ");
        }
        if add_surface && !m.surface.is_empty() {
            out.push_str(&m.surface);
            out.push(':');
        }
        out.push_str(m.morpheme.id);
        if m.morpheme.derivational {
            out.push('→');
        }
    }
    out
}

/// `[lemma:Pos(,Secondary)] ` followed by the morpheme chain.
pub fn format_lexical(analysis: &SingleAnalysis) -> String {
    let item = analysis.item();
    let pos = match item.secondary_pos {
        SecondaryPos::None => item.primary_pos.short_form().to_string(),
        secondary => format!("{},{}", item.primary_pos.short_form(), secondary.short_form()),
    };
    format!("[{}:{}] {}", item.lemma, pos, format_morphemes(analysis))
}

// ---------------------------------------------------------------------------
// Universal Dependencies features
// ---------------------------------------------------------------------------

const CASES: [&str; 8] = ["Nom", "Dat", "Acc", "Abl", "Loc", "Ins", "Gen", "Equ"];

/// (Number, Person) of an agreement morpheme.
fn agreement(id: &str) -> Option<(&'static str, &'static str)> {
    Some(match id {
        "A1sg" => ("Sing", "1"),
        "A2sg" => ("Sing", "2"),
        "A3sg" => ("Sing", "3"),
        "A1pl" => ("Plur", "1"),
        "A2pl" => ("Plur", "2"),
        "A3pl" => ("Plur", "3"),
        _ => return None,
    })
}

/// (Number[psor], Person[psor]) of a possessive morpheme.
fn possessor(id: &str) -> Option<(&'static str, &'static str)> {
    Some(match id {
        "P1sg" => ("Sing", "1"),
        "P2sg" => ("Sing", "2"),
        "P3sg" => ("Sing", "3"),
        "P1pl" => ("Plur", "1"),
        "P2pl" => ("Plur", "2"),
        "P3pl" => ("Plur", "3"),
        _ => return None,
    })
}

/// Case, number and person collected from a nominal morpheme chain.
#[derive(Default)]
struct Nominal<'a> {
    case: Option<&'a str>,
    agreement: Option<(&'static str, &'static str)>,
    possessor: Option<(&'static str, &'static str)>,
}

impl<'a> Nominal<'a> {
    fn collect(ids: &[&'a str], with_possessor: bool) -> Self {
        let mut n = Nominal::default();
        for &id in ids {
            if CASES.contains(&id) {
                n.case = Some(id);
            }
            if let Some(a) = agreement(id) {
                n.agreement = Some(a);
            }
            if with_possessor {
                if let Some(p) = possessor(id) {
                    n.possessor = Some(p);
                }
            }
        }
        n
    }

    /// `Case=..|Number=..|Number[psor]=..|Person=..|Person[psor]=..`; the
    /// case defaults to Nom.
    fn features(&self) -> String {
        let (number, person) = self.agreement.unwrap_or(("", ""));
        let mut out = format!("Case={}|Number={number}", self.case.unwrap_or("Nom"));
        if let Some((n, _)) = self.possessor {
            out.push_str(&format!("|Number[psor]={n}"));
        }
        out.push_str(&format!("|Person={person}"));
        if let Some((_, p)) = self.possessor {
            out.push_str(&format!("|Person[psor]={p}"));
        }
        out
    }
}

/// Universal Dependencies features of an analysis, chosen by the root's part
/// of speech. Adjectives get nominal features only after a derivation to a
/// noun. Other parts of speech fall back to the morpheme chain.
pub fn format_ud(analysis: &SingleAnalysis) -> String {
    let ids: Vec<&str> = analysis.morphemes().iter().map(|m| m.morpheme.id).collect();
    let item = analysis.item();
    match item.primary_pos {
        PrimaryPos::Noun => {
            let features = Nominal::collect(&ids, true).features();
            if item.secondary_pos == SecondaryPos::Abbreviation {
                format!("Abbr=Yes|{features}")
            } else {
                features
            }
        }
        PrimaryPos::Adjective if ids.contains(&"Noun") => Nominal::collect(&ids, true).features(),
        PrimaryPos::Pronoun => ud_pronoun(&ids, item.secondary_pos),
        PrimaryPos::Numeral => format!("NumType={}", item.secondary_pos.short_form()),
        PrimaryPos::Verb => ud_verb(&ids),
        _ => format_morphemes(analysis),
    }
}

fn ud_pronoun(ids: &[&str], secondary: SecondaryPos) -> String {
    // Only reflexive and quantifier pronouns carry possessors (kendim, hepimiz).
    let with_possessor = matches!(secondary, SecondaryPos::Reflexive | SecondaryPos::Quantitive);
    let mut out = Nominal::collect(ids, with_possessor).features();
    match secondary {
        SecondaryPos::Personal => out.push_str("|PronType=Prs"),
        SecondaryPos::Demonstrative => out.push_str("|PronType=Dem"),
        SecondaryPos::Reflexive => out.push_str("|Reflex=Yes"),
        SecondaryPos::Question => {}
        other => out.push_str(&format!("|PronType={}", other.short_form())),
    }
    out
}

fn ud_verb(ids: &[&str]) -> String {
    let mut aspect = "Perf";
    let mut mood = "Ind";
    let mut polarity = "Pos";
    let mut tense: Option<&str> = None;
    let mut verb_form: Option<&str> = None;
    let mut evident = false;
    let mut polite = false;
    let mut voice: Option<&str> = None;
    let mut case: Option<&str> = None;
    let mut possessor_features = None;
    let mut agreement_features = None;

    let has_past = ids.contains(&"Past");
    for (k, &id) in ids.iter().enumerate() {
        if CASES.contains(&id) {
            case = Some(id);
        }
        // Agreement counts only as the final morpheme; earlier ones belong
        // to a derived nominal.
        if k + 1 == ids.len() {
            agreement_features = agreement(id);
        }
        if let Some(p) = possessor(id) {
            possessor_features = Some(p);
        }
        match id {
            "Past" => {
                tense = match tense {
                    Some("Past") => Some("Pqp"),
                    None => Some("Past"),
                    t => t,
                }
            }
            "Fut" if tense.is_none() => tense = Some("Fut"),
            "Narr" => {
                evident |= !has_past;
                tense = Some("Past");
            }
            "PastPart" => {
                tense = Some("Past");
                verb_form = Some("Part");
            }
            "Aor" => aspect = "Hab",
            "Prog1" => {
                aspect = "Prog";
                polite = true;
            }
            "Pass" => voice = Some("Pass"),
            "Caus" => voice = Some("Cau"),
            "Cond" => mood = "Cnd",
            "Able" => mood = "Pot",
            "Imp" => mood = "Imp",
            "Neg" => polarity = "Neg",
            "Noun" if verb_form.is_none() => verb_form = Some("Vnoun"),
            "Adv" => verb_form = Some("Conv"),
            _ => {}
        }
    }
    if ids.contains(&"Fut") && has_past {
        tense = Some("Fut,Past");
    }
    if case.is_none() && ids.contains(&"Noun") {
        case = Some("Nom");
    }

    let mut out = format!("Aspect={aspect}");
    if evident {
        out.push_str("|Evident=Nfh");
    }
    if let Some(case) = case {
        out.push_str(&format!("|Case={case}"));
    }
    out.push_str(&format!("|Mood={mood}"));
    // Participles and verbal nouns carry no finite agreement.
    let finite = verb_form.is_none();
    if let Some((n, _)) = possessor_features {
        out.push_str(&format!("|Number[psor]={n}"));
    }
    if let (true, Some((n, _))) = (finite, agreement_features) {
        out.push_str(&format!("|Number={n}"));
    }
    if let Some((_, p)) = possessor_features {
        out.push_str(&format!("|Person[psor]={p}"));
    }
    if let (true, Some((_, p))) = (finite, agreement_features) {
        out.push_str(&format!("|Person={p}"));
    }
    out.push_str(&format!("|Polarity={polarity}"));
    if polite {
        out.push_str("|Polite=Infm");
    }
    out.push_str(&format!("|Tense={}", tense.unwrap_or("Pres")));
    if let Some(form) = verb_form {
        out.push_str(&format!("|VerbForm={form}"));
    }
    if let Some(voice) = voice {
        out.push_str(&format!("|Voice={voice}"));
    }
    out
}

/// Serializable view of an analysis.
pub fn to_report(analysis: &SingleAnalysis) -> AnalysisReport {
    let item = analysis.item();
    AnalysisReport {
        lemma: item.lemma.clone(),
        id: item.id.clone(),
        pos: item.primary_pos,
        secondary_pos: (item.secondary_pos != SecondaryPos::None).then_some(item.secondary_pos),
        morphemes: analysis
            .morphemes()
            .iter()
            .map(|m| MorphemeReport {
                morpheme: m.morpheme.id.to_string(),
                surface: m.surface.clone(),
                derivational: m.morpheme.derivational,
            })
            .collect(),
        group_boundaries: analysis.group_boundaries().to_vec(),
        formatted: format_lexical(analysis),
    }
}

/// One line per analysis; `word: ?` when there are none.
pub fn analyses_to_text(word: &str, analyses: &[SingleAnalysis], format: TextFormat) -> String {
    if analyses.is_empty() {
        return format!("{word}: ?");
    }
    analyses
        .iter()
        .map(|a| format!("{word}: {}", format.render(a)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `word: lemma1, lemma2` per token.
pub fn lemmas_to_text(lemmas: &[WordLemmas]) -> String {
    lemmas
        .iter()
        .map(|w| format!("{}: {}", w.word, w.lemmas.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::RuleBasedAnalyzer;
    use crate::lexicon::Lexicon;

    fn analyze(lines: &[&str], word: &str) -> Vec<SingleAnalysis> {
        RuleBasedAnalyzer::from_lexicon(Lexicon::from_lines(lines.iter().copied()).unwrap())
            .unwrap()
            .analyze(word)
    }

    #[test]
    fn test_format_inflections() {
        let results = analyze(&["kitap"], "kitaba");
        assert_eq!(results.len(), 1);
        assert_eq!(format_morphemes(&results[0]), "kitab:Noun + A3sg + a:Dat");
        assert_eq!(format_lexical(&results[0]), "[kitap:Noun] kitab:Noun + A3sg + a:Dat");
    }

    #[test]
    fn test_format_derivation() {
        let results = analyze(&["kitap"], "kitaplık");
        assert_eq!(format_morphemes(&results[0]), "kitap:Noun + A3sg | lık:Ness→Noun + A3sg");
    }

    #[test]
    fn test_format_secondary_pos() {
        let results = analyze(&["Ankara"], "ankarada");
        assert_eq!(results.len(), 1);
        assert_eq!(format_lexical(&results[0]), "[Ankara:Noun,Prop] ankara:Noun + A3sg + da:Loc");
    }

    #[test]
    fn test_report() {
        let results = analyze(&["elma"], "elmalar");
        let report = to_report(&results[0]);
        assert_eq!(report.lemma, "elma");
        assert_eq!(report.id, "elma_Noun");
        assert_eq!(report.pos, PrimaryPos::Noun);
        assert_eq!(report.secondary_pos, None);
        assert_eq!(report.morphemes.len(), 2);
        assert_eq!(report.morphemes[1].surface, "lar");
        assert_eq!(report.formatted, "[elma:Noun] elma:Noun + lar:A3pl");
    }

    #[test]
    fn test_format_without_surfaces() {
        let results = analyze(&["kitap"], "kitaplığa");
        assert_eq!(results.len(), 1);
        assert_eq!(
            format_morphemes_with(&results[0], false),
            "Noun + A3sg | Ness→Noun + A3sg + Dat"
        );
        assert_eq!(format_morphemes_with(&results[0], true), format_morphemes(&results[0]));
        assert_eq!(TextFormat::default().render(&results[0]), format_morphemes(&results[0]));
        assert_eq!(TextFormat::Lexical.render(&results[0]), format_lexical(&results[0]));
    }

    fn ud_of(lines: &[&str], word: &str) -> Vec<String> {
        analyze(lines, &crate::sentence::normalize_word(word)).iter().map(format_ud).collect()
    }

    #[test]
    fn test_ud_nouns() {
        assert_eq!(ud_of(&["ev"], "evde"), ["Case=Loc|Number=Sing|Person=3"]);
        assert_eq!(ud_of(&["kitap"], "kitap"), ["Case=Nom|Number=Sing|Person=3"]);
        assert!(ud_of(&["kitap"], "kitaplarımızdan")
            .contains(&"Case=Abl|Number=Plur|Number[psor]=Plur|Person=3|Person[psor]=1".to_string()));
        assert!(ud_of(&["TDK [P:Noun,Abbrv]"], "TDK'ya")
            .contains(&"Abbr=Yes|Case=Dat|Number=Sing|Person=3".to_string()));
    }

    #[test]
    fn test_ud_adjectives_and_fallback() {
        assert!(ud_of(&["güzel [P:Adj]"], "güzel").contains(&"güzel:Adj".to_string()));
        assert!(ud_of(&["küçük [P:Adj]"], "küçüğü")
            .contains(&"Case=Nom|Number=Sing|Number[psor]=Sing|Person=3|Person[psor]=3".to_string()));
        assert_eq!(ud_of(&["ve [P:Conj]"], "ve"), ["ve:Conj"]);
    }

    #[test]
    fn test_ud_pronouns_and_numerals() {
        assert!(ud_of(&["ben [P:Pron,Pers]"], "bana")
            .contains(&"Case=Dat|Number=Sing|Person=1|PronType=Prs".to_string()));
        assert!(ud_of(&["kim [P:Pron,Ques]"], "kime").contains(&"Case=Dat|Number=Sing|Person=3".to_string()));
        assert!(ud_of(&["dört [P:Num,Card; A:Voicing]"], "dört").contains(&"NumType=Card".to_string()));
    }

    #[test]
    fn test_ud_verbs() {
        let gel = ["gelmek [A:Aorist_I]"];
        assert!(ud_of(&gel, "geldim")
            .contains(&"Aspect=Perf|Mood=Ind|Number=Sing|Person=1|Polarity=Pos|Tense=Past".to_string()));
        assert!(ud_of(&gel, "geliyorum")
            .contains(&"Aspect=Prog|Mood=Ind|Number=Sing|Person=1|Polarity=Pos|Polite=Infm|Tense=Pres".to_string()));
        assert!(ud_of(&gel, "gelmez")
            .contains(&"Aspect=Hab|Mood=Ind|Number=Sing|Person=3|Polarity=Neg|Tense=Pres".to_string()));
        assert!(ud_of(&["yapmak"], "yapıldı").contains(
            &"Aspect=Perf|Mood=Ind|Number=Sing|Person=3|Polarity=Pos|Tense=Past|Voice=Pass".to_string()
        ));
    }

    #[test]
    fn test_analyses_to_text() {
        assert_eq!(analyses_to_text("xyz", &[], TextFormat::Morphemes), "xyz: ?");
        let results = analyze(&["ev"], "evde");
        assert_eq!(analyses_to_text("Evde", &results, TextFormat::Ud), "Evde: Case=Loc|Number=Sing|Person=3");
        assert_eq!(
            analyses_to_text("Evde", &results, TextFormat::Lexical),
            "Evde: [ev:Noun] ev:Noun + A3sg + de:Loc"
        );
        let lemmas = vec![WordLemmas {
            word: "yaz".to_string(),
            lemmas: vec!["yaz".to_string(), "yazmak".to_string()],
        }];
        assert_eq!(lemmas_to_text(&lemmas), "yaz: yaz, yazmak");
    }
}
