// Regression tests for the analyzer's contract and known edge cases.

use tr_lemmer_lib::attributes::PhoneticAttribute;
use tr_lemmer_lib::morphotactics::morpheme;
use tr_lemmer_lib::output::format_morphemes;
use tr_lemmer_lib::phonetics;
use tr_lemmer_lib::{Lexicon, RuleBasedAnalyzer, SingleAnalysis};

fn analyzer(lines: &[&str]) -> RuleBasedAnalyzer {
    let lexicon = Lexicon::from_lines(lines.iter().copied()).expect("lexicon should load");
    RuleBasedAnalyzer::from_lexicon(lexicon).expect("analyzer should build")
}

fn formatted(results: &[SingleAnalysis]) -> Vec<String> {
    let mut all: Vec<_> = results.iter().map(format_morphemes).collect();
    all.sort();
    all
}

#[test]
fn plural_of_single_root() {
    let results = analyzer(&["elma"]).analyze("elmalar");
    assert_eq!(results.len(), 1);
    let pairs: Vec<_> = results[0]
        .morphemes()
        .iter()
        .map(|m| (m.morpheme.id, m.surface.as_str()))
        .collect();
    assert_eq!(pairs, [("Noun", "elma"), ("A3pl", "lar")]);
}

#[test]
fn locative_of_ev() {
    let results = analyzer(&["ev"]).analyze("evde");
    assert_eq!(results.len(), 1);
    let a = &results[0];
    assert_eq!(a.stem(), "ev");
    let last = a.morphemes().last().expect("has morphemes");
    assert_eq!(last.morpheme, &morpheme::LOC);
    assert_eq!(last.surface, "de");
}

#[test]
fn voicing_applies_only_before_vowels() {
    let a = analyzer(&["kitap"]);

    let dative = a.analyze("kitaba");
    assert_eq!(formatted(&dative), ["kitab:Noun + A3sg + a:Dat"]);
    assert_eq!(dative[0].item().lemma, "kitap");

    let bare = a.analyze("kitap");
    assert_eq!(formatted(&bare), ["kitap:Noun + A3sg"]);
}

#[test]
fn unknown_word_has_no_analysis() {
    let a = analyzer(&["kitap", "ev"]);
    assert!(a.analyze("masa").is_empty());
    assert!(a.analyze("evxyz").is_empty());
}

#[test]
fn lexical_ambiguity_yields_two_analyses() {
    let results = analyzer(&["yaz", "yazmak"]).analyze("yaz");
    assert_eq!(results.len(), 2, "yaz is both a noun and a verb");
    let mut ids: Vec<_> = results.iter().map(|a| a.item().id.clone()).collect();
    ids.sort();
    assert_eq!(ids, ["yaz_Noun", "yazmak_Verb"]);
    assert_eq!(
        formatted(&results),
        ["yaz:Noun + A3sg", "yaz:Verb + Imp + A2sg"]
    );
}

#[test]
fn accepted_paths_cover_the_word() {
    let a = analyzer(&["kitap", "ev", "gelmek [A:Aorist_I]", "güzel [P:Adj]"]);
    for word in ["kitaplarımızdan", "evlerde", "geliyorduk", "güzelleşti", "kitapçıya"] {
        let results = a.analyze(word);
        assert!(!results.is_empty(), "{word} should be analyzed");
        for r in &results {
            assert_eq!(r.surface(), word);
        }
    }
}

#[test]
fn cannot_terminate_after_not_voiced_ending() {
    let a = analyzer(&["kitap"]);
    // kitaplığ must be followed by a vowel.
    assert!(a.analyze("kitaplığ").is_empty());
    assert_eq!(
        formatted(&a.analyze("kitaplığı")),
        [
            "kitap:Noun + A3sg | lığ:Ness→Noun + A3sg + ı:Acc",
            "kitap:Noun + A3sg | lığ:Ness→Noun + A3sg + ı:P3sg",
        ]
    );
    assert_eq!(
        formatted(&a.analyze("kitaplık")),
        ["kitap:Noun + A3sg | lık:Ness→Noun + A3sg"]
    );
}

#[test]
fn derivation_needs_bare_noun() {
    let a = analyzer(&["kitap"]);
    assert!(a.analyze("kitaplarlık").is_empty());
}

#[test]
fn compound_has_single_analysis() {
    let a = analyzer(&["zeytin", "yağ", "zeytinyağı [A:CompoundP3sg; Roots:zeytin-yağ]"]);
    let results = a.analyze("zeytinyağı");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].item().id, "zeytinyağı_Noun");

    let dative = a.analyze("zeytinyağına");
    assert_eq!(formatted(&dative), ["zeytinyağı:Noun + A3sg + P3sg + na:Dat"]);

    let plural = a.analyze("zeytinyağları");
    assert!(!plural.is_empty());
    assert!(plural.iter().all(|r| r.item().id == "zeytinyağı_Noun"));
    assert!(a.analyze("zeytinyağ").is_empty());
}

#[test]
fn personal_pronoun_stem_change() {
    let a = analyzer(&["ben [P:Pron,Pers]", "sen [P:Pron,Pers]", "o [P:Pron,Demons]"]);
    assert_eq!(formatted(&a.analyze("bana")), ["ban:Pron + A1sg + a:Dat"]);
    assert_eq!(formatted(&a.analyze("beni")), ["ben:Pron + A1sg + i:Acc"]);
    assert_eq!(formatted(&a.analyze("benim")), ["ben:Pron + A1sg + im:Gen"]);
    assert!(a.analyze("bene").is_empty());
    assert!(a.analyze("ban").is_empty());
    assert!(a.analyze("bani").is_empty());
    assert_eq!(formatted(&a.analyze("ona")), ["o:Pron + A3sg + na:Dat"]);
    assert_eq!(formatted(&a.analyze("onlara")), ["o:Pron + nlar:A3pl + a:Dat"]);
}

#[test]
fn vowel_drop_and_doubling() {
    let a = analyzer(&["burun [A:LastVowelDrop]", "hak [A:Doubling]"]);
    assert_eq!(formatted(&a.analyze("burnum")), ["burn:Noun + A3sg + um:P1sg"]);
    assert!(a.analyze("burunum").is_empty());
    assert_eq!(formatted(&a.analyze("burun")), ["burun:Noun + A3sg"]);
    assert_eq!(formatted(&a.analyze("hakkı")).len(), 2);
    assert!(a.analyze("hakı").is_empty());
}

#[test]
fn inverse_harmony() {
    let a = analyzer(&["saat [A:InverseHarmony]"]);
    assert_eq!(formatted(&a.analyze("saate")), ["saat:Noun + A3sg + e:Dat"]);
    assert!(a.analyze("saata").is_empty());
}

#[test]
fn verb_paradigms() {
    let a = analyzer(&["gelmek [A:Aorist_I]", "gitmek [A:Voicing]", "okumak"]);
    assert_eq!(formatted(&a.analyze("gidiyor")), ["gid:Verb + iyor:Prog1 + A3sg"]);
    assert_eq!(formatted(&a.analyze("gitti")), ["git:Verb + ti:Past + A3sg"]);
    assert_eq!(formatted(&a.analyze("okuyor")), ["ok:Verb + uyor:Prog1 + A3sg"]);
    assert_eq!(formatted(&a.analyze("okur")), ["oku:Verb + r:Aor + A3sg"]);
    assert_eq!(
        formatted(&a.analyze("gelecekler")),
        ["gel:Verb + ecek:Fut + ler:A3pl"]
    );
    assert_eq!(
        formatted(&a.analyze("geleceğim")),
        ["gel:Verb + eceğ:Fut + im:A1sg"]
    );
    assert!(a.analyze("gelecekim").is_empty());
    assert_eq!(
        formatted(&a.analyze("gelmek")),
        ["gel:Verb | mek:Inf1→Noun + A3sg"]
    );
    assert_eq!(
        formatted(&a.analyze("gelsinler")),
        ["gel:Verb + Imp + sinler:A3pl"]
    );
}

#[test]
fn past_participle_takes_possessive() {
    let a = analyzer(&["gelmek [A:Aorist_I]"]);
    assert_eq!(formatted(&a.analyze("geldik")), ["gel:Verb + di:Past + k:A1pl"]);
    assert_eq!(
        formatted(&a.analyze("geldiğim")),
        ["gel:Verb | diğ:PastPart→Noun + A3sg + im:P1sg"]
    );
}

#[test]
fn empty_surface_propagates_attributes() {
    let before = phonetics::of_word("kitab");
    assert_eq!(phonetics::compute("", before), before);
    let once = phonetics::compute("lar", before);
    assert_eq!(phonetics::compute("lar", before), once);
    assert!(once.contains(PhoneticAttribute::LastVowelBack));
}
