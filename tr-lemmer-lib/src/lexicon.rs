// Lexicon: dictionary items and the text format they are loaded from.
//
// Line format:
//   word [P:Primary[,Secondary]; A:Attr1,Attr2; Pr:pronunciation; Index:n; Ref:id; Roots:a-b]
// Lines that are blank or start with `##` are ignored.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::alphabet;
use crate::attributes::{RootAttribute, RootAttributes};
use crate::error::LexiconError;
use crate::types::{PrimaryPos, SecondaryPos};

const MASTER_DICTIONARY: &str = include_str!("../data/master-dictionary.dict");

// ---------------------------------------------------------------------------
// Dictionary items
// ---------------------------------------------------------------------------

/// A lexicon entry.
#[derive(Debug, Clone)]
pub struct DictionaryItem {
    /// Citation form as written in the dictionary (`gelmek`).
    pub lemma: String,
    /// Form used to enter the morphotactics graph (`gel`).
    pub root: String,
    pub primary_pos: PrimaryPos,
    pub secondary_pos: SecondaryPos,
    pub attributes: RootAttributes,
    pub pronunciation: String,
    pub index: u32,
    /// `lemma_Primary[_Secondary][_index]`
    pub id: String,
    /// Item this one stands in for (compound placeholders, `Ref` entries).
    pub reference_item: Option<Arc<DictionaryItem>>,
}

impl DictionaryItem {
    pub fn new(
        lemma: &str,
        root: &str,
        primary_pos: PrimaryPos,
        secondary_pos: SecondaryPos,
        attributes: RootAttributes,
        pronunciation: &str,
        index: u32,
    ) -> Self {
        Self {
            lemma: lemma.to_string(),
            root: root.to_string(),
            primary_pos,
            secondary_pos,
            attributes,
            pronunciation: pronunciation.to_string(),
            index,
            id: generate_id(lemma, primary_pos, secondary_pos, index),
            reference_item: None,
        }
    }

    pub fn has_attribute(&self, attribute: RootAttribute) -> bool {
        self.attributes.contains(attribute)
    }

    pub fn has_any_attribute(&self, attributes: &RootAttributes) -> bool {
        self.attributes.contains_any(attributes)
    }
}

impl PartialEq for DictionaryItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.lemma == other.lemma && self.index == other.index
    }
}

impl Eq for DictionaryItem {}

impl Hash for DictionaryItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.lemma.hash(state);
        self.index.hash(state);
    }
}

impl fmt::Display for DictionaryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [P:{}", self.lemma, self.primary_pos)?;
        if self.secondary_pos != SecondaryPos::None {
            write!(f, ",{}", self.secondary_pos)?;
        }
        f.write_str("]")
    }
}

pub fn generate_id(lemma: &str, primary: PrimaryPos, secondary: SecondaryPos, index: u32) -> String {
    let mut id = format!("{lemma}_{primary}");
    if secondary != SecondaryPos::None {
        id.push('_');
        id.push_str(secondary.short_form());
    }
    if index > 0 {
        id.push_str(&format!("_{index}"));
    }
    id
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

/// All dictionary items, indexed by id and by lemma.
#[derive(Debug, Default)]
pub struct Lexicon {
    items: Vec<Arc<DictionaryItem>>,
    by_id: HashMap<String, Arc<DictionaryItem>>,
    by_lemma: HashMap<String, Vec<Arc<DictionaryItem>>>,
}

impl Lexicon {
    pub fn new() -> Self {
        Self::default()
    }

    /// The bundled Turkish lexicon.
    pub fn default_lexicon() -> Result<Self, LexiconError> {
        Self::from_lines(MASTER_DICTIONARY.lines())
    }

    pub fn from_lines<I, S>(lines: I) -> Result<Self, LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::new();
        lexicon.add_lines(lines)?;
        Ok(lexicon)
    }

    /// Parse dictionary lines and add their items. Lines carrying `Ref` or
    /// `Roots` metadata are resolved after all plain lines.
    pub fn add_lines<I, S>(&mut self, lines: I) -> Result<(), LexiconError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut processor = LineProcessor {
            lexicon: self,
            late_entries: Vec::new(),
        };
        for line in lines {
            processor.process_line(line.as_ref())?;
        }
        processor.resolve_late_entries()
    }

    pub fn add_file(&mut self, path: &Path) -> Result<(), LexiconError> {
        let text = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.add_lines(text.lines())
    }

    /// Add an item. Returns false (and keeps the existing one) if an equal
    /// item is already present.
    pub fn add(&mut self, item: DictionaryItem) -> bool {
        if let Some(existing) = self.by_id.get(&item.id) {
            if **existing == item {
                warn!(item = %item, "duplicated item");
                return false;
            }
            warn!(id = %item.id, "item id collides with {existing}");
        }
        let item = Arc::new(item);
        self.by_id.insert(item.id.clone(), Arc::clone(&item));
        self.by_lemma
            .entry(item.lemma.clone())
            .or_default()
            .push(Arc::clone(&item));
        self.items.push(item);
        true
    }

    pub fn get_item_by_id(&self, id: &str) -> Option<&Arc<DictionaryItem>> {
        self.by_id.get(id)
    }

    /// Every item sharing this lemma.
    pub fn get_matching_items(&self, lemma: &str) -> &[Arc<DictionaryItem>] {
        self.by_lemma.get(lemma).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn remove(&mut self, id: &str) -> Option<Arc<DictionaryItem>> {
        let removed = self.by_id.remove(id)?;
        self.items.retain(|i| i.id != id);
        if let Some(same_lemma) = self.by_lemma.get_mut(&removed.lemma) {
            same_lemma.retain(|i| i.id != id);
            if same_lemma.is_empty() {
                self.by_lemma.remove(&removed.lemma);
            }
        }
        Some(removed)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<DictionaryItem>> {
        self.items.iter()
    }
}

// ---------------------------------------------------------------------------
// Line parsing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum MetaDataId {
    Pos,
    Attributes,
    RefId,
    Roots,
    Pronunciation,
    Suffix,
    Index,
}

impl FromStr for MetaDataId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(MetaDataId::Pos),
            "A" => Ok(MetaDataId::Attributes),
            "Ref" => Ok(MetaDataId::RefId),
            "Roots" => Ok(MetaDataId::Roots),
            "Pr" => Ok(MetaDataId::Pronunciation),
            "S" => Ok(MetaDataId::Suffix),
            "Index" => Ok(MetaDataId::Index),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
struct LineData {
    line: String,
    word: String,
    metadata: HashMap<MetaDataId, String>,
}

impl LineData {
    fn get(&self, id: MetaDataId) -> Option<&str> {
        self.metadata.get(&id).map(|s| s.as_str())
    }
}

fn parse_line_data(line: &str) -> Result<LineData, LexiconError> {
    let word = line.split(' ').next().unwrap_or_default();
    if word.is_empty() {
        return Err(LexiconError::malformed(line, "no word data"));
    }
    let mut data = LineData {
        line: line.to_string(),
        word: word.to_string(),
        metadata: HashMap::new(),
    };
    let meta = line[word.len()..].trim();
    if meta.is_empty() {
        return Ok(data);
    }
    let inner = meta
        .strip_prefix('[')
        .and_then(|m| m.strip_suffix(']'))
        .ok_or_else(|| LexiconError::malformed(line, "metadata must be enclosed in brackets"))?;

    for chunk in inner.split(';') {
        let (key, value) = chunk
            .split_once(':')
            .ok_or_else(|| LexiconError::malformed(line, format!("chunk {chunk:?} has no ':'")))?;
        let (key, value) = (key.trim(), value.trim());
        if value.is_empty() {
            return Err(LexiconError::malformed(line, format!("chunk {chunk:?} has no data")));
        }
        let id = key.parse::<MetaDataId>().map_err(|_| LexiconError::UnknownMetadataKey {
            line: line.to_string(),
            key: key.to_string(),
        })?;
        data.metadata.insert(id, value.to_string());
    }
    Ok(data)
}

fn is_verb(word: &str) -> bool {
    word.chars().count() > 3
        && (word.ends_with("mek") || word.ends_with("mak"))
        && word.chars().next().is_some_and(|c| c.is_lowercase())
}

fn infer_primary_pos(word: &str) -> PrimaryPos {
    if is_verb(word) {
        PrimaryPos::Verb
    } else {
        PrimaryPos::Noun
    }
}

fn infer_secondary_pos(word: &str) -> SecondaryPos {
    if word.chars().next().is_some_and(alphabet::is_upper) {
        SecondaryPos::ProperNoun
    } else {
        SecondaryPos::None
    }
}

fn pos_data(line: &str, pos: Option<&str>, word: &str) -> Result<(PrimaryPos, SecondaryPos), LexiconError> {
    let Some(pos) = pos else {
        return Ok((infer_primary_pos(word), infer_secondary_pos(word)));
    };
    let tokens: Vec<&str> = pos.split(',').map(str::trim).collect();
    if tokens.len() > 2 {
        return Err(LexiconError::malformed(line, format!("only two POS tokens are allowed: {pos:?}")));
    }

    let mut primary = None;
    let mut secondary = None;
    for token in tokens {
        if let Ok(p) = token.parse::<PrimaryPos>() {
            match primary {
                None => primary = Some(p),
                // `Ques` is both a primary and a secondary tag.
                Some(PrimaryPos::Pronoun) if p == PrimaryPos::Question => {
                    secondary = Some(SecondaryPos::Question);
                }
                Some(_) => {
                    return Err(LexiconError::malformed(line, format!("multiple primary POS in {pos:?}")));
                }
            }
        } else if let Ok(s) = token.parse::<SecondaryPos>() {
            if secondary.is_some() {
                return Err(LexiconError::malformed(line, format!("multiple secondary POS in {pos:?}")));
            }
            secondary = Some(s);
        } else {
            return Err(LexiconError::UnknownPos {
                line: line.to_string(),
                pos: token.to_string(),
            });
        }
    }
    Ok((
        primary.unwrap_or_else(|| infer_primary_pos(word)),
        secondary.unwrap_or_else(|| infer_secondary_pos(word)),
    ))
}

fn generate_root(word: &str, primary: PrimaryPos) -> String {
    if primary == PrimaryPos::Punctuation {
        return word.to_string();
    }
    let mut root = word;
    if primary == PrimaryPos::Verb && is_verb(word) {
        // "mek" and "mak" are three single-byte letters.
        root = &word[..word.len() - 3];
    }
    alphabet::normalize_circumflex(&alphabet::to_lower(root))
}

/// Letter-by-letter reading of a vowel-less word (`tdk` → `tedeka`).
fn letter_pronunciation(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            'b' => "be",
            'c' => "ce",
            'ç' => "çe",
            'd' => "de",
            'f' => "fe",
            'g' => "ge",
            'ğ' => "yumuşakge",
            'h' => "he",
            'j' => "je",
            'k' => "ka",
            'l' => "le",
            'm' => "me",
            'n' => "ne",
            'p' => "pe",
            'q' => "kü",
            'r' => "re",
            's' => "se",
            'ş' => "şe",
            't' => "te",
            'v' => "ve",
            'w' => "ve",
            'x' => "iks",
            'y' => "ye",
            'z' => "ze",
            _ => "",
        })
        .collect()
}

fn parse_attributes(line: &str, attributes: Option<&str>) -> Result<RootAttributes, LexiconError> {
    let mut set = RootAttributes::empty();
    let Some(attributes) = attributes else {
        return Ok(set);
    };
    for token in attributes.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let attribute = token.parse::<RootAttribute>().map_err(|_| LexiconError::UnknownAttribute {
            line: line.to_string(),
            attribute: token.to_string(),
        })?;
        set.insert(attribute);
    }
    Ok(set)
}

/// Add the attributes implied by the shape of `word` to the explicit ones.
fn infer_morphemic_attributes(
    word: &str,
    primary: PrimaryPos,
    secondary: SecondaryPos,
    explicit: RootAttributes,
) -> RootAttributes {
    use RootAttribute::*;

    let mut attrs = explicit;
    let Some(last) = alphabet::last_char(word) else {
        return attrs;
    };
    let vowels = alphabet::vowel_count(word);

    match primary {
        PrimaryPos::Verb => {
            if alphabet::is_vowel(last) {
                attrs.insert(ProgressiveVowelDrop);
                attrs.insert(Passive_In);
            }
            if vowels > 1 && !attrs.contains(Aorist_A) {
                attrs.insert(Aorist_I);
            }
            if vowels == 1 && !attrs.contains(Aorist_I) {
                attrs.insert(Aorist_A);
            }
            if last == 'l' {
                attrs.insert(Passive_In);
            }
            if alphabet::is_vowel(last) || ((last == 'l' || last == 'r') && vowels > 1) {
                attrs.insert(Causative_t);
            }
        }
        PrimaryPos::Noun | PrimaryPos::Adjective | PrimaryPos::Numeral => {
            let proper = secondary == SecondaryPos::ProperNoun;
            if !proper
                && vowels > 1
                && alphabet::is_voicing_stop(last)
                && !attrs.contains(NoVoicing)
                && !attrs.contains(InverseHarmony)
            {
                attrs.insert(Voicing);
            }
            if word.ends_with("nk") || word.ends_with("og") {
                if !attrs.contains(NoVoicing) && !proper {
                    attrs.insert(Voicing);
                }
            } else if vowels < 2 && !attrs.contains(Voicing) {
                attrs.insert(NoVoicing);
            }
        }
        _ => {}
    }
    attrs
}

struct LineProcessor<'a> {
    lexicon: &'a mut Lexicon,
    late_entries: Vec<LineData>,
}

impl LineProcessor<'_> {
    fn process_line(&mut self, line: &str) -> Result<(), LexiconError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with("##") {
            return Ok(());
        }
        let data = parse_line_data(line)?;
        if data.metadata.contains_key(&MetaDataId::RefId) || data.metadata.contains_key(&MetaDataId::Roots) {
            self.late_entries.push(data);
            return Ok(());
        }
        let item = self.build_item(&data)?;
        self.lexicon.add(item);
        Ok(())
    }

    fn build_item(&self, data: &LineData) -> Result<DictionaryItem, LexiconError> {
        let word = data.word.as_str();
        let (primary, secondary) = pos_data(&data.line, data.get(MetaDataId::Pos), word)?;
        let root = generate_root(word, primary);

        let mut index = match data.get(MetaDataId::Index) {
            Some(s) => s.parse::<u32>().map_err(|_| LexiconError::BadIndex {
                line: data.line.clone(),
                value: s.to_string(),
            })?,
            None => 0,
        };

        let (pronunciation, guessed) = match data.get(MetaDataId::Pronunciation) {
            Some(p) => (alphabet::to_lower(p), false),
            None if primary == PrimaryPos::Punctuation => ("a".to_string(), true),
            None if secondary == SecondaryPos::Abbreviation || !alphabet::contains_vowel(&root) => {
                (letter_pronunciation(&root), true)
            }
            None => (root.clone(), true),
        };

        let explicit = parse_attributes(&data.line, data.get(MetaDataId::Attributes))?;
        let mut attributes = infer_morphemic_attributes(&pronunciation, primary, secondary, explicit);
        if guessed && matches!(secondary, SecondaryPos::ProperNoun | SecondaryPos::Abbreviation) {
            attributes.insert(RootAttribute::PronunciationGuessed);
        }

        // Same lemma and POS with different attributes: move to the next index.
        loop {
            let id = generate_id(word, primary, secondary, index);
            match self.lexicon.get_item_by_id(&id) {
                Some(existing) if existing.attributes != attributes => index += 1,
                _ => break,
            }
        }

        Ok(DictionaryItem::new(
            word,
            &root,
            primary,
            secondary,
            attributes,
            &pronunciation,
            index,
        ))
    }

    fn resolve_late_entries(self) -> Result<(), LexiconError> {
        let LineProcessor { lexicon, late_entries } = self;
        let mut processor = LineProcessor {
            lexicon,
            late_entries: Vec::new(),
        };
        for entry in &late_entries {
            if let Some(reference) = entry.get(MetaDataId::RefId) {
                processor.add_reference_entry(entry, reference)?;
            }
            if let Some(roots) = entry.get(MetaDataId::Roots) {
                processor.add_compound_entry(entry, roots)?;
            }
        }
        Ok(())
    }

    fn add_reference_entry(&mut self, entry: &LineData, reference: &str) -> Result<(), LexiconError> {
        let reference_id = if reference.contains('_') {
            reference.to_string()
        } else {
            format!("{reference}_Noun")
        };
        let referenced = self
            .lexicon
            .get_item_by_id(&reference_id)
            .cloned()
            .ok_or_else(|| LexiconError::UnknownReference {
                lemma: entry.word.clone(),
                reference: reference_id.clone(),
            })?;
        let mut item = self.build_item(entry)?;
        item.reference_item = Some(referenced);
        self.lexicon.add(item);
        Ok(())
    }

    /// A P3sg compound such as `zeytinyağı [A:CompoundP3sg; Roots:zeytin-yağ]`.
    /// Adds the compound and, when `zeytinyağ` is not itself an item, a
    /// placeholder root pointing back at it.
    fn add_compound_entry(&mut self, entry: &LineData, roots: &str) -> Result<(), LexiconError> {
        let (primary, secondary) = pos_data(&entry.line, entry.get(MetaDataId::Pos), &entry.word)?;
        let compound_id = generate_id(&entry.word, primary, secondary, 0);
        let existing = self.lexicon.get_item_by_id(&compound_id).cloned();
        let compound = match existing {
            Some(existing) => existing,
            None => {
                let item = self.build_item(entry)?;
                let id = item.id.clone();
                self.lexicon.add(item);
                match self.lexicon.get_item_by_id(&id) {
                    Some(added) => Arc::clone(added),
                    None => return Ok(()),
                }
            }
        };

        let root = roots.replace('-', "");
        if self.lexicon.get_item_by_id(&generate_id(&root, compound.primary_pos, compound.secondary_pos, 0)).is_some() {
            return Ok(());
        }

        let last_part = roots.rsplit('-').next().unwrap_or(roots);
        let mut attributes = match self.lexicon.get_matching_items(last_part).iter().min_by_key(|i| i.index) {
            Some(part) => part.attributes,
            None => infer_morphemic_attributes(last_part, primary, secondary, RootAttributes::empty()),
        };
        attributes.insert(RootAttribute::CompoundP3sgRoot);
        attributes.insert(RootAttribute::Dummy);
        attributes.remove(RootAttribute::Voicing);
        if compound.has_attribute(RootAttribute::Ext) {
            attributes.insert(RootAttribute::Ext);
        }

        let mut placeholder = DictionaryItem::new(
            &root,
            &root,
            compound.primary_pos,
            compound.secondary_pos,
            attributes,
            &root,
            0,
        );
        placeholder.reference_item = Some(compound);
        debug!(root = %root, "synthesized compound root");
        self.lexicon.add(placeholder);
        Ok(())
    }
}
