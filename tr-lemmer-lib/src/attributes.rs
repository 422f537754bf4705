// Root (lexical) and phonetic attributes, plus a compact copyable set type
// used to carry them through the search.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

/// An enum whose variants can live in an [`AttributeSet`].
pub trait Attribute: Copy + fmt::Debug + 'static {
    /// Every variant, in declaration order. Position is the bit index.
    const ALL: &'static [Self];

    fn index(self) -> u32;
}

/// A small value set of attributes backed by a bit mask.
///
/// Sets are `Copy`: extending a search path always produces a fresh set and
/// never disturbs the attributes of the path it was derived from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeSet<A: Attribute> {
    bits: u64,
    _marker: PhantomData<A>,
}

impl<A: Attribute> AttributeSet<A> {
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _marker: PhantomData,
        }
    }

    pub fn of(attributes: &[A]) -> Self {
        let mut set = Self::empty();
        for &a in attributes {
            set.insert(a);
        }
        set
    }

    pub fn contains(&self, attribute: A) -> bool {
        self.bits & (1 << attribute.index()) != 0
    }

    pub fn contains_any(&self, other: &Self) -> bool {
        self.bits & other.bits != 0
    }

    pub fn insert(&mut self, attribute: A) {
        self.bits |= 1 << attribute.index();
    }

    pub fn remove(&mut self, attribute: A) {
        self.bits &= !(1 << attribute.index());
    }

    pub fn with(mut self, attribute: A) -> Self {
        self.insert(attribute);
        self
    }

    pub fn without(mut self, attribute: A) -> Self {
        self.remove(attribute);
        self
    }

    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
            _marker: PhantomData,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = A> + '_ {
        A::ALL.iter().copied().filter(move |a| self.contains(*a))
    }
}

impl<A: Attribute> Default for AttributeSet<A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: Attribute> fmt::Debug for AttributeSet<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<A: Attribute> FromIterator<A> for AttributeSet<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut set = Self::empty();
        for a in iter {
            set.insert(a);
        }
        set
    }
}

// ---------------------------------------------------------------------------
// Phonetic attributes
// ---------------------------------------------------------------------------

/// Phonological boundary facts about a string, used for root validation and
/// suffix surface generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneticAttribute {
    HasVowel,
    HasNoVowel,
    LastLetterVowel,
    LastLetterConsonant,
    /// e, i, ö, ü
    LastVowelFrontal,
    /// a, ı, o, u
    LastVowelBack,
    LastVowelRounded,
    LastVowelUnrounded,
    LastLetterVoiceless,
    LastLetterVoiced,
    LastLetterVoicelessStop,
    LastLetterVoicedStop,
    FirstLetterVowel,
    FirstLetterConsonant,
    /// The next suffix must start with a vowel ({kitab} → {kitab-a}).
    ExpectsVowel,
    /// The next suffix must start with a consonant ({kitap} → {kitap-lar}).
    ExpectsConsonant,
    ModifiedPronoun,
    UnModifiedPronoun,
    /// The root lost its final letter ({ara} → {ar-ıyor}).
    LastLetterDropped,
    CannotTerminate,
}

impl Attribute for PhoneticAttribute {
    const ALL: &'static [Self] = &[
        Self::HasVowel,
        Self::HasNoVowel,
        Self::LastLetterVowel,
        Self::LastLetterConsonant,
        Self::LastVowelFrontal,
        Self::LastVowelBack,
        Self::LastVowelRounded,
        Self::LastVowelUnrounded,
        Self::LastLetterVoiceless,
        Self::LastLetterVoiced,
        Self::LastLetterVoicelessStop,
        Self::LastLetterVoicedStop,
        Self::FirstLetterVowel,
        Self::FirstLetterConsonant,
        Self::ExpectsVowel,
        Self::ExpectsConsonant,
        Self::ModifiedPronoun,
        Self::UnModifiedPronoun,
        Self::LastLetterDropped,
        Self::CannotTerminate,
    ];

    fn index(self) -> u32 {
        self as u32
    }
}

pub type PhoneticAttributes = AttributeSet<PhoneticAttribute>;

// ---------------------------------------------------------------------------
// Root attributes
// ---------------------------------------------------------------------------

/// Per-lexeme irregularity flags, fixed when the dictionary item is built.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RootAttribute {
    /// Aorist takes the [Ir] form: gel-ir, bul-ur.
    Aorist_I,
    /// Aorist takes the [Ar] form: yap-ar, yet-er.
    Aorist_A,
    /// Final vowel drops before the progressive [Iyor]: ara → ar-ıyor.
    ProgressiveVowelDrop,
    /// Passive forms with [+In]: ara-n, bil-in.
    Passive_In,
    /// Causative forms with [t]: ara-t, oku-t, getir-t.
    Causative_t,
    /// Last stop consonant is voiced before a vowel: kitap → kitab-a.
    Voicing,
    /// Marks a root that must not receive automatic voicing.
    NoVoicing,
    /// Suffix harmony is front regardless of the last vowel: saat-ler.
    InverseHarmony,
    /// Last letter doubles before a vowel: hak → hakk-ı.
    Doubling,
    /// Last vowel drops before a vowel-initial suffix: burun → burn-um.
    LastVowelDrop,
    /// Compound ending in a P3sg suffix: zeytinyağı.
    CompoundP3sg,
    NoSuffix,
    NounConsInsert_n,
    NoQuote,
    /// Bare form of a P3sg compound (zeytinyağ); cannot end a word on its own.
    CompoundP3sgRoot,
    Reflexive,
    Reciprocal,
    NonReciprocal,
    Ext,
    Runtime,
    /// Synthesized placeholder item; analyses report its reference item.
    Dummy,
    ImplicitDative,
    ImplicitPlural,
    ImplicitP1sg,
    ImplicitP2sg,
    FamilyMember,
    PronunciationGuessed,
    Informal,
    Unknown,
}

impl Attribute for RootAttribute {
    const ALL: &'static [Self] = &[
        Self::Aorist_I,
        Self::Aorist_A,
        Self::ProgressiveVowelDrop,
        Self::Passive_In,
        Self::Causative_t,
        Self::Voicing,
        Self::NoVoicing,
        Self::InverseHarmony,
        Self::Doubling,
        Self::LastVowelDrop,
        Self::CompoundP3sg,
        Self::NoSuffix,
        Self::NounConsInsert_n,
        Self::NoQuote,
        Self::CompoundP3sgRoot,
        Self::Reflexive,
        Self::Reciprocal,
        Self::NonReciprocal,
        Self::Ext,
        Self::Runtime,
        Self::Dummy,
        Self::ImplicitDative,
        Self::ImplicitPlural,
        Self::ImplicitP1sg,
        Self::ImplicitP2sg,
        Self::FamilyMember,
        Self::PronunciationGuessed,
        Self::Informal,
        Self::Unknown,
    ];

    fn index(self) -> u32 {
        self as u32
    }
}

impl FromStr for RootAttribute {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RootAttribute::ALL
            .iter()
            .copied()
            .find(|a| format!("{a:?}") == s)
            .ok_or_else(|| s.to_string())
    }
}

pub type RootAttributes = AttributeSet<RootAttribute>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_is_a_value() {
        let a = PhoneticAttributes::of(&[PhoneticAttribute::LastLetterVowel]);
        let b = a.with(PhoneticAttribute::CannotTerminate);
        assert!(!a.contains(PhoneticAttribute::CannotTerminate));
        assert!(b.contains(PhoneticAttribute::CannotTerminate));
        assert_eq!(b.len(), 2);
        assert_eq!(b.without(PhoneticAttribute::CannotTerminate), a);
    }

    #[test]
    fn test_contains_any() {
        let set = RootAttributes::of(&[RootAttribute::Voicing, RootAttribute::Doubling]);
        assert!(set.contains_any(&RootAttributes::of(&[RootAttribute::Doubling])));
        assert!(!set.contains_any(&RootAttributes::of(&[RootAttribute::Dummy])));
    }

    #[test]
    fn test_root_attribute_from_str() {
        assert_eq!("Voicing".parse::<RootAttribute>(), Ok(RootAttribute::Voicing));
        assert_eq!("Aorist_A".parse::<RootAttribute>(), Ok(RootAttribute::Aorist_A));
        assert!("Nonsense".parse::<RootAttribute>().is_err());
    }

    #[test]
    fn test_all_tables_fit_mask() {
        assert!(PhoneticAttribute::ALL.len() <= 64);
        assert!(RootAttribute::ALL.len() <= 64);
        for (i, a) in RootAttribute::ALL.iter().enumerate() {
            assert_eq!(a.index() as usize, i);
        }
    }
}
