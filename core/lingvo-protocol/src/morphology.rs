use rkyv::{Archive, Deserialize, Serialize};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum PartOfSpeech {
    Noun = 0,
    Verb = 1,
    Adjective = 2,
    Adverb = 3,
    Pronoun = 4,
    Preposition = 5,
    Conjunction = 6,
    Article = 7,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 8] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Article,
    ];

    /// Wire name, identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Preposition => "preposition",
            PartOfSpeech::Conjunction => "conjunction",
            PartOfSpeech::Article => "article",
        }
    }

    /// Display label shown next to the word (`posRu`).
    pub const fn label_ru(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Существительное",
            PartOfSpeech::Verb => "Глагол",
            PartOfSpeech::Adjective => "Прилагательное",
            PartOfSpeech::Adverb => "Наречие",
            PartOfSpeech::Pronoun => "Местоимение",
            PartOfSpeech::Preposition => "Предлог",
            PartOfSpeech::Conjunction => "Союз",
            PartOfSpeech::Article => "Артикль",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pos| pos.as_str() == name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Gender {
    Masculine = 0,
    Feminine = 1,
}

impl Gender {
    pub const fn label_ru(self) -> &'static str {
        match self {
            Gender::Masculine => "муж.",
            Gender::Feminine => "жен.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Number {
    Singular = 0,
    Plural = 1,
}

impl Number {
    pub const fn label_ru(self) -> &'static str {
        match self {
            Number::Singular => "ед.",
            Number::Plural => "множ.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Person {
    #[cfg_attr(feature = "serde", serde(rename = "1st"))]
    First = 1,
    #[cfg_attr(feature = "serde", serde(rename = "2nd"))]
    Second = 2,
    #[cfg_attr(feature = "serde", serde(rename = "3rd"))]
    Third = 3,
}

impl Person {
    pub const fn label_ru(self) -> &'static str {
        match self {
            Person::First => "1-е лицо",
            Person::Second => "2-е лицо",
            Person::Third => "3-е лицо",
        }
    }
}

/// The function a word plays in the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum SyntaxRole {
    Determiner = 0,
    Subject = 1,
    Predicate = 2,
    Attribute = 3,
    Object = 4,
}

impl SyntaxRole {
    pub const fn as_str(self) -> &'static str {
        match self {
            SyntaxRole::Determiner => "determiner",
            SyntaxRole::Subject => "subject",
            SyntaxRole::Predicate => "predicate",
            SyntaxRole::Attribute => "attribute",
            SyntaxRole::Object => "object",
        }
    }

    /// Display label (`syntaxRoleRu`).
    pub const fn label_ru(self) -> &'static str {
        match self {
            SyntaxRole::Determiner => "Определитель",
            SyntaxRole::Subject => "Подлежащее",
            SyntaxRole::Predicate => "Сказуемое",
            SyntaxRole::Attribute => "Определение",
            SyntaxRole::Object => "Дополнение",
        }
    }
}
