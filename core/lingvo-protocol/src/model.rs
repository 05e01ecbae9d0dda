use rkyv::{Archive, Deserialize, Serialize};
use crate::morphology::{Gender, Number, PartOfSpeech, Person, SyntaxRole};
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Selects one of the two rule tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[archive(check_bytes)]
#[repr(u8)]
pub enum Language {
    #[default]
    Fr = 0,
    En = 1,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Fr, Language::En];

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::Fr => "fr",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    Unsupported(String),
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageError::Unsupported(tag) => {
                write!(f, "Unsupported language {:?}. Use \"fr\" or \"en\"", tag)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LanguageError {}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "fr" => Ok(Language::Fr),
            "en" => Ok(Language::En),
            other => Err(LanguageError::Unsupported(String::from(other))),
        }
    }
}

/// One annotated token of an analyzed sentence.
///
/// Records are produced whole by the classifier and never mutated; the
/// position in the output sequence is their only identity.
#[derive(Debug, Clone, PartialEq, Eq, Archive, Serialize, Deserialize)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[archive(check_bytes)]
pub struct AnalyzedWord {
    /// Token text with punctuation removed, original case kept.
    pub word: String,
    pub pos: PartOfSpeech,
    pub pos_ru: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub gender: Option<Gender>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub number: Option<Number>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub person: Option<Person>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub syntax_role: Option<SyntaxRole>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub syntax_role_ru: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub details: Option<String>,
}

impl AnalyzedWord {
    /// Short feature summary for display, e.g. `муж., ед.`.
    pub fn features_ru(&self) -> String {
        let mut out = String::new();
        let labels = [
            self.gender.map(Gender::label_ru),
            self.number.map(Number::label_ru),
            self.person.map(Person::label_ru),
        ];
        for label in labels.into_iter().flatten() {
            if !out.is_empty() {
                out.push_str(", ");
            }
            out.push_str(label);
        }
        out
    }
}
