#![no_std]

extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod samples;

use alloc::string::{String, ToString};

use lingvo_protocol::{AnalyzedWord, Gender, Language, Number, PartOfSpeech, Person, SyntaxRole};

/// The fixed classification a rule assigns to every form it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub pos: PartOfSpeech,
    pub gender: Option<Gender>,
    pub number: Option<Number>,
    pub person: Option<Person>,
    pub role: SyntaxRole,
    pub details: Option<&'static str>,
}

impl Entry {
    /// Builds the output record for `word` (the stripped token, original case).
    pub fn annotate(&self, word: String) -> AnalyzedWord {
        AnalyzedWord {
            word,
            pos: self.pos,
            pos_ru: self.pos.label_ru().to_string(),
            gender: self.gender,
            number: self.number,
            person: self.person,
            syntax_role: Some(self.role),
            syntax_role_ru: Some(self.role.label_ru().to_string()),
            details: self.details.map(ToString::to_string),
        }
    }
}

/// Lowercase literal forms mapped to one entry.
#[derive(Debug)]
pub struct Rule {
    pub forms: &'static [&'static str],
    pub entry: Entry,
}

impl Rule {
    pub fn matches(&self, lowercase: &str) -> bool {
        self.forms.iter().any(|form| *form == lowercase)
    }
}

/// Ordered rules for one language plus the entry for everything else.
#[derive(Debug)]
pub struct RuleTable {
    pub rules: &'static [Rule],
    pub fallback: Entry,
}

impl RuleTable {
    /// First matching rule wins. `lowercase` must already be lower-cased.
    pub fn classify(&self, lowercase: &str) -> &Entry {
        self.rules
            .iter()
            .find(|rule| rule.matches(lowercase))
            .map(|rule| &rule.entry)
            .unwrap_or(&self.fallback)
    }

    pub fn is_known(&self, lowercase: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(lowercase))
    }
}

const fn article(gender: Option<Gender>, number: Option<Number>) -> Entry {
    Entry {
        pos: PartOfSpeech::Article,
        gender,
        number,
        person: None,
        role: SyntaxRole::Determiner,
        details: None,
    }
}

pub static FRENCH: RuleTable = RuleTable {
    rules: &[
        Rule { forms: &["le"], entry: article(Some(Gender::Masculine), Some(Number::Singular)) },
        Rule { forms: &["la"], entry: article(Some(Gender::Feminine), Some(Number::Singular)) },
        Rule { forms: &["les"], entry: article(None, Some(Number::Plural)) },
        Rule {
            forms: &["chat"],
            entry: Entry {
                pos: PartOfSpeech::Noun,
                gender: Some(Gender::Masculine),
                number: Some(Number::Singular),
                person: None,
                role: SyntaxRole::Subject,
                details: Some("chat (masc.) - cat"),
            },
        },
        Rule {
            forms: &["mange"],
            entry: Entry {
                pos: PartOfSpeech::Verb,
                gender: None,
                number: Some(Number::Singular),
                person: Some(Person::Third),
                role: SyntaxRole::Predicate,
                details: Some("manger, present, 3sg"),
            },
        },
        Rule {
            forms: &["noir"],
            entry: Entry {
                pos: PartOfSpeech::Adjective,
                gender: Some(Gender::Masculine),
                number: Some(Number::Singular),
                person: None,
                role: SyntaxRole::Attribute,
                details: Some("agrees with the noun"),
            },
        },
    ],
    fallback: Entry {
        pos: PartOfSpeech::Noun,
        gender: Some(Gender::Masculine),
        number: Some(Number::Singular),
        person: None,
        role: SyntaxRole::Object,
        details: None,
    },
};

pub static ENGLISH: RuleTable = RuleTable {
    rules: &[
        Rule { forms: &["the", "a", "an"], entry: article(None, None) },
        Rule {
            forms: &["cat"],
            entry: Entry {
                pos: PartOfSpeech::Noun,
                gender: None,
                number: Some(Number::Singular),
                person: None,
                role: SyntaxRole::Subject,
                details: None,
            },
        },
        Rule {
            forms: &["eats", "eat"],
            entry: Entry {
                pos: PartOfSpeech::Verb,
                gender: None,
                number: Some(Number::Singular),
                person: Some(Person::Third),
                role: SyntaxRole::Predicate,
                details: Some("Present Simple"),
            },
        },
        Rule {
            forms: &["black"],
            entry: Entry {
                pos: PartOfSpeech::Adjective,
                gender: None,
                number: None,
                person: None,
                role: SyntaxRole::Attribute,
                details: None,
            },
        },
    ],
    fallback: Entry {
        pos: PartOfSpeech::Noun,
        gender: None,
        number: Some(Number::Singular),
        person: None,
        role: SyntaxRole::Object,
        details: None,
    },
};

pub fn table(language: Language) -> &'static RuleTable {
    match language {
        Language::Fr => &FRENCH,
        Language::En => &ENGLISH,
    }
}

/// Classifies an already lower-cased, punctuation-free form.
pub fn classify(language: Language, lowercase: &str) -> &'static Entry {
    table(language).classify(lowercase)
}
