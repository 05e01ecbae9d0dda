pub mod parser;
pub mod request;
pub mod token;

use lingvo_lexicon::RuleTable;
use lingvo_protocol::{AnalyzedWord, Language};
use tracing::debug;

use crate::parser::split_tokens;

pub use request::{AnalysisResponse, AnalyzeRequest, RequestError, ValidRequest};

/// Word classifier bound to one language's rule table.
pub struct Analyzer {
    language: Language,
    table: &'static RuleTable,
}

impl Analyzer {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            table: lingvo_lexicon::table(language),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Text -> one annotated record per whitespace-delimited token, in order.
    ///
    /// Total over any input. Callers gate blank sentences themselves; a blank
    /// sentence simply yields no records here.
    pub fn analyze(&self, sentence: &str) -> Vec<AnalyzedWord> {
        let words: Vec<AnalyzedWord> = split_tokens(sentence)
            .iter()
            .map(|token| {
                let clean = token.clean();
                let entry = self.table.classify(&clean.to_lowercase());
                entry.annotate(clean)
            })
            .collect();

        debug!(language = %self.language, tokens = words.len(), "analyzed sentence");
        words
    }
}

/// Classifies every token of `sentence` with the `language` rule table.
pub fn analyze(sentence: &str, language: Language) -> Vec<AnalyzedWord> {
    Analyzer::new(language).analyze(sentence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lingvo_protocol::{Gender, Number, PartOfSpeech, Person, SyntaxRole};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn word(
        text: &str,
        pos: PartOfSpeech,
        gender: Option<Gender>,
        number: Option<Number>,
        person: Option<Person>,
        role: SyntaxRole,
        details: Option<&str>,
    ) -> AnalyzedWord {
        AnalyzedWord {
            word: text.to_string(),
            pos,
            pos_ru: pos.label_ru().to_string(),
            gender,
            number,
            person,
            syntax_role: Some(role),
            syntax_role_ru: Some(role.label_ru().to_string()),
            details: details.map(str::to_string),
        }
    }

    #[test]
    fn test_french_example_sentence() {
        let words = analyze("Le chat noir mange.", Language::Fr);

        assert_eq!(
            words,
            vec![
                word("Le", PartOfSpeech::Article, Some(Gender::Masculine), Some(Number::Singular), None, SyntaxRole::Determiner, None),
                word("chat", PartOfSpeech::Noun, Some(Gender::Masculine), Some(Number::Singular), None, SyntaxRole::Subject, Some("chat (masc.) - cat")),
                word("noir", PartOfSpeech::Adjective, Some(Gender::Masculine), Some(Number::Singular), None, SyntaxRole::Attribute, Some("agrees with the noun")),
                word("mange", PartOfSpeech::Verb, None, Some(Number::Singular), Some(Person::Third), SyntaxRole::Predicate, Some("manger, present, 3sg")),
            ]
        );
    }

    #[test]
    fn test_english_example_sentence() {
        let words = analyze("The black cat eats.", Language::En);

        assert_eq!(
            words,
            vec![
                word("The", PartOfSpeech::Article, None, None, None, SyntaxRole::Determiner, None),
                word("black", PartOfSpeech::Adjective, None, None, None, SyntaxRole::Attribute, None),
                word("cat", PartOfSpeech::Noun, None, Some(Number::Singular), None, SyntaxRole::Subject, None),
                word("eats", PartOfSpeech::Verb, None, Some(Number::Singular), Some(Person::Third), SyntaxRole::Predicate, Some("Present Simple")),
            ]
        );
    }

    #[test]
    fn test_unknown_word_falls_back() {
        let words = analyze("Bonjour", Language::Fr);
        assert_eq!(
            words,
            vec![word("Bonjour", PartOfSpeech::Noun, Some(Gender::Masculine), Some(Number::Singular), None, SyntaxRole::Object, None)]
        );

        let words = analyze("Students", Language::En);
        assert_eq!(words[0].gender, None);
        assert_eq!(words[0].number, Some(Number::Singular));
        assert_eq!(words[0].syntax_role, Some(SyntaxRole::Object));
    }

    #[test]
    fn test_plural_article_has_no_gender() {
        let words = analyze("Les étudiants écrivent rapidement.", Language::Fr);
        // One record per whitespace token: the article and three fallbacks.
        assert_eq!(words.len(), 4);

        assert_eq!(words[0].pos, PartOfSpeech::Article);
        assert_eq!(words[0].gender, None);
        assert_eq!(words[0].number, Some(Number::Plural));

        for fallback in &words[1..] {
            assert_eq!(fallback.pos, PartOfSpeech::Noun);
            assert_eq!(fallback.gender, Some(Gender::Masculine));
            assert_eq!(fallback.number, Some(Number::Singular));
            assert_eq!(fallback.syntax_role, Some(SyntaxRole::Object));
            assert_eq!(fallback.details, None);
        }
        assert_eq!(words[1].word, "étudiants");
        assert_eq!(words[3].word, "rapidement");
    }

    #[test]
    fn test_matching_ignores_case_but_output_keeps_it() {
        let words = analyze("Chat MANGE", Language::Fr);
        assert_eq!(words[0].word, "Chat");
        assert_eq!(words[0].pos, PartOfSpeech::Noun);
        assert_eq!(words[0].gender, Some(Gender::Masculine));
        assert_eq!(words[1].word, "MANGE");
        assert_eq!(words[1].pos, PartOfSpeech::Verb);
    }

    #[test]
    fn test_punctuation_only_token_is_kept_empty() {
        let words = analyze("Bonjour !!! chat", Language::Fr);
        assert_eq!(words.len(), 3);
        assert_eq!(words[1].word, "");
        assert_eq!(words[1].pos, PartOfSpeech::Noun);
        assert_eq!(words[1].syntax_role, Some(SyntaxRole::Object));
        assert_eq!(words[2].syntax_role, Some(SyntaxRole::Subject));
    }

    #[test]
    fn test_inner_punctuation_is_stripped_before_matching() {
        let words = analyze("c,a.t!", Language::En);
        assert_eq!(words[0].word, "cat");
        assert_eq!(words[0].syntax_role, Some(SyntaxRole::Subject));
    }

    #[test]
    fn test_analyzer_reports_language() {
        assert_eq!(Analyzer::new(Language::En).language(), Language::En);
    }

    proptest! {
        #[test]
        fn test_analysis_is_idempotent(sentence in "[ a-zA-Zé.,!?;:]{0,40}", en in any::<bool>()) {
            let language = if en { Language::En } else { Language::Fr };
            prop_assert_eq!(analyze(&sentence, language), analyze(&sentence, language));
        }

        #[test]
        fn test_one_record_per_token(sentence in "[ \t\na-zA-Z.,!?;:]{0,40}") {
            let tokens: Vec<&str> = sentence.split_whitespace().collect();
            let words = analyze(&sentence, Language::Fr);
            prop_assert_eq!(words.len(), tokens.len());
            for (word, token) in words.iter().zip(tokens) {
                let expected: String = token.chars().filter(|c| !".,!?;:".contains(*c)).collect();
                prop_assert_eq!(&word.word, &expected);
            }
        }

        #[test]
        fn test_output_has_no_punctuation(sentence in "\\PC{0,40}") {
            for language in Language::ALL {
                for word in analyze(&sentence, language) {
                    prop_assert!(!word.word.contains(token::PUNCTUATION));
                }
            }
        }
    }
}
