//! Canned sentences used to pre-fill the input box.

use lingvo_protocol::Language;

const FRENCH: &[&str] = &[
    "Le chat noir mange.",
    "Les étudiants écrivent rapidement.",
    "La belle maison est grande.",
];

const ENGLISH: &[&str] = &[
    "The black cat eats.",
    "Students write quickly.",
    "The beautiful house is big.",
];

pub fn examples(language: Language) -> &'static [&'static str] {
    match language {
        Language::Fr => FRENCH,
        Language::En => ENGLISH,
    }
}

pub fn example(language: Language, index: usize) -> Option<&'static str> {
    examples(language).get(index).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_examples_per_language() {
        for language in Language::ALL {
            assert_eq!(examples(language).len(), 3);
        }
        assert_eq!(example(Language::En, 0), Some("The black cat eats."));
        assert_eq!(example(Language::Fr, 3), None);
    }
}
