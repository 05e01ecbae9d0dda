//! Fixed display data owned by the UI, not by the classifier.

use lingvo_protocol::PartOfSpeech;

/// Style key the front end maps to badge colors.
pub fn pos_style(pos: PartOfSpeech) -> &'static str {
    match pos {
        PartOfSpeech::Noun => "noun-blue",
        PartOfSpeech::Verb => "verb-green",
        PartOfSpeech::Adjective => "adjective-purple",
        PartOfSpeech::Adverb => "adverb-orange",
        PartOfSpeech::Pronoun => "pronoun-pink",
        PartOfSpeech::Preposition | PartOfSpeech::Conjunction => "function-gray",
        PartOfSpeech::Article => "article-yellow",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_pos_has_a_style() {
        for pos in PartOfSpeech::ALL {
            assert!(!pos_style(pos).is_empty());
        }
        assert_eq!(pos_style(PartOfSpeech::Preposition), pos_style(PartOfSpeech::Conjunction));
        assert_eq!(pos_style(PartOfSpeech::Article), "article-yellow");
    }
}
