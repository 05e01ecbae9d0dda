use nom::{
    bytes::complete::{take_till1, take_while},
    IResult,
};
use crate::token::{Span, Token};

fn whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

fn chunk(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Splits on runs of whitespace. Leading and trailing whitespace yields no token.
///
/// Whitespace is Unicode `White_Space`: U+0085 separates tokens, U+FEFF does not.
pub fn split_tokens(original_input: &str) -> Vec<Token<'_>> {
    let mut input = original_input;
    let mut tokens = Vec::new();

    loop {
        // 1. Skip the whitespace run
        let (next_input, _) = match whitespace(input) {
            Ok(res) => res,
            Err(_) => break,
        };
        input = next_input;

        if input.is_empty() {
            break;
        }

        // 2. Everything up to the next whitespace is one token
        match chunk(input) {
            Ok((next_input, text)) => {
                // `input` is always a suffix of `original_input`
                let start = original_input.len() - input.len();
                tokens.push(Token {
                    span: Span::new(start, start + text.len()),
                    text,
                });
                input = next_input;
            }
            Err(_) => break,
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        split_tokens(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_on_whitespace_runs() {
        assert_eq!(texts("Le chat  noir\tmange.\n"), vec!["Le", "chat", "noir", "mange."]);
        assert_eq!(texts("  the\u{a0}cat "), vec!["the", "cat"]);
    }

    #[test]
    fn test_unicode_white_space_property_decides_splits() {
        assert_eq!(texts("le\u{85}chat"), vec!["le", "chat"]);
        assert_eq!(texts("le\u{2003}chat"), vec!["le", "chat"]);
        // A byte-order mark is a format character, so it stays in the token
        assert_eq!(texts("\u{feff}le chat"), vec!["\u{feff}le", "chat"]);
    }

    #[test]
    fn test_blank_input_has_no_tokens() {
        assert!(split_tokens("").is_empty());
        assert!(split_tokens(" \t\n ").is_empty());
    }

    #[test]
    fn test_spans_point_into_input() {
        let input = " étudiants écrivent";
        for token in split_tokens(input) {
            assert_eq!(&input[token.span.start..token.span.end], token.text);
        }
        assert_eq!(split_tokens(input)[1].span, Span::new(12, 21));
    }

    #[test]
    fn test_punctuation_only_chunk_is_a_token() {
        assert_eq!(texts("Bonjour ! toi"), vec!["Bonjour", "!", "toi"]);
    }
}
