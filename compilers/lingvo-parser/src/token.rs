/// Characters removed from every token, wherever they occur.
pub const PUNCTUATION: [char; 6] = ['.', ',', '!', '?', ';', ':'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A whitespace-delimited chunk of the input, before punctuation stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub span: Span,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// The token with every punctuation mark removed. May be empty.
    pub fn clean(&self) -> String {
        self.text.chars().filter(|c| !PUNCTUATION.contains(c)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(text: &str) -> Token<'_> {
        Token { span: Span::new(0, text.len()), text }
    }

    #[test]
    fn test_clean_strips_inner_punctuation() {
        assert_eq!(token("mange.").clean(), "mange");
        assert_eq!(token("l'a,b;c:d").clean(), "l'abcd");
        assert_eq!(token("¿qué?").clean(), "¿qué");
    }

    #[test]
    fn test_clean_can_be_empty() {
        assert_eq!(token("?!...").clean(), "");
        assert_eq!(token("?!...").span.len(), 5);
    }
}
