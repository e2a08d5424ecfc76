use super::token::Token;

/// Single-pass tokenizer for comment-stripped source text
///
/// Each of `'`, `(`, `)` becomes its own token; any maximal run of other
/// non-separator characters becomes one word token. Only the literal space
/// and newline characters separate words — tab and carriage return are
/// ordinary word characters here, a quirk of the format kept as-is (see
/// the crate docs).
pub struct Scanner {
    /// Filtered source as a character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Word-accumulation buffer for the token in progress
    word: String,
    /// Current position in source
    current: usize,
}

impl Scanner {
    /// Creates a new scanner over filtered source text
    pub fn new(source: &str) -> Self {
        Scanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            word: String::new(),
            current: 0,
        }
    }

    /// Scans the whole input and returns the tokens in source order.
    ///
    /// Scanning cannot fail: every character is either a delimiter, a
    /// separator, or part of a word.
    pub fn scan_tokens(mut self) -> Vec<Token> {
        while !self.is_at_end() {
            let c = self.advance();
            match c {
                '\'' | '(' | ')' => {
                    self.flush_word();
                    self.tokens.push(Token::new(c.to_string()));
                }
                ' ' | '\n' => self.flush_word(),
                _ => self.word.push(c),
            }
        }
        self.flush_word();
        self.tokens
    }

    /// Emits the buffered word, if any, as a single token
    fn flush_word(&mut self) {
        if !self.word.is_empty() {
            let word = std::mem::take(&mut self.word);
            self.tokens.push(Token::new(word));
        }
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::TokenKind;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text()).collect()
    }

    #[test]
    fn test_simple_list() {
        let tokens = Scanner::new("(head 0)").scan_tokens();
        assert_eq!(texts(&tokens), vec!["(", "head", "0", ")"]);
        assert_eq!(tokens[0].kind(), TokenKind::OpenParen);
        assert_eq!(tokens[1].kind(), TokenKind::Word);
        assert_eq!(tokens[3].kind(), TokenKind::CloseParen);
    }

    #[test]
    fn test_delimiters_split_words() {
        // No whitespace needed around delimiters.
        let tokens = Scanner::new("a(b)'c").scan_tokens();
        assert_eq!(texts(&tokens), vec!["a", "(", "b", ")", "'", "c"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let tokens = Scanner::new("  a \n\n b  ").scan_tokens();
        assert_eq!(texts(&tokens), vec!["a", "b"]);
    }

    #[test]
    fn test_whitespace_only_yields_nothing() {
        assert!(Scanner::new(" \n \n ").scan_tokens().is_empty());
        assert!(Scanner::new("").scan_tokens().is_empty());
    }

    #[test]
    fn test_tab_is_not_a_separator() {
        // Quirk: only space and newline separate, so a tab joins its
        // neighbors into one word.
        let tokens = Scanner::new("a\tb c").scan_tokens();
        assert_eq!(texts(&tokens), vec!["a\tb", "c"]);
    }

    #[test]
    fn test_trailing_word_is_flushed() {
        let tokens = Scanner::new("(x) define").scan_tokens();
        assert_eq!(texts(&tokens), vec!["(", "x", ")", "define"]);
    }
}
