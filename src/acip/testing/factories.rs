//! Token factories and a fixed token source for tests

use std::collections::VecDeque;

use crate::acip::stream::{AnalysisError, FinalPosition, Token, TokenKind, TokenSource};

/// A token stream as a plain vector
pub type Tokens = Vec<Token>;

/// Build a token of any kind; end offset is derived from the text length,
/// position increment defaults to 1.
pub fn mk_token(kind: TokenKind, text: &str, start: usize) -> Token {
    Token {
        kind,
        text: text.to_string(),
        start_offset: start,
        end_offset: start + text.len(),
        position_increment: 1,
    }
}

/// Build a WORD token, the kind the tokenizer adapter emits.
pub fn mk_word(text: &str, start: usize) -> Token {
    mk_token(TokenKind::Word, text, start)
}

/// A `TokenSource` over a fixed list of tokens.
///
/// `end` reports the largest end offset among the supplied tokens as the
/// end-of-text position, with no pending increments.
pub struct FixedTokens {
    tokens: VecDeque<Token>,
    final_offset: usize,
    closed: bool,
}

impl FixedTokens {
    pub fn new(tokens: Tokens) -> Self {
        let final_offset = tokens.iter().map(|t| t.end_offset).max().unwrap_or(0);
        FixedTokens {
            tokens: tokens.into(),
            final_offset,
            closed: false,
        }
    }
}

impl TokenSource for FixedTokens {
    fn next_token(&mut self) -> Result<Option<Token>, AnalysisError> {
        if self.closed {
            return Err(AnalysisError::SessionClosed);
        }
        Ok(self.tokens.pop_front())
    }

    fn end(&mut self) -> Result<FinalPosition, AnalysisError> {
        if self.closed {
            return Err(AnalysisError::SessionClosed);
        }
        Ok(FinalPosition {
            offset: self.final_offset,
            position_increment: 0,
        })
    }

    fn close(&mut self) -> Result<(), AnalysisError> {
        self.closed = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mk_token_derives_end_offset() {
        let token = mk_token(TokenKind::Number, "108", 4);
        assert_eq!((token.start_offset, token.end_offset), (4, 7));
        assert_eq!(token.position_increment, 1);
    }

    #[test]
    fn test_fixed_tokens_drains_in_order() {
        let mut source = FixedTokens::new(vec![mk_word("a", 0), mk_word("b", 2)]);
        assert_eq!(source.next_token().unwrap().unwrap().text, "a");
        assert_eq!(source.next_token().unwrap().unwrap().text, "b");
        assert_eq!(source.next_token().unwrap(), None);
        assert_eq!(source.end().unwrap().offset, 3);
    }

    #[test]
    fn test_fixed_tokens_close_is_terminal() {
        let mut source = FixedTokens::new(vec![mk_word("a", 0)]);
        source.close().unwrap();
        assert!(matches!(
            source.next_token(),
            Err(AnalysisError::SessionClosed)
        ));
    }
}
