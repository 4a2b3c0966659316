//! Raw token definitions for the ACIP scanner
//!
//! This module defines the five raw token classes the scanner can produce.
//! The classes are defined using the logos derive macro for efficient
//! deterministic longest-match tokenization. The exact character classes are
//! an internal grammar detail; the stable contract is the five-kind
//! classification exposed through [TokenKind].

use logos::Logos;

use crate::acip::stream::TokenKind;

/// All raw token classes in ACIP transliteration text
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawToken {
    /// Bracketed commentary, e.g. `[FIRST FOLIO MISSING]`
    #[regex(r"\[[^\[\]]*\]")]
    Comment,

    /// Folio/page reference, e.g. `@001A` or `@12B`
    #[regex(r"@[0-9]{1,4}[A-Za-z]?")]
    FolioNumber,

    /// A run of digits
    #[regex(r"[0-9]+")]
    Number,

    /// Word text: ACIP letters, apostrophes, stack marks, with embedded dots
    /// kept as long as the dot is not followed by whitespace
    #[regex(r"[A-Za-z'][A-Za-z'+]*(\.[A-Za-z'+]+)*")]
    Word,

    /// A single separating punctuation character
    #[regex(r#"[.,;:!?/\\|=_*#%&(){}<>"~^$@+\[\]`-]"#)]
    Punctuation,
}

impl RawToken {
    /// The stable classification for this raw token class.
    pub fn kind(self) -> TokenKind {
        match self {
            RawToken::Word => TokenKind::Word,
            RawToken::Comment => TokenKind::Comment,
            RawToken::FolioNumber => TokenKind::FolioNumber,
            RawToken::Number => TokenKind::Number,
            RawToken::Punctuation => TokenKind::Punctuation,
        }
    }

    /// Check if this raw token is word text
    pub fn is_word(self) -> bool {
        matches!(self, RawToken::Word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_tokens(source: &str) -> Vec<RawToken> {
        RawToken::lexer(source).map(|t| t.unwrap()).collect()
    }

    #[test]
    fn test_word_tokens() {
        assert_eq!(raw_tokens("SEMS"), vec![RawToken::Word]);
        assert_eq!(
            raw_tokens("SEMS NYID"),
            vec![RawToken::Word, RawToken::Word]
        );
    }

    #[test]
    fn test_word_with_apostrophe_and_stack() {
        // ACIP uses apostrophes ('GRO) and plus signs for stacks (B+RGYAD)
        assert_eq!(raw_tokens("'GRO"), vec![RawToken::Word]);
        assert_eq!(raw_tokens("B+RGYAD"), vec![RawToken::Word]);
    }

    #[test]
    fn test_dot_not_followed_by_whitespace_stays_in_word() {
        // The dot between E and G is followed by a letter, so it stays inside
        let mut lexer = RawToken::lexer("E.G DONE");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Word)));
        assert_eq!(lexer.slice(), "E.G");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Word)));
        assert_eq!(lexer.slice(), "DONE");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_dot_followed_by_whitespace_splits_off() {
        let mut lexer = RawToken::lexer("E.G. DONE");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Word)));
        assert_eq!(lexer.slice(), "E.G");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Punctuation)));
        assert_eq!(lexer.slice(), ".");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Word)));
        assert_eq!(lexer.slice(), "DONE");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_number_tokens() {
        assert_eq!(raw_tokens("108"), vec![RawToken::Number]);
        assert_eq!(
            raw_tokens("10 20"),
            vec![RawToken::Number, RawToken::Number]
        );
    }

    #[test]
    fn test_folio_number() {
        let mut lexer = RawToken::lexer("@001A");
        assert_eq!(lexer.next(), Some(Ok(RawToken::FolioNumber)));
        assert_eq!(lexer.slice(), "@001A");
        assert_eq!(lexer.next(), None);

        // Without the side letter
        assert_eq!(raw_tokens("@12"), vec![RawToken::FolioNumber]);
    }

    #[test]
    fn test_bare_at_sign_is_punctuation() {
        assert_eq!(raw_tokens("@"), vec![RawToken::Punctuation]);
    }

    #[test]
    fn test_comment_run() {
        let mut lexer = RawToken::lexer("[FIRST FOLIO MISSING]");
        assert_eq!(lexer.next(), Some(Ok(RawToken::Comment)));
        assert_eq!(lexer.slice(), "[FIRST FOLIO MISSING]");
        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn test_unclosed_bracket_is_punctuation() {
        // No closing bracket, so the automaton falls back to the single char
        assert_eq!(
            raw_tokens("[SEMS"),
            vec![RawToken::Punctuation, RawToken::Word]
        );
    }

    #[test]
    fn test_punctuation_separates_words() {
        assert_eq!(
            raw_tokens("SEMS,NYID"),
            vec![RawToken::Word, RawToken::Punctuation, RawToken::Word]
        );
    }

    #[test]
    fn test_shad_and_tsheg_marks() {
        // The ACIP shad (/) and other separators each scan as one match
        assert_eq!(
            raw_tokens("/ ; | !"),
            vec![
                RawToken::Punctuation,
                RawToken::Punctuation,
                RawToken::Punctuation,
                RawToken::Punctuation
            ]
        );
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(RawToken::Word.kind(), TokenKind::Word);
        assert_eq!(RawToken::Comment.kind(), TokenKind::Comment);
        assert_eq!(RawToken::FolioNumber.kind(), TokenKind::FolioNumber);
        assert_eq!(RawToken::Number.kind(), TokenKind::Number);
        assert_eq!(RawToken::Punctuation.kind(), TokenKind::Punctuation);
        assert!(RawToken::Word.is_word());
        assert!(!RawToken::Number.is_word());
    }
}
