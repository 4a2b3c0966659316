//! Main module for acip library functionality

pub mod analyzer;
pub mod filters;
pub mod scanner;
pub mod stopwords;
pub mod stream;
pub mod testing;
pub mod tokenizer;

pub use analyzer::AcipAnalyzer;
pub use scanner::Scanner;
pub use stream::{AnalysisError, FinalPosition, Token, TokenKind, TokenSource};
pub use tokenizer::{AcipTokenizer, DEFAULT_MAX_TOKEN_LENGTH};
