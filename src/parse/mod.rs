pub mod tokenizer;

pub use tokenizer::{DateToken, PatternError, TokenPattern, tokenize, tokenize_with};
