//! Stanza Core - Tokenizer for block-directive configuration text (pure logic, no file IO)
//!
//! Contains the byte scanner and the backtracking token stream consumed by
//! external recursive-descent parsers. Grammar, directive semantics and file
//! loading live outside this crate.

use std::io::Read;

pub mod lexer;
pub mod stream;

pub use lexer::{LexError, Position, Scanner, Token, TokenType, Unterminated};
pub use stream::TokenStream;

// Re-export config types from stanza-config
pub use stanza_config::Phase;

/// 扫描整个输入，返回包含注释的原始 token 列表（以 EOF 结尾）
pub fn tokenize(src: &[u8]) -> Result<Vec<Token>, LexError> {
    Scanner::new(src).scan()
}

/// 扫描整个输入并构造去除注释的 [`TokenStream`]
pub fn parse(src: &[u8]) -> Result<TokenStream, LexError> {
    tokenize(src).map(TokenStream::new)
}

/// 从任意字节源读取全部内容后扫描
pub fn parse_reader<R: Read>(mut reader: R) -> Result<TokenStream, LexError> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    parse(&buf)
}
