//! 测试辅助工具
//!
//! 提供扫描与断言的辅助函数

#![allow(dead_code)]

use std::path::PathBuf;

use stanza_core::{tokenize, Position, Token, TokenType};

/// 扫描输入并返回原始 token 列表（含注释），扫描失败直接 panic
pub fn scan(input: &str) -> Vec<Token> {
    tokenize(input.as_bytes()).unwrap_or_else(|e| panic!("Lex error: {e}"))
}

/// 构造期望的 token
pub fn tok(kind: TokenType, text: &str, line: usize, column: usize) -> Token {
    Token::new(kind, text, Position::new(line, column))
}

/// 构造期望的 EOF token
pub fn eof(line: usize, column: usize) -> Token {
    Token::eof(Position::new(line, column))
}

/// 读取 tests/fixtures 下的文件
pub fn fixture(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}
