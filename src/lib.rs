//! Stanza - Tokenizer for block-directive configuration files
//!
//! Turns text such as `name value; block { ... }` into positioned tokens and
//! hands them to an external recursive-descent parser through a backtracking
//! token stream.
//!
//! # Architecture
//!
//! ```text
//! stanza-config/  - Pure configuration data (log levels, phases)
//! stanza-core/    - Scanner and token stream (no file IO)
//! stanza-cli/     - `stanza` binary (file loading, logging setup, output)
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use stanza_workspace::{parse, TokenType};
//!
//! let mut stream = parse(b"listen 80;").unwrap();
//! stream.break_point();
//! assert_eq!(stream.next().unwrap().kind, TokenType::Ident);
//! stream.rollback();
//! ```

// 重导出常用类型
pub use stanza_core::{
    parse, parse_reader, tokenize, LexError, Phase, Position, Token, TokenStream, TokenType,
    Unterminated,
};
