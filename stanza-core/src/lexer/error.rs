//! Lexer 错误类型
//!
//! 扫描错误只有一种来源：输入在闭合分隔符出现之前耗尽。
//! 扫描器内部的不变量被破坏（例如越界 discard）不属于此类，会直接 panic。

use std::fmt;

use thiserror::Error;

use super::core::Position;

/// 缺少闭合分隔符的结构
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unterminated {
    /// `/* ... */`
    BlockComment,
    /// `` `...` ``
    BacktickString,
    /// `"..."`
    QuotedString,
}

impl Unterminated {
    /// 期望的闭合分隔符
    pub fn closer(&self) -> &'static str {
        match self {
            Unterminated::BlockComment => "*/",
            Unterminated::BacktickString => "`",
            Unterminated::QuotedString => "\"",
        }
    }
}

impl fmt::Display for Unterminated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unterminated::BlockComment => write!(f, "block comment"),
            Unterminated::BacktickString => write!(f, "backtick string literal"),
            Unterminated::QuotedString => write!(f, "quoted string literal"),
        }
    }
}

/// 词法错误
#[derive(Debug, Error)]
pub enum LexError {
    /// 输入耗尽时仍未遇到闭合分隔符
    #[error("unterminated {kind} near [{position}], expected `{}` to close it (opened at [{start}])", .kind.closer())]
    Unterminated {
        kind: Unterminated,
        /// 检测到错误的位置（输入末尾）
        position: Position,
        /// 结构开始的位置（开头分隔符之后）
        start: Position,
    },

    /// 读取输入源失败
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}

impl LexError {
    /// 错误位置（IO 错误没有位置）
    pub fn position(&self) -> Option<Position> {
        match self {
            LexError::Unterminated { position, .. } => Some(*position),
            LexError::Io(_) => None,
        }
    }

    /// 获取行号（0-based）
    pub fn line(&self) -> Option<usize> {
        self.position().map(|p| p.line)
    }

    /// 获取列号（0-based）
    pub fn column(&self) -> Option<usize> {
        self.position().map(|p| p.column)
    }
}
