//! Token 定义

use std::borrow::Cow;
use std::fmt;

use super::core::Position;

/// Token 类型（封闭枚举）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// 未加引号的单词（指令名或参数值）
    Ident,
    /// 反引号或双引号包裹的字面量，不含引号，不做转义
    StringLit,
    /// `;`
    Semicolon,
    /// `//` 行注释或 `/* */` 块注释，不含注释符
    Comment,
    /// `{`
    LBracket,
    /// `}`
    RBracket,
    /// 输入结束
    Eof,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Ident => "Ident",
            TokenType::StringLit => "StringLit",
            TokenType::Semicolon => "Semicolon",
            TokenType::Comment => "Comment",
            TokenType::LBracket => "LBracket",
            TokenType::RBracket => "RBracket",
            TokenType::Eof => "EOF",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token 结构
///
/// 值类型，生成后不再修改。`text` 保存原始字节。
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenType,
    pub text: Vec<u8>,
    pub position: Position,
}

impl Token {
    pub fn new(kind: TokenType, text: impl Into<Vec<u8>>, position: Position) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    /// 创建 EOF token（文本为空）
    pub fn eof(position: Position) -> Self {
        Self::new(TokenType::Eof, Vec::new(), position)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenType::Eof
    }

    /// 原始字节
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    /// 文本为合法 UTF-8 时返回 `&str`
    pub fn text_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.text).ok()
    }

    /// 文本的有损 UTF-8 表示（用于诊断输出）
    pub fn text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, near: [{}]", self.text_lossy(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenType::Ident, "server_name", Position::new(4, 2));
        assert_eq!(token.to_string(), "server_name, near: [line: 4, col: 2]");
    }

    #[test]
    fn test_eof_token() {
        let token = Token::eof(Position::new(0, 11));
        assert!(token.is_eof());
        assert!(token.text().is_empty());
        assert_eq!(token.to_string(), ", near: [line: 0, col: 11]");
    }

    #[test]
    fn test_text_views() {
        let token = Token::new(TokenType::StringLit, &b"caf\xC3\xA9"[..], Position::start());
        assert_eq!(token.text_str(), Some("café"));

        let raw = Token::new(TokenType::Ident, &b"a\xFFb"[..], Position::start());
        assert_eq!(raw.text_str(), None);
        assert_eq!(raw.text_lossy(), "a\u{FFFD}b");
    }

    #[test]
    fn test_token_type_names() {
        assert_eq!(TokenType::LBracket.to_string(), "LBracket");
        assert_eq!(TokenType::Eof.as_str(), "EOF");
    }
}
