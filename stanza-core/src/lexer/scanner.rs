//! 扫描器（词法状态机）
//!
//! 每轮循环先跳过空白，再根据预读内容按固定优先级分发：
//!
//! ```text
//! //      行注释      读到 \n（不含），去掉末尾 \r
//! /*      块注释      读到 */（不含），缺少闭合则报错
//! ` "     字符串      读到同一引号（不含），缺少闭合则报错，无转义
//! { } ;   标点        单字节
//! <EOF>   结束        生成 EOF token 并停止
//! 其他     标识符      读到空白（消费）或 ;（不消费）或输入结束
//! ```
//!
//! 注释与字符串 token 的位置是开头分隔符之后的位置；其余 token 的位置是首字节的位置。

use tracing::{debug, trace, warn};

use super::core::Lookahead;
use super::error::{LexError, Unterminated};
use super::token::{Token, TokenType};

pub(crate) const TARGET: &str = "stanza::lexer";

/// 分发结果，对应状态机中的各个扫描状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    LineComment,
    BlockComment,
    StringLit(u8),
    Punct(TokenType, u8),
    Ident,
    Done,
}

/// 扫描器
///
/// 独占一次扫描所需的预读缓冲区与位置追踪器；[`scan`](Self::scan) 消费自身，
/// 保证状态不会被跨扫描复用。
pub struct Scanner<'src> {
    input: Lookahead<'src>,
    tokens: Vec<Token>,
}

impl<'src> Scanner<'src> {
    pub fn new(src: &'src [u8]) -> Self {
        Self {
            input: Lookahead::new(src),
            tokens: Vec::new(),
        }
    }

    /// 扫描整个输入
    ///
    /// 成功时返回的列表以唯一的 EOF token 结尾，并包含所有注释；
    /// 失败时不返回任何 token。
    pub fn scan(mut self) -> Result<Vec<Token>, LexError> {
        trace!(target: TARGET, bytes = self.input.remaining(), "Starting scan");

        loop {
            self.skip_whitespace();
            let token = self.next_token()?;
            debug!(target: TARGET,
                kind = %token.kind,
                text = %token.text_lossy(),
                line = token.position.line,
                column = token.position.column,
                "Produced token"
            );
            let done = token.is_eof();
            self.tokens.push(token);
            if done {
                break;
            }
        }

        trace!(target: TARGET, tokens = self.tokens.len(), "Scan finished");
        Ok(self.tokens)
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        match self.dispatch() {
            State::LineComment => Ok(self.scan_line_comment()),
            State::BlockComment => {
                self.scan_delimited(2, b"*/", TokenType::Comment, Unterminated::BlockComment)
            }
            State::StringLit(quote) => {
                let what = if quote == b'`' {
                    Unterminated::BacktickString
                } else {
                    Unterminated::QuotedString
                };
                self.scan_delimited(1, &[quote], TokenType::StringLit, what)
            }
            State::Punct(kind, byte) => {
                let position = self.input.position();
                self.input.discard(1);
                Ok(Token::new(kind, vec![byte], position))
            }
            State::Ident => Ok(self.scan_ident()),
            State::Done => Ok(Token::eof(self.input.position())),
        }
    }

    /// 根据预读内容选择扫描状态（先匹配者优先）
    fn dispatch(&self) -> State {
        if self.input.peek_equals(b"//") {
            return State::LineComment;
        }
        if self.input.peek_equals(b"/*") {
            return State::BlockComment;
        }
        match self.input.peek1() {
            Some(quote @ (b'`' | b'"')) => State::StringLit(quote),
            Some(b'{') => State::Punct(TokenType::LBracket, b'{'),
            Some(b'}') => State::Punct(TokenType::RBracket, b'}'),
            Some(b';') => State::Punct(TokenType::Semicolon, b';'),
            Some(_) => State::Ident,
            None => State::Done,
        }
    }

    /// 跳过空格、制表符与换行（`\r\n` 作为一个单元）
    fn skip_whitespace(&mut self) {
        loop {
            let n = if self.input.peek_equals(b"\r\n") {
                2
            } else if matches!(self.input.peek1(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
                1
            } else {
                return;
            };
            self.input.discard(n);
        }
    }

    /// `// ...` 直到行尾；输入在换行前结束不算错误
    fn scan_line_comment(&mut self) -> Token {
        self.input.discard(2);
        let start = self.input.position();
        let body = self.input.read_until(b"\n", false).text;
        let body = body.strip_suffix(b"\r").unwrap_or(body);
        Token::new(TokenType::Comment, body, start)
    }

    /// 块注释与字符串：跳过开头分隔符后读到闭合分隔符
    fn scan_delimited(
        &mut self,
        opener_len: usize,
        closer: &[u8],
        kind: TokenType,
        what: Unterminated,
    ) -> Result<Token, LexError> {
        self.input.discard(opener_len);
        let start = self.input.position();
        let body = self.input.read_until(closer, false);
        if !body.terminated {
            let position = self.input.position();
            warn!(target: TARGET,
                %what,
                line = position.line,
                column = position.column,
                "Input exhausted before closing delimiter"
            );
            return Err(LexError::Unterminated {
                kind: what,
                position,
                start,
            });
        }
        Ok(Token::new(kind, body.text, start))
    }

    /// 标识符：遇到空白（消费）、`;`（不消费）或输入结束时停止
    fn scan_ident(&mut self) -> Token {
        let start = self.input.position();
        let mut text = Vec::new();

        while let Some(b) = self.input.peek1() {
            match b {
                b';' => break,
                b' ' | b'\t' | b'\n' => {
                    self.input.discard(1);
                    break;
                }
                b'\r' => {
                    let n = if self.input.peek_equals(b"\r\n") { 2 } else { 1 };
                    self.input.discard(n);
                    break;
                }
                _ => {
                    self.input.discard(1);
                    text.push(b);
                }
            }
        }

        Token::new(TokenType::Ident, text, start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::core::Position;

    fn scan(input: &str) -> Vec<Token> {
        Scanner::new(input.as_bytes()).scan().unwrap()
    }

    fn tok(kind: TokenType, text: &str, line: usize, column: usize) -> Token {
        Token::new(kind, text, Position::new(line, column))
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(scan(""), vec![Token::eof(Position::start())]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(scan(" \t\r\n\n  "), vec![Token::eof(Position::new(2, 2))]);
    }

    #[test]
    fn test_one_line() {
        assert_eq!(
            scan("foo bar baz"),
            vec![
                tok(TokenType::Ident, "foo", 0, 0),
                tok(TokenType::Ident, "bar", 0, 4),
                tok(TokenType::Ident, "baz", 0, 8),
                Token::eof(Position::new(0, 11)),
            ]
        );
    }

    #[test]
    fn test_one_line_with_semicolon() {
        assert_eq!(
            scan("foo bar baz; a b;"),
            vec![
                tok(TokenType::Ident, "foo", 0, 0),
                tok(TokenType::Ident, "bar", 0, 4),
                tok(TokenType::Ident, "baz", 0, 8),
                tok(TokenType::Semicolon, ";", 0, 11),
                tok(TokenType::Ident, "a", 0, 13),
                tok(TokenType::Ident, "b", 0, 15),
                tok(TokenType::Semicolon, ";", 0, 16),
                Token::eof(Position::new(0, 17)),
            ]
        );
    }

    #[test]
    fn test_semicolon_without_whitespace() {
        assert_eq!(
            scan("foo bar baz;ab"),
            vec![
                tok(TokenType::Ident, "foo", 0, 0),
                tok(TokenType::Ident, "bar", 0, 4),
                tok(TokenType::Ident, "baz", 0, 8),
                tok(TokenType::Semicolon, ";", 0, 11),
                tok(TokenType::Ident, "ab", 0, 12),
                Token::eof(Position::new(0, 14)),
            ]
        );
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(
            scan("port 456 // this is comment"),
            vec![
                tok(TokenType::Ident, "port", 0, 0),
                tok(TokenType::Ident, "456", 0, 5),
                tok(TokenType::Comment, " this is comment", 0, 11),
                Token::eof(Position::new(0, 27)),
            ]
        );
    }

    #[test]
    fn test_line_comment_strips_cr() {
        assert_eq!(
            scan("// note\r\nx"),
            vec![
                tok(TokenType::Comment, " note", 0, 2),
                tok(TokenType::Ident, "x", 1, 0),
                Token::eof(Position::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_block_comment_positions() {
        let tokens = scan("a /* x\ny */ b");
        assert_eq!(tokens[1], tok(TokenType::Comment, " x\ny ", 0, 4));
        assert_eq!(tokens[2], tok(TokenType::Ident, "b", 1, 5));
        assert_eq!(tokens[3], Token::eof(Position::new(1, 6)));
    }

    #[test]
    fn test_brackets() {
        assert_eq!(
            scan("http {}"),
            vec![
                tok(TokenType::Ident, "http", 0, 0),
                tok(TokenType::LBracket, "{", 0, 5),
                tok(TokenType::RBracket, "}", 0, 6),
                Token::eof(Position::new(0, 7)),
            ]
        );
    }

    #[test]
    fn test_both_quote_styles() {
        assert_eq!(
            scan("a `x y` \"z\""),
            vec![
                tok(TokenType::Ident, "a", 0, 0),
                tok(TokenType::StringLit, "x y", 0, 3),
                tok(TokenType::StringLit, "z", 0, 9),
                Token::eof(Position::new(0, 11)),
            ]
        );
    }

    #[test]
    fn test_quote_inside_quotes_ends_literal() {
        // 引号内的引号直接结束字面量，剩余部分落入标识符
        assert_eq!(
            scan(r#"body "{"name":"x"}""#),
            vec![
                tok(TokenType::Ident, "body", 0, 0),
                tok(TokenType::StringLit, "{", 0, 6),
                tok(TokenType::Ident, r#"name":"x"}""#, 0, 8),
                Token::eof(Position::new(0, 19)),
            ]
        );
    }

    #[test]
    fn test_ident_absorbs_other_punctuation() {
        let tokens = scan("a{ b\"c");
        assert_eq!(tokens[0], tok(TokenType::Ident, "a{", 0, 0));
        assert_eq!(tokens[1], tok(TokenType::Ident, "b\"c", 0, 3));
    }

    #[test]
    fn test_crlf_terminates_ident_once() {
        assert_eq!(
            scan("a\r\nb"),
            vec![
                tok(TokenType::Ident, "a", 0, 0),
                tok(TokenType::Ident, "b", 1, 0),
                Token::eof(Position::new(1, 1)),
            ]
        );
    }

    #[test]
    fn test_lone_cr_terminates_ident() {
        assert_eq!(
            scan("a\rb"),
            vec![
                tok(TokenType::Ident, "a", 0, 0),
                tok(TokenType::Ident, "b", 0, 2),
                Token::eof(Position::new(0, 3)),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment() {
        let err = Scanner::new(b"a /* comment").scan().unwrap_err();
        match err {
            LexError::Unterminated { kind, position, start } => {
                assert_eq!(kind, Unterminated::BlockComment);
                assert_eq!(start, Position::new(0, 4));
                assert_eq!(position, Position::new(0, 12));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unterminated_strings() {
        let err = Scanner::new(b"name `abc").scan().unwrap_err();
        assert!(matches!(
            err,
            LexError::Unterminated { kind: Unterminated::BacktickString, .. }
        ));

        let err = Scanner::new(b"name \"abc\ndef").scan().unwrap_err();
        assert!(matches!(
            err,
            LexError::Unterminated { kind: Unterminated::QuotedString, .. }
        ));
        assert_eq!(err.position(), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_lone_slash_is_ident() {
        let tokens = scan("location / {");
        assert_eq!(tokens[1], tok(TokenType::Ident, "/", 0, 9));
        assert_eq!(tokens[2], tok(TokenType::LBracket, "{", 0, 11));
    }

    #[test]
    fn test_raw_bytes_kept() {
        let tokens = Scanner::new(b"\xFF\xFE;").scan().unwrap();
        assert_eq!(tokens[0].text(), b"\xFF\xFE");
        assert_eq!(tokens[1].kind, TokenType::Semicolon);
    }
}
