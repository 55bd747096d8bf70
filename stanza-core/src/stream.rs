//! 可回溯的 Token 流
//!
//! 供外部递归下降解析器使用：游标前进、预读，以及基于栈的断点/回滚。
//! 回滚只移动游标，不会重新扫描任何字节。
//!
//! ```ignore
//! let mut stream = stanza_core::parse(b"listen 80;")?;
//! stream.break_point();
//! if !try_block(&mut stream) {
//!     stream.rollback(); // 撤销 try_block 消费的 token
//! } else {
//!     stream.commit();
//! }
//! ```

use tracing::{debug, trace};

use crate::lexer::{Token, TokenType};

pub(crate) const TARGET: &str = "stanza::stream";

/// Token 流
///
/// 构造时移除所有注释 token；之后 token 序列不可变，只有游标和断点栈会变化。
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    /// 断点栈（LIFO），保存游标下标
    break_points: Vec<usize>,
}

impl TokenStream {
    /// 从完整的 token 列表构造，丢弃所有注释
    pub fn new(tokens: Vec<Token>) -> Self {
        let total = tokens.len();
        let tokens: Vec<Token> = tokens
            .into_iter()
            .filter(|t| t.kind != TokenType::Comment)
            .collect();
        debug!(target: TARGET,
            kept = tokens.len(),
            dropped_comments = total - tokens.len(),
            "Built token stream"
        );
        Self {
            tokens,
            cursor: 0,
            break_points: Vec::new(),
        }
    }

    /// 当前游标处的 token（不前进）；游标越过末尾时返回 `None`
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// 在当前游标压入断点
    pub fn break_point(&mut self) {
        self.break_points.push(self.cursor);
        trace!(target: TARGET, cursor = self.cursor, depth = self.break_points.len(), "Break point");
    }

    /// 回到最近一个断点并弹出它；没有断点时什么也不做
    pub fn rollback(&mut self) {
        if let Some(mark) = self.break_points.pop() {
            trace!(target: TARGET, from = self.cursor, to = mark, "Rollback");
            self.cursor = mark;
        }
    }

    /// 弹出最近一个断点但保留当前游标（推测解析成功）；没有断点时什么也不做
    pub fn commit(&mut self) {
        if let Some(mark) = self.break_points.pop() {
            trace!(target: TARGET, mark, cursor = self.cursor, "Commit");
        }
    }

    /// 当前游标下标
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 尚未关闭的断点数量
    pub fn depth(&self) -> usize {
        self.break_points.len()
    }

    /// 过滤后的 token 总数（含 EOF）
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// 游标之后（含游标处）剩余的 token 数量
    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.cursor)
    }

    /// 过滤后的完整 token 序列
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl Iterator for TokenStream {
    type Item = Token;

    /// 返回当前 token 并前进一步
    fn next(&mut self) -> Option<Token> {
        let token = self.peek().cloned()?;
        self.cursor += 1;
        Some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}
