//! 字节预读缓冲区
//!
//! 在内存字节切片上维护读取游标，提供预读（不消费）与消费操作。
//! 所有消费操作都会同步更新 [`PositionTracker`]。

use super::position::{Position, PositionTracker};

/// [`Lookahead::read_until`] 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimited<'src> {
    /// 读取到的字节（是否包含分隔符取决于调用参数）
    pub text: &'src [u8],
    /// 是否找到了分隔符；`false` 表示输入在此之前耗尽
    pub terminated: bool,
}

/// 预读缓冲区
///
/// 由单次扫描独占，不可跨扫描复用。
#[derive(Debug, Clone)]
pub struct Lookahead<'src> {
    src: &'src [u8],
    offset: usize,
    tracker: PositionTracker,
}

impl<'src> Lookahead<'src> {
    pub fn new(src: &'src [u8]) -> Self {
        Self {
            src,
            offset: 0,
            tracker: PositionTracker::new(),
        }
    }

    /// 当前位置
    pub fn position(&self) -> Position {
        self.tracker.position()
    }

    /// 已消费的字节数
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 剩余未消费的字节数
    pub fn remaining(&self) -> usize {
        self.src.len() - self.offset
    }

    pub fn is_eof(&self) -> bool {
        self.offset >= self.src.len()
    }

    /// 预读 n 个字节；剩余不足 n 个时返回 `None`
    pub fn peek(&self, n: usize) -> Option<&'src [u8]> {
        let src: &'src [u8] = self.src;
        src.get(self.offset..self.offset.checked_add(n)?)
    }

    /// 预读下一个字节
    pub fn peek1(&self) -> Option<u8> {
        self.src.get(self.offset).copied()
    }

    /// 接下来的字节是否与 `literal` 完全一致（输入不足时为 `false`）
    pub fn peek_equals(&self, literal: &[u8]) -> bool {
        self.peek(literal.len()) == Some(literal)
    }

    /// 消费 n 个字节
    ///
    /// # Panics
    ///
    /// 调用方必须保证剩余字节数不少于 n；否则说明扫描器本身有缺陷。
    pub fn discard(&mut self, n: usize) {
        assert!(
            n <= self.remaining(),
            "[Bug] discard({}) with only {} bytes remaining",
            n,
            self.remaining()
        );
        let end = self.offset + n;
        self.tracker.advance_all(&self.src[self.offset..end]);
        self.offset = end;
    }

    /// 消费并返回一个字节
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek1()?;
        self.tracker.advance(b);
        self.offset += 1;
        Some(b)
    }

    /// 读取直到遇见 `delimiter`
    ///
    /// 分隔符本身总会被消费；`include` 只决定它是否出现在返回文本中。
    /// 多字节分隔符需要后续字节全部匹配才算命中，例如 `*/` 中单独的 `*` 仍属于正文。
    /// 输入耗尽时返回已读取的全部字节，并将 `terminated` 置为 `false`。
    pub fn read_until(&mut self, delimiter: &[u8], include: bool) -> Delimited<'src> {
        assert!(!delimiter.is_empty(), "[Bug] read_until with empty delimiter");
        let src: &'src [u8] = self.src;
        let start = self.offset;
        let (first, rest) = (delimiter[0], &delimiter[1..]);

        while let Some(b) = self.bump() {
            if b != first || !self.peek_equals(rest) {
                continue;
            }
            let body_end = self.offset - 1;
            self.discard(rest.len());
            let end = if include { self.offset } else { body_end };
            return Delimited {
                text: &src[start..end],
                terminated: true,
            };
        }

        Delimited {
            text: &src[start..],
            terminated: false,
        }
    }
}
