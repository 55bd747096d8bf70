//! 源代码位置追踪
//!
//! 行号与列号均从 0 开始，按字节计数（不做 UTF-8 解码）。

use std::fmt;

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct Position {
    /// 行号，0-based
    pub line: usize,
    /// 列号，0-based，字节计数
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 文件起始位置 (0, 0)
    pub fn start() -> Self {
        Self::default()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, col: {}", self.line, self.column)
    }
}

/// 位置追踪器
///
/// 每消费一个字节调用一次 [`advance`](Self::advance)：
/// - `\n`：行号 +1，列号归零
/// - 其他字节（包括单独的 `\r`）：列号 +1
///
/// `\r\n` 因此总是作为一个换行单元：`\r` 带来的列增量会被紧随其后的 `\n` 归零。
#[derive(Debug, Clone, Default)]
pub struct PositionTracker {
    line: usize,
    column: usize,
}

impl PositionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前位置快照
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// 前进一个字节
    pub fn advance(&mut self, byte: u8) {
        if byte == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    /// 依次前进多个字节
    pub fn advance_all(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.advance(b);
        }
    }
}
