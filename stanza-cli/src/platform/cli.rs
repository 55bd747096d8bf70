//! CLI 格式化输出
//!
//! 提供命令行友好的错误显示和源码上下文打印。

use stanza_core::{LexError, Position};

/// 错误行前后显示的上下文行数
const CONTEXT_LINES: usize = 5;

/// 打印错误并显示源代码上下文
pub fn print_error_with_source(e: &LexError, source: &[u8]) {
    eprintln!("❌ {}", e);

    if let Some(pos) = context_position(e) {
        let text = String::from_utf8_lossy(source);
        eprint!("{}", render_source_context(&text, pos.line + 1, pos.column + 1));
    }
}

/// 上下文标记的位置：未闭合结构指向其开头，而不是输入末尾
///
/// 扫描器位置从 0 开始，调用方显示时转为从 1 开始。
fn context_position(e: &LexError) -> Option<Position> {
    match e {
        LexError::Unterminated { start, .. } => Some(*start),
        LexError::Io(_) => None,
    }
}

/// 渲染源代码上下文（显示错误行前后几行，并在错误列下方标出 `^`）
///
/// `error_line` 与 `error_col` 均为 1-based；行号越界时返回空字符串。
/// 源码以换行结尾时，最后一个换行之后的空行也算作一行（输入末尾的位置落在这里）。
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> String {
    let mut lines: Vec<&str> = source.lines().collect();
    if source.is_empty() || source.ends_with('\n') {
        lines.push("");
    }
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return String::new();
    }

    // 计算要显示的行范围
    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);

    // 计算行号的最大宽度用于对齐
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = format!("{separator}|--\n");
    for line_idx in start_line..=end_line {
        out.push_str(&format!("{:>width$} | {}\n", line_idx, lines[line_idx - 1]));

        if line_idx == error_line {
            // 指向错误位置的标记
            let marker = " ".repeat(error_col.saturating_sub(1));
            out.push_str(&format!("{} | {}^\n", " ".repeat(width), marker));
        }
    }
    out.push_str(&format!("{separator}|--\n"));
    out
}
