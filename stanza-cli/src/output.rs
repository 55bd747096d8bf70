//! Token 输出格式

use std::borrow::Cow;

use serde::Serialize;
use stanza_core::Token;

/// 输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// 每行一个 token：`KIND<TAB>line:col<TAB>text`
    Text,
    /// JSON 数组
    Json,
}

/// JSON 输出中的单个 token
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    kind: &'static str,
    text: Cow<'a, str>,
    line: usize,
    column: usize,
}

impl<'a> From<&'a Token> for TokenRecord<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            kind: token.kind.as_str(),
            text: token.text_lossy(),
            line: token.position.line,
            column: token.position.column,
        }
    }
}

pub fn render(tokens: &[Token], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(render_text(tokens)),
        OutputFormat::Json => render_json(tokens),
    }
}

/// 文本格式，控制字符转义以保证一个 token 一行
pub fn render_text(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|t| {
            format!(
                "{}\t{}:{}\t{}\n",
                t.kind,
                t.position.line,
                t.position.column,
                t.text_lossy().escape_debug()
            )
        })
        .collect()
}

pub fn render_json(tokens: &[Token]) -> Result<String, serde_json::Error> {
    let records: Vec<TokenRecord<'_>> = tokens.iter().map(TokenRecord::from).collect();
    serde_json::to_string_pretty(&records)
}
