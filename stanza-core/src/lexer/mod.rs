//! Stanza Lexer
//!
//! 将块状指令配置文本（`name value; block { ... }`）的字节流转换为带行列号的 token 序列。
//! - 单遍、全量：一次扫描到输入结束或第一个致命错误
//! - 按字节处理：标识符与字面量以原始字节返回，不做编码假设
//! - 字面量无转义：引号字符不能出现在同种引号包裹的字面量内

pub mod core;
pub mod error;
pub mod scanner;
pub mod token;

pub use self::core::{Delimited, Lookahead, Position, PositionTracker};
pub use error::{LexError, Unterminated};
pub use scanner::Scanner;
pub use token::{Token, TokenType};
