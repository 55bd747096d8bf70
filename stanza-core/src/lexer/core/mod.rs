//! Lexer 核心组件
//!
//! - `position`: 行列号追踪
//! - `lookahead`: 字节预读缓冲区

pub mod lookahead;
pub mod position;

pub use lookahead::{Delimited, Lookahead};
pub use position::{Position, PositionTracker};
