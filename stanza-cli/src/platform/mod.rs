//! 平台适配层（终端输出格式化）

mod cli;

pub use cli::print_error_with_source;
