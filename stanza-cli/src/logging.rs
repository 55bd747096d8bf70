//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。日志写到 stderr，
//! stdout 留给 token 输出。

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use stanza_config::{LogConfig, Phase};
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry,
};

use crate::config::level_for;

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 按阶段构建过滤规则
pub fn targets(log_config: &LogConfig) -> Targets {
    Targets::new()
        .with_default(level_for(log_config, Phase::Cli))
        .with_target(Phase::Lexer.target(), level_for(log_config, Phase::Lexer))
        .with_target(Phase::Stream.target(), level_for(log_config, Phase::Stream))
        .with_target(Phase::Cli.target(), level_for(log_config, Phase::Cli))
}

/// 使用指定格式和日志配置初始化日志系统
///
/// 指定 `file` 时同时写入该文件（追加，无颜色）。
pub fn init_with_file<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    let targets = targets(log_config);

    let file_layer = match file {
        Some(path) => {
            let handle = OpenOptions::new().create(true).append(true).open(path)?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(handle))
                    .with_filter(targets.clone()),
            )
        }
        None => None,
    };

    let console_layer = console_layer(format).with_filter(targets);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
    Ok(())
}

/// 控制台输出层（stderr）
///
/// 文本格式不带时间戳；JSON 格式保留时间戳并把事件字段展平到顶层。
fn console_layer(format: LogFormat) -> Box<dyn Layer<Registry> + Send + Sync> {
    let base = fmt::layer().with_writer(io::stderr).with_target(true);
    match format {
        LogFormat::Pretty => base.pretty().without_time().boxed(),
        LogFormat::Compact => base.compact().without_time().boxed(),
        LogFormat::Json => base
            .json()
            .flatten_event(true)
            .with_current_span(false)
            .with_span_list(false)
            .boxed(),
    }
}
