//! CLI 配置
//!
//! 将 stanza-config 的纯数据配置转换为 tracing 的级别

use stanza_config::{LogConfig, LogLevel, Phase};
use tracing::level_filters::LevelFilter;

/// Convert a configured level into a tracing level filter
pub fn to_tracing(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}

/// Get the tracing level filter for a specific phase
pub fn level_for(config: &LogConfig, phase: Phase) -> LevelFilter {
    to_tracing(config.level_for(phase))
}

/// 读取 JSON 日志配置文件，并用命令行给出的全局级别覆盖
pub fn load_log_config(
    settings: Option<&std::path::Path>,
    global: Option<&str>,
) -> Result<LogConfig, String> {
    let mut config = match settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read '{}': {}", path.display(), e))?;
            LogConfig::from_json(&text)
                .map_err(|e| format!("invalid settings in '{}': {}", path.display(), e))?
        }
        None => LogConfig::default(),
    };

    if let Some(name) = global {
        config.global =
            LogLevel::parse(name).ok_or_else(|| format!("unknown log level '{name}'"))?;
    }

    Ok(config)
}
