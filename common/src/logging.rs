use anyhow::Result;
use std::env;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::AppConfig;

// 日志输出格式类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    // 普通文本格式
    Plain,
    // JSON格式，适合ELK等日志聚合系统
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Plain,
        }
    }
}

/// 自定义多组件日志级别，适用于没有配置文件的调用方
pub fn init_with_custom_filter(directives: &[(&str, &str)]) -> Result<()> {
    let mut filter_parts = vec!["info".to_string()]; // 默认全局级别
    for (target, level) in directives {
        filter_parts.push(format!("{}={}", target, level));
    }
    let filter_string = filter_parts.join(",");

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_string));

    fmt()
        .with_env_filter(env_filter)
        .with_ansi(true)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| anyhow::anyhow!("日志系统初始化失败: {}", e))?;

    info!("日志系统初始化成功，使用自定义过滤器");
    Ok(())
}

/// 从配置初始化日志系统
///
/// 环境变量 `RUST_LOG` 优先于配置文件中的日志级别
pub fn init_from_config(config: &AppConfig) -> Result<()> {
    let env_filter = match env::var("RUST_LOG") {
        Ok(filter) => EnvFilter::new(filter),
        Err(_) => EnvFilter::new(config.log.filter_string()),
    };
    let env_filter = check_env_component_overrides(env_filter);

    let log_format = config
        .log
        .format
        .as_deref()
        .map(LogFormat::parse)
        .unwrap_or(LogFormat::Plain);

    let result = match log_format {
        LogFormat::Plain => fmt()
            .with_env_filter(env_filter)
            .with_ansi(true)
            .with_thread_names(true)
            .try_init(),
        LogFormat::Json => fmt()
            .with_env_filter(env_filter)
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_thread_names(true)
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("日志系统初始化失败: {}", e))?;

    info!("日志系统从配置初始化成功，全局级别: {}", config.log.level);
    info!("日志格式: {:?}", log_format);
    if let Some(components) = &config.log.components {
        for (component, level) in components {
            info!("组件 {} 日志级别: {}", component, level);
        }
    }

    Ok(())
}

/// 检查环境变量中是否有组件特定的日志级别覆盖，例如 `RUST_LOG_REQWEST=debug`
fn check_env_component_overrides(mut env_filter: EnvFilter) -> EnvFilter {
    let common_components = ["reqwest", "hyper", "common"];

    for component in &common_components {
        let env_var_name = format!("RUST_LOG_{}", component.to_uppercase());
        if let Ok(level) = env::var(&env_var_name) {
            // 解析失败则忽略
            if let Ok(directive) = format!("{}={}", component, level).parse() {
                env_filter = env_filter.add_directive(directive);
            }
        }
    }

    env_filter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_log_format() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("plain"), LogFormat::Plain);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Plain);
    }
}
