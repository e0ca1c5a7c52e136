use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct LogConfig {
    pub level: String,
    #[serde(default = "default_output")]
    pub output: String,
    pub components: Option<std::collections::HashMap<String, String>>, // 其他组件的日志级别
    pub format: Option<String>,        // 日志输出格式: plain或json
}

fn default_output() -> String {
    "console".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            output: default_output(),
            components: None,
            format: None,
        }
    }
}

impl LogConfig {
    pub fn level(&self) -> tracing::Level {
        match self.level.as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "info" => tracing::Level::INFO,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }

    // 获取特定组件的日志级别
    pub fn component_level(&self, component: &str) -> Option<&str> {
        match &self.components {
            Some(components) => components.get(component).map(|s| s.as_str()),
            None => None,
        }
    }

    /// 拼接EnvFilter使用的过滤器字符串，例如 `info,reqwest=warn`
    pub fn filter_string(&self) -> String {
        let mut filter_parts = vec![self.level.clone()];
        if let Some(components) = &self.components {
            let mut components: Vec<_> = components.iter().collect();
            components.sort();
            for (component, level) in components {
                filter_parts.push(format!("{}={}", component, level));
            }
        }
        filter_parts.join(",")
    }
}
