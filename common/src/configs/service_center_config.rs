use serde::Deserialize;
use std::time::Duration;

/// 注册中心客户端配置
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ServiceCenterConfig {
    /// 请求超时时间（秒），不配置则使用HTTP客户端的默认行为
    pub timeout: Option<u64>,
}

impl ServiceCenterConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.filter(|secs| *secs > 0).map(Duration::from_secs)
    }
}
