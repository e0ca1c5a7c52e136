use serde::{Deserialize, Serialize};

/// 服务实例注册配置
///
/// 描述一个要注册到Eureka注册中心的服务实例。可选字段为空字符串时与未配置等价，
/// 具体的默认值在构建注册报文时计算
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct InstanceConfig {
    /// 注册中心基础地址，例如 `http://localhost:8761/eureka`
    pub registry_base_url: String,
    /// 服务实例的唯一标识
    pub instance_id: String,
    /// 应用名称，同时作为注册中心的分组键和URL路径
    pub app_name: String,
    /// 主机名
    pub host_name: String,
    /// 实例IP，不配置时自动获取本机第一个非回环IPv4地址
    pub ip_address: Option<String>,
    /// 服务端口
    pub port: u16,
    /// 安全端口，仅在配置且不为0时上报
    pub secure_port: Option<u16>,
    /// 状态页地址，可以是路径或完整URL
    pub status_page_url: Option<String>,
    /// 主页地址，为空时使用状态页地址
    pub home_page_url: Option<String>,
    /// 健康检查地址，为空时使用状态页地址
    pub health_check_url: Option<String>,
    /// VIP地址，默认为应用名称
    pub vip_address: Option<String>,
    /// 安全VIP地址，默认为应用名称
    pub secure_vip_address: Option<String>,
    /// 数据中心名称，默认为 `MyOwn`
    pub data_center_name: Option<String>,
}

impl InstanceConfig {
    pub fn new(
        registry_base_url: impl Into<String>,
        instance_id: impl Into<String>,
        app_name: impl Into<String>,
        host_name: impl Into<String>,
        port: u16,
    ) -> Self {
        Self {
            registry_base_url: registry_base_url.into(),
            instance_id: instance_id.into(),
            app_name: app_name.into(),
            host_name: host_name.into(),
            port,
            ..Default::default()
        }
    }

    pub fn ip_address(&self) -> Option<&str> {
        non_empty(&self.ip_address)
    }

    pub fn secure_port(&self) -> Option<u16> {
        self.secure_port.filter(|port| *port != 0)
    }

    pub fn status_page_url(&self) -> Option<&str> {
        non_empty(&self.status_page_url)
    }

    pub fn home_page_url(&self) -> Option<&str> {
        non_empty(&self.home_page_url)
    }

    pub fn health_check_url(&self) -> Option<&str> {
        non_empty(&self.health_check_url)
    }

    /// VIP地址，未配置时为应用名称
    pub fn vip_address(&self) -> &str {
        non_empty(&self.vip_address).unwrap_or(&self.app_name)
    }

    /// 安全VIP地址，未配置时为应用名称
    pub fn secure_vip_address(&self) -> &str {
        non_empty(&self.secure_vip_address).unwrap_or(&self.app_name)
    }

    pub fn data_center_name(&self) -> Option<&str> {
        non_empty(&self.data_center_name)
    }

    /// 注册接口地址: `{registry_base_url}/apps/{app_name}`
    pub fn registration_url(&self) -> String {
        format!(
            "{}/apps/{}",
            self.registry_base_url.trim_end_matches('/'),
            self.app_name
        )
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let config = InstanceConfig {
            ip_address: Some(String::new()),
            vip_address: Some(String::new()),
            secure_port: Some(0),
            ..InstanceConfig::new("http://registry", "demo-1", "DEMO", "host", 8080)
        };

        assert_eq!(config.ip_address(), None);
        assert_eq!(config.secure_port(), None);
        assert_eq!(config.vip_address(), "DEMO");
        assert_eq!(config.secure_vip_address(), "DEMO");
        assert_eq!(config.data_center_name(), None);
    }

    #[test]
    fn registration_url_trims_trailing_slash() {
        let config = InstanceConfig::new("http://localhost:8761/eureka/", "demo-1", "DEMO", "host", 8080);
        assert_eq!(
            config.registration_url(),
            "http://localhost:8761/eureka/apps/DEMO"
        );
    }
}
