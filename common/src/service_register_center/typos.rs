// 导入 serde 用于序列化和反序列化
use serde::{Deserialize, Serialize};

/// 默认数据中心名称，表示自建机房
pub const DEFAULT_DATA_CENTER_NAME: &str = "MyOwn";

/// 默认数据中心类型标识
pub const DEFAULT_DATA_CENTER_CLASS: &str =
    "com.netflix.appinfo.InstanceInfo$DefaultDataCenterInfo";

/// 注册请求报文
///
/// Eureka要求实例信息包裹在 `instance` 字段中
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RegistrationEnvelope {
    pub instance: InstanceInfo,
}

/// 实例信息
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub instance_id: String,
    pub host_name: String,
    pub app: String,
    pub ip_addr: String,
    pub vip_address: String,
    pub secure_vip_address: String,
    pub status_page_url: String,
    pub home_page_url: String,
    pub health_check_url: String,
    pub port: PortInfo,
    /// 未配置安全端口时不出现在报文中
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_port: Option<PortInfo>,
    pub data_center_info: DataCenterInfo,
}

/// 端口信息，Eureka使用 `{"$": 8080}` 的形式表示端口
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortInfo {
    #[serde(rename = "$")]
    pub value: u16,
}

impl From<u16> for PortInfo {
    fn from(value: u16) -> Self {
        Self { value }
    }
}

/// 数据中心信息
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DataCenterInfo {
    #[serde(rename = "@class")]
    pub class: String,
    pub name: String,
}

impl DataCenterInfo {
    pub fn new(name: Option<&str>) -> Self {
        Self {
            class: DEFAULT_DATA_CENTER_CLASS.to_string(),
            name: name.unwrap_or(DEFAULT_DATA_CENTER_NAME).to_string(),
        }
    }
}

impl Default for DataCenterInfo {
    fn default() -> Self {
        Self::new(None)
    }
}
