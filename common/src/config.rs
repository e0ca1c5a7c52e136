use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use crate::configs::{InstanceConfig, LogConfig, ServiceCenterConfig};

/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "./config/config.yaml";

/// 环境变量前缀，例如 `APP__INSTANCE__PORT=9090`
pub const ENV_PREFIX: &str = "APP";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default)]
    pub service_center: ServiceCenterConfig, // 注册中心客户端配置
    pub instance: InstanceConfig,           // 要注册的服务实例
}

impl AppConfig {
    // 创建一个新的AppConfig实例
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_file(None)
    }

    // 从配置文件和环境变量加载配置
    pub fn from_file(file_path: Option<&str>) -> Result<Self, ConfigError> {
        Self::from_file_with_env_prefix(file_path, ENV_PREFIX)
    }

    pub fn from_file_with_env_prefix(
        file_path: Option<&str>,
        env_prefix: &str,
    ) -> Result<Self, ConfigError> {
        let path = file_path.unwrap_or(DEFAULT_CONFIG_PATH);
        if !Path::new(path).exists() {
            return Err(ConfigError::NotFound(path.to_string()));
        }

        let format = if path.ends_with(".json") {
            FileFormat::Json
        } else if path.ends_with(".yaml") || path.ends_with(".yml") {
            FileFormat::Yaml
        } else {
            FileFormat::Toml
        };

        let config = Config::builder()
            .add_source(File::with_name(path).format(format))
            // 环境变量优先级最高
            .add_source(
                Environment::with_prefix(env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
