// 导入标准库和必要的依赖
use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use crate::config::AppConfig;
use crate::configs::InstanceConfig;
use crate::Error;

// 声明子模块
pub mod eureka;
pub mod typos;

// 导入类型定义
pub use crate::service_register_center::eureka::{resolve_instance, Eureka};
pub use crate::service_register_center::typos::{
    DataCenterInfo, InstanceInfo, PortInfo, RegistrationEnvelope,
};

/// 服务注册接口
#[async_trait]
pub trait ServiceRegister: Send + Sync + Debug {
    /// 向注册中心注册服务实例
    ///
    /// # 参数
    /// * `instance` - 服务实例配置
    ///
    /// # 返回
    /// 注册中心返回204时成功返回 Ok(()), 否则返回 Error
    async fn register(&self, instance: &InstanceConfig) -> Result<(), Error>;
}

/// 创建服务注册中心实例
///
/// # 参数
/// * `config` - 应用配置对象
///
/// # 返回
/// 返回一个实现了 ServiceRegister 特征的 Arc 包装对象
pub fn service_register_center(config: &AppConfig) -> Arc<dyn ServiceRegister> {
    Arc::new(Eureka::from_config(config))
}

/// 使用默认HTTP客户端注册一个服务实例
pub async fn register(instance: &InstanceConfig) -> Result<(), Error> {
    Eureka::new().register(instance).await
}
