use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::configs::InstanceConfig;
use crate::service_register_center::typos::{
    DataCenterInfo, InstanceInfo, PortInfo, RegistrationEnvelope,
};
use crate::service_register_center::ServiceRegister;
use crate::utils::{join_url, local_ipv4, url};
use crate::{Error, Result};

/// Eureka service registry client
#[derive(Debug, Clone)]
pub struct Eureka {
    client: Client,
}

impl Default for Eureka {
    fn default() -> Self {
        Self::new()
    }
}

impl Eureka {
    /// Create a client that keeps reqwest's default timeouts
    pub fn new() -> Self {
        Self::with_client(Client::new())
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Create a client with an overall request timeout
    pub fn with_timeout(timeout: Option<Duration>) -> Self {
        let client = match timeout {
            Some(timeout) => Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_else(|_| Client::new()),
            None => Client::new(),
        };
        Self::with_client(client)
    }

    /// Create a client from application config
    pub fn from_config(config: &AppConfig) -> Self {
        Self::with_timeout(config.service_center.timeout())
    }
}

/// 计算实例的默认值并构建注册报文
///
/// 只有在没有配置IP时才会调用 `local_ip` 获取本机地址
pub fn resolve_instance<F>(config: &InstanceConfig, local_ip: F) -> Result<RegistrationEnvelope>
where
    F: FnOnce() -> Result<String>,
{
    let ip_addr = match config.ip_address() {
        Some(ip) => ip.to_string(),
        None => local_ip()?,
    };

    // 路径拼接在 http://{ip}:{port} 之后，主页和健康检查地址为空时沿用状态页地址
    let base_url = url(false, &ip_addr, config.port);
    let status_page_url = join_url(&base_url, config.status_page_url().unwrap_or_default());
    let home_page_url = config
        .home_page_url()
        .map(|path| join_url(&base_url, path))
        .unwrap_or_else(|| status_page_url.clone());
    let health_check_url = config
        .health_check_url()
        .map(|path| join_url(&base_url, path))
        .unwrap_or_else(|| status_page_url.clone());

    Ok(RegistrationEnvelope {
        instance: InstanceInfo {
            instance_id: config.instance_id.clone(),
            host_name: config.host_name.clone(),
            app: config.app_name.clone(),
            ip_addr,
            vip_address: config.vip_address().to_string(),
            secure_vip_address: config.secure_vip_address().to_string(),
            status_page_url,
            home_page_url,
            health_check_url,
            port: PortInfo::from(config.port),
            secure_port: config.secure_port().map(PortInfo::from),
            data_center_info: DataCenterInfo::new(config.data_center_name()),
        },
    })
}

#[async_trait]
impl ServiceRegister for Eureka {
    async fn register(&self, instance: &InstanceConfig) -> Result<()> {
        let envelope = resolve_instance(instance, local_ipv4)?;
        let body = serde_json::to_vec(&envelope)?;
        let url = instance.registration_url();

        debug!(
            "Registering instance: {} ({}:{}) at {}",
            envelope.instance.instance_id,
            envelope.instance.ip_addr,
            instance.port,
            url
        );

        // 响应体不读取，response 离开作用域时连接被释放
        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::NO_CONTENT {
            return Err(Error::RegistrationRejected(status.as_u16()));
        }

        info!(
            "Instance registered successfully: {} ({})",
            envelope.instance.instance_id, envelope.instance.app
        );
        Ok(())
    }
}
