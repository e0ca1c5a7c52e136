use anyhow::Result;
use clap::Parser;
use common::config::{AppConfig, DEFAULT_CONFIG_PATH};
use common::service_register_center::service_register_center;
use tracing::{error, info};

/// 向Eureka注册中心注册一个服务实例
#[derive(Debug, Parser)]
#[command(name = "eureka-register", version, about)]
struct Args {
    /// 配置文件路径，支持 yaml/json/toml
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // 加载 .env 中的环境变量，文件不存在时忽略
    dotenv::dotenv().ok();

    let args = Args::parse();
    let config = AppConfig::from_file(Some(&args.config))?;

    common::logging::init_from_config(&config)?;

    let instance = &config.instance;
    info!(
        "正在注册服务实例 {} 到 {}",
        instance.instance_id,
        instance.registration_url()
    );

    let registry = service_register_center(&config);
    match registry.register(instance).await {
        Ok(()) => {
            info!("服务实例注册成功: {}", instance.instance_id);
            Ok(())
        }
        Err(e) => {
            error!("服务实例注册失败: {}", e);
            Err(e.into())
        }
    }
}
