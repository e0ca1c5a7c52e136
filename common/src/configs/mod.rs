mod instance_config;
mod log_config;
mod service_center_config;

pub use instance_config::*;
pub use log_config::*;
pub use service_center_config::*;
