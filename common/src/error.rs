use thiserror::Error;

/// 注册客户端的错误类型
///
/// 所有错误都原样返回给调用方，客户端内部不做重试，也不记录错误日志
#[derive(Debug, Error)]
pub enum Error {
    /// 未找到可用的本机IPv4地址，或网卡枚举失败
    #[error("本机地址解析失败: {0}")]
    AddressResolution(String),

    /// 注册报文序列化失败，正常输入下不会出现
    #[error("注册报文序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    /// 请求未能发出或未能收到响应（连接被拒、DNS、超时等）
    #[error("注册请求传输失败: {0}")]
    Transport(#[from] reqwest::Error),

    /// 注册中心返回了非204的状态码
    #[error("注册中心拒绝注册，状态码: {0}")]
    RegistrationRejected(u16),

    #[error("配置错误: {0}")]
    Config(#[from] config::ConfigError),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl Error {
    /// 注册中心拒绝时返回对应的HTTP状态码
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::RegistrationRejected(status) => Some(*status),
            _ => None,
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Internal(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_error_carries_status() {
        let err = Error::RegistrationRejected(500);
        assert_eq!(err.status_code(), Some(500));
        assert!(err.to_string().contains("500"));
    }

    #[test]
    fn other_errors_have_no_status() {
        let err = Error::AddressResolution("没有网卡".to_string());
        assert_eq!(err.status_code(), None);
        assert_eq!(Error::from("x").status_code(), None);
    }
}
