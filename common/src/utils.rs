use std::net::IpAddr;

use crate::{Error, Result};

/// 拼接服务地址，例如 `http://10.0.0.5:8080`
pub fn url(https: bool, host: &str, port: u16) -> String {
    let protocol = if https { "https" } else { "http" };
    format!("{}://{}:{}", protocol, host, port)
}

/// 把路径或完整URL解析为完整URL
///
/// 以 `http://` 或 `https://` 开头的值原样返回，其余值视为路径并拼接在 `base` 之后
pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", base, path)
    }
}

/// 获取本机第一个非回环的IPv4地址
pub fn local_ipv4() -> Result<String> {
    let interfaces = if_addrs::get_if_addrs()
        .map_err(|e| Error::AddressResolution(format!("获取网卡列表失败: {}", e)))?;

    first_ipv4(interfaces.iter().map(|iface| iface.ip()))
        .map(|ip| ip.to_string())
        .ok_or_else(|| Error::AddressResolution("未找到非回环的IPv4地址".to_string()))
}

fn first_ipv4(addrs: impl IntoIterator<Item = IpAddr>) -> Option<IpAddr> {
    addrs
        .into_iter()
        .find(|ip| ip.is_ipv4() && !ip.is_loopback())
}
