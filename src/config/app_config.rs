//! # 应用配置结构定义

use crate::error::{AdminError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 应用主配置结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// HTTP服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// 数据库连接URL
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://data/accounts.db".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
        }
    }
}

impl AppConfig {
    /// 加载配置：config.toml（可选）+ ADMIN_* 环境变量覆盖
    pub fn load() -> Result<Self> {
        let mut config = if Path::new("config.toml").exists() {
            let content = std::fs::read_to_string("config.toml")?;
            toml::from_str(&content)
                .map_err(|e| AdminError::config(format!("解析 config.toml 失败: {e}")))?
        } else {
            Self::default()
        };

        if let Ok(addr) = std::env::var("ADMIN_BIND_ADDRESS") {
            config.server.bind_address = addr;
        }
        if let Ok(port) = std::env::var("ADMIN_PORT") {
            config.server.port = port
                .parse()
                .map_err(|e| AdminError::config(format!("无效的 ADMIN_PORT: {e}")))?;
        }
        if let Ok(url) = std::env::var("ADMIN_DATABASE_URL") {
            config.database.url = url;
        }

        Ok(config)
    }
}
