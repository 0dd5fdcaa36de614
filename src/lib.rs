//! # 账户管理服务核心库
//!
//! 内部账户信息管理工具：账户增删改查 + Excel 批量导入导出

pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod management;
pub mod normalizer;
pub mod sheet;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AdminError, Result};
