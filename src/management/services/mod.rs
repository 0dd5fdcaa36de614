//! # 业务服务层
//!
//! 集中数据库相关的业务逻辑，供 HTTP handler 复用

pub mod accounts;
pub mod transfer;
