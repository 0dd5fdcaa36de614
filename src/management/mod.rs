//! # 管理接口模块
//!
//! Axum HTTP 层：路由、统一响应格式、处理器和业务服务

pub mod handlers;
pub mod response;
pub mod routes;
pub mod server;
pub mod services;
