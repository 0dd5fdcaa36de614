//! # HTTP 处理器

pub mod accounts;
pub mod system;
pub mod transfer;
