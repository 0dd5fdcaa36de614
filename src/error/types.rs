//! # 错误类型定义

use thiserror::Error;

/// 应用主要错误类型
#[derive(Debug, Error)]
pub enum AdminError {
    /// 配置相关错误
    #[error("配置错误: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 数据库相关错误
    #[error("数据库错误: {message}")]
    Database {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 输入校验错误（如必填项缺失）
    #[error("校验错误: {message}")]
    Validation { message: String },

    /// 不支持的上传文件类型
    #[error("不支持的文件格式: {message}")]
    UnsupportedFile { message: String },

    /// 导入文件解析/处理失败
    #[error("导入失败: {message}")]
    Import {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// 资源不存在
    #[error("资源不存在: {message}")]
    NotFound { message: String },

    /// IO相关错误
    #[error("IO错误: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// 系统内部错误
    #[error("内部错误: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl AdminError {
    /// 配置错误
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// 数据库错误
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
            source: None,
        }
    }

    /// 校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// 不支持的文件类型
    pub fn unsupported_file(message: impl Into<String>) -> Self {
        Self::UnsupportedFile {
            message: message.into(),
        }
    }

    /// 导入错误
    pub fn import(message: impl Into<String>) -> Self {
        Self::Import {
            message: message.into(),
            source: None,
        }
    }

    /// 带原始错误的导入错误
    pub fn import_with_source(message: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Import {
            message: message.into(),
            source: Some(source),
        }
    }

    /// 资源不存在
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// 内部错误
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            source: None,
        }
    }
}

impl From<sea_orm::DbErr> for AdminError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database {
            message: err.to_string(),
            source: Some(anyhow::Error::new(err)),
        }
    }
}

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            source: err,
        }
    }
}
