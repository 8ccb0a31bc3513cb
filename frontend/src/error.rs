use std::fmt;

use thiserror::Error;

// =========================================================
// 错误状态枚举
// =========================================================

/// 错误状态枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppErrorStatus {
    /// 本地存储不可用或读写失败
    Storage,
    /// JSON 解析或序列化错误
    Serialization,
    /// 配置内容无效
    Config,
}

impl AppErrorStatus {
    pub fn error_code(&self) -> &'static str {
        match self {
            AppErrorStatus::Storage => "STORAGE_ERROR",
            AppErrorStatus::Serialization => "JSON_PARSE_ERROR",
            AppErrorStatus::Config => "INVALID_CONFIG",
        }
    }
}

// =========================================================
// 存储端口错误
// =========================================================

/// `KeyValueStore` 实现返回的错误
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("storage rejected key `{key}`: {reason}")]
    Rejected { key: String, reason: String },
}

// =========================================================
// 核心错误类型
// =========================================================

/// 应用错误
///
/// - status: 错误类型
/// - message: 错误消息
/// - source: 原始错误（可选）
/// - spans: 操作追踪，如 `session.hydrate -> storage.get(user)`
#[derive(Debug)]
pub struct AppError {
    pub status: AppErrorStatus,
    pub message: String,
    source: Option<Box<dyn std::error::Error + 'static>>,
    spans: Vec<String>,
}

impl AppError {
    pub fn new(status: AppErrorStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            source: None,
            spans: Vec::new(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorStatus::Storage, message)
    }

    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(AppErrorStatus::Serialization, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(AppErrorStatus::Config, message)
    }

    /// 添加操作追踪
    pub fn in_op(mut self, operation: impl Into<String>) -> Self {
        self.spans.push(operation.into());
        self
    }

    /// 添加带细节的操作追踪
    pub fn in_op_with(mut self, operation: impl Into<String>, detail: impl fmt::Display) -> Self {
        self.spans.push(format!("{}({})", operation.into(), detail));
        self
    }

    pub fn with_source<E: std::error::Error + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn error_code(&self) -> &'static str {
        self.status.error_code()
    }

    pub fn spans(&self) -> &[String] {
        &self.spans
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.error_code(), self.message)?;
        if !self.spans.is_empty() {
            write!(f, " | trace: {}", self.spans.join(" -> "))?;
        }
        Ok(())
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_deref()
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;

// =========================================================
// 类型转换实现
// =========================================================

impl From<StorageError> for AppError {
    fn from(e: StorageError) -> Self {
        AppError::storage(e.to_string()).with_source(e)
    }
}

impl From<serde_json_wasm::de::Error> for AppError {
    fn from(e: serde_json_wasm::de::Error) -> Self {
        AppError::serialization(e.to_string()).with_source(e)
    }
}

impl From<serde_json_wasm::ser::Error> for AppError {
    fn from(e: serde_json_wasm::ser::Error) -> Self {
        AppError::serialization(e.to_string()).with_source(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_display_includes_code_and_trace() {
        let err = AppError::storage("quota exceeded")
            .in_op_with("storage.set", "user")
            .in_op("session.persist");
        assert_eq!(
            err.to_string(),
            "[STORAGE_ERROR] quota exceeded | trace: storage.set(user) -> session.persist"
        );
    }

    #[test]
    fn test_storage_error_converts_and_keeps_source() {
        let err: AppError = StorageError::Unavailable.into();
        assert_eq!(err.status, AppErrorStatus::Storage);
        assert!(err.source().is_some());
        assert!(err.spans().is_empty());
    }

    #[test]
    fn test_serde_error_maps_to_serialization() {
        let parse: Result<u32, _> = serde_json_wasm::from_str("not json");
        let err: AppError = parse.unwrap_err().into();
        assert_eq!(err.error_code(), "JSON_PARSE_ERROR");
    }
}
