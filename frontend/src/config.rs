//! 运行时配置
//!
//! 默认值即生产配置；本地存储 `mediasi.config` 中的 JSON 可以覆盖任意字段。

use std::time::Duration;

use mediasi_shared::{STORAGE_KEY_CONFIG, STORAGE_KEY_LANGUAGE, STORAGE_KEY_USER};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::web::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// 当前身份的存储键
    pub session_key: String,
    /// 当前语言代码的存储键
    pub locale_key: String,
    pub sign_in_latency_ms: u64,
    pub sign_up_latency_ms: u64,
    pub case_submission_latency_ms: u64,
    pub chatbot_latency_ms: u64,
    /// `trace | debug | info | warn | error`
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session_key: STORAGE_KEY_USER.to_string(),
            locale_key: STORAGE_KEY_LANGUAGE.to_string(),
            sign_in_latency_ms: 1000,
            sign_up_latency_ms: 1000,
            case_submission_latency_ms: 2000,
            chatbot_latency_ms: 2000,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// 解析 JSON 覆盖，缺失的字段取默认值
    pub fn from_json(json: &str) -> AppResult<Self> {
        let config: Self = serde_json_wasm::from_str(json)
            .map_err(|e| AppError::from(e).in_op("config.parse"))?;
        config.level()?;
        Ok(config)
    }

    /// 从存储加载配置
    ///
    /// 覆盖无法读取或解析时使用默认值；只有日志级别无效时保留其余字段。
    /// 问题随配置一并返回，由调用方在日志就绪后输出。
    pub fn load(storage: &dyn KeyValueStore) -> (Self, Option<AppError>) {
        let json = match storage.get(STORAGE_KEY_CONFIG) {
            Ok(Some(json)) => json,
            Ok(None) => return (Self::default(), None),
            Err(e) => {
                let e = AppError::from(e).in_op_with("storage.get", STORAGE_KEY_CONFIG);
                return (Self::default(), Some(e));
            }
        };

        match serde_json_wasm::from_str::<Self>(&json) {
            Ok(mut config) => match config.level() {
                Ok(_) => (config, None),
                Err(e) => {
                    config.log_level = Self::default().log_level;
                    (config, Some(e))
                }
            },
            Err(e) => (Self::default(), Some(AppError::from(e).in_op("config.parse"))),
        }
    }

    pub fn level(&self) -> AppResult<tracing::Level> {
        self.log_level.parse().map_err(|_| {
            AppError::config(format!("unknown log level `{}`", self.log_level))
                .in_op("config.level")
        })
    }

    pub fn sign_in_latency(&self) -> Duration {
        Duration::from_millis(self.sign_in_latency_ms)
    }

    pub fn sign_up_latency(&self) -> Duration {
        Duration::from_millis(self.sign_up_latency_ms)
    }

    pub fn case_submission_latency(&self) -> Duration {
        Duration::from_millis(self.case_submission_latency_ms)
    }

    pub fn chatbot_latency(&self) -> Duration {
        Duration::from_millis(self.chatbot_latency_ms)
    }
}
