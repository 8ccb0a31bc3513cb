use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod chat;
pub mod dictionary;
pub mod fixtures;
pub mod format;
pub mod forms;
pub mod locale;

pub use dictionary::Dictionary;
pub use locale::{LOCALES, Locale, LocaleCode};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 当前登录身份在本地存储中的键
pub const STORAGE_KEY_USER: &str = "user";
/// 当前语言代码在本地存储中的键
pub const STORAGE_KEY_LANGUAGE: &str = "language";
/// 可选的运行时配置覆盖（JSON）
pub const STORAGE_KEY_CONFIG: &str = "mediasi.config";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 用户角色
///
/// 持久化数据中出现未知角色时反序列化为 `Unrecognized`，
/// 任何面板都不会认领它。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Applicant,
    Mediator,
    Admin,
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// 表单中可选择的角色（按显示顺序）
    pub const SELECTABLE: [Role; 3] = [Role::Applicant, Role::Mediator, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Applicant => "applicant",
            Role::Mediator => "mediator",
            Role::Admin => "admin",
            Role::Unrecognized => "unrecognized",
        }
    }

    /// 解析 `<select>` 的取值，未知值回落为 `Applicant`（表单默认项）
    pub fn from_form_value(value: &str) -> Self {
        match value {
            "mediator" => Role::Mediator,
            "admin" => Role::Admin,
            _ => Role::Applicant,
        }
    }

    /// 角色名称的翻译键
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::Applicant => "role.applicant",
            Role::Mediator => "role.mediator",
            Role::Admin => "role.admin",
            Role::Unrecognized => "role.unrecognized",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 已认证身份
///
/// 以 camelCase JSON 写入本地存储，刷新页面后据此恢复会话。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    /// 注册产生的新身份：id 取自创建时间的毫秒数，默认未验证
    pub fn unverified(
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            name: name.into(),
            email: email.into(),
            role,
            verified: false,
            created_at,
        }
    }

    /// 是否与登录表单提交的 (email, role) 匹配
    pub fn matches(&self, email: &str, role: Role) -> bool {
        self.email == email && self.role == role
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Identity {
        Identity {
            id: "2".into(),
            name: "Jane Smith".into(),
            email: "jane@example.com".into(),
            role: Role::Mediator,
            verified: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_identity_json_uses_camel_case_keys() {
        let json = serde_json_wasm::to_string(&sample()).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"role\":\"mediator\""));
    }

    #[test]
    fn test_unknown_role_deserializes_as_unrecognized() {
        let json = r#"{"id":"9","name":"X","email":"x@example.com","role":"auditor","verified":true,"createdAt":"2024-01-15T08:00:00Z"}"#;
        let identity: Identity = serde_json_wasm::from_str(json).unwrap();
        assert_eq!(identity.role, Role::Unrecognized);
    }

    #[test]
    fn test_unverified_identity_takes_id_from_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let identity = Identity::unverified("Ana", "ana@example.com", Role::Applicant, at);
        assert_eq!(identity.id, at.timestamp_millis().to_string());
        assert!(!identity.verified);
    }

    #[test]
    fn test_matches_requires_email_and_role() {
        let jane = sample();
        assert!(jane.matches("jane@example.com", Role::Mediator));
        assert!(!jane.matches("jane@example.com", Role::Applicant));
        assert!(!jane.matches("JANE@example.com", Role::Mediator));
    }

    #[test]
    fn test_role_form_value_falls_back_to_applicant() {
        assert_eq!(Role::from_form_value("admin"), Role::Admin);
        assert_eq!(Role::from_form_value("mediator"), Role::Mediator);
        assert_eq!(Role::from_form_value(""), Role::Applicant);
    }
}
