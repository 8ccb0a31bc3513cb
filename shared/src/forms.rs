//! 表单模型
//!
//! 纯数据与校验逻辑，不依赖 DOM。组件层只负责把输入绑定到这些结构上。

use crate::Role;
use crate::fixtures::CASE_CATEGORIES;
use thiserror::Error;

/// 表单校验错误（在表单内联显示）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

// =========================================================
// 注册表单
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Applicant,
        }
    }
}

impl RegistrationForm {
    /// 仅检查两次输入的密码是否一致，不做密码强度或邮箱唯一性校验
    pub fn validate(&self) -> Result<(), FormError> {
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        Ok(())
    }
}

// =========================================================
// 案件提交表单
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Urgent,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [Urgency::Low, Urgency::Normal, Urgency::High, Urgency::Urgent];

    pub fn value(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Low Priority",
            Urgency::Normal => "Normal Priority",
            Urgency::High => "High Priority",
            Urgency::Urgent => "Urgent",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|u| u.value() == value)
            .unwrap_or_default()
    }
}

/// 待上传文件（只保留展示所需的元信息）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDraft {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CaseDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub urgency: Urgency,
    pub preferred_date: Option<String>,
    pub documents: Vec<DocumentDraft>,
}

impl CaseDraft {
    /// 追加文件，保持选择顺序
    pub fn add_documents(&mut self, files: impl IntoIterator<Item = DocumentDraft>) {
        self.documents.extend(files);
    }

    /// 按下标移除文件，越界时不做任何事
    pub fn remove_document(&mut self, index: usize) -> Option<DocumentDraft> {
        (index < self.documents.len()).then(|| self.documents.remove(index))
    }

    /// 设置期望日期，空字符串视为未填写
    pub fn set_preferred_date(&mut self, value: String) {
        self.preferred_date = if value.trim().is_empty() {
            None
        } else {
            Some(value)
        };
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingField("title"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::MissingField("description"));
        }
        if self.category.is_empty() {
            return Err(FormError::MissingField("category"));
        }
        if !CASE_CATEGORIES.contains(&self.category.as_str()) {
            return Err(FormError::UnknownCategory(self.category.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(name: &str, size: u64) -> DocumentDraft {
        DocumentDraft {
            name: name.to_string(),
            size,
        }
    }

    fn filled_draft() -> CaseDraft {
        CaseDraft {
            title: "Unpaid invoice".into(),
            description: "Supplier refuses to pay".into(),
            category: "Commercial Disputes".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_registration_password_mismatch() {
        let form = RegistrationForm {
            password: "secret1".into(),
            confirm_password: "secret2".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));
        assert_eq!(FormError::PasswordMismatch.to_string(), "Passwords do not match");
    }

    #[test]
    fn test_registration_accepts_matching_passwords_without_policy() {
        let form = RegistrationForm {
            password: "a".into(),
            confirm_password: "a".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_case_draft_requires_fields_in_order() {
        let mut draft = CaseDraft::default();
        assert_eq!(draft.validate(), Err(FormError::MissingField("title")));
        draft.title = "t".into();
        assert_eq!(draft.validate(), Err(FormError::MissingField("description")));
        draft.description = "d".into();
        assert_eq!(draft.validate(), Err(FormError::MissingField("category")));
        draft.category = "Space Law".into();
        assert!(matches!(draft.validate(), Err(FormError::UnknownCategory(_))));
        assert_eq!(filled_draft().validate(), Ok(()));
    }

    #[test]
    fn test_documents_accumulate_and_remove_by_index() {
        let mut draft = filled_draft();
        draft.add_documents([doc("a.pdf", 10), doc("b.pdf", 20)]);
        draft.add_documents([doc("c.pdf", 30)]);
        assert_eq!(draft.documents.len(), 3);

        assert_eq!(draft.remove_document(1), Some(doc("b.pdf", 20)));
        let names: Vec<_> = draft.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "c.pdf"]);

        assert_eq!(draft.remove_document(5), None);
        assert_eq!(draft.documents.len(), 2);
    }

    #[test]
    fn test_urgency_defaults_to_normal() {
        assert_eq!(CaseDraft::default().urgency, Urgency::Normal);
        assert_eq!(Urgency::from_value("urgent"), Urgency::Urgent);
        assert_eq!(Urgency::from_value("whenever"), Urgency::Normal);
    }

    #[test]
    fn test_blank_preferred_date_is_none() {
        let mut draft = CaseDraft::default();
        draft.set_preferred_date("  ".into());
        assert_eq!(draft.preferred_date, None);
        draft.set_preferred_date("2024-03-01".into());
        assert_eq!(draft.preferred_date.as_deref(), Some("2024-03-01"));
    }
}
