//! 语言注册表
//!
//! 注册顺序即显示顺序，第一个条目是首次加载时的默认语言。

use serde::{Deserialize, Serialize};

/// 已注册的语言代码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocaleCode {
    Id,
    En,
}

impl LocaleCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LocaleCode::Id => "id",
            LocaleCode::En => "en",
        }
    }

    /// 解析存储中的语言代码，未注册的代码返回 `None`
    pub fn parse(code: &str) -> Option<Self> {
        LOCALES
            .iter()
            .find(|locale| locale.code.as_str() == code)
            .map(|locale| locale.code)
    }

    /// 对应的注册表条目
    pub fn locale(&self) -> &'static Locale {
        match self {
            LocaleCode::Id => &LOCALES[0],
            LocaleCode::En => &LOCALES[1],
        }
    }
}

impl Default for LocaleCode {
    fn default() -> Self {
        LOCALES[0].code
    }
}

/// 语言元数据
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: LocaleCode,
    pub name: &'static str,
    pub flag: &'static str,
}

pub static LOCALES: [Locale; 2] = [
    Locale {
        code: LocaleCode::Id,
        name: "Bahasa Indonesia",
        flag: "🇮🇩",
    },
    Locale {
        code: LocaleCode::En,
        name: "English",
        flag: "🇺🇸",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_first_registered_locale() {
        assert_eq!(LocaleCode::default(), LocaleCode::Id);
        assert_eq!(LocaleCode::default().locale().name, "Bahasa Indonesia");
    }

    #[test]
    fn test_parse_only_accepts_registered_codes() {
        assert_eq!(LocaleCode::parse("en"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::parse("id"), Some(LocaleCode::Id));
        assert_eq!(LocaleCode::parse("fr"), None);
        assert_eq!(LocaleCode::parse("EN"), None);
        assert_eq!(LocaleCode::parse(""), None);
    }

    #[test]
    fn test_code_points_back_to_its_entry() {
        for locale in LOCALES.iter() {
            assert_eq!(locale.code.locale(), locale);
        }
    }
}
