//! 静态翻译字典
//!
//! 运行期只读。查找缺失的键时原样返回键本身（fallback-to-key），
//! 因此 `translate` 是全函数，永远不会失败。

use crate::LocaleCode;
use std::collections::HashMap;
use std::sync::LazyLock;

const ID_STRINGS: &[(&str, &str)] = &[
    ("nav.home", "Beranda"),
    ("nav.about", "Tentang Kami"),
    ("nav.services", "Layanan"),
    ("nav.register", "Daftar"),
    ("nav.login", "Masuk"),
    ("nav.logout", "Keluar"),
    ("nav.dashboard", "Dashboard"),
    ("hero.title", "Sistem Mediasi Online Terpercaya"),
    (
        "hero.subtitle",
        "Solusi mediasi hukum yang cepat, aman, dan profesional dengan bantuan teknologi AI",
    ),
    ("hero.cta", "Mulai Mediasi Sekarang"),
    ("login.title", "Masuk ke Akun Anda"),
    ("login.email", "Email"),
    ("login.password", "Kata Sandi"),
    ("login.role", "Peran"),
    ("login.submit", "Masuk"),
    ("login.register", "Belum punya akun? Daftar di sini"),
    ("login.invalid", "Kredensial tidak valid. Silakan coba lagi."),
    ("register.title", "Buat Akun Baru"),
    ("register.name", "Nama Lengkap"),
    ("register.confirm_password", "Konfirmasi Kata Sandi"),
    ("register.submit", "Daftar"),
    ("register.login", "Sudah punya akun? Masuk di sini"),
    ("register.failed", "Pendaftaran gagal. Silakan coba lagi."),
    ("role.applicant", "Pengaju Mediasi"),
    ("role.mediator", "Mediator"),
    ("role.admin", "Administrator"),
    ("dashboard.welcome", "Selamat Datang"),
    ("dashboard.cases", "Kasus"),
    ("dashboard.new_case", "Kasus Baru"),
    ("dashboard.pending", "Menunggu"),
    ("dashboard.completed", "Selesai"),
    ("case.submit", "Ajukan Kasus Baru"),
    ("case.title", "Judul Kasus"),
    ("case.description", "Deskripsi Kasus"),
    ("case.category", "Kategori"),
    ("case.urgency", "Tingkat Urgensi"),
    ("case.preferred_date", "Tanggal yang Diinginkan"),
    ("case.documents", "Dokumen Pendukung"),
    ("case.submit_btn", "Ajukan Kasus"),
    ("ai.consultation", "Konsultasi AI"),
    ("ai.question", "Pertanyaan Hukum"),
    ("ai.ask", "Tanya AI"),
    ("payment.title", "Pembayaran"),
    ("payment.amount", "Jumlah"),
    ("payment.pay", "Bayar Sekarang"),
    ("admin.users", "Pengguna"),
    ("admin.cases", "Kasus"),
    ("admin.analytics", "Analitik"),
    ("chatbot.title", "Bantuan Hukum AI"),
    ("chatbot.placeholder", "Ketik pertanyaan hukum Anda..."),
];

const EN_STRINGS: &[(&str, &str)] = &[
    ("nav.home", "Home"),
    ("nav.about", "About Us"),
    ("nav.services", "Services"),
    ("nav.register", "Register"),
    ("nav.login", "Login"),
    ("nav.logout", "Logout"),
    ("nav.dashboard", "Dashboard"),
    ("hero.title", "Trusted Online Mediation System"),
    (
        "hero.subtitle",
        "Fast, secure, and professional legal mediation solutions powered by AI technology",
    ),
    ("hero.cta", "Start Mediation Now"),
    ("login.title", "Login to Your Account"),
    ("login.email", "Email"),
    ("login.password", "Password"),
    ("login.role", "Role"),
    ("login.submit", "Login"),
    ("login.register", "Don't have an account? Register here"),
    ("login.invalid", "Invalid credentials. Please try again."),
    ("register.title", "Create New Account"),
    ("register.name", "Full Name"),
    ("register.confirm_password", "Confirm Password"),
    ("register.submit", "Register"),
    ("register.login", "Already have an account? Login here"),
    ("register.failed", "Registration failed. Please try again."),
    ("role.applicant", "Mediation Applicant"),
    ("role.mediator", "Mediator"),
    ("role.admin", "Administrator"),
    ("dashboard.welcome", "Welcome"),
    ("dashboard.cases", "Cases"),
    ("dashboard.new_case", "New Cases"),
    ("dashboard.pending", "Pending"),
    ("dashboard.completed", "Completed"),
    ("case.submit", "Submit New Case"),
    ("case.title", "Case Title"),
    ("case.description", "Case Description"),
    ("case.category", "Category"),
    ("case.urgency", "Urgency Level"),
    ("case.preferred_date", "Preferred Date"),
    ("case.documents", "Supporting Documents"),
    ("case.submit_btn", "Submit Case"),
    ("ai.consultation", "AI Consultation"),
    ("ai.question", "Legal Question"),
    ("ai.ask", "Ask AI"),
    ("payment.title", "Payment"),
    ("payment.amount", "Amount"),
    ("payment.pay", "Pay Now"),
    ("admin.users", "Users"),
    ("admin.cases", "Cases"),
    ("admin.analytics", "Analytics"),
    ("chatbot.title", "AI Legal Assistant"),
    ("chatbot.placeholder", "Type your legal question..."),
];

static ID: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::from_pairs(ID_STRINGS));
static EN: LazyLock<Dictionary> = LazyLock::new(|| Dictionary::from_pairs(EN_STRINGS));

/// 单一语言的字符串表
#[derive(Debug, Default)]
pub struct Dictionary {
    strings: HashMap<&'static str, &'static str>,
}

impl Dictionary {
    fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        Self {
            strings: pairs.iter().copied().collect(),
        }
    }

    /// 获取指定语言的字典
    pub fn for_locale(code: LocaleCode) -> &'static Dictionary {
        match code {
            LocaleCode::Id => &ID,
            LocaleCode::En => &EN,
        }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.strings.get(key).copied()
    }

    /// 查找翻译，缺失时原样返回键
    pub fn translate(&self, key: &str) -> String {
        match self.get(key) {
            Some(text) => text.to_string(),
            None => key.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.strings.keys().copied()
    }
}

/// 便捷函数：按语言代码翻译
pub fn translate(code: LocaleCode, key: &str) -> String {
    Dictionary::for_locale(code).translate(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_keys_differ_per_locale() {
        assert_eq!(translate(LocaleCode::Id, "nav.home"), "Beranda");
        assert_eq!(translate(LocaleCode::En, "nav.home"), "Home");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(translate(LocaleCode::En, "nav.nowhere"), "nav.nowhere");
        assert_eq!(translate(LocaleCode::Id, ""), "");
    }

    #[test]
    fn test_both_locales_cover_the_same_keys() {
        let id = Dictionary::for_locale(LocaleCode::Id);
        let en = Dictionary::for_locale(LocaleCode::En);
        assert_eq!(id.len(), en.len());
        for key in id.keys() {
            assert!(en.get(key).is_some(), "missing en translation for {key}");
        }
    }

    proptest! {
        #[test]
        fn prop_translate_is_total_and_stable(key in ".{0,40}") {
            for code in [LocaleCode::Id, LocaleCode::En] {
                let first = translate(code, &key);
                let second = translate(code, &key);
                prop_assert_eq!(&first, &second);
                if Dictionary::for_locale(code).get(&key).is_none() {
                    prop_assert_eq!(first, key.clone());
                }
            }
        }
    }
}
