//! 国际化模块
//!
//! - `LocaleStore`: 当前语言 + 持久化，纯 Rust，可脱离 DOM 测试
//! - `I18nContext`: 通过 Context 在组件间共享，语言切换会驱动界面重绘

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use mediasi_shared::{Dictionary, Locale, LocaleCode};

use crate::error::AppError;
use crate::web::KeyValueStore;

type Observer = Rc<dyn Fn(LocaleCode)>;

/// 语言存储
#[derive(Clone)]
pub struct LocaleStore {
    storage: Rc<dyn KeyValueStore>,
    storage_key: String,
    active: Rc<Cell<LocaleCode>>,
    observers: Rc<RefCell<Vec<Observer>>>,
}

impl LocaleStore {
    /// 从持久化存储恢复语言；未存储或代码未注册时使用第一个注册语言
    pub fn restore(storage: Rc<dyn KeyValueStore>, storage_key: impl Into<String>) -> Self {
        let storage_key = storage_key.into();
        let active = match storage.get(&storage_key) {
            Ok(Some(code)) => LocaleCode::parse(&code).unwrap_or_else(|| {
                tracing::warn!(%code, "unrecognized persisted locale");
                LocaleCode::default()
            }),
            Ok(None) => LocaleCode::default(),
            Err(e) => {
                tracing::warn!(error = %e, "locale storage unreadable");
                LocaleCode::default()
            }
        };

        Self {
            storage,
            storage_key,
            active: Rc::new(Cell::new(active)),
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn current_code(&self) -> LocaleCode {
        self.active.get()
    }

    pub fn current_locale(&self) -> &'static Locale {
        self.active.get().locale()
    }

    /// 切换并持久化语言
    pub fn switch_locale(&self, code: LocaleCode) {
        self.active.set(code);
        if let Err(e) = self.storage.set(&self.storage_key, code.as_str()) {
            let e = AppError::from(e).in_op_with("storage.set", &self.storage_key);
            tracing::warn!(error = %e, "locale choice not persisted");
        }
        tracing::debug!(locale = code.as_str(), "locale switched");

        let observers = self.observers.borrow().clone();
        for observer in observers {
            observer(code);
        }
    }

    /// 翻译；缺失的键原样返回
    pub fn translate(&self, key: &str) -> String {
        Dictionary::for_locale(self.active.get()).translate(key)
    }

    pub fn subscribe(&self, observer: impl Fn(LocaleCode) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }
}

// =========================================================
// Leptos Context
// =========================================================

/// 国际化上下文
///
/// `code` 信号镜像 `LocaleStore` 的当前语言，供组件追踪。
#[derive(Clone, Copy)]
pub struct I18nContext {
    pub code: ReadSignal<LocaleCode>,
    store: StoredValue<LocaleStore, LocalStorage>,
}

impl I18nContext {
    pub fn new(store: LocaleStore) -> Self {
        let (code, set_code) = signal(store.current_code());
        store.subscribe(move |next| set_code.set(next));
        Self {
            code,
            store: StoredValue::new_local(store),
        }
    }

    /// 响应式翻译：在闭包中调用会随语言切换自动更新
    pub fn t(&self, key: &str) -> String {
        let code = self.code.get();
        Dictionary::for_locale(code).translate(key)
    }

    pub fn switch_locale(&self, code: LocaleCode) {
        self.store.with_value(|store| store.switch_locale(code));
    }
}

/// 从 Context 获取国际化上下文
pub fn use_i18n() -> I18nContext {
    use_context::<I18nContext>().expect("I18nContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::web::MemoryStorage;
    use proptest::prelude::*;

    fn store_with(storage: &MemoryStorage) -> LocaleStore {
        LocaleStore::restore(Rc::new(storage.clone()), "language")
    }

    #[test]
    fn test_first_load_defaults_to_first_locale() {
        let store = store_with(&MemoryStorage::new());
        assert_eq!(store.current_code(), LocaleCode::Id);
        assert_eq!(store.translate("nav.login"), "Masuk");
    }

    #[test]
    fn test_recognized_persisted_code_is_restored() {
        let storage = MemoryStorage::new();
        storage.set("language", "en").unwrap();
        assert_eq!(store_with(&storage).current_locale().name, "English");
    }

    #[test]
    fn test_unrecognized_persisted_code_falls_back() {
        let storage = MemoryStorage::new();
        storage.set("language", "de").unwrap();
        assert_eq!(store_with(&storage).current_code(), LocaleCode::Id);
    }

    #[test]
    fn test_switch_is_visible_on_next_translate_and_persisted() {
        let storage = MemoryStorage::new();
        let store = store_with(&storage);
        assert_eq!(store.translate("nav.home"), "Beranda");

        store.switch_locale(LocaleCode::En);
        assert_eq!(store.translate("nav.home"), "Home");
        assert_eq!(storage.get("language").unwrap().as_deref(), Some("en"));

        // 刷新后保持选择
        assert_eq!(store_with(&storage).current_code(), LocaleCode::En);
    }

    #[test]
    fn test_observers_receive_new_code() {
        let store = store_with(&MemoryStorage::new());
        let seen = Rc::new(Cell::new(None));
        {
            let seen = seen.clone();
            store.subscribe(move |code| seen.set(Some(code)));
        }
        store.switch_locale(LocaleCode::En);
        assert_eq!(seen.get(), Some(LocaleCode::En));
    }

    proptest! {
        #[test]
        fn prop_translate_is_idempotent_between_switches(key in "[a-z_.]{0,24}", english in any::<bool>()) {
            let store = store_with(&MemoryStorage::new());
            if english {
                store.switch_locale(LocaleCode::En);
            }
            let first = store.translate(&key);
            prop_assert_eq!(&first, &store.translate(&key));
            if Dictionary::for_locale(store.current_code()).get(&key).is_none() {
                prop_assert_eq!(first, key);
            }
        }
    }
}
