//! 会话存储
//!
//! 持有至多一个已认证身份，并镜像到持久化存储中。
//!
//! 注意：登录只按 (email, role) 匹配，密码内容从不校验；注册不检查
//! email 是否重复。这是演示环境的刻意简化，不具备任何安全性。

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;
use mediasi_shared::{Identity, Role};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::repository::IdentityRepository;
use crate::web::{KeyValueStore, Latency};

type Observer = Rc<dyn Fn(Option<&Identity>)>;

#[derive(Clone)]
struct SessionSettings {
    storage_key: String,
    sign_in_latency: Duration,
    sign_up_latency: Duration,
}

/// 会话存储
///
/// 克隆共享同一份状态。
#[derive(Clone)]
pub struct SessionStore {
    repository: Rc<dyn IdentityRepository>,
    storage: Rc<dyn KeyValueStore>,
    latency: Rc<dyn Latency>,
    settings: SessionSettings,
    active: Rc<RefCell<Option<Identity>>>,
    observers: Rc<RefCell<Vec<Observer>>>,
}

impl SessionStore {
    /// 创建会话存储并尝试从持久化存储恢复身份
    ///
    /// 数据缺失或损坏时保持匿名状态。
    pub fn restore(
        repository: Rc<dyn IdentityRepository>,
        storage: Rc<dyn KeyValueStore>,
        latency: Rc<dyn Latency>,
        config: &AppConfig,
    ) -> Self {
        let settings = SessionSettings {
            storage_key: config.session_key.clone(),
            sign_in_latency: config.sign_in_latency(),
            sign_up_latency: config.sign_up_latency(),
        };

        let restored = match read_persisted(storage.as_ref(), &settings.storage_key) {
            Ok(identity) => identity,
            Err(e) => {
                tracing::warn!(error = %e, "discarding persisted session");
                None
            }
        };
        if let Some(identity) = &restored {
            tracing::debug!(id = %identity.id, role = %identity.role, "session restored");
        }

        Self {
            repository,
            storage,
            latency,
            settings,
            active: Rc::new(RefCell::new(restored)),
            observers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// 当前身份
    pub fn current(&self) -> Option<Identity> {
        self.active.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.active.borrow().is_some()
    }

    /// 注册观察者，每次身份变化后调用
    pub fn subscribe(&self, observer: impl Fn(Option<&Identity>) + 'static) {
        self.observers.borrow_mut().push(Rc::new(observer));
    }

    /// 登录
    ///
    /// 等待模拟延迟后按 (email, role) 查找。密码只要求非空。
    /// 未匹配时返回 `false`，原有身份保持不变。
    pub async fn sign_in(&self, email: &str, password: &str, role: Role) -> bool {
        self.latency.wait(self.settings.sign_in_latency).await;

        if password.is_empty() {
            tracing::debug!(%role, "sign-in rejected: empty password");
            return false;
        }

        match self.repository.find_by_email_and_role(email, role).await {
            Ok(Some(identity)) => {
                tracing::info!(id = %identity.id, %role, "signed in");
                self.activate(identity);
                true
            }
            Ok(None) => {
                tracing::info!(%role, "sign-in rejected: no matching identity");
                false
            }
            Err(e) => {
                let e = e.in_op("session.sign_in");
                tracing::warn!(error = %e, "identity lookup failed");
                false
            }
        }
    }

    /// 注册
    ///
    /// 总是创建新的未验证身份并设为当前身份；不校验密码，也不检查重复 email。
    pub async fn sign_up(&self, name: &str, email: &str, _password: &str, role: Role) -> bool {
        self.latency.wait(self.settings.sign_up_latency).await;

        let identity = Identity::unverified(name, email, role, Utc::now());
        if let Err(e) = self.repository.insert(identity.clone()).await {
            let e = e.in_op("session.sign_up");
            tracing::warn!(error = %e, "identity insert failed");
            return false;
        }

        tracing::info!(id = %identity.id, %role, "registered");
        self.activate(identity);
        true
    }

    /// 注销：清除当前身份及其持久化副本。导航由调用方负责。
    pub fn sign_out(&self) {
        self.active.borrow_mut().take();
        if let Err(e) = self.storage.remove(&self.settings.storage_key) {
            let e = AppError::from(e).in_op_with("storage.remove", &self.settings.storage_key);
            tracing::warn!(error = %e, "failed to clear persisted session");
        }
        tracing::info!("signed out");
        self.notify();
    }

    fn activate(&self, identity: Identity) {
        if let Err(e) = self.persist(&identity) {
            tracing::warn!(error = %e, "session kept in memory only");
        }
        *self.active.borrow_mut() = Some(identity);
        self.notify();
    }

    fn persist(&self, identity: &Identity) -> AppResult<()> {
        let json = serde_json_wasm::to_string(identity)
            .map_err(|e| AppError::from(e).in_op("session.persist"))?;
        self.storage
            .set(&self.settings.storage_key, &json)
            .map_err(|e| AppError::from(e).in_op_with("storage.set", &self.settings.storage_key))
    }

    fn notify(&self) {
        let observers = self.observers.borrow().clone();
        let current = self.current();
        for observer in observers {
            observer(current.as_ref());
        }
    }
}

fn read_persisted(storage: &dyn KeyValueStore, key: &str) -> AppResult<Option<Identity>> {
    let Some(json) = storage
        .get(key)
        .map_err(|e| AppError::from(e).in_op_with("storage.get", key))?
    else {
        return Ok(None);
    };
    let identity = serde_json_wasm::from_str(&json)
        .map_err(|e| AppError::from(e).in_op("session.hydrate"))?;
    Ok(Some(identity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryIdentityRepository;
    use crate::web::route::{AppRoute, Screen};
    use crate::web::{ManualLatency, MemoryStorage};
    use futures::FutureExt;
    use proptest::prelude::*;
    use std::cell::Cell;
    use std::future::Future;

    struct Harness {
        store: SessionStore,
        storage: MemoryStorage,
        latency: ManualLatency,
    }

    fn harness_with(storage: MemoryStorage) -> Harness {
        let latency = ManualLatency::new();
        let store = SessionStore::restore(
            Rc::new(InMemoryIdentityRepository::seeded()),
            Rc::new(storage.clone()),
            Rc::new(latency.clone()),
            &AppConfig::default(),
        );
        Harness {
            store,
            storage,
            latency,
        }
    }

    fn harness() -> Harness {
        harness_with(MemoryStorage::new())
    }

    /// 推进定时器直到操作完成
    async fn settle<T>(latency: &ManualLatency, op: impl Future<Output = T>) -> T {
        let (out, _) = futures::join!(op, async {
            latency.advance(Duration::from_secs(60));
        });
        out
    }

    #[tokio::test]
    async fn test_sign_in_waits_for_latency() {
        let h = harness();
        let mut op = h.store.sign_in("john@example.com", "pw", Role::Applicant).boxed_local();

        assert!((&mut op).now_or_never().is_none());
        assert!(!h.store.is_authenticated());

        h.latency.advance(Duration::from_millis(1000));
        assert!(op.await);
        assert_eq!(h.latency.requested(), vec![Duration::from_millis(1000)]);
    }

    #[tokio::test]
    async fn test_sign_in_success_sets_and_persists_identity() {
        let h = harness();
        let ok = settle(&h.latency, h.store.sign_in("jane@example.com", "anything", Role::Mediator)).await;
        assert!(ok);

        let jane = h.store.current().unwrap();
        assert_eq!(jane.name, "Jane Smith");
        let persisted = h.storage.get("user").unwrap().unwrap();
        assert!(persisted.contains("jane@example.com"));
    }

    #[tokio::test]
    async fn test_sign_in_mismatch_keeps_prior_identity() {
        let h = harness();
        assert!(settle(&h.latency, h.store.sign_in("admin@example.com", "x", Role::Admin)).await);
        let before = h.store.current();

        assert!(!settle(&h.latency, h.store.sign_in("nobody@example.com", "x", Role::Admin)).await);
        assert_eq!(h.store.current(), before);
    }

    #[tokio::test]
    async fn test_sign_in_rejects_empty_password() {
        let h = harness();
        assert!(!settle(&h.latency, h.store.sign_in("john@example.com", "", Role::Applicant)).await);
        assert!(h.store.current().is_none());
    }

    #[tokio::test]
    async fn test_sign_up_always_succeeds_unverified() {
        let h = harness();
        let ok = settle(
            &h.latency,
            h.store.sign_up("Siti", "john@example.com", "pw", Role::Applicant),
        )
        .await;
        assert!(ok);

        let siti = h.store.current().unwrap();
        assert!(!siti.verified);
        assert_eq!(siti.email, "john@example.com");
        assert!(h.storage.get("user").unwrap().is_some());
    }

    #[tokio::test]
    async fn test_registered_identity_can_sign_in_again() {
        let h = harness();
        assert!(settle(&h.latency, h.store.sign_up("Budi", "budi@example.com", "pw", Role::Mediator)).await);
        h.store.sign_out();
        assert!(settle(&h.latency, h.store.sign_in("budi@example.com", "pw", Role::Mediator)).await);
        assert_eq!(h.store.current().map(|i| i.name), Some("Budi".to_string()));
    }

    #[tokio::test]
    async fn test_sign_out_then_reload_is_anonymous() {
        let h = harness();
        assert!(settle(&h.latency, h.store.sign_in("john@example.com", "pw", Role::Applicant)).await);

        // 刷新前：持久化身份可恢复
        let reloaded = harness_with(h.storage.clone());
        assert!(reloaded.store.is_authenticated());

        h.store.sign_out();
        assert!(h.store.current().is_none());
        let reloaded = harness_with(h.storage.clone());
        assert!(!reloaded.store.is_authenticated());
    }

    #[test]
    fn test_malformed_persisted_identity_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set("user", "{\"id\":").unwrap();
        assert!(harness_with(storage).store.current().is_none());
    }

    #[tokio::test]
    async fn test_observers_see_every_change() {
        let h = harness();
        let seen = Rc::new(Cell::new(0));
        let last_signed_in = Rc::new(Cell::new(false));
        {
            let seen = seen.clone();
            let last = last_signed_in.clone();
            h.store.subscribe(move |identity| {
                seen.set(seen.get() + 1);
                last.set(identity.is_some());
            });
        }

        assert!(settle(&h.latency, h.store.sign_in("john@example.com", "pw", Role::Applicant)).await);
        assert!(last_signed_in.get());
        h.store.sign_out();
        assert!(!last_signed_in.get());
        assert_eq!(seen.get(), 2);
    }

    #[tokio::test]
    async fn test_mediator_sign_in_renders_mediator_dashboard() {
        let h = harness();
        assert!(settle(&h.latency, h.store.sign_in("jane@example.com", "secret", Role::Mediator)).await);
        let screen = AppRoute::from_token("dashboard").resolve(h.store.current().as_ref());
        assert_eq!(screen, Screen::MediatorDashboard);

        let other = harness();
        assert!(!settle(&other.latency, other.store.sign_in("jane@example.com", "secret", Role::Applicant)).await);
        assert_eq!(AppRoute::Dashboard.resolve(other.store.current().as_ref()), Screen::Login);
    }

    fn instant_store() -> SessionStore {
        let config = AppConfig {
            sign_in_latency_ms: 0,
            sign_up_latency_ms: 0,
            ..AppConfig::default()
        };
        SessionStore::restore(
            Rc::new(InMemoryIdentityRepository::seeded()),
            Rc::new(MemoryStorage::new()),
            Rc::new(ManualLatency::new()),
            &config,
        )
    }

    fn role_strategy() -> impl Strategy<Value = Role> {
        prop::sample::select(Role::SELECTABLE.to_vec())
    }

    proptest! {
        #[test]
        fn prop_unknown_pairs_never_sign_in(local in "[a-z]{1,12}", role in role_strategy(), password in ".{1,16}") {
            let store = instant_store();
            let email = format!("{local}@unknown.test");
            let ok = store.sign_in(&email, &password, role).now_or_never();
            prop_assert_eq!(ok, Some(false));
            prop_assert!(store.current().is_none());
        }

        #[test]
        fn prop_known_pairs_accept_any_non_empty_password(index in 0usize..3, password in ".{1,32}") {
            let store = instant_store();
            let (email, role) = [
                ("john@example.com", Role::Applicant),
                ("jane@example.com", Role::Mediator),
                ("admin@example.com", Role::Admin),
            ][index];
            prop_assert_eq!(store.sign_in(email, &password, role).now_or_never(), Some(true));
            let current = store.current().unwrap();
            prop_assert_eq!(current.email.as_str(), email);
            prop_assert_eq!(current.role, role);
        }
    }
}
