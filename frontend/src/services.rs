//! 应用服务根
//!
//! `AppServices` 在每个页面生命周期内只构造一次，持有两个存储及模拟调用，
//! 再通过 Context 注入到各个页面。

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::Utc;
use leptos::prelude::*;
use mediasi_shared::chat::CannedResponder;
use mediasi_shared::forms::{CaseDraft, FormError};

use crate::config::AppConfig;
use crate::i18n::LocaleStore;
use crate::repository::{IdentityRepository, InMemoryIdentityRepository};
use crate::session::SessionStore;
use crate::web::{BrowserLatency, BrowserStorage, KeyValueStore, Latency};

/// 案件提交（固定延迟的空操作，校验通过后总是成功）
#[derive(Clone)]
pub struct CaseDesk {
    latency: Rc<dyn Latency>,
    delay: Duration,
}

impl CaseDesk {
    pub fn new(latency: Rc<dyn Latency>, delay: Duration) -> Self {
        Self { latency, delay }
    }

    pub async fn submit(&self, draft: &CaseDraft) -> Result<(), FormError> {
        draft.validate()?;
        self.latency.wait(self.delay).await;
        tracing::info!(
            category = %draft.category,
            urgency = draft.urgency.value(),
            documents = draft.documents.len(),
            "case submitted"
        );
        Ok(())
    }
}

/// 聊天助手：延迟后给出一条预设回复
#[derive(Clone)]
pub struct ChatAssistant {
    latency: Rc<dyn Latency>,
    delay: Duration,
    responder: Rc<RefCell<CannedResponder>>,
}

impl ChatAssistant {
    pub fn new(latency: Rc<dyn Latency>, delay: Duration, responder: CannedResponder) -> Self {
        Self {
            latency,
            delay,
            responder: Rc::new(RefCell::new(responder)),
        }
    }

    pub async fn reply(&self) -> &'static str {
        self.latency.wait(self.delay).await;
        self.responder.borrow_mut().pick()
    }
}

/// 服务根
#[derive(Clone)]
pub struct AppServices {
    pub session: SessionStore,
    pub locale: LocaleStore,
    pub cases: CaseDesk,
    pub assistant: ChatAssistant,
}

impl AppServices {
    /// 使用浏览器存储与定时器构造
    pub fn browser(config: &AppConfig) -> Self {
        Self::new(
            config,
            Rc::new(BrowserStorage),
            Rc::new(BrowserLatency),
            Rc::new(InMemoryIdentityRepository::seeded()),
        )
    }

    pub fn new(
        config: &AppConfig,
        storage: Rc<dyn KeyValueStore>,
        latency: Rc<dyn Latency>,
        repository: Rc<dyn IdentityRepository>,
    ) -> Self {
        let session = SessionStore::restore(repository, storage.clone(), latency.clone(), config);
        let locale = LocaleStore::restore(storage, config.locale_key.clone());
        let cases = CaseDesk::new(latency.clone(), config.case_submission_latency());
        let seed = Utc::now().timestamp_millis().unsigned_abs();
        let assistant = ChatAssistant::new(
            latency,
            config.chatbot_latency(),
            CannedResponder::seeded(seed),
        );
        Self {
            session,
            locale,
            cases,
            assistant,
        }
    }
}

/// 页面可用的模拟调用
#[derive(Clone, Copy)]
pub struct ServicesContext {
    cases: StoredValue<CaseDesk, LocalStorage>,
    assistant: StoredValue<ChatAssistant, LocalStorage>,
}

impl ServicesContext {
    pub fn new(cases: CaseDesk, assistant: ChatAssistant) -> Self {
        Self {
            cases: StoredValue::new_local(cases),
            assistant: StoredValue::new_local(assistant),
        }
    }

    pub fn cases(&self) -> CaseDesk {
        self.cases.get_value()
    }

    pub fn assistant(&self) -> ChatAssistant {
        self.assistant.get_value()
    }
}

pub fn use_services() -> ServicesContext {
    use_context::<ServicesContext>().expect("ServicesContext should be provided")
}
