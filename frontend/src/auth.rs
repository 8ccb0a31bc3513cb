//! 认证模块
//!
//! 把 `SessionStore` 包装成 Leptos 上下文。路由只读取注入的身份信号，
//! 与认证实现解耦。

use leptos::prelude::*;
use mediasi_shared::{Identity, Role};

use crate::session::SessionStore;

/// 认证状态
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// 当前身份（匿名时为空）
    pub identity: Option<Identity>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// 认证上下文
///
/// `state` 镜像会话存储，写入只经由 `SessionStore` 的观察者回调。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: ReadSignal<AuthState>,
    session: StoredValue<SessionStore, LocalStorage>,
}

impl AuthContext {
    /// 创建新的认证上下文（会话已在 `SessionStore::restore` 中完成恢复）
    pub fn new(session: SessionStore) -> Self {
        let (state, set_state) = signal(AuthState {
            identity: session.current(),
        });
        session.subscribe(move |identity| {
            set_state.set(AuthState {
                identity: identity.cloned(),
            });
        });
        Self {
            state,
            session: StoredValue::new_local(session),
        }
    }

    /// 获取当前身份信号（用于路由服务注入）
    pub fn identity_signal(&self) -> Signal<Option<Identity>> {
        let state = self.state;
        Signal::derive(move || state.get().identity)
    }

    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_authenticated())
    }

    fn session(&self) -> SessionStore {
        self.session.get_value()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录
///
/// # Returns
/// 是否匹配到 (email, role)
pub async fn login(ctx: &AuthContext, email: String, password: String, role: Role) -> bool {
    let session = ctx.session();
    session.sign_in(&email, &password, role).await
}

/// 注册（总是成功，除非身份仓库失败）
pub async fn register(
    ctx: &AuthContext,
    name: String,
    email: String,
    password: String,
    role: Role,
) -> bool {
    let session = ctx.session();
    session.sign_up(&name, &email, &password, role).await
}

/// 注销并清除状态
///
/// 导航由调用方负责。
pub fn logout(ctx: &AuthContext) {
    ctx.session.with_value(|session| session.sign_out());
}
