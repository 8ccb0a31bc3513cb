//! 路由服务模块
//!
//! 单一的"当前页面"信号：没有历史栈，不与 URL 同步，也没有终止状态。
//! `navigate` 无条件切换；访问控制在渲染时由 `AppRoute::resolve` 完成。

use leptos::prelude::*;
use mediasi_shared::Identity;

use super::route::{AppRoute, Screen};

/// 路由器服务
///
/// 通过注入的身份信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 当前身份（注入的信号）
    identity: Signal<Option<Identity>>,
}

impl RouterService {
    fn new(identity: Signal<Option<Identity>>) -> Self {
        let (current_route, set_route) = signal(AppRoute::default());
        Self {
            current_route,
            set_route,
            identity,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// 导航到页面令牌，未知令牌回落到首页
    pub fn navigate(&self, token: &str) {
        self.navigate_to(AppRoute::from_token(token));
    }

    pub fn navigate_to(&self, route: AppRoute) {
        tracing::debug!(%route, "navigate");
        self.set_route.set(route);
    }

    /// 当前实际渲染的页面（经过渲染守卫）
    pub fn screen(&self) -> Screen {
        let route = self.current_route.get();
        self.identity.with(|identity| route.resolve(identity.as_ref()))
    }
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 当前身份信号
    identity: Signal<Option<Identity>>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_context(RouterService::new(identity));
    children()
}

/// 路由出口组件
///
/// 根据当前路由与会话渲染对应页面。
#[component]
pub fn RouterOutlet(
    /// 页面匹配函数
    matcher: fn(Screen) -> AnyView,
) -> impl IntoView {
    let router = use_router();
    // 只有实际页面变化时才重建视图
    let screen = Memo::new(move |_| router.screen());

    move || matcher(screen.get())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mediasi_shared::Role;
    use mediasi_shared::fixtures::seed_identities;

    fn seeded(role: Role) -> Identity {
        seed_identities(Utc::now())
            .into_iter()
            .find(|identity| identity.role == role)
            .unwrap()
    }

    #[test]
    fn test_guard_and_role_switch_follow_identity() {
        let owner = Owner::new();
        owner.set();

        let (identity, set_identity) = signal(None::<Identity>);
        let router = RouterService::new(Signal::derive(move || identity.get()));

        // 匿名访问受保护页面：渲染登录页，但保留请求的令牌
        router.navigate("dashboard");
        assert_eq!(router.current_route().get(), AppRoute::Dashboard);
        assert_eq!(router.screen(), Screen::Login);

        set_identity.set(Some(seeded(Role::Admin)));
        assert_eq!(router.current_route().get(), AppRoute::Dashboard);
        assert_eq!(router.screen(), Screen::AdminDashboard);

        set_identity.set(Some(seeded(Role::Mediator)));
        assert_eq!(router.screen(), Screen::MediatorDashboard);

        set_identity.set(None);
        assert_eq!(router.screen(), Screen::Login);
    }

    #[test]
    fn test_unknown_token_lands_on_home() {
        let owner = Owner::new();
        owner.set();

        let router = RouterService::new(Signal::derive(|| None));
        router.navigate("submit-case");
        assert_eq!(router.screen(), Screen::Login);

        router.navigate("pricing");
        assert_eq!(router.current_route().get(), AppRoute::Home);
        assert_eq!(router.screen(), Screen::Home);
    }

    #[test]
    fn test_public_pages_ignore_identity() {
        let owner = Owner::new();
        owner.set();

        let router = RouterService::new(Signal::derive(|| None));
        router.navigate_to(AppRoute::About);
        assert_eq!(router.screen(), Screen::About);
        router.navigate(AppRoute::Services.token());
        assert_eq!(router.screen(), Screen::Services);
    }
}
