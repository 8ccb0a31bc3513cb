//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 路由只是一个"当前页面"令牌：没有历史栈，也不与 URL 同步。

use std::fmt::Display;

use mediasi_shared::{Identity, Role};

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 首页 (默认路由)
    #[default]
    Home,
    Login,
    Register,
    /// 控制面板 (需要登录，按角色分流)
    Dashboard,
    /// 提交案件 (需要登录)
    SubmitCase,
    About,
    Services,
}

impl AppRoute {
    /// 解析页面令牌，未知令牌回落到首页
    pub fn from_token(token: &str) -> Self {
        match token {
            "login" => Self::Login,
            "register" => Self::Register,
            "dashboard" => Self::Dashboard,
            "submit-case" => Self::SubmitCase,
            "about" => Self::About,
            "services" => Self::Services,
            _ => Self::Home,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::Dashboard => "dashboard",
            Self::SubmitCase => "submit-case",
            Self::About => "about",
            Self::Services => "services",
        }
    }

    /// **渲染守卫：该路由是否需要登录**
    pub fn requires_auth(&self) -> bool {
        matches!(self, Self::Dashboard | Self::SubmitCase)
    }

    /// 未登录访问受保护页面时实际渲染的页面
    pub fn auth_failure_fallback() -> Screen {
        Screen::Login
    }

    /// 根据当前会话计算实际渲染的页面
    ///
    /// 守卫在渲染时生效，路由令牌本身保持不变。
    pub fn resolve(&self, identity: Option<&Identity>) -> Screen {
        if self.requires_auth() && identity.is_none() {
            return Self::auth_failure_fallback();
        }
        match self {
            Self::Home => Screen::Home,
            Self::Login => Screen::Login,
            Self::Register => Screen::Register,
            Self::SubmitCase => Screen::SubmitCase,
            Self::About => Screen::About,
            Self::Services => Screen::Services,
            Self::Dashboard => match identity.map(|i| i.role) {
                Some(Role::Applicant) => Screen::ApplicantDashboard,
                Some(Role::Mediator) => Screen::MediatorDashboard,
                Some(Role::Admin) => Screen::AdminDashboard,
                Some(Role::Unrecognized) | None => Screen::Home,
            },
        }
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// 实际渲染的顶层页面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Login,
    Register,
    ApplicantDashboard,
    MediatorDashboard,
    AdminDashboard,
    SubmitCase,
    About,
    Services,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn identity(role: Role) -> Identity {
        Identity {
            id: "1".into(),
            name: "Test".into(),
            email: "test@example.com".into(),
            role,
            verified: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_tokens_round_trip_and_unknown_falls_back_home() {
        for route in [
            AppRoute::Home,
            AppRoute::Login,
            AppRoute::Register,
            AppRoute::Dashboard,
            AppRoute::SubmitCase,
            AppRoute::About,
            AppRoute::Services,
        ] {
            assert_eq!(AppRoute::from_token(route.token()), route);
        }
        assert_eq!(AppRoute::from_token("pricing"), AppRoute::Home);
        assert_eq!(AppRoute::from_token(""), AppRoute::Home);
    }

    #[test]
    fn test_protected_routes_render_login_when_anonymous() {
        assert_eq!(AppRoute::Dashboard.resolve(None), Screen::Login);
        assert_eq!(AppRoute::SubmitCase.resolve(None), Screen::Login);
        assert_eq!(AppRoute::About.resolve(None), Screen::About);
        assert_eq!(AppRoute::Home.resolve(None), Screen::Home);
    }

    #[test]
    fn test_dashboard_branches_on_role() {
        let cases = [
            (Role::Applicant, Screen::ApplicantDashboard),
            (Role::Mediator, Screen::MediatorDashboard),
            (Role::Admin, Screen::AdminDashboard),
            (Role::Unrecognized, Screen::Home),
        ];
        for (role, screen) in cases {
            assert_eq!(AppRoute::Dashboard.resolve(Some(&identity(role))), screen);
        }
    }

    #[test]
    fn test_submit_case_renders_for_any_signed_in_role() {
        let admin = identity(Role::Admin);
        assert_eq!(AppRoute::SubmitCase.resolve(Some(&admin)), Screen::SubmitCase);
    }
}
