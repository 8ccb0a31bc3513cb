//! Mediasi 前端应用
//!
//! 采用 Context-Driven 的架构：
//! - `session` / `i18n`: 纯 Rust 存储，依赖以端口注入
//! - `auth` / `I18nContext`: 把存储镜像为 Leptos 信号
//! - `web::route` + `web::router`: 单信号页面切换与渲染守卫
//! - `components`: UI 组件层

pub mod auth;
pub mod config;
pub mod error;
pub mod i18n;
pub mod repository;
pub mod services;
pub mod session;
pub mod telemetry;
pub mod web;

mod components {
    pub mod case_submission;
    pub mod chatbot;
    pub mod dashboard;
    pub mod home;
    mod icons;
    pub mod login;
    pub mod navigation;
    pub mod pages;
    pub mod register;
}

use crate::auth::AuthContext;
use crate::components::case_submission::CaseSubmissionPage;
use crate::components::chatbot::Chatbot;
use crate::components::dashboard::{AdminDashboard, ApplicantDashboard, MediatorDashboard};
use crate::components::home::HomePage;
use crate::components::login::LoginPage;
use crate::components::navigation::Navigation;
use crate::components::pages::{AboutPage, ServicesPage};
use crate::components::register::RegisterPage;
use crate::config::AppConfig;
use crate::i18n::I18nContext;
use crate::services::{AppServices, ServicesContext};

use leptos::prelude::*;

use web::route::Screen;
use web::router::{Router, RouterOutlet};

/// 页面匹配函数
///
/// 根据渲染守卫得出的 Screen 返回对应的视图组件。
fn route_matcher(screen: Screen) -> AnyView {
    match screen {
        Screen::Home => view! { <HomePage /> }.into_any(),
        Screen::Login => view! { <LoginPage /> }.into_any(),
        Screen::Register => view! { <RegisterPage /> }.into_any(),
        Screen::ApplicantDashboard => view! { <ApplicantDashboard /> }.into_any(),
        Screen::MediatorDashboard => view! { <MediatorDashboard /> }.into_any(),
        Screen::AdminDashboard => view! { <AdminDashboard /> }.into_any(),
        Screen::SubmitCase => view! { <CaseSubmissionPage /> }.into_any(),
        Screen::About => view! { <AboutPage /> }.into_any(),
        Screen::Services => view! { <ServicesPage /> }.into_any(),
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // 1. 构造服务根（会话与语言在此完成恢复）
    let AppServices {
        session,
        locale,
        cases,
        assistant,
    } = AppServices::browser(&config);

    // 2. 存储镜像为上下文
    let auth_ctx = AuthContext::new(session);
    provide_context(auth_ctx);
    provide_context(I18nContext::new(locale));
    provide_context(ServicesContext::new(cases, assistant));

    // 3. 身份信号注入路由服务
    let identity = auth_ctx.identity_signal();

    view! {
        <Router identity=identity>
            <div class="min-h-screen bg-base-200 flex flex-col">
                <Navigation />
                <main class="flex-1">
                    <RouterOutlet matcher=route_matcher />
                </main>
                <Chatbot />
            </div>
        </Router>
    }
}
