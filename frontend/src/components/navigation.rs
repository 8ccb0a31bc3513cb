use crate::auth::{logout, use_auth};
use crate::components::icons::{Close, Globe, LogOut, Menu, Scale};
use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use mediasi_shared::{LOCALES, LocaleCode};

/// 公共页面链接：页面令牌与文案键
const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "nav.home"),
    ("about", "nav.about"),
    ("services", "nav.services"),
];

/// 导航链接，当前页面高亮；点击后收起移动端菜单
#[component]
fn NavLink(token: &'static str, label_key: &'static str, menu_open: RwSignal<bool>) -> impl IntoView {
    let router = use_router();
    let i18n = use_i18n();
    let current = router.current_route();

    view! {
        <li>
            <a
                class=move || if current.get().token() == token { "active" } else { "" }
                on:click=move |_| {
                    menu_open.set(false);
                    router.navigate(token);
                }
            >
                {move || i18n.t(label_key)}
            </a>
        </li>
    }
}

fn nav_links(menu_open: RwSignal<bool>) -> impl IntoView {
    NAV_LINKS
        .iter()
        .map(|&(token, label_key)| view! { <NavLink token=token label_key=label_key menu_open=menu_open /> })
        .collect_view()
}

#[component]
fn LanguagePicker() -> impl IntoView {
    let i18n = use_i18n();

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match LocaleCode::parse(&value) {
            Some(code) => i18n.switch_locale(code),
            None => tracing::warn!(%value, "language picker sent unknown code"),
        }
    };

    view! {
        <label class="flex items-center gap-1">
            <Globe attr:class="h-4 w-4 text-base-content/60" />
            <select
                class="select select-ghost select-sm"
                on:change=on_change
                prop:value=move || i18n.code.get().as_str()
            >
                {LOCALES
                    .iter()
                    .map(|locale| {
                        view! {
                            <option value=locale.code.as_str()>
                                {locale.flag} " " {locale.name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let i18n = use_i18n();
    let is_authenticated = auth.is_authenticated_signal();
    let menu_open = RwSignal::new(false);

    let go = move |route: AppRoute| {
        menu_open.set(false);
        router.navigate_to(route);
    };

    let on_logout = move || {
        logout(&auth);
        go(AppRoute::Home);
    };

    let user_name = move || {
        auth.state
            .get()
            .identity
            .map(|identity| identity.name)
            .unwrap_or_default()
    };

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1">
                <div class="dropdown md:hidden">
                    <button
                        class="btn btn-ghost btn-square"
                        aria-label="menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <Show when=move || menu_open.get() fallback=|| view! { <Menu attr:class="h-5 w-5" /> }>
                            <Close attr:class="h-5 w-5" />
                        </Show>
                    </button>
                    <Show when=move || menu_open.get()>
                        <ul class="dropdown-content z-[1] menu p-2 mt-3 shadow bg-base-100 rounded-box w-52">
                            {nav_links(menu_open)}
                            <Show
                                when=move || is_authenticated.get()
                                fallback=move || view! {
                                    <li><a on:click=move |_| go(AppRoute::Login)>{move || i18n.t("nav.login")}</a></li>
                                    <li><a on:click=move |_| go(AppRoute::Register)>{move || i18n.t("nav.register")}</a></li>
                                }
                            >
                                <li class="menu-title">{user_name}</li>
                                <li><a on:click=move |_| go(AppRoute::Dashboard)>{move || i18n.t("nav.dashboard")}</a></li>
                                <li>
                                    <a class="text-error" on:click=move |_| on_logout()>
                                        <LogOut attr:class="h-4 w-4" /> {move || i18n.t("nav.logout")}
                                    </a>
                                </li>
                            </Show>
                        </ul>
                    </Show>
                </div>
                <a class="btn btn-ghost text-xl gap-2" on:click=move |_| go(AppRoute::Home)>
                    <Scale attr:class="h-6 w-6 text-primary" />
                    "MediateOnline"
                </a>
                <ul class="menu menu-horizontal hidden md:flex">
                    {nav_links(menu_open)}
                </ul>
            </div>
            <div class="flex-none gap-2">
                <LanguagePicker />
                <div class="hidden md:flex gap-2">
                    <Show
                        when=move || is_authenticated.get()
                        fallback=move || view! {
                            <button class="btn btn-ghost btn-sm" on:click=move |_| go(AppRoute::Login)>
                                {move || i18n.t("nav.login")}
                            </button>
                            <button class="btn btn-primary btn-sm" on:click=move |_| go(AppRoute::Register)>
                                {move || i18n.t("nav.register")}
                            </button>
                        }
                    >
                        <button class="btn btn-ghost btn-sm" on:click=move |_| go(AppRoute::Dashboard)>
                            {move || i18n.t("nav.dashboard")}
                        </button>
                        <span class="badge badge-neutral">{user_name}</span>
                        <button on:click=move |_| on_logout() class="btn btn-outline btn-error btn-sm gap-2">
                            <LogOut attr:class="h-4 w-4" /> {move || i18n.t("nav.logout")}
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}
