use crate::auth::{login, use_auth};
use crate::components::icons::ShieldCheck;
use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mediasi_shared::Role;

/// 角色下拉框（登录与注册共用）
#[component]
pub fn RoleSelect(role: RwSignal<Role>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="form-control">
            <label class="label" for="role">
                <span class="label-text">{move || i18n.t("login.role")}</span>
            </label>
            <select
                id="role"
                class="select select-bordered"
                on:change=move |ev| role.set(Role::from_form_value(&event_target_value(&ev)))
                prop:value=move || role.get().as_str()
            >
                {Role::SELECTABLE
                    .into_iter()
                    .map(|r| view! { <option value=r.as_str()>{move || i18n.t(r.label_key())}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let i18n = use_i18n();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let role = RwSignal::new(Role::Applicant);
    let (show_password, set_show_password) = signal(false);
    let (is_submitting, set_is_submitting) = signal(false);
    // 错误以翻译键保存，切换语言时随之更新
    let (error_key, set_error_key) = signal(Option::<&'static str>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_is_submitting.set(true);
        set_error_key.set(None);

        spawn_local(async move {
            let success = login(&auth, email.get_untracked(), password.get_untracked(), role.get_untracked()).await;
            if success {
                router.navigate_to(AppRoute::Dashboard);
            } else {
                set_error_key.set(Some("login.invalid"));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="flex flex-col items-center gap-2 mb-4">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <ShieldCheck attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold">{move || i18n.t("login.title")}</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        {move || error_key.get().map(|key| view! {
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{i18n.t(key)}</span>
                            </div>
                        })}

                        <div class="form-control">
                            <label class="label" for="email">
                                <span class="label-text">{move || i18n.t("login.email")}</span>
                            </label>
                            <input
                                id="email"
                                type="email"
                                placeholder="john@example.com"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered"
                                required
                            />
                        </div>
                        <div class="form-control">
                            <label class="label" for="password">
                                <span class="label-text">{move || i18n.t("login.password")}</span>
                            </label>
                            <div class="join w-full">
                                <input
                                    id="password"
                                    type=move || if show_password.get() { "text" } else { "password" }
                                    placeholder="••••••••"
                                    on:input=move |ev| set_password.set(event_target_value(&ev))
                                    prop:value=password
                                    class="input input-bordered join-item w-full"
                                    required
                                />
                                <button
                                    type="button"
                                    class="btn join-item"
                                    on:click=move |_| set_show_password.update(|shown| *shown = !*shown)
                                >
                                    {move || if show_password.get() { "Hide" } else { "Show" }}
                                </button>
                            </div>
                        </div>
                        <RoleSelect role=role />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    i18n.t("login.submit").into_any()
                                }}
                            </button>
                        </div>
                        <button type="button" class="link link-primary text-sm mt-2" on:click=move |_| router.navigate_to(AppRoute::Register)>
                            {move || i18n.t("login.register")}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
