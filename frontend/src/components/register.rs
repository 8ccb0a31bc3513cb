use crate::auth::{register, use_auth};
use crate::components::icons::Users;
use crate::components::login::RoleSelect;
use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mediasi_shared::Role;
use mediasi_shared::forms::RegistrationForm;

/// 注册表单状态
///
/// 每个字段一个 `RwSignal`，提交时汇总为 `RegistrationForm`。
#[derive(Clone, Copy)]
struct FormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    password: RwSignal<String>,
    confirm_password: RwSignal<String>,
    role: RwSignal<Role>,
}

impl FormState {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            confirm_password: RwSignal::new(String::new()),
            role: RwSignal::new(Role::Applicant),
        }
    }

    fn to_form(self) -> RegistrationForm {
        RegistrationForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
            confirm_password: self.confirm_password.get_untracked(),
            role: self.role.get_untracked(),
        }
    }
}

#[component]
fn FormInput(
    id: &'static str,
    label_key: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{move || i18n.t(label_key)}</span>
            </label>
            <input
                id=id
                type=input_type
                required
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=value
                class="input input-bordered w-full"
            />
        </div>
    }
}

/// 密码输入框，可切换明文显示
#[component]
fn PasswordInput(id: &'static str, label_key: &'static str, value: RwSignal<String>) -> impl IntoView {
    let i18n = use_i18n();
    let shown = RwSignal::new(false);

    view! {
        <div class="form-control">
            <label class="label" for=id>
                <span class="label-text">{move || i18n.t(label_key)}</span>
            </label>
            <div class="join w-full">
                <input
                    id=id
                    type=move || if shown.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    required
                    on:input=move |ev| value.set(event_target_value(&ev))
                    prop:value=value
                    class="input input-bordered join-item w-full"
                />
                <button
                    type="button"
                    class="btn join-item"
                    on:click=move |_| shown.update(|shown| *shown = !*shown)
                >
                    {move || if shown.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let i18n = use_i18n();

    let state = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);

        let submitted = state.to_form();
        // 密码不一致时不调用会话存储
        if let Err(e) = submitted.validate() {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_is_submitting.set(true);
        spawn_local(async move {
            let RegistrationForm {
                name,
                email,
                password,
                role,
                ..
            } = submitted;
            if register(&auth, name, email, password, role).await {
                router.navigate_to(AppRoute::Dashboard);
            } else {
                set_error_msg.set(Some(i18n.t("register.failed")));
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="hero min-h-[80vh]">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="flex flex-col items-center gap-2 mb-4">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <Users attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-3xl font-bold">{move || i18n.t("register.title")}</h1>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <form class="card-body" on:submit=on_submit>
                        <Show when=move || error_msg.get().is_some()>
                            <div role="alert" class="alert alert-error text-sm py-2">
                                <span>{move || error_msg.get().unwrap_or_default()}</span>
                            </div>
                        </Show>

                        <FormInput id="name" label_key="register.name" input_type="text" value=state.name />
                        <FormInput id="email" label_key="login.email" input_type="email" value=state.email />
                        <RoleSelect role=state.role />
                        <PasswordInput id="password" label_key="login.password" value=state.password />
                        <PasswordInput id="confirm_password" label_key="register.confirm_password" value=state.confirm_password />

                        <div class="form-control mt-6">
                            <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                {move || if is_submitting.get() {
                                    view! { <span class="loading loading-spinner"></span> }.into_any()
                                } else {
                                    i18n.t("register.submit").into_any()
                                }}
                            </button>
                        </div>
                        <button type="button" class="link link-primary text-sm mt-2" on:click=move |_| router.navigate_to(AppRoute::Login)>
                            {move || i18n.t("register.login")}
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}
