use crate::components::icons::{FileText, Globe, MessageCircle, ShieldCheck, Users};
use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("1000+", "Cases Resolved"),
    ("95%", "Success Rate"),
    ("24/7", "AI Support"),
    ("50+", "Expert Mediators"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();
    let i18n = use_i18n();

    view! {
        <div class="hero py-20 bg-gradient-to-br from-primary/10 via-base-100 to-secondary/10">
            <div class="hero-content text-center">
                <div class="max-w-3xl">
                    <h1 class="text-4xl md:text-6xl font-bold mb-6">{move || i18n.t("hero.title")}</h1>
                    <p class="text-xl text-base-content/70 mb-8">{move || i18n.t("hero.subtitle")}</p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center">
                        <button class="btn btn-primary btn-lg" on:click=move |_| router.navigate_to(AppRoute::Register)>
                            {move || i18n.t("hero.cta")}
                        </button>
                        <button class="btn btn-outline btn-primary btn-lg" on:click=move |_| router.navigate_to(AppRoute::Services)>
                            "Learn More"
                        </button>
                    </div>
                </div>
            </div>
        </div>

        <div class="stats stats-vertical md:stats-horizontal shadow w-full bg-base-100 rounded-none">
            {HIGHLIGHTS
                .iter()
                .map(|(value, label)| view! {
                    <div class="stat place-items-center">
                        <div class="stat-value text-primary">{*value}</div>
                        <div class="stat-desc font-medium">{*label}</div>
                    </div>
                })
                .collect_view()}
        </div>

        <div class="max-w-7xl mx-auto px-4 py-16 grid md:grid-cols-2 lg:grid-cols-4 gap-6">
            <Feature title="Secure & Confidential" body="Your legal matters stay private from intake to settlement.">
                <ShieldCheck attr:class="h-6 w-6" />
            </Feature>
            <Feature title="Document Management" body="Upload and keep supporting documents with each case.">
                <FileText attr:class="h-6 w-6" />
            </Feature>
            <Feature title="Expert Mediators" body="Certified mediators across commercial, family and property law.">
                <Users attr:class="h-6 w-6" />
            </Feature>
            <Feature title="AI Legal Assistant" body="Ask questions any time in Bahasa Indonesia or English.">
                <MessageCircle attr:class="h-6 w-6" />
            </Feature>
        </div>

        <div class="flex items-center justify-center gap-2 pb-12 text-base-content/60">
            <Globe attr:class="h-5 w-5" />
            <span>"Multi-language support"</span>
        </div>
    }
}

#[component]
fn Feature(title: &'static str, body: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-sm hover:shadow-lg transition-shadow">
            <div class="card-body">
                <div class="p-3 bg-primary/10 rounded-2xl text-primary w-fit">{children()}</div>
                <h3 class="card-title">{title}</h3>
                <p class="text-base-content/70">{body}</p>
            </div>
        </div>
    }
}
