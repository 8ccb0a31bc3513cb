//! 静态介绍页面

use leptos::prelude::*;

const SERVICES: &[(&str, &str)] = &[
    (
        "Online Mediation",
        "Mediation sessions over secure video with experienced mediators.",
    ),
    (
        "AI Legal Consultation",
        "Instant preliminary guidance from the AI-powered assistant.",
    ),
    (
        "Document Management",
        "Upload, storage and signing for every document in a case.",
    ),
    (
        "Case Tracking",
        "Progress updates for each case from submission to resolution.",
    ),
];

#[component]
fn PageCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto px-4 py-12">
            <div class="card bg-base-100 shadow-sm">
                <div class="card-body">
                    <h1 class="text-3xl font-bold mb-4">{title}</h1>
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <PageCard title="About MediateOnline">
            <div class="space-y-4 text-base-content/70">
                <p>
                    "MediateOnline is a digital platform for resolving legal disputes through mediation. "
                    "It pairs trained mediators with tooling that keeps every case moving."
                </p>
                <p>
                    "We serve individuals, businesses and organisations looking for an alternative to court proceedings."
                </p>
                <h2 class="text-xl font-semibold text-base-content mt-6">"Our Mission"</h2>
                <p>
                    "Make quality mediation affordable and reachable for everyone, wherever they live."
                </p>
            </div>
        </PageCard>
    }
}

#[component]
pub fn ServicesPage() -> impl IntoView {
    view! {
        <PageCard title="Our Services">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {SERVICES
                    .iter()
                    .map(|(title, body)| view! {
                        <div class="p-6 border border-base-300 rounded-lg">
                            <h3 class="text-lg font-semibold mb-3">{*title}</h3>
                            <p class="text-base-content/70">{*body}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </PageCard>
    }
}
