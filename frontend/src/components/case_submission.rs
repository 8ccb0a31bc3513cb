use crate::components::icons::{Close, FileText, Upload};
use crate::i18n::use_i18n;
use crate::services::use_services;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::web_sys::HtmlInputElement;
use mediasi_shared::fixtures::CASE_CATEGORIES;
use mediasi_shared::forms::{CaseDraft, DocumentDraft, Urgency};
use mediasi_shared::format::format_size;

const ACCEPTED_FILES: &str = ".pdf,.doc,.docx,.txt,.jpg,.jpeg,.png";

/// 读取文件选择框中的文件元信息，读取后清空选择框以便再次选择同名文件
fn take_selected(input: &HtmlInputElement) -> Vec<DocumentDraft> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    let documents = (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| DocumentDraft {
            name: file.name(),
            size: file.size() as u64,
        })
        .collect();
    input.set_value("");
    documents
}

fn notify_submitted() {
    if let Some(window) = leptos::web_sys::window() {
        let _ = window.alert_with_message(
            "Case submitted successfully! You will be matched with a mediator soon.",
        );
    }
}

#[component]
pub fn CaseSubmissionPage() -> impl IntoView {
    let router = use_router();
    let i18n = use_i18n();
    let services = use_services();

    let draft = RwSignal::new(CaseDraft::default());
    let (is_submitting, set_is_submitting) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let documents = take_selected(&input);
        draft.update(|d| d.add_documents(documents));
    };

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error_msg.set(None);
        set_is_submitting.set(true);

        let submitted = draft.get_untracked();
        let desk = services.cases();
        spawn_local(async move {
            match desk.submit(&submitted).await {
                Ok(()) => {
                    notify_submitted();
                    router.navigate_to(AppRoute::Dashboard);
                }
                Err(e) => set_error_msg.set(Some(e.to_string())),
            }
            set_is_submitting.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto px-4 py-12">
            <div class="card bg-base-100 shadow-lg">
                <form class="card-body space-y-4" on:submit=on_submit>
                    <div class="flex items-center gap-3">
                        <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                            <FileText attr:class="h-6 w-6" />
                        </div>
                        <h1 class="text-2xl font-bold">{move || i18n.t("case.submit")}</h1>
                    </div>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="title" class="label">
                            <span class="label-text">{move || i18n.t("case.title")}</span>
                        </label>
                        <input id="title" required
                            type="text"
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            prop:value=move || draft.with(|d| d.title.clone())
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <label for="description" class="label">
                            <span class="label-text">{move || i18n.t("case.description")}</span>
                        </label>
                        <textarea id="description" required
                            rows="5"
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                            prop:value=move || draft.with(|d| d.description.clone())
                            class="textarea textarea-bordered w-full"
                        ></textarea>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="category" class="label">
                                <span class="label-text">{move || i18n.t("case.category")}</span>
                            </label>
                            <select id="category" required
                                class="select select-bordered w-full"
                                on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                                prop:value=move || draft.with(|d| d.category.clone())
                            >
                                <option value="">"Select a category"</option>
                                {CASE_CATEGORIES
                                    .iter()
                                    .map(|category| view! { <option value=*category>{*category}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label for="urgency" class="label">
                                <span class="label-text">{move || i18n.t("case.urgency")}</span>
                            </label>
                            <select id="urgency"
                                class="select select-bordered w-full"
                                on:change=move |ev| draft.update(|d| d.urgency = Urgency::from_value(&event_target_value(&ev)))
                                prop:value=move || draft.with(|d| d.urgency.value())
                            >
                                {Urgency::ALL
                                    .into_iter()
                                    .map(|level| view! { <option value=level.value()>{level.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="preferred_date" class="label">
                            <span class="label-text">{move || i18n.t("case.preferred_date")}</span>
                        </label>
                        <input id="preferred_date"
                            type="date"
                            on:input=move |ev| draft.update(|d| d.set_preferred_date(event_target_value(&ev)))
                            prop:value=move || draft.with(|d| d.preferred_date.clone().unwrap_or_default())
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="form-control">
                        <span class="label-text mb-2">{move || i18n.t("case.documents")}</span>
                        <label class="flex flex-col items-center gap-2 p-6 border-2 border-dashed border-base-300 rounded-lg cursor-pointer hover:bg-base-200">
                            <Upload attr:class="h-8 w-8 text-base-content/50" />
                            <span class="link link-primary">"Upload files"</span>
                            <span class="text-xs text-base-content/50">"PDF, DOC, TXT, JPG, PNG"</span>
                            <input type="file" multiple class="hidden" accept=ACCEPTED_FILES on:change=on_files />
                        </label>
                        <ul class="mt-3 space-y-2">
                            {move || {
                                draft
                                    .with(|d| d.documents.clone())
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, doc)| view! {
                                        <li class="flex items-center justify-between p-3 bg-base-200 rounded-lg">
                                            <div class="flex items-center gap-2">
                                                <FileText attr:class="h-4 w-4 text-base-content/60" />
                                                <span class="text-sm font-medium">{doc.name}</span>
                                                <span class="text-xs text-base-content/50">{format_size(doc.size)}</span>
                                            </div>
                                            <button
                                                type="button"
                                                class="btn btn-ghost btn-xs btn-circle text-error"
                                                on:click=move |_| draft.update(|d| {
                                                    d.remove_document(index);
                                                })
                                            >
                                                <Close attr:class="h-4 w-4" />
                                            </button>
                                        </li>
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>

                    <div class="card-actions justify-end pt-4">
                        <button type="button" class="btn btn-ghost" on:click=move |_| router.navigate_to(AppRoute::Dashboard)>
                            "Cancel"
                        </button>
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Submitting..." }.into_any()
                            } else {
                                i18n.t("case.submit_btn").into_any()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
