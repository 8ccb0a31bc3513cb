use super::{CaseList, DashboardShell, DashboardTab, Panel, StatGrid, StatusBadge};
use crate::components::icons::{Calendar, FileText, MessageCircle, Plus};
use crate::i18n::use_i18n;
use crate::web::route::AppRoute;
use crate::web::router::use_router;
use leptos::prelude::*;
use mediasi_shared::fixtures::{APPLICANT_CASES, APPLICANT_PAYMENTS, APPLICANT_STATS};
use mediasi_shared::format::format_rupiah;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Cases,
    Payments,
}

impl DashboardTab for Tab {
    const ALL: &'static [Self] = &[Tab::Overview, Tab::Cases, Tab::Payments];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Cases => "My Cases",
            Tab::Payments => "payment.title",
        }
    }
}

#[component]
pub fn ApplicantDashboard() -> impl IntoView {
    let i18n = use_i18n();
    let active = RwSignal::new(Tab::Overview);

    view! {
        <DashboardShell title=Signal::derive(move || i18n.t("dashboard.welcome")) active=active>
            {move || match active.get() {
                Tab::Overview => view! { <Overview /> }.into_any(),
                Tab::Cases => view! { <Cases /> }.into_any(),
                Tab::Payments => view! { <Payments /> }.into_any(),
            }}
        </DashboardShell>
    }
}

#[component]
fn NewCaseButton() -> impl IntoView {
    let router = use_router();
    let i18n = use_i18n();

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| router.navigate_to(AppRoute::SubmitCase)>
            <Plus attr:class="h-4 w-4" /> {move || i18n.t("case.submit")}
        </button>
    }
}

#[component]
fn Overview() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <StatGrid stats=APPLICANT_STATS />
        <Panel title="Quick Actions">
            <div class="flex flex-wrap gap-4">
                <NewCaseButton />
                <button class="btn btn-outline gap-2">
                    <MessageCircle attr:class="h-4 w-4" /> {move || i18n.t("ai.consultation")}
                </button>
                <button class="btn btn-outline gap-2">
                    <Calendar attr:class="h-4 w-4" /> "Schedule Meeting"
                </button>
                <button class="btn btn-outline gap-2">
                    <FileText attr:class="h-4 w-4" /> "Documents"
                </button>
            </div>
        </Panel>
        <Panel title="Recent Cases">
            <CaseList cases=APPLICANT_CASES />
        </Panel>
    }
}

#[component]
fn Cases() -> impl IntoView {
    view! {
        <Panel title="My Cases">
            <div class="flex justify-end">
                <NewCaseButton />
            </div>
            <CaseList cases=APPLICANT_CASES detailed=true />
        </Panel>
    }
}

#[component]
fn Payments() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <Panel title="Payment History">
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Case"</th>
                            <th>{move || i18n.t("payment.amount")}</th>
                            <th>"Status"</th>
                            <th>"Date"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {APPLICANT_PAYMENTS
                            .iter()
                            .map(|payment| view! {
                                <tr>
                                    <td>"#" {payment.case_id}</td>
                                    <td class="font-mono">{format_rupiah(payment.amount)}</td>
                                    <td><StatusBadge status=payment.status /></td>
                                    <td>{payment.payment_date.unwrap_or("-")}</td>
                                    <td>
                                        {(payment.status == "pending").then(|| view! {
                                            <button class="btn btn-primary btn-xs">{move || i18n.t("payment.pay")}</button>
                                        })}
                                    </td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </Panel>
    }
}
