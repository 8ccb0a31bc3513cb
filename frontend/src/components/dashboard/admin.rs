use super::{DashboardShell, DashboardTab, Panel, StatGrid, StatusBadge};
use crate::i18n::use_i18n;
use leptos::prelude::*;
use mediasi_shared::fixtures::{ADMIN_STATS, RECENT_CASES, RECENT_USERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Users,
    Cases,
    Analytics,
    Settings,
}

impl DashboardTab for Tab {
    const ALL: &'static [Self] = &[
        Tab::Overview,
        Tab::Users,
        Tab::Cases,
        Tab::Analytics,
        Tab::Settings,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Users => "admin.users",
            Tab::Cases => "admin.cases",
            Tab::Analytics => "admin.analytics",
            Tab::Settings => "Settings",
        }
    }
}

const SYSTEM_HEALTH: &[(&str, &str)] = &[
    ("Server Status", "Online"),
    ("Database", "Healthy"),
    ("AI Service", "Active"),
];

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let active = RwSignal::new(Tab::Overview);

    view! {
        <DashboardShell title="Admin Dashboard".to_string() active=active>
            {move || match active.get() {
                Tab::Overview => view! { <Overview /> }.into_any(),
                Tab::Users => view! {
                    <Panel title="User Management">
                        <UserTable />
                    </Panel>
                }
                .into_any(),
                Tab::Cases => view! {
                    <Panel title="Case Management">
                        <CaseTable />
                    </Panel>
                }
                .into_any(),
                Tab::Analytics => view! { <Analytics /> }.into_any(),
                Tab::Settings => view! {
                    <Panel title="System Settings">
                        <p class="text-base-content/70">"System configuration options will be available here."</p>
                    </Panel>
                }
                .into_any(),
            }}
        </DashboardShell>
    }
}

#[component]
fn Overview() -> impl IntoView {
    view! {
        <StatGrid stats=ADMIN_STATS />
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Panel title="admin.users">
                <UserTable />
            </Panel>
            <Panel title="Recent Cases">
                <CaseTable />
            </Panel>
        </div>
        <Panel title="System Health">
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {SYSTEM_HEALTH
                    .iter()
                    .map(|(label, state)| view! {
                        <div class="flex items-center justify-between p-4 bg-base-200 rounded-lg">
                            <span class="font-medium">{*label}</span>
                            <span class="badge badge-success">{*state}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
        </Panel>
    }
}

#[component]
fn UserTable() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th class="hidden md:table-cell">"Email"</th>
                        <th>"Role"</th>
                        <th>"Status"</th>
                        <th class="hidden md:table-cell">"Joined"</th>
                    </tr>
                </thead>
                <tbody>
                    {RECENT_USERS
                        .iter()
                        .map(|user| view! {
                            <tr>
                                <td class="font-medium">{user.name}</td>
                                <td class="hidden md:table-cell">{user.email}</td>
                                <td>{move || i18n.t(user.role.label_key())}</td>
                                <td><StatusBadge status=user.status /></td>
                                <td class="hidden md:table-cell">{user.join_date}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn CaseTable() -> impl IntoView {
    view! {
        <div class="overflow-x-auto w-full">
            <table class="table table-zebra w-full">
                <thead>
                    <tr>
                        <th>"Case"</th>
                        <th class="hidden md:table-cell">"Applicant"</th>
                        <th class="hidden md:table-cell">"Mediator"</th>
                        <th>"Status"</th>
                        <th class="hidden md:table-cell">"Created"</th>
                    </tr>
                </thead>
                <tbody>
                    {RECENT_CASES
                        .iter()
                        .map(|case| view! {
                            <tr>
                                <td class="font-medium">{case.title}</td>
                                <td class="hidden md:table-cell">{case.applicant}</td>
                                <td class="hidden md:table-cell">{case.mediator}</td>
                                <td><StatusBadge status=case.status /></td>
                                <td class="hidden md:table-cell">{case.created}</td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn Analytics() -> impl IntoView {
    view! {
        <Panel title="admin.analytics">
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div class="p-4 bg-base-200 rounded-lg">
                    <h4 class="font-medium mb-2">"Case Resolution Rate"</h4>
                    <progress class="progress progress-success w-full" value="94" max="100"></progress>
                    <p class="text-sm text-base-content/70 mt-1">"94% resolved through mediation"</p>
                </div>
                <div class="p-4 bg-base-200 rounded-lg">
                    <h4 class="font-medium mb-2">"Average Resolution Time"</h4>
                    <p class="text-2xl font-bold">"14 days"</p>
                    <p class="text-sm text-base-content/70 mt-1">"vs 180 days in court"</p>
                </div>
            </div>
        </Panel>
    }
}
