use super::{CaseList, DashboardShell, DashboardTab, Panel, StatGrid};
use crate::components::icons::Calendar;
use leptos::prelude::*;
use mediasi_shared::fixtures::{MEDIATOR_CASES, MEDIATOR_STATS, UPCOMING_MEETINGS};
use mediasi_shared::format::format_rupiah;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Cases,
    Schedule,
    Earnings,
}

impl DashboardTab for Tab {
    const ALL: &'static [Self] = &[Tab::Overview, Tab::Cases, Tab::Schedule, Tab::Earnings];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Cases => "My Cases",
            Tab::Schedule => "Schedule",
            Tab::Earnings => "Earnings",
        }
    }
}

const RECENT_ACTIVITY: &[(&str, &str, &str)] = &[
    ("bg-green-500", "Case #1234 completed successfully", "2 hours ago"),
    ("bg-blue-500", "New case assigned: Property Dispute", "5 hours ago"),
    ("bg-yellow-500", "Meeting scheduled for tomorrow", "1 day ago"),
];

#[component]
pub fn MediatorDashboard() -> impl IntoView {
    let active = RwSignal::new(Tab::Overview);

    view! {
        <DashboardShell title="Mediator Dashboard".to_string() active=active>
            {move || match active.get() {
                Tab::Overview => view! { <Overview /> }.into_any(),
                Tab::Cases => view! {
                    <Panel title="Assigned Cases">
                        <CaseList cases=MEDIATOR_CASES detailed=true />
                    </Panel>
                }
                .into_any(),
                Tab::Schedule => view! { <Schedule /> }.into_any(),
                Tab::Earnings => view! { <Earnings /> }.into_any(),
            }}
        </DashboardShell>
    }
}

#[component]
fn Meetings() -> impl IntoView {
    view! {
        <div class="space-y-4">
            {UPCOMING_MEETINGS
                .iter()
                .map(|meeting| view! {
                    <div class="flex items-center justify-between p-4 border border-base-300 rounded-lg">
                        <div>
                            <h4 class="font-medium">{meeting.title}</h4>
                            <p class="text-sm text-base-content/70">{meeting.date} " at " {meeting.time}</p>
                            <p class="text-xs text-base-content/50">{meeting.participants} " participants"</p>
                        </div>
                        <Calendar attr:class="h-5 w-5 text-primary" />
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Overview() -> impl IntoView {
    view! {
        <StatGrid stats=MEDIATOR_STATS />
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
            <Panel title="Upcoming Meetings">
                <Meetings />
            </Panel>
            <Panel title="Recent Activity">
                <div class="space-y-4">
                    {RECENT_ACTIVITY
                        .iter()
                        .map(|(dot, text, when)| view! {
                            <div class="flex items-start gap-3">
                                <div class=format!("w-2 h-2 rounded-full mt-2 {dot}")></div>
                                <div>
                                    <p class="text-sm">{*text}</p>
                                    <p class="text-xs text-base-content/50">{*when}</p>
                                </div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </Panel>
        </div>
    }
}

#[component]
fn Schedule() -> impl IntoView {
    view! {
        <Panel title="Schedule & Availability">
            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <Meetings />
                <div class="space-y-2">
                    {["Monday", "Tuesday", "Wednesday", "Thursday", "Friday"]
                        .into_iter()
                        .map(|day| view! {
                            <div class="flex items-center justify-between p-3 bg-base-200 rounded-lg">
                                <span class="font-medium">{day}</span>
                                <span class="text-sm text-base-content/70">"09:00 - 17:00"</span>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </Panel>
    }
}

#[component]
fn Earnings() -> impl IntoView {
    let total: u64 = MEDIATOR_CASES.iter().map(|case| case.amount).sum();

    view! {
        <Panel title="Earnings & Statistics">
            <div class="stats shadow">
                <div class="stat">
                    <div class="stat-title">"Assigned case value"</div>
                    <div class="stat-value text-primary text-2xl">{format_rupiah(total)}</div>
                    <div class="stat-desc">{MEDIATOR_CASES.len()} " cases"</div>
                </div>
            </div>
        </Panel>
    }
}
