//! 角色面板
//!
//! 三个面板共用标签页、统计卡片与状态徽章，数据全部来自静态演示数据。

mod admin;
mod applicant;
mod mediator;

pub use admin::AdminDashboard;
pub use applicant::ApplicantDashboard;
pub use mediator::MediatorDashboard;

use crate::i18n::use_i18n;
use leptos::prelude::*;
use mediasi_shared::fixtures::{CaseSummary, StatCard};
use mediasi_shared::format::{format_rupiah, status_badge_class, status_label};

/// 面板标签页
pub trait DashboardTab: Copy + PartialEq + Send + Sync + 'static {
    /// 显示顺序
    const ALL: &'static [Self];

    /// 翻译键或原文（翻译缺失时原样显示）
    fn label(&self) -> &'static str;
}

/// 面板外壳：标题 + 标签栏 + 当前标签内容
#[component]
pub fn DashboardShell<T: DashboardTab>(
    #[prop(into)] title: Signal<String>,
    active: RwSignal<T>,
    children: Children,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="p-4 md:p-8 font-sans">
            <div class="max-w-7xl mx-auto space-y-8">
                <h1 class="text-3xl font-bold">{move || title.get()}</h1>
                <div role="tablist" class="tabs tabs-bordered">
                    {T::ALL
                        .iter()
                        .copied()
                        .map(|tab| view! {
                            <a
                                role="tab"
                                class=move || if active.get() == tab { "tab tab-active" } else { "tab" }
                                on:click=move |_| active.set(tab)
                            >
                                {move || i18n.t(tab.label())}
                            </a>
                        })
                        .collect_view()}
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
pub fn StatGrid(stats: &'static [StatCard]) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
            {stats
                .iter()
                .map(|stat| view! {
                    <div class="card bg-base-100 shadow-sm">
                        <div class="card-body flex-row items-center gap-4">
                            <div class=format!("w-3 h-12 rounded {}", stat.color)></div>
                            <div class="flex-1">
                                <p class="text-2xl font-bold">{stat.value}</p>
                                <p class="text-sm text-base-content/70">{move || i18n.t(stat.label)}</p>
                            </div>
                            {stat.change.map(|change| view! {
                                <span class="text-sm font-medium text-success">{change}</span>
                            })}
                        </div>
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn StatusBadge(status: &'static str) -> impl IntoView {
    view! {
        <span class=format!("px-2 py-1 text-xs font-medium rounded-full {}", status_badge_class(status))>
            {status_label(status)}
        </span>
    }
}

/// 卡片容器
#[component]
pub fn Panel(title: &'static str, children: Children) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="card bg-base-100 shadow-sm">
            <div class="card-body">
                <h3 class="card-title">{move || i18n.t(title)}</h3>
                {children()}
            </div>
        </div>
    }
}

/// 案件列表（详细模式额外显示描述、金额与下次会面）
#[component]
pub fn CaseList(cases: &'static [CaseSummary], #[prop(optional)] detailed: bool) -> impl IntoView {
    view! {
        <div class="space-y-4">
            {cases
                .iter()
                .map(|case| view! {
                    <div class="flex items-start justify-between p-4 border border-base-300 rounded-lg hover:bg-base-200">
                        <div class="flex-1">
                            <h4 class="font-medium">{case.title}</h4>
                            {detailed.then(|| view! { <p class="text-base-content/70 mt-1">{case.description}</p> })}
                            <p class="text-sm text-base-content/60 mt-1">
                                {case.category} " · " {case.created_at}
                                {detailed.then(|| format!(" · {}", format_rupiah(case.amount)))}
                            </p>
                            {case.scheduled_date.filter(|_| detailed).map(|date| view! {
                                <p class="text-sm text-base-content/60 mt-1">"Next meeting: " {date}</p>
                            })}
                        </div>
                        <StatusBadge status=case.status />
                    </div>
                })
                .collect_view()}
        </div>
    }
}
