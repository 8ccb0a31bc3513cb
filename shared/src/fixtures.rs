//! 演示用静态数据
//!
//! 面板与表单只读取这些数据，运行期间不会创建、修改或删除。

use crate::{Identity, Role};
use chrono::{DateTime, Utc};

/// 内置演示账号（登录时按 email + role 匹配）
pub fn seed_identities(created_at: DateTime<Utc>) -> Vec<Identity> {
    [
        ("1", "John Doe", "john@example.com", Role::Applicant),
        ("2", "Jane Smith", "jane@example.com", Role::Mediator),
        ("3", "Admin User", "admin@example.com", Role::Admin),
    ]
    .into_iter()
    .map(|(id, name, email, role)| Identity {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role,
        verified: true,
        created_at,
    })
    .collect()
}

// =========================================================
// 案件 (Cases)
// =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub status: &'static str,
    pub created_at: &'static str,
    pub scheduled_date: Option<&'static str>,
    pub amount: u64,
}

pub const APPLICANT_CASES: &[CaseSummary] = &[
    CaseSummary {
        id: "1",
        title: "Contract Dispute Resolution",
        description: "Disagreement over contract terms with supplier",
        category: "Commercial",
        status: "in_progress",
        created_at: "2024-01-15",
        scheduled_date: Some("2024-02-20"),
        amount: 5_000_000,
    },
    CaseSummary {
        id: "2",
        title: "Employment Termination Issue",
        description: "Dispute regarding termination compensation",
        category: "Employment",
        status: "completed",
        created_at: "2024-01-10",
        scheduled_date: None,
        amount: 2_500_000,
    },
];

pub const MEDIATOR_CASES: &[CaseSummary] = &[
    CaseSummary {
        id: "1",
        title: "Contract Dispute Resolution",
        description: "Commercial contract disagreement",
        category: "Commercial",
        status: "in_progress",
        created_at: "2024-01-15",
        scheduled_date: Some("2024-02-20"),
        amount: 5_000_000,
    },
    CaseSummary {
        id: "3",
        title: "Property Boundary Dispute",
        description: "Neighbor property line disagreement",
        category: "Property",
        status: "pending",
        created_at: "2024-01-18",
        scheduled_date: None,
        amount: 3_000_000,
    },
];

// =========================================================
// 面板统计与列表 (Dashboard widgets)
// =========================================================

/// 统计卡片，`label` 以 `dashboard.` / `admin.` 开头时作为翻译键使用
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub color: &'static str,
    pub change: Option<&'static str>,
}

pub const APPLICANT_STATS: &[StatCard] = &[
    StatCard { label: "dashboard.new_case", value: "3", color: "bg-blue-500", change: None },
    StatCard { label: "dashboard.pending", value: "2", color: "bg-yellow-500", change: None },
    StatCard { label: "dashboard.completed", value: "5", color: "bg-green-500", change: None },
];

pub const MEDIATOR_STATS: &[StatCard] = &[
    StatCard { label: "Active Cases", value: "8", color: "bg-blue-500", change: None },
    StatCard { label: "Completed", value: "24", color: "bg-green-500", change: None },
    StatCard { label: "This Month", value: "6", color: "bg-purple-500", change: None },
    StatCard { label: "Rating", value: "4.8", color: "bg-yellow-500", change: None },
];

pub const ADMIN_STATS: &[StatCard] = &[
    StatCard { label: "Total Users", value: "1,234", color: "bg-blue-500", change: Some("+12%") },
    StatCard { label: "Active Cases", value: "89", color: "bg-green-500", change: Some("+5%") },
    StatCard { label: "Completed Today", value: "23", color: "bg-purple-500", change: Some("+18%") },
    StatCard { label: "Success Rate", value: "94%", color: "bg-yellow-500", change: Some("+2%") },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Meeting {
    pub id: &'static str,
    pub title: &'static str,
    pub time: &'static str,
    pub date: &'static str,
    pub participants: u32,
}

pub const UPCOMING_MEETINGS: &[Meeting] = &[
    Meeting { id: "1", title: "Contract Dispute", time: "2:00 PM", date: "Today", participants: 3 },
    Meeting { id: "2", title: "Employment Issue", time: "10:00 AM", date: "Tomorrow", participants: 2 },
    Meeting { id: "3", title: "Property Dispute", time: "3:30 PM", date: "Feb 22", participants: 4 },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserRow {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub status: &'static str,
    pub join_date: &'static str,
}

pub const RECENT_USERS: &[UserRow] = &[
    UserRow { id: "1", name: "John Smith", email: "john@example.com", role: Role::Applicant, status: "active", join_date: "2024-01-20" },
    UserRow { id: "2", name: "Jane Doe", email: "jane@example.com", role: Role::Mediator, status: "pending", join_date: "2024-01-19" },
    UserRow { id: "3", name: "Mike Johnson", email: "mike@example.com", role: Role::Applicant, status: "active", join_date: "2024-01-18" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseRow {
    pub id: &'static str,
    pub title: &'static str,
    pub applicant: &'static str,
    pub mediator: &'static str,
    pub status: &'static str,
    pub created: &'static str,
}

pub const RECENT_CASES: &[CaseRow] = &[
    CaseRow { id: "1", title: "Contract Dispute", applicant: "John Smith", mediator: "Sarah Wilson", status: "in_progress", created: "2024-01-20" },
    CaseRow { id: "2", title: "Property Issue", applicant: "Mary Brown", mediator: "David Lee", status: "completed", created: "2024-01-19" },
    CaseRow { id: "3", title: "Employment Dispute", applicant: "Tom Davis", mediator: "Lisa Wang", status: "pending", created: "2024-01-18" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentRow {
    pub id: &'static str,
    pub case_id: &'static str,
    pub amount: u64,
    pub status: &'static str,
    pub payment_date: Option<&'static str>,
}

pub const APPLICANT_PAYMENTS: &[PaymentRow] = &[
    PaymentRow { id: "1", case_id: "1", amount: 5_000_000, status: "pending", payment_date: None },
    PaymentRow { id: "2", case_id: "2", amount: 2_500_000, status: "paid", payment_date: Some("2024-01-12") },
];

// =========================================================
// 表单与聊天 (Forms & chat)
// =========================================================

pub const CASE_CATEGORIES: &[&str] = &[
    "Commercial Disputes",
    "Employment Issues",
    "Property Disputes",
    "Family Matters",
    "Contract Disputes",
    "Intellectual Property",
    "Consumer Disputes",
    "Partnership Disputes",
];

pub const CHAT_GREETING: &str = "Hello! I'm your AI legal assistant. How can I help you today?";

pub const CANNED_RESPONSES: [&str; 5] = [
    "Based on your question, I recommend consulting with a qualified mediator for personalized advice.",
    "This appears to be a civil matter that could benefit from mediation rather than litigation.",
    "Let me provide some general information about this legal area. For specific advice, please consult with our professional mediators.",
    "This is an interesting legal question. I suggest documenting all relevant details and discussing with a legal professional.",
    "Mediation could be an effective solution for this type of dispute. Would you like me to help you understand the process?",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_identities_are_verified_and_cover_every_role() {
        let seeds = seed_identities(Utc::now());
        assert_eq!(seeds.len(), 3);
        assert!(seeds.iter().all(|i| i.verified));
        for role in Role::SELECTABLE {
            assert!(seeds.iter().any(|i| i.role == role));
        }
    }
}
