//! Dashboard aggregate payloads
//!
//! Read-only summaries computed by SQL on request; no caching, no
//! incremental state.

use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Active employee headcount
    pub total_employees: i64,
    /// Applications starting in the current month
    pub monthly_leaves: i64,
    /// Mean of the per-department attendance rates, percent
    pub average_attendance: f64,
    /// Applications still pending review
    pub pending_requests: i64,
}

/// Per-department attendance summary for the current month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentAttendance {
    pub name: String,
    /// Attendance rate in percent, clamped to 0..100
    pub attendance: f64,
    /// Approved leave days taken this month
    pub leave_days: i64,
}

/// Leave-type distribution entry for the current month
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LeaveDistribution {
    pub name: String,
    /// Total days, `SUM(days)` grouped by leave type
    pub value: i64,
}
