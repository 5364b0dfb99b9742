//! Leave application model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::require;
use crate::error::{AppError, AppResult, ErrorCode};

/// Application status, a single one-way transition away from `Pending`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "leave_status", rename_all = "lowercase")
)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

/// Leave application row, joined with employee and leave-type names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplication {
    pub id: i64,
    /// Employee business key, not the database primary key
    pub employee_id: String,
    /// Resolved employee name
    pub employee: String,
    /// Resolved leave-type name
    #[serde(rename = "type")]
    pub leave_type: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Inclusive day span, derived at creation
    pub days: i64,
    pub reason: String,
    pub deputy: Option<String>,
    pub status: LeaveStatus,
    pub approver: Option<String>,
}

/// Create leave application payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApplicationCreate {
    pub employee_id: String,
    pub leave_type_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    pub reason: String,
    #[serde(default)]
    pub deputy: Option<String>,
}

impl LeaveApplicationCreate {
    pub fn validate(&self) -> AppResult<()> {
        require("employeeId", &self.employee_id)?;
        require("reason", &self.reason)?;
        if self.end_date < self.start_date {
            return Err(AppError::new(ErrorCode::LeaveInvalidDateRange)
                .with_detail("startDate", self.start_date.to_string())
                .with_detail("endDate", self.end_date.to_string()));
        }
        Ok(())
    }
}

/// Status transition payload (approve/reject)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatusUpdate {
    pub status: LeaveStatus,
    pub approver: String,
}

impl LeaveStatusUpdate {
    pub fn validate(&self) -> AppResult<()> {
        if self.status == LeaveStatus::Pending {
            return Err(AppError::new(ErrorCode::LeaveInvalidStatus));
        }
        require("approver", &self.approver)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> LeaveApplicationCreate {
        LeaveApplicationCreate {
            employee_id: "EMP001".into(),
            leave_type_id: 1,
            start_date: "2023-05-10".parse().unwrap(),
            end_date: "2023-05-12".parse().unwrap(),
            start_time: None,
            end_time: None,
            reason: "Family trip".into(),
            deputy: None,
        }
    }

    #[test]
    fn test_create_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_rejects_inverted_range() {
        let mut payload = valid_create();
        payload.end_date = "2023-05-09".parse().unwrap();
        let err = payload.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::LeaveInvalidDateRange);
    }

    #[test]
    fn test_single_day_range_is_valid() {
        let mut payload = valid_create();
        payload.end_date = payload.start_date;
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_status_update_rejects_pending() {
        let payload = LeaveStatusUpdate {
            status: LeaveStatus::Pending,
            approver: "Director Wang".into(),
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::LeaveInvalidStatus);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Approved).unwrap(),
            "\"approved\""
        );
        let status: LeaveStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, LeaveStatus::Rejected);
    }

    #[test]
    fn test_joined_type_name_serializes_as_type() {
        let app = LeaveApplication {
            id: 1,
            employee_id: "EMP001".into(),
            employee: "Ming Chang".into(),
            leave_type: "Annual Leave".into(),
            start_date: "2023-05-10".parse().unwrap(),
            end_date: "2023-05-12".parse().unwrap(),
            start_time: None,
            end_time: None,
            days: 3,
            reason: "Family trip".into(),
            deputy: None,
            status: LeaveStatus::Pending,
            approver: None,
        };
        let json = serde_json::to_value(&app).unwrap();
        assert_eq!(json["type"], "Annual Leave");
        assert_eq!(json["days"], 3);
        assert_eq!(json["status"], "pending");
    }
}
