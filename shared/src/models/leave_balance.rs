//! Leave balance model
//!
//! One row per employee. Balances are maintained through their own
//! update endpoint and are never mutated by application approval.

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Leave balance row, joined with the employee name
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalance {
    pub id: i64,
    /// Employee business key
    pub employee_id: String,
    /// Resolved employee name
    pub employee: String,
    pub annual_leave: i64,
    pub annual_leave_used: i64,
    pub sick_leave: i64,
    pub sick_leave_used: i64,
    pub compensatory_leave: i64,
    pub compensatory_leave_used: i64,
}

/// Update leave balance payload (full replace of the six counters)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveBalanceUpdate {
    pub annual_leave: i64,
    pub annual_leave_used: i64,
    pub sick_leave: i64,
    pub sick_leave_used: i64,
    pub compensatory_leave: i64,
    pub compensatory_leave_used: i64,
}

impl LeaveBalanceUpdate {
    pub fn validate(&self) -> AppResult<()> {
        let fields = [
            ("annualLeave", self.annual_leave),
            ("annualLeaveUsed", self.annual_leave_used),
            ("sickLeave", self.sick_leave),
            ("sickLeaveUsed", self.sick_leave_used),
            ("compensatoryLeave", self.compensatory_leave),
            ("compensatoryLeaveUsed", self.compensatory_leave_used),
        ];
        for (name, value) in fields {
            if value < 0 {
                return Err(
                    AppError::validation(format!("{name} must not be negative"))
                        .with_detail("field", name),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_rejects_negative() {
        let payload = LeaveBalanceUpdate {
            annual_leave: 14,
            annual_leave_used: -1,
            sick_leave: 30,
            sick_leave_used: 0,
            compensatory_leave: 0,
            compensatory_leave_used: 0,
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(
            err.details.unwrap().get("field").unwrap(),
            "annualLeaveUsed"
        );
    }

    #[test]
    fn test_update_accepts_zeroes() {
        let payload = LeaveBalanceUpdate {
            annual_leave: 0,
            annual_leave_used: 0,
            sick_leave: 0,
            sick_leave_used: 0,
            compensatory_leave: 0,
            compensatory_leave_used: 0,
        };
        assert!(payload.validate().is_ok());
    }
}
