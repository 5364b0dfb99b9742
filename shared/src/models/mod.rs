//! Domain models and request payloads
//!
//! Wire format is camelCase JSON (the contract the UI was built
//! against); database derives are gated behind the `db` feature.
//! Request payloads carry explicit `validate()` methods that run
//! before any database call.

pub mod dashboard;
pub mod department;
pub mod employee;
pub mod leave_application;
pub mod leave_balance;
pub mod leave_type;

pub use dashboard::{DashboardStats, DepartmentAttendance, LeaveDistribution};
pub use department::{Department, DepartmentCreate, DepartmentUpdate};
pub use employee::{Employee, EmployeeCreate, EmployeeTerminate, EmployeeUpdate};
pub use leave_application::{
    LeaveApplication, LeaveApplicationCreate, LeaveStatus, LeaveStatusUpdate,
};
pub use leave_balance::{LeaveBalance, LeaveBalanceUpdate};
pub use leave_type::{LeaveType, LeaveTypeCreate};

use crate::error::AppError;

/// Reject empty/blank required string fields.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required_field(field));
    }
    Ok(())
}
