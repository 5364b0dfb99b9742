//! HRM Client - HTTP client for the HR management API
//!
//! Typed network calls to every hrm-server route.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::models::dashboard::{DashboardStats, DepartmentAttendance, LeaveDistribution};
pub use shared::models::department::{Department, DepartmentCreate, DepartmentUpdate};
pub use shared::models::employee::{Employee, EmployeeCreate, EmployeeTerminate, EmployeeUpdate};
pub use shared::models::leave_application::{
    LeaveApplication, LeaveApplicationCreate, LeaveStatus, LeaveStatusUpdate,
};
pub use shared::models::leave_balance::{LeaveBalance, LeaveBalanceUpdate};
pub use shared::models::leave_type::{LeaveType, LeaveTypeCreate};
