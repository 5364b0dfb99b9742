//! Unified error codes for the HRM system
//!
//! Error codes are shared between server responses and client error
//! mapping, organized by category:
//! - 0xxx: General errors
//! - 1xxx: Department errors
//! - 2xxx: Employee errors
//! - 3xxx: Leave errors
//! - 9xxx: System errors

use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Codes are represented as u16 values for efficient serialization and
/// cross-language compatibility with API consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing or empty
    RequiredField = 7,

    // ==================== 1xxx: Department ====================
    /// Department not found
    DepartmentNotFound = 1001,
    /// Department has child departments
    DepartmentHasChildren = 1002,
    /// Department has assigned employees
    DepartmentHasEmployees = 1003,
    /// Parent assignment would create a cycle
    DepartmentParentCycle = 1004,
    /// Parent department not found
    DepartmentParentNotFound = 1005,

    // ==================== 2xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 2001,
    /// Employee number already exists
    EmployeeIdExists = 2002,
    /// Employee email already exists
    EmployeeEmailExists = 2003,

    // ==================== 3xxx: Leave ====================
    /// Leave type not found
    LeaveTypeNotFound = 3001,
    /// Leave type code already exists
    LeaveTypeCodeExists = 3002,
    /// Leave application not found
    LeaveApplicationNotFound = 3101,
    /// Application is not in pending state
    LeaveNotPending = 3102,
    /// End date is before start date
    LeaveInvalidDateRange = 3103,
    /// Status must be approved or rejected
    LeaveInvalidStatus = 3104,
    /// Leave balance not found
    LeaveBalanceNotFound = 3201,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",

            Self::DepartmentNotFound => "Department not found",
            Self::DepartmentHasChildren => "Department has child departments",
            Self::DepartmentHasEmployees => "Department has assigned employees",
            Self::DepartmentParentCycle => "Parent assignment would create a cycle",
            Self::DepartmentParentNotFound => "Parent department not found",

            Self::EmployeeNotFound => "Employee not found",
            Self::EmployeeIdExists => "Employee number already exists",
            Self::EmployeeEmailExists => "Employee email already exists",

            Self::LeaveTypeNotFound => "Leave type not found",
            Self::LeaveTypeCodeExists => "Leave type code already exists",
            Self::LeaveApplicationNotFound => "Leave application not found",
            Self::LeaveNotPending => "Leave application is not pending",
            Self::LeaveInvalidDateRange => "End date must not be before start date",
            Self::LeaveInvalidStatus => "Status must be approved or rejected",
            Self::LeaveBalanceNotFound => "Leave balance not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
        }
    }

    /// Get the HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,

            Self::ValidationFailed
            | Self::InvalidRequest
            | Self::RequiredField
            | Self::LeaveInvalidDateRange
            | Self::LeaveInvalidStatus => StatusCode::BAD_REQUEST,

            Self::NotFound
            | Self::DepartmentNotFound
            | Self::DepartmentParentNotFound
            | Self::EmployeeNotFound
            | Self::LeaveTypeNotFound
            | Self::LeaveApplicationNotFound
            | Self::LeaveBalanceNotFound => StatusCode::NOT_FOUND,

            Self::AlreadyExists
            | Self::EmployeeIdExists
            | Self::EmployeeEmailExists
            | Self::LeaveTypeCodeExists => StatusCode::CONFLICT,

            Self::DepartmentHasChildren
            | Self::DepartmentHasEmployees
            | Self::DepartmentParentCycle
            | Self::LeaveNotPending => StatusCode::UNPROCESSABLE_ENTITY,

            Self::Unknown | Self::InternalError | Self::DatabaseError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid error code: {0}")]
pub struct InvalidErrorCode(pub u16);

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let code = match value {
            0 => Self::Success,
            1 => Self::Unknown,
            2 => Self::ValidationFailed,
            3 => Self::NotFound,
            4 => Self::AlreadyExists,
            5 => Self::InvalidRequest,
            7 => Self::RequiredField,

            1001 => Self::DepartmentNotFound,
            1002 => Self::DepartmentHasChildren,
            1003 => Self::DepartmentHasEmployees,
            1004 => Self::DepartmentParentCycle,
            1005 => Self::DepartmentParentNotFound,

            2001 => Self::EmployeeNotFound,
            2002 => Self::EmployeeIdExists,
            2003 => Self::EmployeeEmailExists,

            3001 => Self::LeaveTypeNotFound,
            3002 => Self::LeaveTypeCodeExists,
            3101 => Self::LeaveApplicationNotFound,
            3102 => Self::LeaveNotPending,
            3103 => Self::LeaveInvalidDateRange,
            3104 => Self::LeaveInvalidStatus,
            3201 => Self::LeaveBalanceNotFound,

            9001 => Self::InternalError,
            9002 => Self::DatabaseError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::DepartmentHasChildren,
            ErrorCode::EmployeeNotFound,
            ErrorCode::LeaveNotPending,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
    }

    #[test]
    fn test_http_status_mapping() {
        assert_eq!(ErrorCode::RequiredField.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ErrorCode::LeaveInvalidDateRange.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::DepartmentNotFound.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::EmployeeEmailExists.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::DepartmentHasChildren.http_status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_serialize_as_number() {
        let json = serde_json::to_string(&ErrorCode::LeaveNotPending).unwrap();
        assert_eq!(json, "3102");
        let code: ErrorCode = serde_json::from_str("1002").unwrap();
        assert_eq!(code, ErrorCode::DepartmentHasChildren);
    }
}
