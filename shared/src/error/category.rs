//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Department errors
/// - 2xxx: Employee errors
/// - 3xxx: Leave errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Department errors (1xxx)
    Department,
    /// Employee errors (2xxx)
    Employee,
    /// Leave errors (3xxx)
    Leave,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Department,
            2000..3000 => Self::Employee,
            3000..4000 => Self::Leave,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Department => "department",
            Self::Employee => "employee",
            Self::Leave => "leave",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(7), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1004), ErrorCategory::Department);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Employee);
        assert_eq!(ErrorCategory::from_code(3102), ErrorCategory::Leave);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::RequiredField.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::DepartmentParentCycle.category(),
            ErrorCategory::Department
        );
        assert_eq!(ErrorCode::EmployeeNotFound.category(), ErrorCategory::Employee);
        assert_eq!(ErrorCode::LeaveNotPending.category(), ErrorCategory::Leave);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }
}
