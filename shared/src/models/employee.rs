//! Employee model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::require;
use crate::error::AppResult;

/// Employee row
///
/// `employee_id` is the human-meaningful business key (e.g. "EMP001"),
/// distinct from the database primary key. `department` is the
/// department name string, deliberately not a foreign key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub phone: Option<String>,
    pub join_date: NaiveDate,
    pub active: bool,
    pub termination_date: Option<NaiveDate>,
    pub termination_reason: Option<String>,
    pub address: Option<String>,
    pub notes: Option<String>,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EmployeeCreate {
    pub fn validate(&self) -> AppResult<()> {
        require("name", &self.name)?;
        require("employeeId", &self.employee_id)?;
        require("department", &self.department)?;
        require("position", &self.position)?;
        require("email", &self.email)?;
        Ok(())
    }
}

/// Update employee payload (full replace of mutable fields)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    pub name: String,
    pub employee_id: String,
    pub department: String,
    pub position: String,
    pub email: String,
    pub join_date: NaiveDate,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl EmployeeUpdate {
    pub fn validate(&self) -> AppResult<()> {
        require("name", &self.name)?;
        require("employeeId", &self.employee_id)?;
        require("department", &self.department)?;
        require("position", &self.position)?;
        require("email", &self.email)?;
        Ok(())
    }
}

/// Terminate employee payload (soft delete)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTerminate {
    pub termination_date: NaiveDate,
    pub termination_reason: String,
}

impl EmployeeTerminate {
    pub fn validate(&self) -> AppResult<()> {
        require("terminationReason", &self.termination_reason)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn valid_create() -> EmployeeCreate {
        EmployeeCreate {
            name: "Ming Chang".into(),
            employee_id: "EMP001".into(),
            department: "Engineering".into(),
            position: "Software Engineer".into(),
            email: "ming@example.com".into(),
            join_date: "2020-01-15".parse().unwrap(),
            phone: None,
            address: None,
            notes: None,
        }
    }

    #[test]
    fn test_create_valid() {
        assert!(valid_create().validate().is_ok());
    }

    #[test]
    fn test_create_requires_email() {
        let mut payload = valid_create();
        payload.email = "".into();
        let err = payload.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.details.unwrap().get("field").unwrap(), "email");
    }

    #[test]
    fn test_create_missing_join_date_rejected_by_serde() {
        // joinDate is typed; an absent field never reaches validate()
        let body = serde_json::json!({
            "name": "Ming",
            "employeeId": "EMP001",
            "department": "Engineering",
            "position": "Engineer",
            "email": "ming@example.com"
        });
        assert!(serde_json::from_value::<EmployeeCreate>(body).is_err());
    }

    #[test]
    fn test_wire_shape() {
        let emp = Employee {
            id: 1,
            name: "Ming Chang".into(),
            employee_id: "EMP001".into(),
            department: "Engineering".into(),
            position: "Software Engineer".into(),
            email: "ming@example.com".into(),
            phone: Some("0912-345-678".into()),
            join_date: "2020-01-15".parse().unwrap(),
            active: true,
            termination_date: None,
            termination_reason: None,
            address: None,
            notes: None,
        };
        let json = serde_json::to_value(&emp).unwrap();
        assert_eq!(json["employeeId"], "EMP001");
        assert_eq!(json["joinDate"], "2020-01-15");
        assert_eq!(json["active"], true);
        assert!(json["terminationDate"].is_null());
    }

    #[test]
    fn test_terminate_requires_reason() {
        let payload = EmployeeTerminate {
            termination_date: "2023-06-30".parse().unwrap(),
            termination_reason: "".into(),
        };
        assert!(payload.validate().is_err());
    }
}
