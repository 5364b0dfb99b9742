//! Department model

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::AppResult;

/// Department row, with the parent name resolved on reads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub lead_name: String,
    pub parent_id: Option<i64>,
    pub employee_count: i64,
    pub description: String,
    /// Resolved parent name (present only when `parent_id` is set)
    #[cfg_attr(feature = "db", sqlx(default))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_name: Option<String>,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    pub name: String,
    pub lead_name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl DepartmentCreate {
    pub fn validate(&self) -> AppResult<()> {
        require("name", &self.name)?;
        require("leadName", &self.lead_name)?;
        Ok(())
    }
}

/// Update department payload (full replace)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    pub name: String,
    pub lead_name: String,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl DepartmentUpdate {
    pub fn validate(&self) -> AppResult<()> {
        require("name", &self.name)?;
        require("leadName", &self.lead_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_wire_shape_camel_case() {
        let dept = Department {
            id: 7,
            name: "Ops".into(),
            lead_name: "Chen".into(),
            parent_id: None,
            employee_count: 0,
            description: "".into(),
            parent_name: None,
        };
        let json = serde_json::to_value(&dept).unwrap();
        assert_eq!(json["leadName"], "Chen");
        assert_eq!(json["employeeCount"], 0);
        assert!(json["parentId"].is_null());
        // parentName omitted for top-level departments
        assert!(json.get("parentName").is_none());
    }

    #[test]
    fn test_parent_name_serialized_when_present() {
        let dept = Department {
            id: 8,
            name: "Payroll".into(),
            lead_name: "Lin".into(),
            parent_id: Some(7),
            employee_count: 2,
            description: "".into(),
            parent_name: Some("Ops".into()),
        };
        let json = serde_json::to_value(&dept).unwrap();
        assert_eq!(json["parentName"], "Ops");
        assert_eq!(json["parentId"], 7);
    }

    #[test]
    fn test_create_requires_name_and_lead() {
        let payload = DepartmentCreate {
            name: "".into(),
            lead_name: "Chen".into(),
            parent_id: None,
            description: None,
        };
        let err = payload.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);

        let payload = DepartmentCreate {
            name: "Ops".into(),
            lead_name: "  ".into(),
            parent_id: None,
            description: None,
        };
        assert!(payload.validate().is_err());

        let payload = DepartmentCreate {
            name: "Ops".into(),
            lead_name: "Chen".into(),
            parent_id: None,
            description: None,
        };
        assert!(payload.validate().is_ok());
    }
}
