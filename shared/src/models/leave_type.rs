//! Leave type model (reference data)

use serde::{Deserialize, Serialize};

use super::require;
use crate::error::AppResult;

/// Leave type row
///
/// `max_days` and `advance_apply` are free-text policy strings
/// ("by seniority", "3 days ahead"), not numbers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct LeaveType {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub unit: String,
    pub need_proof: bool,
    pub affect_attendance: bool,
    pub is_paid: bool,
    pub max_days: String,
    pub advance_apply: String,
    pub can_split: bool,
}

/// Create leave type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveTypeCreate {
    pub name: String,
    pub code: String,
    pub unit: String,
    #[serde(default)]
    pub need_proof: bool,
    #[serde(default)]
    pub affect_attendance: bool,
    #[serde(default)]
    pub is_paid: bool,
    #[serde(default)]
    pub max_days: String,
    #[serde(default)]
    pub advance_apply: String,
    #[serde(default)]
    pub can_split: bool,
}

impl LeaveTypeCreate {
    pub fn validate(&self) -> AppResult<()> {
        require("name", &self.name)?;
        require("code", &self.code)?;
        require("unit", &self.unit)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults() {
        let body = serde_json::json!({
            "name": "Annual Leave",
            "code": "annual",
            "unit": "day"
        });
        let payload: LeaveTypeCreate = serde_json::from_value(body).unwrap();
        assert!(payload.validate().is_ok());
        assert!(!payload.need_proof);
        assert!(payload.max_days.is_empty());
    }

    #[test]
    fn test_create_requires_code() {
        let payload = LeaveTypeCreate {
            name: "Annual Leave".into(),
            code: "".into(),
            unit: "day".into(),
            need_proof: false,
            affect_attendance: false,
            is_paid: true,
            max_days: String::new(),
            advance_apply: String::new(),
            can_split: true,
        };
        assert!(payload.validate().is_err());
    }
}
