//! HTTP client for network-based API calls

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::ApiResponse;
use shared::models::dashboard::{DashboardStats, DepartmentAttendance, LeaveDistribution};
use shared::models::department::{Department, DepartmentCreate, DepartmentUpdate};
use shared::models::employee::{Employee, EmployeeCreate, EmployeeTerminate, EmployeeUpdate};
use shared::models::leave_application::{
    LeaveApplication, LeaveApplicationCreate, LeaveStatusUpdate,
};
use shared::models::leave_balance::{LeaveBalance, LeaveBalanceUpdate};
use shared::models::leave_type::{LeaveType, LeaveTypeCreate};

use crate::{ClientConfig, ClientError, ClientResult};

/// HTTP client for making network requests to hrm-server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request; returns the server's message
    async fn delete(&self, path: &str) -> ClientResult<String> {
        let response = self.client.delete(self.url(path)).send().await?;
        let envelope: ApiResponse<()> = Self::handle_response(response).await?;
        Ok(envelope.message)
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = error_message(&text);
            return match status {
                StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                    Err(ClientError::Validation(message))
                }
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(message)),
                StatusCode::CONFLICT => Err(ClientError::Conflict(message)),
                _ => Err(ClientError::Internal(message)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    // ========== Department API ==========

    pub async fn list_departments(&self) -> ClientResult<Vec<Department>> {
        self.get("/api/departments").await
    }

    pub async fn create_department(&self, data: &DepartmentCreate) -> ClientResult<Department> {
        self.post("/api/departments", data).await
    }

    pub async fn update_department(
        &self,
        id: i64,
        data: &DepartmentUpdate,
    ) -> ClientResult<Department> {
        self.put(&format!("/api/departments/{id}"), data).await
    }

    pub async fn delete_department(&self, id: i64) -> ClientResult<String> {
        self.delete(&format!("/api/departments/{id}")).await
    }

    // ========== Employee API ==========

    pub async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
        self.get("/api/employees").await
    }

    pub async fn create_employee(&self, data: &EmployeeCreate) -> ClientResult<Employee> {
        self.post("/api/employees", data).await
    }

    pub async fn update_employee(&self, id: i64, data: &EmployeeUpdate) -> ClientResult<Employee> {
        self.put(&format!("/api/employees/{id}"), data).await
    }

    pub async fn terminate_employee(
        &self,
        id: i64,
        data: &EmployeeTerminate,
    ) -> ClientResult<Employee> {
        self.put(&format!("/api/employees/{id}/terminate"), data).await
    }

    pub async fn delete_employee(&self, id: i64) -> ClientResult<String> {
        self.delete(&format!("/api/employees/{id}")).await
    }

    // ========== Leave API ==========

    pub async fn list_leave_types(&self) -> ClientResult<Vec<LeaveType>> {
        self.get("/api/leave-types").await
    }

    pub async fn create_leave_type(&self, data: &LeaveTypeCreate) -> ClientResult<LeaveType> {
        self.post("/api/leave-types", data).await
    }

    pub async fn list_leave_applications(&self) -> ClientResult<Vec<LeaveApplication>> {
        self.get("/api/leave-applications").await
    }

    pub async fn create_leave_application(
        &self,
        data: &LeaveApplicationCreate,
    ) -> ClientResult<LeaveApplication> {
        self.post("/api/leave-applications", data).await
    }

    pub async fn update_leave_status(
        &self,
        id: i64,
        data: &LeaveStatusUpdate,
    ) -> ClientResult<LeaveApplication> {
        self.put(&format!("/api/leave-applications/{id}/status"), data)
            .await
    }

    pub async fn list_leave_balances(&self) -> ClientResult<Vec<LeaveBalance>> {
        self.get("/api/leave-balances").await
    }

    pub async fn update_leave_balance(
        &self,
        employee_id: &str,
        data: &LeaveBalanceUpdate,
    ) -> ClientResult<LeaveBalance> {
        self.put(&format!("/api/leave-balances/{employee_id}"), data)
            .await
    }

    // ========== Dashboard API ==========

    pub async fn dashboard_stats(&self) -> ClientResult<DashboardStats> {
        self.get("/api/dashboard/stats").await
    }

    pub async fn dashboard_attendance(&self) -> ClientResult<Vec<DepartmentAttendance>> {
        self.get("/api/dashboard/attendance").await
    }

    pub async fn dashboard_leaves(&self) -> ClientResult<Vec<LeaveDistribution>> {
        self.get("/api/dashboard/leaves").await
    }

    // ========== Health ==========

    pub async fn health(&self) -> ClientResult<serde_json::Value> {
        self.get("/api/health").await
    }
}

/// Pull the message out of an error envelope, falling back to raw text
fn error_message(body: &str) -> String {
    serde_json::from_str::<ApiResponse<()>>(body)
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_parses_envelope() {
        let body = r#"{"code":2001,"message":"Employee not found","details":{"id":9}}"#;
        assert_eq!(error_message(body), "Employee not found");
    }

    #[test]
    fn test_error_message_falls_back_to_raw() {
        assert_eq!(error_message("bad gateway"), "bad gateway");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = HttpClient::new(&ClientConfig::new("http://localhost:3001/")).unwrap();
        assert_eq!(client.url("/api/health"), "http://localhost:3001/api/health");
    }
}
