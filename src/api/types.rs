//! Request and response types for the timetrack service API.
//!
//! The wire format is snake_case JSON, so field names serialize as written.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Signup request body sent to POST /v1/auth/signup.
#[derive(Debug, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Login request body sent to POST /v1/auth/login.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from the signup and login endpoints.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub username: Option<String>,
}

/// Acknowledgement from endpoints that return only a message.
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// New time entry sent to POST /v1/time/add.
#[derive(Debug, Serialize)]
pub struct NewTimeEntry {
    pub project_name: String,
    pub description: String,
    pub hours: f64,
    /// ISO date (YYYY-MM-DD). The service defaults it to today when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_date: Option<String>,
}

/// Persisted time entry as returned inside week summaries.
#[derive(Debug, Clone, Deserialize)]
pub struct TimeEntry {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub description: String,
    pub hours: f64,
    pub created_at: String,
    pub entry_date: String,
    pub project_name: String,
}

/// Aggregated week of entries from GET /v1/time/get_week_summary.
#[derive(Debug, Deserialize)]
pub struct WeekSummary {
    pub message: String,
    pub time_entries: Vec<TimeEntry>,
    pub total_hours: f64,
    pub project_totals: BTreeMap<String, f64>,
    pub week_start: String,
    pub week_end: String,
}

/// Week summary filtered to a single project,
/// from GET /v1/time/get_project_week_summary.
#[derive(Debug, Deserialize)]
pub struct ProjectWeekSummary {
    #[serde(flatten)]
    pub summary: WeekSummary,
    pub project_name: String,
}
