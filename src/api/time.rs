//! Time entry endpoints: submission and weekly summaries.

use super::client::ApiClient;
use super::error::ApiError;
use super::types::{MessageResponse, NewTimeEntry, ProjectWeekSummary, WeekSummary};

/// Record a new time entry.
///
/// POST /v1/time/add. The entry is sent verbatim; the service assigns its
/// identity and validates the project name.
pub async fn add_entry(client: &ApiClient, entry: &NewTimeEntry) -> Result<MessageResponse, ApiError> {
    client.post("/v1/time/add", entry).await
}

/// Fetch the current week's entries and totals.
///
/// GET /v1/time/get_week_summary.
pub async fn week_summary(client: &ApiClient) -> Result<WeekSummary, ApiError> {
    client.get("/v1/time/get_week_summary").await
}

/// Fetch the current week's entries and totals for a single project.
///
/// GET /v1/time/get_project_week_summary?project_name={name}
pub async fn project_week_summary(
    client: &ApiClient,
    project_name: &str,
) -> Result<ProjectWeekSummary, ApiError> {
    let path = format!(
        "/v1/time/get_project_week_summary?project_name={}",
        urlencoding::encode(project_name)
    );
    client.get(&path).await
}
