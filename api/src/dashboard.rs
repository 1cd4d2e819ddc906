//! Dashboard service

use crate::client::{HttpClient, RequestSpec};
use crate::types::ApiFuture;
use serde::{Deserialize, Serialize};

/// Path of the dashboard endpoint
pub const DASHBOARD_PATH: &str = "/api/dashboard";

/// Summary counters shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    /// Registered users
    pub users_count: u64,
    /// Projects
    pub projects_count: u64,
    /// Gateways across all projects
    pub gateways_count: u64,
    /// Devices across all gateways
    pub devices_count: u64,
}

impl DashboardData {
    /// Counters as `(key, value)` in display order
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, u64); 4] {
        [
            ("usersCount", self.users_count),
            ("projectsCount", self.projects_count),
            ("gatewaysCount", self.gateways_count),
            ("devicesCount", self.devices_count),
        ]
    }
}

/// Dashboard resource
pub trait DashboardApi: Send + Sync {
    /// `GET /api/dashboard`
    fn get_data(&self) -> ApiFuture<'_, DashboardData>;
}

/// HTTP implementation of [`DashboardApi`]
#[derive(Debug, Clone)]
pub struct DashboardService {
    http: HttpClient,
}

impl DashboardService {
    /// Create the service on top of a shared client
    #[must_use]
    pub const fn new(http: HttpClient) -> Self {
        Self { http }
    }
}

impl DashboardApi for DashboardService {
    fn get_data(&self) -> ApiFuture<'_, DashboardData> {
        Box::pin(async move {
            let response = self
                .http
                .request::<DashboardData>(RequestSpec::get(DASHBOARD_PATH))
                .await?;
            Ok(response.data)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_camel_case_counters() {
        let data: DashboardData = serde_json::from_str(
            r#"{"usersCount":3,"projectsCount":2,"gatewaysCount":5,"devicesCount":40}"#,
        )
        .unwrap();

        assert_eq!(data.entries()[0], ("usersCount", 3));
        assert_eq!(data.entries()[3], ("devicesCount", 40));
    }
}
