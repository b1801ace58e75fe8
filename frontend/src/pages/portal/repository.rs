use crate::api::{ApiClient, ApiError, Dashboard, DashboardPayload};
use std::rc::Rc;

#[derive(Clone)]
pub struct DashboardsRepository {
    client: Rc<ApiClient>,
}

impl Default for DashboardsRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardsRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn list(&self, token: &str) -> Result<Vec<Dashboard>, ApiError> {
        self.client.list_dashboards(token).await
    }

    pub async fn create(&self, token: &str, payload: &DashboardPayload) -> Result<(), ApiError> {
        self.client.create_dashboard(token, payload).await
    }

    pub async fn update(
        &self,
        token: &str,
        id: i64,
        payload: &DashboardPayload,
    ) -> Result<(), ApiError> {
        self.client.update_dashboard(token, id, payload).await
    }

    pub async fn delete(&self, token: &str, id: i64) -> Result<(), ApiError> {
        self.client.delete_dashboard(token, id).await
    }
}
