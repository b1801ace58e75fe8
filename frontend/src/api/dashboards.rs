use super::{
    client::ApiClient,
    types::{ApiError, Dashboard, DashboardPayload},
};

impl ApiClient {
    pub async fn list_dashboards(&self, token: &str) -> Result<Vec<Dashboard>, ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint("/dashboards").await;
        let response = self
            .send(self.http_client().get(&url).headers(headers))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn create_dashboard(
        &self,
        token: &str,
        payload: &DashboardPayload,
    ) -> Result<(), ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint("/dashboards").await;
        let response = self
            .send(self.http_client().post(&url).headers(headers).json(payload))
            .await?;
        Self::expect_ack(response).await
    }

    pub async fn update_dashboard(
        &self,
        token: &str,
        id: i64,
        payload: &DashboardPayload,
    ) -> Result<(), ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint(&format!("/dashboards/{}", id)).await;
        let response = self
            .send(self.http_client().put(&url).headers(headers).json(payload))
            .await?;
        Self::expect_ack(response).await
    }

    pub async fn delete_dashboard(&self, token: &str, id: i64) -> Result<(), ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint(&format!("/dashboards/{}", id)).await;
        let response = self
            .send(self.http_client().delete(&url).headers(headers))
            .await?;
        Self::expect_ack(response).await
    }
}
