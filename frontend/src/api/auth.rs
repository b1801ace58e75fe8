use serde_json::json;

use super::{
    client::ApiClient,
    types::{
        ApiError, OtpLoginResponse, SendOtpRequest, TokenVerification, VerifyOtpRequest,
        VerifyTokenRequest,
    },
};

impl ApiClient {
    pub async fn verify_token(&self, token: &str) -> Result<TokenVerification, ApiError> {
        let url = self.endpoint("/verify-token").await;
        let response = self
            .send(self.http_client().post(&url).json(&VerifyTokenRequest {
                token: token.to_string(),
            }))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn send_otp(&self, email: &str) -> Result<(), ApiError> {
        let url = self.endpoint("/send-otp").await;
        let response = self
            .send(self.http_client().post(&url).json(&SendOtpRequest {
                email: email.to_string(),
            }))
            .await?;
        Self::expect_ack(response).await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<OtpLoginResponse, ApiError> {
        let url = self.endpoint("/verify-otp").await;
        let response = self
            .send(self.http_client().post(&url).json(&VerifyOtpRequest {
                email: email.to_string(),
                otp: otp.to_string(),
            }))
            .await?;
        Self::parse_json(response).await
    }

    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        let headers = Self::bearer_headers(token)?;
        let url = self.endpoint("/logout").await;
        let response = self
            .send(self.http_client().post(&url).headers(headers).json(&json!({})))
            .await?;
        Self::expect_ack(response).await
    }
}
