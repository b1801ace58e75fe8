use crate::api::{ApiClient, ApiError, OtpLoginResponse, TokenVerification};
use std::rc::Rc;

#[derive(Clone)]
pub struct AuthRepository {
    client: Rc<ApiClient>,
}

impl Default for AuthRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn verify_token(&self, token: &str) -> Result<TokenVerification, ApiError> {
        self.client.verify_token(token).await
    }

    pub async fn request_otp(&self, email: &str) -> Result<(), ApiError> {
        self.client.send_otp(email).await
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<OtpLoginResponse, ApiError> {
        self.client.verify_otp(email, otp).await
    }

    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.client.logout(token).await
    }
}
