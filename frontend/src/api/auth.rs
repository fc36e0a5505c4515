use reqwest::Method;

use super::{
    client::{expect_body, ApiClient, Auth},
    types::{ApiError, LoginRequest, LoginResponse, User},
};

impl ApiClient {
    /// Exchanges credentials for a bearer token and persists it. Sent without
    /// the stored token, and a 401 here means bad credentials, not an expired session.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response: LoginResponse = expect_body(
            self.request(Method::POST, "auth/login", Some(request), Auth::Anonymous)
                .await?,
            "auth/login",
        )?;
        let token = response
            .access_token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ApiError::unauthorized("La respuesta no incluye un token"))?;
        self.token_store()
            .set_token(token)
            .map_err(ApiError::unknown)?;
        Ok(response)
    }

    pub async fn get_profile(&self) -> Result<User, ApiError> {
        expect_body(self.get_json("auth/profile").await?, "auth/profile")
    }

    pub fn clear_session(&self) {
        self.token_store().clear_token();
    }
}
