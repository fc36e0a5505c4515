use reqwest::Method;
use serde_json::Value;

use super::{
    client::ApiClient,
    types::{ApiError, CreateUser, User},
};

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_list("users").await
    }

    pub async fn create_user(&self, request: &CreateUser) -> Result<(), ApiError> {
        self.send_json::<Value, _>(Method::POST, "users", request)
            .await
            .map(|_| ())
    }
}
