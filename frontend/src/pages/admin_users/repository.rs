use crate::api::{ApiClient, ApiError, CreateUser, User};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminUsersRepository {
    client: Rc<ApiClient>,
}

impl AdminUsersRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, ApiError> {
        self.client.list_users().await
    }

    pub async fn create_user(&self, payload: CreateUser) -> Result<(), ApiError> {
        self.client.create_user(&payload).await
    }
}
