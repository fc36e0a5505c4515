use crate::api::{ApiClient, ApiError, ApprovalRequest, RequestStatus};
use std::rc::Rc;

#[derive(Clone)]
pub struct RequestDetailRepository {
    client: Rc<ApiClient>,
}

impl RequestDetailRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch(&self, id: &str) -> Result<ApprovalRequest, ApiError> {
        self.client.get_request(id).await
    }

    pub async fn transition(
        &self,
        id: &str,
        status: RequestStatus,
        comment: &str,
    ) -> Result<(), ApiError> {
        self.client.update_request_status(id, status, comment).await
    }
}
