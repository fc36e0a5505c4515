use crate::api::{ApiClient, ApiError, ApprovalRequest};
use std::rc::Rc;

use super::utils::RequestListView;

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Full backing collection of a view, before any status or text filter.
    pub async fn fetch(&self, view: RequestListView) -> Result<Vec<ApprovalRequest>, ApiError> {
        self.client.list_collection(view.collection()).await
    }
}
