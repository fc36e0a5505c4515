use crate::api::{ApiClient, ApiError, HistoryEntry};
use std::rc::Rc;

#[derive(Clone)]
pub struct HistoryRepository {
    client: Rc<ApiClient>,
}

impl HistoryRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Newest change first.
    pub async fn fetch(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        let mut entries = self.client.list_history().await?;
        entries.sort_by(|a, b| b.changed_at.cmp(&a.changed_at));
        Ok(entries)
    }
}
