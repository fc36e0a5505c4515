use super::{
    client::ApiClient,
    types::{ApiError, HistoryEntry},
};

impl ApiClient {
    /// Global audit trail across every request. Admin only on the server side.
    pub async fn list_history(&self) -> Result<Vec<HistoryEntry>, ApiError> {
        self.get_list("historial").await
    }
}
