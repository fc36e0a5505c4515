use reqwest::Method;
use serde_json::Value;

use super::{
    client::{encode_segment, expect_body, ApiClient},
    types::{ApiError, ApprovalRequest, CreateApprovalRequest, RequestStatus, UpdateStatusRequest},
};

/// Server-side collections of requests relative to the signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestCollection {
    /// Requests the user created.
    Outbox,
    /// Pending requests waiting on the user's decision.
    Inbox,
    /// Every request naming the user as approver, in any status.
    AssignedToMe,
}

impl RequestCollection {
    pub fn path(self) -> &'static str {
        match self {
            RequestCollection::Outbox => "solicitudes/outbox",
            RequestCollection::Inbox => "solicitudes/inbox",
            RequestCollection::AssignedToMe => "solicitudes/assigned-to-me",
        }
    }
}

impl ApiClient {
    pub async fn list_collection(
        &self,
        collection: RequestCollection,
    ) -> Result<Vec<ApprovalRequest>, ApiError> {
        self.get_list(collection.path()).await
    }

    pub async fn list_outbox(&self) -> Result<Vec<ApprovalRequest>, ApiError> {
        self.list_collection(RequestCollection::Outbox).await
    }

    pub async fn list_inbox(&self) -> Result<Vec<ApprovalRequest>, ApiError> {
        self.list_collection(RequestCollection::Inbox).await
    }

    pub async fn list_assigned_to_me(&self) -> Result<Vec<ApprovalRequest>, ApiError> {
        self.list_collection(RequestCollection::AssignedToMe).await
    }

    /// Full record including approvers and history, history ordered oldest first.
    pub async fn get_request(&self, id: &str) -> Result<ApprovalRequest, ApiError> {
        let path = format!("solicitudes/{}", encode_segment(id));
        let mut request: ApprovalRequest = expect_body(self.get_json(&path).await?, &path)?;
        request.sort_history();
        Ok(request)
    }

    pub async fn create_request(&self, request: &CreateApprovalRequest) -> Result<(), ApiError> {
        self.send_json::<Value, _>(Method::POST, "solicitudes", request)
            .await
            .map(|_| ())
    }

    pub async fn update_request_status(
        &self,
        id: &str,
        status: RequestStatus,
        comment: &str,
    ) -> Result<(), ApiError> {
        let path = format!("solicitudes/{}/estado", encode_segment(id));
        let payload = UpdateStatusRequest {
            new_status_id: status.id(),
            comment: comment.to_string(),
        };
        self.send_json::<Value, _>(Method::PATCH, &path, &payload)
            .await
            .map(|_| ())
    }
}
