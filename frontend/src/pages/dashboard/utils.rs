use crate::api::{ApprovalRequest, RequestStatus};

use super::repository::DashboardData;

pub const RECENT_LIMIT: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub pending_for_me: usize,
    pub approved: usize,
    pub rejected: usize,
    pub total: usize,
}

impl DashboardStats {
    pub fn from_data(data: &DashboardData) -> Self {
        let count = |status| data.outbox.iter().filter(|r| r.status == status).count();
        Self {
            pending_for_me: data.inbox.len(),
            approved: count(RequestStatus::Approved),
            rejected: count(RequestStatus::Rejected),
            total: data.outbox.len(),
        }
    }
}

/// Newest first, at most `limit` items.
pub fn most_recent(items: &[ApprovalRequest], limit: usize) -> Vec<ApprovalRequest> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}
