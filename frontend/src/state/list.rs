use leptos::*;
use serde::{Deserialize, Serialize};
use std::{cell::Cell, future::Future, rc::Rc};

use crate::api::{ApiError, ApprovalRequest, HistoryEntry, RequestStatus};

/// Fetch lifecycle of a list view. `refresh` goes back through `Loading`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListState<T> {
    Idle,
    Loading,
    Loaded(Vec<T>),
    Failed(ApiError),
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        ListState::Idle
    }
}

impl<T> ListState<T> {
    pub fn from_result(result: Result<Vec<T>, ApiError>) -> Self {
        match result {
            Ok(items) => ListState::Loaded(items),
            Err(err) => ListState::Failed(err),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            ListState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Hands out increasing tickets so only the newest fetch may apply its result.
#[derive(Debug, Clone, Default)]
pub struct FetchSequencer {
    latest: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

impl FetchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> FetchTicket {
        let ticket = self.latest.get() + 1;
        self.latest.set(ticket);
        FetchTicket(ticket)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Runs `apply` only when `ticket` has not been superseded.
    pub fn apply_if_current(&self, ticket: FetchTicket, apply: impl FnOnce()) -> bool {
        if self.is_current(ticket) {
            apply();
            true
        } else {
            log::debug!("discarding stale response for fetch #{}", ticket.0);
            false
        }
    }
}

/// Moves `state` through `Loading` and applies the fetch result unless a
/// newer load started in the meantime.
pub async fn load_list<T, F, Fut>(
    sequencer: &FetchSequencer,
    state: RwSignal<ListState<T>>,
    what: &str,
    fetch: F,
) where
    T: 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<T>, ApiError>>,
{
    let ticket = sequencer.next();
    state.set(ListState::Loading);
    let result = fetch().await;
    if let Err(err) = &result {
        log::error!("failed to load {}: {}", what, err);
    }
    sequencer.apply_if_current(ticket, || state.set(ListState::from_result(result)));
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(RequestStatus),
}

impl StatusFilter {
    pub fn matches(self, status: RequestStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// Select value used by the filter dropdowns: `""` means all.
    pub fn as_param(self) -> String {
        match self {
            StatusFilter::All => String::new(),
            StatusFilter::Only(status) => status.id().to_string(),
        }
    }

    pub fn from_param(value: &str) -> Self {
        value
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|id| RequestStatus::ALL.into_iter().find(|s| s.id() == id))
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }
}

/// Entities a list view can search and filter by status.
pub trait Searchable {
    /// Fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;
    fn status(&self) -> RequestStatus;
}

impl Searchable for ApprovalRequest {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.requester.name.as_str(),
            self.request_type.name.as_str(),
        ]
    }

    fn status(&self) -> RequestStatus {
        self.status
    }
}

impl Searchable for HistoryEntry {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.actor.name.as_str()];
        if let Some(request) = &self.request {
            fields.push(request.title.as_str());
        }
        if let Some(comment) = &self.comment {
            fields.push(comment.as_str());
        }
        fields
    }

    fn status(&self) -> RequestStatus {
        self.status
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListFilter {
    pub search: String,
    pub status: StatusFilter,
}

impl ListFilter {
    pub fn new(search: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            search: search.into(),
            status,
        }
    }

    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        self.status.matches(item.status()) && matches_search(item, &self.search)
    }

    /// Always evaluated against the full collection passed in.
    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(*item))
            .cloned()
            .collect()
    }
}

pub fn matches_search<T: Searchable>(item: &T, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    item.search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&term))
}
