use crate::{
    api::{ApprovalRequest, RequestCollection, RequestStatus},
    state::list::{ListFilter, StatusFilter},
};
use leptos::*;

/// The five request lists reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestListView {
    MyRequests,
    PendingApproval,
    AssignedToMe,
    Approved,
    Rejected,
}

impl RequestListView {
    pub fn collection(self) -> RequestCollection {
        match self {
            RequestListView::MyRequests | RequestListView::Approved | RequestListView::Rejected => {
                RequestCollection::Outbox
            }
            RequestListView::PendingApproval => RequestCollection::Inbox,
            RequestListView::AssignedToMe => RequestCollection::AssignedToMe,
        }
    }

    /// Status bucket baked into the view; such views hide the status selector.
    pub fn fixed_status(self) -> Option<RequestStatus> {
        match self {
            RequestListView::Approved => Some(RequestStatus::Approved),
            RequestListView::Rejected => Some(RequestStatus::Rejected),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            RequestListView::MyRequests => "Mis solicitudes",
            RequestListView::PendingApproval => "Pendientes de aprobación",
            RequestListView::AssignedToMe => "Asignadas a mí",
            RequestListView::Approved => "Solicitudes aprobadas",
            RequestListView::Rejected => "Solicitudes rechazadas",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            RequestListView::MyRequests => "Solicitudes que has creado",
            RequestListView::PendingApproval => "Solicitudes que esperan tu decisión",
            RequestListView::AssignedToMe => "Todas las solicitudes en las que eres aprobador",
            RequestListView::Approved => "Tus solicitudes que fueron aprobadas",
            RequestListView::Rejected => "Tus solicitudes que fueron rechazadas",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            RequestListView::MyRequests => "Aún no has creado solicitudes",
            RequestListView::PendingApproval => "No tienes solicitudes pendientes de aprobación",
            RequestListView::AssignedToMe => "No tienes solicitudes asignadas",
            RequestListView::Approved => "No tienes solicitudes aprobadas",
            RequestListView::Rejected => "No tienes solicitudes rechazadas",
        }
    }

    /// Lists of other people's requests show who asked.
    pub fn shows_requester(self) -> bool {
        matches!(
            self,
            RequestListView::PendingApproval | RequestListView::AssignedToMe
        )
    }
}

#[derive(Clone, Copy)]
pub struct RequestFilterState {
    pub search: RwSignal<String>,
    pub status: RwSignal<StatusFilter>,
}

impl Default for RequestFilterState {
    fn default() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            status: create_rw_signal(StatusFilter::All),
        }
    }
}

impl RequestFilterState {
    pub fn snapshot(&self) -> ListFilter {
        ListFilter::new(self.search.get(), self.status.get())
    }

    pub fn reset(&self) {
        self.search.set(String::new());
        self.status.set(StatusFilter::All);
    }
}

/// What a view shows: the view's own status bucket, then the user's filter.
pub fn visible_requests(
    view: RequestListView,
    items: &[ApprovalRequest],
    filter: &ListFilter,
) -> Vec<ApprovalRequest> {
    let filter = match view.fixed_status() {
        Some(status) => ListFilter::new(filter.search.clone(), StatusFilter::Only(status)),
        None => filter.clone(),
    };
    filter.apply(items)
}
