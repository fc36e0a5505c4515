use leptos::*;
use leptos_router::*;

use crate::{
    components::guard::RequireAuth,
    pages::{
        admin_history::AdminHistoryPage,
        admin_users::AdminUsersPage,
        dashboard::DashboardPage,
        login::LoginPage,
        new_request::NewRequestPage,
        request_detail::RequestDetailPage,
        requests::{
            ApprovedPage, AssignedToMePage, MyRequestsPage, PendingApprovalPage, RejectedPage,
        },
    },
    state::auth::AuthProvider,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/my-requests",
    "/new-request",
    "/pending-approval",
    "/assigned-to-me",
    "/approved",
    "/rejected",
    "/request/:id",
    "/admin/users",
    "/admin/history",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/",
    "/my-requests",
    "/new-request",
    "/pending-approval",
    "/assigned-to-me",
    "/approved",
    "/rejected",
    "/request/:id",
];

/// Guarded by the administrator check, which implies authentication.
pub const ADMIN_ROUTE_PATHS: &[&str] = &["/admin/users", "/admin/history"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/login"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/" view=ProtectedDashboard/>
                    <Route path="/my-requests" view=ProtectedMyRequests/>
                    <Route path="/new-request" view=ProtectedNewRequest/>
                    <Route path="/pending-approval" view=ProtectedPendingApproval/>
                    <Route path="/assigned-to-me" view=ProtectedAssignedToMe/>
                    <Route path="/approved" view=ProtectedApproved/>
                    <Route path="/rejected" view=ProtectedRejected/>
                    <Route path="/request/:id" view=ProtectedRequestDetail/>
                    <Route path="/admin/users" view=AdminUsersPage/>
                    <Route path="/admin/history" view=AdminHistoryPage/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedMyRequests() -> impl IntoView {
    view! { <RequireAuth><MyRequestsPage/></RequireAuth> }
}

#[component]
fn ProtectedNewRequest() -> impl IntoView {
    view! { <RequireAuth><NewRequestPage/></RequireAuth> }
}

#[component]
fn ProtectedPendingApproval() -> impl IntoView {
    view! { <RequireAuth><PendingApprovalPage/></RequireAuth> }
}

#[component]
fn ProtectedAssignedToMe() -> impl IntoView {
    view! { <RequireAuth><AssignedToMePage/></RequireAuth> }
}

#[component]
fn ProtectedApproved() -> impl IntoView {
    view! { <RequireAuth><ApprovedPage/></RequireAuth> }
}

#[component]
fn ProtectedRejected() -> impl IntoView {
    view! { <RequireAuth><RejectedPage/></RequireAuth> }
}

#[component]
fn ProtectedRequestDetail() -> impl IntoView {
    view! { <RequireAuth><RequestDetailPage/></RequireAuth> }
}
