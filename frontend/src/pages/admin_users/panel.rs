use crate::components::{guard::RequireAdmin, layout::Layout};
use leptos::*;

use super::{
    components::{create_form::CreateUserForm, list::UserList},
    layout::AdminUsersFrame,
    view_model::use_admin_users_view_model,
};

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            {|| view! { <AdminUsersContent /> }}
        </RequireAdmin>
    }
}

#[component]
fn AdminUsersContent() -> impl IntoView {
    let vm = use_admin_users_view_model();
    let loading = vm.users_resource.loading();

    view! {
        <Layout>
            <AdminUsersFrame>
                <CreateUserForm vm=vm />
                <UserList users=vm.users() loading=loading fetch_error=vm.fetch_error() />
            </AdminUsersFrame>
        </Layout>
    }
}
