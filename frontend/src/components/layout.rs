use crate::state::auth::{self, use_auth};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavGroup {
    pub title: &'static str,
    pub links: Vec<NavLink>,
}

const MAIN_LINKS: [NavLink; 5] = [
    NavLink { href: "/", label: "Dashboard" },
    NavLink { href: "/my-requests", label: "Mis solicitudes" },
    NavLink { href: "/new-request", label: "Nueva solicitud" },
    NavLink { href: "/pending-approval", label: "Pendientes de aprobación" },
    NavLink { href: "/assigned-to-me", label: "Asignadas a mí" },
];

const STATUS_LINKS: [NavLink; 2] = [
    NavLink { href: "/approved", label: "Aprobadas" },
    NavLink { href: "/rejected", label: "Rechazadas" },
];

const ADMIN_LINKS: [NavLink; 2] = [
    NavLink { href: "/admin/users", label: "Usuarios" },
    NavLink { href: "/admin/history", label: "Historial global" },
];

/// Sidebar sections; the admin section only exists for administrators.
pub fn nav_groups(is_admin: bool) -> Vec<NavGroup> {
    let mut groups = vec![
        NavGroup {
            title: "Principal",
            links: MAIN_LINKS.to_vec(),
        },
        NavGroup {
            title: "Estados",
            links: STATUS_LINKS.to_vec(),
        },
    ];
    if is_admin {
        groups.push(NavGroup {
            title: "Administración",
            links: ADMIN_LINKS.to_vec(),
        });
    }
    groups
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let groups = create_memo(move |_| nav_groups(auth.get().is_admin()));
    let user_name = move || {
        auth.get()
            .user
            .map(|user| user.name)
            .unwrap_or_default()
    };
    let on_logout = {
        let logout = auth::use_logout();
        move |_| logout()
    };

    view! {
        <aside class="w-64 shrink-0 bg-surface-elevated border-r border-border min-h-screen flex flex-col">
            <div class="h-16 flex items-center px-6 border-b border-border">
                <h1 class="text-xl font-semibold text-fg">"ApprovalFlow"</h1>
            </div>
            <nav class="flex-1 px-3 py-4 space-y-6">
                <For
                    each=move || groups.get()
                    key=|group| group.title
                    children=move |group| {
                        view! {
                            <div>
                                <p class="px-3 text-xs font-semibold uppercase tracking-wide text-fg-muted">
                                    {group.title}
                                </p>
                                <div class="mt-2 space-y-1">
                                    {group
                                        .links
                                        .into_iter()
                                        .map(|link| {
                                            view! {
                                                <a
                                                    href=link.href
                                                    class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                                >
                                                    {link.label}
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </div>
                        }
                    }
                />
            </nav>
            <div class="px-6 py-4 border-t border-border space-y-2">
                <p class="text-sm text-fg">{user_name}</p>
                <button
                    on:click=on_logout
                    class="w-full text-left text-fg-muted hover:text-fg py-2 text-sm font-medium"
                >
                    "Cerrar sesión"
                </button>
            </div>
        </aside>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface flex">
            <Sidebar/>
            <main class="flex-1 py-6 px-4 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
