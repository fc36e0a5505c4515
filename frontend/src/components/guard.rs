use crate::{
    components::layout::LoadingSpinner,
    state::auth::{is_admin, use_auth, AuthState},
    utils::navigation,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        navigation::redirect_to_login();
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Where a guarded admin view sends the visitor, if anywhere.
fn admin_redirect_target(state: &AuthState) -> Option<&'static str> {
    if state.loading {
        None
    } else if !state.is_authenticated {
        Some(navigation::LOGIN_PATH)
    } else if !is_admin(state.user.as_ref()) {
        Some(navigation::HOME_PATH)
    } else {
        None
    }
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated);
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin_user = create_memo(move |_| auth.get().is_admin());
    create_effect(move |_| {
        if let Some(target) = admin_redirect_target(&auth.get()) {
            navigation::redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(
                    is_authenticated.get(),
                    is_loading.get(),
                    is_admin_user.get(),
                )
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};

    #[test]
    fn guard_blocks_until_authenticated() {
        assert!(!should_render_children(false, true));
        assert!(!should_render_children(false, false));
        assert!(!should_render_children(true, true));
        assert!(should_render_children(true, false));
    }

    #[test]
    fn admin_guard_blocks_non_admins() {
        assert!(!should_render_admin_children(false, true, false));
        assert!(!should_render_admin_children(false, false, true));
        assert!(!should_render_admin_children(true, true, true));
        assert!(!should_render_admin_children(true, false, false));
        assert!(should_render_admin_children(true, false, true));
    }

    #[test]
    fn non_admins_are_sent_home_and_guests_to_login() {
        let guest = AuthState::default();
        assert_eq!(admin_redirect_target(&guest), Some("/login"));

        let regular = AuthState {
            user: Some(regular_user()),
            is_authenticated: true,
            loading: false,
        };
        assert_eq!(admin_redirect_target(&regular), Some("/"));

        let admin = AuthState {
            user: Some(admin_user()),
            ..regular.clone()
        };
        assert_eq!(admin_redirect_target(&admin), None);

        let loading = AuthState {
            loading: true,
            ..guest
        };
        assert_eq!(admin_redirect_target(&loading), None);
    }
}
