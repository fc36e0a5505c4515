use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use leptos::*;

use crate::{
    api::{ApiClient, ApiError, LoginRequest, User},
    utils::navigation,
};

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    pub fn is_admin(&self) -> bool {
        is_admin(self.user.as_ref())
    }

    fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
        self.loading = false;
    }

    fn signed_out(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.loading = false;
    }
}

pub fn is_admin(user: Option<&User>) -> bool {
    user.map(User::is_admin).unwrap_or(false)
}

/// Session rules around the stored token: restore at start-up, credential
/// exchange and teardown. Cheap to clone; clones share the token store.
#[derive(Clone)]
pub struct AuthSession {
    api: ApiClient,
}

impl AuthSession {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn has_token(&self) -> bool {
        self.api.has_token()
    }

    /// Profile for the stored token, or `None` after clearing a token that is
    /// expired or rejected by the server.
    pub async fn restore(&self) -> Option<User> {
        let token = self.api.token_store().token()?;
        if token_expired(&token, Utc::now().timestamp()) {
            log::info!("stored session token has expired");
            self.api.clear_session();
            return None;
        }
        match self.api.get_profile().await {
            Ok(user) => Some(user),
            Err(err) => {
                log::warn!("could not restore session: {}", err);
                self.api.clear_session();
                None
            }
        }
    }

    pub async fn try_login(&self, request: &LoginRequest) -> Result<User, ApiError> {
        self.api.login(request).await?;
        match self.api.get_profile().await {
            Ok(user) => Ok(user),
            Err(err) => {
                self.api.clear_session();
                Err(err)
            }
        }
    }

    /// Signed-in profile, or `None` for any failure (already logged).
    pub async fn login(&self, request: &LoginRequest) -> Option<User> {
        match self.try_login(request).await {
            Ok(user) => Some(user),
            Err(err) => {
                log::error!("login failed: {}", err);
                None
            }
        }
    }

    pub fn logout(&self) {
        self.api.clear_session();
    }
}

fn token_expiry(token: &str) -> Option<i64> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('=')).ok()?;
    let claims: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    claims.get("exp")?.as_i64()
}

/// True only when the token carries an `exp` claim at or before `now`.
/// Opaque tokens are left for the server to judge.
pub fn token_expired(token: &str, now: i64) -> bool {
    token_expiry(token).map(|exp| exp <= now).unwrap_or(false)
}

fn create_auth_context(session: AuthSession) -> AuthContext {
    let (auth_state, set_auth_state) = create_signal(AuthState::default());
    if !session.has_token() {
        return (auth_state, set_auth_state);
    }

    set_auth_state.update(|state| state.loading = true);
    spawn_local(async move {
        match session.restore().await {
            Some(user) => set_auth_state.update(|state| state.signed_in(user)),
            None => set_auth_state.update(AuthState::signed_out),
        }
    });

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = use_auth_session();
    provide_context(session.clone());
    let ctx = create_auth_context(session);
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_auth_session() -> AuthSession {
    use_context::<AuthSession>().unwrap_or_else(|| {
        AuthSession::new(use_context::<ApiClient>().unwrap_or_else(ApiClient::new))
    })
}

/// Never fails: `false` covers bad credentials, transport errors and a
/// missing token in the response.
pub async fn login_request(
    request: LoginRequest,
    session: &AuthSession,
    set_auth_state: WriteSignal<AuthState>,
) -> bool {
    set_auth_state.update(|state| state.loading = true);
    match session.login(&request).await {
        Some(user) => {
            set_auth_state.update(|state| state.signed_in(user));
            true
        }
        None => {
            set_auth_state.update(AuthState::signed_out);
            false
        }
    }
}

pub fn logout(session: &AuthSession, set_auth_state: WriteSignal<AuthState>) {
    session.logout();
    set_auth_state.update(AuthState::signed_out);
    navigation::redirect_to_login();
}

pub fn use_login_action() -> Action<LoginRequest, bool> {
    let (_auth, set_auth) = use_auth();
    let session = use_auth_session();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let session = session.clone();
        async move { login_request(payload, &session, set_auth).await }
    })
}

pub fn use_logout() -> impl Fn() + Clone + 'static {
    let (_auth, set_auth) = use_auth();
    let session = use_auth_session();
    move || logout(&session, set_auth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, regular_user};
    use leptos::create_runtime;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    pub(super) fn jwt_with_exp(exp: i64) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":1,"exp":{}}}"#, exp));
        format!("{}.{}.signature", header, payload)
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated);
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn admin_check_uses_role_name() {
        assert!(is_admin(Some(&admin_user())));
        assert!(!is_admin(Some(&regular_user())));
        assert!(!is_admin(None));
    }

    #[test]
    fn token_expiry_reads_exp_claim() {
        let now = 1_750_000_000;
        assert!(token_expired(&jwt_with_exp(now - 1), now));
        assert!(token_expired(&jwt_with_exp(now), now));
        assert!(!token_expired(&jwt_with_exp(now + 3600), now));
    }

    #[test]
    fn opaque_tokens_are_not_treated_as_expired() {
        assert!(!token_expired("opaque-token", 0));
        assert!(!token_expired("a.!!!.c", 0));
    }
}
