use super::utils::{LoginFormState, INVALID_CREDENTIALS};
use crate::api::{ApiError, LoginRequest};
use crate::state::auth;
use crate::utils::navigation;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, bool>,
}

impl LoginViewModel {
    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

fn apply_login_result(success: bool, form: LoginFormState, error: RwSignal<Option<ApiError>>) {
    if success {
        error.set(None);
        form.password.set(String::new());
        navigation::redirect_to(navigation::HOME_PATH);
    } else {
        error.set(Some(ApiError::unauthorized(INVALID_CREDENTIALS)));
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if let Some(success) = login_action.value().get() {
            apply_login_result(success, form, error);
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}
