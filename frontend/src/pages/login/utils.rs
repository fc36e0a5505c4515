use crate::api::{ApiError, LoginRequest};
use leptos::*;

pub const INVALID_CREDENTIALS: &str = "Usuario o contraseña incorrectos";

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            username: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let username = self.username.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&username, &password)?;
        Ok(LoginRequest {
            username: username.trim().to_string(),
            password,
        })
    }
}

pub fn validate_credentials(username: &str, password: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::validation("Introduce tu usuario"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Introduce tu contraseña"));
    }
    Ok(())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn to_request_trims_username_only() {
        with_runtime(|| {
            let form = LoginFormState::default();
            form.username.set(" ana ".into());
            form.password.set(" pw ".into());
            let request = form.to_request().unwrap();
            assert_eq!(request.username, "ana");
            assert_eq!(request.password, " pw ");
        });
    }
}
