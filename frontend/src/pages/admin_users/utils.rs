use crate::api::{ApiError, CreateUser, ADMIN_ROLE_ID, STANDARD_ROLE_ID};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFormState {
    pub name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role_id: i64,
}

impl Default for UserFormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role_id: STANDARD_ROLE_ID,
        }
    }
}

/// Selectable roles as `(id, label)`.
pub const ROLE_OPTIONS: [(i64, &str); 2] = [
    (STANDARD_ROLE_ID, "Usuario"),
    (ADMIN_ROLE_ID, "Administrador"),
];

impl UserFormState {
    pub fn is_valid(&self) -> bool {
        !(self.name.trim().is_empty()
            || self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_request(&self) -> Result<CreateUser, ApiError> {
        if !self.is_valid() {
            return Err(ApiError::validation(
                "Completa nombre, usuario, email y contraseña",
            ));
        }
        Ok(CreateUser {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            role_id: self.role_id,
        })
    }
}

pub fn parse_role(raw: &str) -> i64 {
    raw.parse::<i64>()
        .ok()
        .filter(|id| ROLE_OPTIONS.iter().any(|(known, _)| known == id))
        .unwrap_or(STANDARD_ROLE_ID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_standard_role() {
        let state = UserFormState::default();
        assert_eq!(state.role_id, STANDARD_ROLE_ID);
        assert!(!state.is_valid());
    }

    #[test]
    fn to_request_trims_and_requires_fields() {
        let mut state = UserFormState {
            name: " Carla Ruiz ".into(),
            username: "carla ".into(),
            email: "carla@example.com".into(),
            password: " pw ".into(),
            role_id: ADMIN_ROLE_ID,
        };
        let request = state.to_request().unwrap();
        assert_eq!(request.name, "Carla Ruiz");
        assert_eq!(request.username, "carla");
        assert_eq!(request.password, " pw ");
        assert_eq!(request.role_id, ADMIN_ROLE_ID);

        state.email = "  ".into();
        let err = state.to_request().unwrap_err();
        assert_eq!(err.code, "VALIDATION_ERROR");

        state.reset();
        assert_eq!(state, UserFormState::default());
    }

    #[test]
    fn parse_role_falls_back_to_standard() {
        assert_eq!(parse_role("1"), ADMIN_ROLE_ID);
        assert_eq!(parse_role("2"), STANDARD_ROLE_ID);
        assert_eq!(parse_role("7"), STANDARD_ROLE_ID);
        assert_eq!(parse_role("x"), STANDARD_ROLE_ID);
    }
}
