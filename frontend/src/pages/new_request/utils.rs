use crate::api::{ApiError, CreateApprovalRequest, RequestType, User};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestFormState {
    pub title: String,
    pub description: String,
    pub type_id: Option<i64>,
    pub approver_id: Option<i64>,
}

impl RequestFormState {
    /// All four fields are required; nothing is sent when this fails.
    pub fn validate(&self) -> Result<CreateApprovalRequest, ApiError> {
        let title = self.title.trim();
        let description = self.description.trim();
        if title.is_empty() {
            return Err(ApiError::validation("El título es obligatorio"));
        }
        if description.is_empty() {
            return Err(ApiError::validation("La descripción es obligatoria"));
        }
        let type_id = self
            .type_id
            .ok_or_else(|| ApiError::validation("Selecciona un tipo de solicitud"))?;
        let approver_id = self
            .approver_id
            .ok_or_else(|| ApiError::validation("Selecciona un aprobador"))?;
        Ok(CreateApprovalRequest {
            title: title.to_string(),
            description: description.to_string(),
            type_id,
            approver_id,
        })
    }
}

/// Everyone except the person filing the request.
pub fn approver_candidates(users: &[User], current_user_id: Option<i64>) -> Vec<User> {
    users
        .iter()
        .filter(|user| Some(user.id) != current_user_id)
        .cloned()
        .collect()
}

pub fn normalize_type_name(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Loaded types followed by the ones created in this session, without duplicates.
pub fn merge_types(loaded: &[RequestType], created: &[RequestType]) -> Vec<RequestType> {
    let mut merged = loaded.to_vec();
    for item in created {
        if !merged.iter().any(|existing| existing.id == item.id) {
            merged.push(item.clone());
        }
    }
    merged
}

/// `""` from a placeholder option means nothing selected.
pub fn parse_selection(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
