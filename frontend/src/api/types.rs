use chrono::{DateTime, Utc};
use leptos::*;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub const ADMIN_ROLE_NAME: &str = "Administrador";
pub const ADMIN_ROLE_ID: i64 = 1;
pub const STANDARD_ROLE_ID: i64 = 2;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "id_rol")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        self.name == ADMIN_ROLE_NAME
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "id_usuario")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(rename = "rol")]
    pub role: Role,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Requester or approver as embedded in a request payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    #[serde(rename = "id_usuario")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorRef {
    #[serde(rename = "id_usuario", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestType {
    #[serde(rename = "id_tipo")]
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StatusRecord", into = "StatusRecord")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const ALL: [RequestStatus; 3] = [
        RequestStatus::Pending,
        RequestStatus::Approved,
        RequestStatus::Rejected,
    ];

    pub fn id(self) -> i64 {
        match self {
            RequestStatus::Pending => 1,
            RequestStatus::Approved => 2,
            RequestStatus::Rejected => 3,
        }
    }

    pub fn wire_name(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pendiente",
            RequestStatus::Approved => "Aprobado",
            RequestStatus::Rejected => "Rechazado",
        }
    }

    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.wire_name() == name)
    }

    pub fn is_terminal(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StatusRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id_estado: Option<i64>,
    nombre: String,
}

impl TryFrom<StatusRecord> for RequestStatus {
    type Error = String;

    fn try_from(record: StatusRecord) -> Result<Self, Self::Error> {
        RequestStatus::from_wire_name(&record.nombre)
            .ok_or_else(|| format!("unknown request status `{}`", record.nombre))
    }
}

impl From<RequestStatus> for StatusRecord {
    fn from(status: RequestStatus) -> Self {
        StatusRecord {
            id_estado: Some(status.id()),
            nombre: status.wire_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestRef {
    #[serde(rename = "id_solicitud", deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(rename = "id_historial", deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(rename = "estado")]
    pub status: RequestStatus,
    #[serde(rename = "usuarioAccion")]
    pub actor: ActorRef,
    #[serde(rename = "comentario", default)]
    pub comment: Option<String>,
    #[serde(rename = "fecha_cambio")]
    pub changed_at: DateTime<Utc>,
    #[serde(rename = "solicitud", default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRequest {
    #[serde(rename = "id_solicitud", deserialize_with = "flexible_id")]
    pub id: String,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "tipo")]
    pub request_type: RequestType,
    #[serde(rename = "solicitante")]
    pub requester: UserRef,
    #[serde(rename = "aprobadores", default)]
    pub approvers: Vec<UserRef>,
    #[serde(rename = "estadoActual")]
    pub status: RequestStatus,
    #[serde(rename = "fecha_creacion")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "historial", default)]
    pub history: Vec<HistoryEntry>,
}

impl ApprovalRequest {
    pub fn is_approver(&self, user_id: i64) -> bool {
        self.approvers.iter().any(|approver| approver.id == user_id)
    }

    pub fn approver_names(&self) -> String {
        self.approvers
            .iter()
            .map(|approver| approver.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Orders history oldest first; the API does not guarantee ordering.
    pub fn sort_history(&mut self) {
        self.history.sort_by(|a, b| a.changed_at.cmp(&b.changed_at));
    }

    pub fn latest_history(&self) -> Option<&HistoryEntry> {
        self.history.iter().max_by_key(|entry| entry.changed_at)
    }

    /// The latest history entry, when present, must agree with the current status.
    pub fn history_is_consistent(&self) -> bool {
        self.latest_history()
            .map(|entry| entry.status == self.status)
            .unwrap_or(true)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    #[serde(rename = "nombre")]
    pub name: String,
    pub email: String,
    pub username: String,
    #[serde(rename = "password_hash")]
    pub password: String,
    #[serde(rename = "id_rol")]
    pub role_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRequestType {
    #[serde(rename = "nombre")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApprovalRequest {
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "id_tipo")]
    pub type_id: i64,
    #[serde(rename = "id_aprobador")]
    pub approver_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(rename = "id_nuevo_estado")]
    pub new_status_id: i64,
    #[serde(rename = "comentario")]
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.error
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.error.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            error: msg.into(),
            code: code.to_string(),
            status: None,
            details: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "DECODE_ERROR")
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            status: Some(401),
            ..Self::with_code(msg, "UNAUTHORIZED")
        }
    }

    pub fn http(status: u16, msg: impl Into<String>, details: Option<Value>) -> Self {
        if status == 401 {
            return Self {
                details,
                ..Self::unauthorized(msg)
            };
        }
        Self {
            status: Some(status),
            details,
            ..Self::with_code(msg, "HTTP_ERROR")
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.code == "UNAUTHORIZED"
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(i64),
    Text(String),
}

fn flexible_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Number(value) => value.to_string(),
        RawId::Text(value) => value,
    })
}
