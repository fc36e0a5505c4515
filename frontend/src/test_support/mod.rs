#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{
        ActorRef, ApprovalRequest, HistoryEntry, RequestRef, RequestStatus, RequestType, Role,
        User, UserRef, ADMIN_ROLE_ID, ADMIN_ROLE_NAME, STANDARD_ROLE_ID,
    };
    use crate::state::auth::AuthState;
    use chrono::{TimeZone, Utc};
    use leptos::*;

    pub fn admin_user() -> User {
        User {
            id: 1,
            name: "Ana Pérez".into(),
            email: "ana@example.com".into(),
            username: "ana".into(),
            role: Role {
                id: ADMIN_ROLE_ID,
                name: ADMIN_ROLE_NAME.into(),
            },
        }
    }

    pub fn regular_user() -> User {
        User {
            id: 2,
            name: "Bruno Díaz".into(),
            email: "bruno@example.com".into(),
            username: "bruno".into(),
            role: Role {
                id: STANDARD_ROLE_ID,
                name: "Usuario".into(),
            },
        }
    }

    /// Requested by Ana (1), approved by Bruno (2).
    pub fn request_with_status(id: &str, title: &str, status: RequestStatus) -> ApprovalRequest {
        ApprovalRequest {
            id: id.into(),
            title: title.into(),
            description: "Detalle".into(),
            request_type: RequestType {
                id: 1,
                name: "Compras".into(),
            },
            requester: UserRef {
                id: 1,
                name: "Ana Pérez".into(),
                email: Some("ana@example.com".into()),
            },
            approvers: vec![UserRef {
                id: 2,
                name: "Bruno Díaz".into(),
                email: None,
            }],
            status,
            created_at: Utc.with_ymd_and_hms(2025, 7, 1, 10, 0, 0).unwrap(),
            history: Vec::new(),
        }
    }

    pub fn history_entry(id: &str, title: &str, status: RequestStatus) -> HistoryEntry {
        HistoryEntry {
            id: id.into(),
            status,
            actor: ActorRef {
                id: Some(2),
                name: "Bruno Díaz".into(),
            },
            comment: Some("Fuera de presupuesto".into()),
            changed_at: Utc.with_ymd_and_hms(2025, 7, 2, 9, 0, 0).unwrap(),
            request: Some(RequestRef {
                id: "req-1".into(),
                title: title.into(),
            }),
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated: user.is_some(),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
