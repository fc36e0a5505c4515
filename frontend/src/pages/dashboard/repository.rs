use crate::api::{ApiClient, ApiError, ApprovalRequest};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub outbox: Vec<ApprovalRequest>,
    pub inbox: Vec<ApprovalRequest>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Outbox and inbox are requested concurrently; either failure fails the whole.
    pub async fn fetch(&self) -> Result<DashboardData, ApiError> {
        let (outbox, inbox) =
            futures::try_join!(self.client.list_outbox(), self.client.list_inbox())?;
        Ok(DashboardData { outbox, inbox })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::MemoryTokenStore;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request_json(id: &str, status: &str) -> serde_json::Value {
        json!({
            "id_solicitud": id,
            "titulo": format!("Solicitud {}", id),
            "tipo": { "id_tipo": 1, "nombre": "Compras" },
            "solicitante": { "id_usuario": 1, "nombre": "Ana Pérez" },
            "estadoActual": { "nombre": status },
            "fecha_creacion": "2025-07-01T10:00:00Z"
        })
    }

    fn repository(server: &MockServer) -> DashboardRepository {
        DashboardRepository::new(
            ApiClient::new_with_base_url(server.url("/api"))
                .with_token_store(Rc::new(MemoryTokenStore::with_token("t"))),
        )
    }

    #[tokio::test]
    async fn fetch_combines_outbox_and_inbox() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/solicitudes/outbox");
            then.status(200).json_body(json!([
                request_json("1", "Pendiente"),
                request_json("2", "Aprobado"),
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/solicitudes/inbox");
            then.status(200).json_body(json!([request_json("3", "Pendiente")]));
        });

        let data = repository(&server).fetch().await.unwrap();
        assert_eq!(data.outbox.len(), 2);
        assert_eq!(data.inbox[0].id, "3");
    }

    #[tokio::test]
    async fn inbox_failure_fails_dashboard() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/solicitudes/outbox");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/solicitudes/inbox");
            then.status(500).json_body(json!({ "message": "boom" }));
        });

        let err = repository(&server).fetch().await.unwrap_err();
        assert_eq!(err.status, Some(500));
    }
}
