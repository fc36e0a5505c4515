use crate::api::{
    ApiClient, ApiError, CreateApprovalRequest, CreateRequestType, RequestType, User,
};
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Choices the form needs before it can be filled in.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormOptions {
    pub types: Vec<RequestType>,
    pub users: Vec<User>,
}

#[derive(Clone)]
pub struct NewRequestRepository {
    client: Rc<ApiClient>,
}

impl NewRequestRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn fetch_options(&self) -> Result<FormOptions, ApiError> {
        let (types, users) = futures::try_join!(
            self.client.list_request_types(),
            self.client.list_users()
        )?;
        Ok(FormOptions { types, users })
    }

    pub async fn create_type(&self, name: String) -> Result<RequestType, ApiError> {
        self.client
            .create_request_type(&CreateRequestType { name })
            .await
    }

    pub async fn submit(&self, request: CreateApprovalRequest) -> Result<(), ApiError> {
        self.client.create_request(&request).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::utils::storage::MemoryTokenStore;
    use httpmock::prelude::*;
    use serde_json::json;

    fn repository(server: &MockServer) -> NewRequestRepository {
        NewRequestRepository::new(
            ApiClient::new_with_base_url(server.url("/api"))
                .with_token_store(Rc::new(MemoryTokenStore::with_token("t"))),
        )
    }

    #[tokio::test]
    async fn options_load_types_and_users_together() {
        let server = MockServer::start_async().await;
        let types = server.mock(|when, then| {
            when.method(GET).path("/api/tipos-solicitud");
            then.status(200).json_body(json!([
                { "id_tipo": 1, "nombre": "Compras" },
                { "id_tipo": 2, "nombre": "Viajes" }
            ]));
        });
        let users = server.mock(|when, then| {
            when.method(GET).path("/api/users");
            then.status(200).json_body(json!([{
                "id_usuario": 2,
                "nombre": "Bruno Díaz",
                "email": "bruno@example.com",
                "username": "bruno",
                "rol": { "id_rol": 2, "nombre": "Usuario" }
            }]));
        });

        let options = repository(&server).fetch_options().await.unwrap();
        assert_eq!(options.types.len(), 2);
        assert_eq!(options.users[0].name, "Bruno Díaz");
        types.assert();
        users.assert();
    }

    #[tokio::test]
    async fn submit_posts_wire_payload() {
        let server = MockServer::start_async().await;
        let create = server.mock(|when, then| {
            when.method(POST).path("/api/solicitudes").json_body(json!({
                "titulo": "Monitor",
                "descripcion": "27 pulgadas",
                "id_tipo": 1,
                "id_aprobador": 2
            }));
            then.status(201).json_body(json!({ "id_solicitud": "n-1" }));
        });

        repository(&server)
            .submit(CreateApprovalRequest {
                title: "Monitor".into(),
                description: "27 pulgadas".into(),
                type_id: 1,
                approver_id: 2,
            })
            .await
            .unwrap();
        create.assert();
    }

    #[tokio::test]
    async fn create_type_returns_created_record() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST)
                .path("/api/tipos-solicitud")
                .json_body(json!({ "nombre": "Formación" }));
            then.status(201)
                .json_body(json!({ "id_tipo": 9, "nombre": "Formación" }));
        });

        let created = repository(&server)
            .create_type("Formación".into())
            .await
            .unwrap();
        assert_eq!(created.id, 9);
    }
}
