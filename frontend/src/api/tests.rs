#![cfg(not(coverage))]

use super::*;
use crate::utils::storage::{MemoryTokenStore, TokenStore};
use httpmock::prelude::*;
use serde_json::json;
use std::rc::Rc;

fn user_json(id: i64, role: &str) -> serde_json::Value {
    json!({
        "id_usuario": id,
        "nombre": "Ana Pérez",
        "email": "ana@example.com",
        "username": "ana",
        "rol": { "id_rol": if role == "Administrador" { 1 } else { 2 }, "nombre": role }
    })
}

fn request_json(id: &str, status: &str) -> serde_json::Value {
    json!({
        "id_solicitud": id,
        "titulo": "Compra de equipo",
        "descripcion": "Portátil nuevo",
        "tipo": { "id_tipo": 1, "nombre": "Compras" },
        "solicitante": { "id_usuario": 1, "nombre": "Ana Pérez" },
        "aprobadores": [{ "id_usuario": 2, "nombre": "Bruno Díaz" }],
        "estadoActual": { "id_estado": 1, "nombre": status },
        "fecha_creacion": "2025-07-01T10:00:00Z"
    })
}

fn history_json(id: i64, status: &str, at: &str) -> serde_json::Value {
    json!({
        "id_historial": id,
        "estado": { "nombre": status },
        "usuarioAccion": { "id_usuario": 2, "nombre": "Bruno Díaz" },
        "comentario": "revisado",
        "fecha_cambio": at,
        "solicitud": { "id_solicitud": "req-1", "titulo": "Compra de equipo" }
    })
}

fn client_with_token(server: &MockServer, token: Option<&str>) -> (ApiClient, MemoryTokenStore) {
    let store = match token {
        Some(token) => MemoryTokenStore::with_token(token),
        None => MemoryTokenStore::default(),
    };
    let client =
        ApiClient::new_with_base_url(server.url("/api")).with_token_store(Rc::new(store.clone()));
    (client, store)
}

#[tokio::test]
async fn login_persists_token_and_profile_uses_it() {
    let server = MockServer::start_async().await;
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/auth/login")
            .json_body(json!({ "username": "ana", "password": "secret" }));
        then.status(201).json_body(json!({ "access_token": "jwt-1" }));
    });
    let profile = server.mock(|when, then| {
        when.method(GET)
            .path("/api/auth/profile")
            .header("Authorization", "Bearer jwt-1");
        then.status(200).json_body(user_json(1, "Administrador"));
    });

    let (client, store) = client_with_token(&server, None);
    client
        .login(&LoginRequest {
            username: "ana".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(store.token().as_deref(), Some("jwt-1"));

    let user = client.get_profile().await.unwrap();
    assert!(user.is_admin());
    assert_eq!(user.username, "ana");
    login.assert();
    profile.assert();
}

#[tokio::test]
async fn login_rejection_surfaces_server_message_and_keeps_store_empty() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(401)
            .json_body(json!({ "statusCode": 401, "message": "Credenciales inválidas" }));
    });

    let (client, store) = client_with_token(&server, None);
    let err = client
        .login(&LoginRequest {
            username: "ana".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.error, "Credenciales inválidas");
    assert!(err.is_unauthorized());
    assert!(store.token().is_none());
}

#[tokio::test]
async fn login_without_token_in_body_fails() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/auth/login");
        then.status(201).json_body(json!({}));
    });

    let (client, store) = client_with_token(&server, None);
    let result = client
        .login(&LoginRequest {
            username: "ana".into(),
            password: "secret".into(),
        })
        .await;
    assert!(result.is_err());
    assert!(store.token().is_none());
}

#[tokio::test]
async fn unauthorized_response_clears_stored_token() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/auth/profile");
        then.status(401).json_body(json!({ "message": "Unauthorized" }));
    });

    let (client, store) = client_with_token(&server, Some("expired"));
    let err = client.get_profile().await.unwrap_err();
    assert!(err.is_unauthorized());
    assert!(store.token().is_none());
}

#[tokio::test]
async fn request_collections_hit_their_endpoints() {
    let server = MockServer::start_async().await;
    let outbox = server.mock(|when, then| {
        when.method(GET)
            .path("/api/solicitudes/outbox")
            .header("Authorization", "Bearer t");
        then.status(200)
            .json_body(json!([request_json("a", "Pendiente"), request_json("b", "Aprobado")]));
    });
    let inbox = server.mock(|when, then| {
        when.method(GET).path("/api/solicitudes/inbox");
        then.status(200).json_body(json!([request_json("c", "Pendiente")]));
    });
    let assigned = server.mock(|when, then| {
        when.method(GET).path("/api/solicitudes/assigned-to-me");
        then.status(200).json_body(json!([]));
    });

    let (client, _) = client_with_token(&server, Some("t"));
    let mine = client.list_outbox().await.unwrap();
    assert_eq!(mine.len(), 2);
    assert_eq!(mine[1].status, RequestStatus::Approved);
    assert_eq!(client.list_inbox().await.unwrap()[0].id, "c");
    assert!(client.list_assigned_to_me().await.unwrap().is_empty());
    outbox.assert();
    inbox.assert();
    assigned.assert();
}

#[tokio::test]
async fn created_request_lists_for_requester_and_approver_only() {
    let server = MockServer::start_async().await;
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/solicitudes")
            .header("Authorization", "Bearer ana")
            .json_body(json!({
                "titulo": "Compra de equipo",
                "descripcion": "Portátil nuevo",
                "id_tipo": 1,
                "id_aprobador": 2
            }));
        then.status(201).json_body(request_json("req-9", "Pendiente"));
    });
    let outbox_ana = server.mock(|when, then| {
        when.method(GET)
            .path("/api/solicitudes/outbox")
            .header("Authorization", "Bearer ana");
        then.status(200).json_body(json!([request_json("req-9", "Pendiente")]));
    });
    let inbox_bruno = server.mock(|when, then| {
        when.method(GET)
            .path("/api/solicitudes/inbox")
            .header("Authorization", "Bearer bruno");
        then.status(200).json_body(json!([request_json("req-9", "Pendiente")]));
    });
    let inbox_ana = server.mock(|when, then| {
        when.method(GET)
            .path("/api/solicitudes/inbox")
            .header("Authorization", "Bearer ana");
        then.status(200).json_body(json!([]));
    });

    let (ana, _) = client_with_token(&server, Some("ana"));
    let (bruno, _) = client_with_token(&server, Some("bruno"));
    ana.create_request(&CreateApprovalRequest {
        title: "Compra de equipo".into(),
        description: "Portátil nuevo".into(),
        type_id: 1,
        approver_id: 2,
    })
    .await
    .unwrap();

    let mine = ana.list_outbox().await.unwrap();
    let created = mine.iter().find(|request| request.id == "req-9").unwrap();
    assert_eq!(created.status, RequestStatus::Pending);
    assert_eq!(created.requester.id, 1);
    assert!(created.is_approver(2));

    let to_review = bruno.list_inbox().await.unwrap();
    assert!(to_review.iter().any(|request| request.id == "req-9"));
    assert!(ana.list_inbox().await.unwrap().is_empty());

    create.assert();
    outbox_ana.assert();
    inbox_bruno.assert();
    inbox_ana.assert();
}

#[tokio::test]
async fn get_request_orders_history_oldest_first() {
    let server = MockServer::start_async().await;
    let mut body = request_json("req-1", "Aprobado");
    body["historial"] = json!([
        history_json(2, "Aprobado", "2025-07-02T09:00:00Z"),
        history_json(1, "Pendiente", "2025-07-01T10:00:00Z"),
    ]);
    server.mock(|when, then| {
        when.method(GET).path("/api/solicitudes/req-1");
        then.status(200).json_body(body);
    });

    let (client, _) = client_with_token(&server, Some("t"));
    let request = client.get_request("req-1").await.unwrap();
    assert_eq!(request.history[0].id, "1");
    assert_eq!(request.history[1].status, RequestStatus::Approved);
    assert!(request.history_is_consistent());
}

#[tokio::test]
async fn get_request_not_found_keeps_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/solicitudes/missing");
        then.status(404)
            .json_body(json!({ "message": "Solicitud no encontrada" }));
    });

    let (client, store) = client_with_token(&server, Some("t"));
    let err = client.get_request("missing").await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.error, "Solicitud no encontrada");
    assert_eq!(store.token().as_deref(), Some("t"));
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/solicitudes/outbox");
        then.status(200).json_body(json!([{ "id_solicitud": "x" }]));
    });

    let (client, _) = client_with_token(&server, Some("t"));
    let err = client.list_outbox().await.unwrap_err();
    assert_eq!(err.code, "DECODE_ERROR");
}

#[tokio::test]
async fn update_status_sends_status_id_and_accepts_no_content() {
    let server = MockServer::start_async().await;
    let patch = server.mock(|when, then| {
        when.method("PATCH")
            .path("/api/solicitudes/req-1/estado")
            .json_body(json!({ "id_nuevo_estado": 3, "comentario": "fuera de presupuesto" }));
        then.status(204);
    });

    let (client, _) = client_with_token(&server, Some("t"));
    client
        .update_request_status("req-1", RequestStatus::Rejected, "fuera de presupuesto")
        .await
        .unwrap();
    patch.assert();
}

#[tokio::test]
async fn validation_errors_join_message_list() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/solicitudes");
        then.status(400).json_body(json!({
            "statusCode": 400,
            "message": ["titulo should not be empty", "id_aprobador must be a number"],
            "error": "Bad Request"
        }));
    });

    let (client, _) = client_with_token(&server, Some("t"));
    let err = client
        .create_request(&CreateApprovalRequest {
            title: String::new(),
            description: String::new(),
            type_id: 1,
            approver_id: 0,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status, Some(400));
    assert_eq!(
        err.error,
        "titulo should not be empty, id_aprobador must be a number"
    );
    assert!(err.details.is_some());
}

#[tokio::test]
async fn users_types_and_history_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/api/users");
        then.status(200)
            .json_body(json!([user_json(1, "Administrador"), user_json(2, "Usuario")]));
    });
    let create_user = server.mock(|when, then| {
        when.method(POST).path("/api/users").json_body(json!({
            "nombre": "Carla",
            "email": "carla@example.com",
            "username": "carla",
            "password_hash": "pw",
            "id_rol": 2
        }));
        then.status(201).json_body(json!({ "id_usuario": 3 }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/tipos-solicitud");
        then.status(200)
            .json_body(json!([{ "id_tipo": 1, "nombre": "Compras" }]));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/tipos-solicitud")
            .json_body(json!({ "nombre": "Viajes" }));
        then.status(201)
            .json_body(json!({ "id_tipo": 2, "nombre": "Viajes" }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/api/historial");
        then.status(200).json_body(json!([history_json(
            1,
            "Aprobado",
            "2025-07-02T09:00:00Z"
        )]));
    });

    let (client, _) = client_with_token(&server, Some("t"));
    assert_eq!(client.list_users().await.unwrap().len(), 2);
    client
        .create_user(&CreateUser {
            name: "Carla".into(),
            email: "carla@example.com".into(),
            username: "carla".into(),
            password: "pw".into(),
            role_id: STANDARD_ROLE_ID,
        })
        .await
        .unwrap();
    create_user.assert();
    assert_eq!(client.list_request_types().await.unwrap()[0].name, "Compras");
    let created = client
        .create_request_type(&CreateRequestType {
            name: "Viajes".into(),
        })
        .await
        .unwrap();
    assert_eq!(created.id, 2);
    let history = client.list_history().await.unwrap();
    assert_eq!(
        history[0].request.as_ref().map(|r| r.title.as_str()),
        Some("Compra de equipo")
    );
}

#[tokio::test]
async fn unreachable_server_is_request_failed() {
    let client = ApiClient::new_with_base_url("http://127.0.0.1:9")
        .with_token_store(Rc::new(MemoryTokenStore::with_token("t")));
    let err = client.list_inbox().await.unwrap_err();
    assert_eq!(err.code, "REQUEST_FAILED");
}
