use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client, Method, Response, StatusCode,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::rc::Rc;

use crate::{
    api::types::ApiError,
    config,
    utils::{
        navigation,
        storage::{default_token_store, TokenStore},
    },
};

pub const FALLBACK_ERROR_MESSAGE: &str = "Ocurrió un error en la petición";

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    tokens: Rc<dyn TokenStore>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a call carries the bearer token and reacts to 401 by ending the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Auth {
    Bearer,
    Anonymous,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            tokens: default_token_store(),
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: Some(base_url.into().trim_end_matches('/').to_string()),
            ..Self::new()
        }
    }

    pub fn with_token_store(mut self, tokens: Rc<dyn TokenStore>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn token_store(&self) -> Rc<dyn TokenStore> {
        self.tokens.clone()
    }

    pub fn has_token(&self) -> bool {
        self.tokens.token().is_some()
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    fn auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(token) = self.tokens.token() {
            headers.insert(AUTHORIZATION, bearer_header(&token)?);
        }
        Ok(headers)
    }

    fn handle_unauthorized_status(&self, status: StatusCode, auth: Auth) {
        if status == StatusCode::UNAUTHORIZED && auth == Auth::Bearer {
            log::warn!("API rejected the session token, signing out");
            self.tokens.clear_token();
            navigation::redirect_to_login();
        }
    }

    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let base_url = self.resolved_base_url().await;
        let url = endpoint_url(&base_url, path);
        let mut request = self.client.request(method, url);
        if auth == Auth::Bearer {
            request = request.headers(self.auth_headers()?);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        request
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    /// Parses a JSON body; `Ok(None)` for 204 No Content or an empty body.
    async fn map_response<T>(&self, response: Response, auth: Auth) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            self.handle_unauthorized_status(status, auth);
            let body = response
                .text()
                .await
                .ok()
                .and_then(|text| serde_json::from_str::<Value>(&text).ok());
            let message = error_message(body.as_ref(), status);
            return Err(ApiError::http(status.as_u16(), message, body));
        }
        if status == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(format!("Failed to read response: {}", e)))?;
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    }

    pub(crate) async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        auth: Auth,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, path, body, auth).await?;
        self.map_response(response, auth).await
    }

    pub(crate) async fn get_json<T>(&self, path: &str) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, Value>(Method::GET, path, None, Auth::Bearer)
            .await
    }

    pub(crate) async fn send_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(method, path, Some(body), Auth::Bearer).await
    }

    pub(crate) async fn get_list<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        Ok(self.get_json::<Vec<T>>(path).await?.unwrap_or_default())
    }
}

pub(crate) fn expect_body<T>(value: Option<T>, what: &str) -> Result<T, ApiError> {
    value.ok_or_else(|| ApiError::decode(format!("Empty response for {}", what)))
}

pub(crate) fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn bearer_header(token: &str) -> Result<HeaderValue, ApiError> {
    format!("Bearer {}", token)
        .parse()
        .map_err(|_| ApiError::unauthorized("Invalid token format"))
}

/// Server `message` (string or list of strings), then the status reason phrase.
pub(crate) fn error_message(body: Option<&Value>, status: StatusCode) -> String {
    let from_body = body.and_then(|value| match value.get("message") {
        Some(Value::String(message)) if !message.trim().is_empty() => Some(message.clone()),
        Some(Value::Array(items)) => {
            let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    });
    from_body
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
