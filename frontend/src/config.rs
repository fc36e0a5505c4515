use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    #[serde(default, alias = "API_URL")]
    pub api_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let window = web_sys::window()?;
    let any = js_sys::Reflect::get(&window, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|value| !value.is_undefined() && !value.is_null())
        .and_then(|value| value.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        // window.__APPROVAL_FLOW_ENV (env.js) wins over window.__APPROVAL_FLOW_CONFIG
        read_global_key("__APPROVAL_FLOW_ENV", &["API_URL", "api_url"])
            .or_else(|| read_global_key("__APPROVAL_FLOW_CONFIG", &["api_url", "API_URL"]))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

fn normalize_base_url(value: &str) -> String {
    value.trim().trim_end_matches('/').to_string()
}

fn cache_base_url(value: &str) -> String {
    let value = normalize_base_url(value);
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        let origin = web_sys::window()?.location().origin().ok()?;
        let resp = reqwest::get(format!("{}/config.json", origin)).await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<RuntimeConfig>().await.ok()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    if let Some(url) = fetch_runtime_config().await.and_then(|cfg| cfg.api_url) {
        return cache_base_url(&url);
    }
    log::info!("No runtime API URL configured, using {}", DEFAULT_API_URL);
    cache_base_url(DEFAULT_API_URL)
}

pub async fn init() {
    let base = await_api_base_url().await;
    log::debug!("API base URL resolved to {}", base);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url(" https://api.example.com/ "),
            "https://api.example.com"
        );
        assert_eq!(normalize_base_url(DEFAULT_API_URL), DEFAULT_API_URL);
    }

    #[test]
    fn runtime_config_accepts_both_key_styles() {
        let lower: RuntimeConfig =
            serde_json::from_str(r#"{ "api_url": "https://a.example" }"#).unwrap();
        let upper: RuntimeConfig =
            serde_json::from_str(r#"{ "API_URL": "https://b.example" }"#).unwrap();
        assert_eq!(lower.api_url.as_deref(), Some("https://a.example"));
        assert_eq!(upper.api_url.as_deref(), Some("https://b.example"));
    }
}
