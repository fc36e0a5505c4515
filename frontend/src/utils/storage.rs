use std::{cell::RefCell, rc::Rc};

pub const TOKEN_KEY: &str = "token";

/// Client-side persistence for the bearer token.
pub trait TokenStore {
    fn token(&self) -> Option<String>;
    fn set_token(&self, token: &str) -> Result<(), String>;
    fn clear_token(&self);
}

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<web_sys::Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn local_storage() -> Result<web_sys::Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "No localStorage".to_string())?
        .ok_or_else(|| "No localStorage".to_string())
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

#[cfg(target_arch = "wasm32")]
impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        local_storage()
            .ok()
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
            .filter(|token| !token.trim().is_empty())
    }

    fn set_token(&self, token: &str) -> Result<(), String> {
        local_storage()?
            .set_item(TOKEN_KEY, token)
            .map_err(|_| "Failed to store token".to_string())
    }

    fn clear_token(&self) {
        if let Ok(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryTokenStore {
    token: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn set_token(&self, token: &str) -> Result<(), String> {
        *self.token.borrow_mut() = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) {
        self.token.borrow_mut().take();
    }
}

/// Storage used when nothing else is configured: `localStorage` in the
/// browser, process memory on the host.
pub fn default_token_store() -> Rc<dyn TokenStore> {
    #[cfg(target_arch = "wasm32")]
    {
        Rc::new(BrowserTokenStore)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Rc::new(MemoryTokenStore::default())
    }
}
