mod auth;
pub mod client;
mod history;
mod request_types;
mod requests;
mod users;
pub mod types;

pub use client::*;
pub use requests::RequestCollection;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
