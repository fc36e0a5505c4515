pub mod auth;
pub mod inflight;
pub mod list;
pub mod message;
