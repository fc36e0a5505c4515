pub mod filter;
pub mod list;
