pub mod admin_history;
pub mod admin_users;
pub mod dashboard;
pub mod login;
pub mod new_request;
pub mod request_detail;
pub mod requests;
