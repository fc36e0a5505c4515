pub mod decision;
pub mod history;
pub mod summary;
