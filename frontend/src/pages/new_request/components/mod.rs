pub mod form;
pub mod type_creator;
