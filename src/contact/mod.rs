pub mod form;
pub mod section;
