pub mod common;
pub mod form;
pub mod poll;
