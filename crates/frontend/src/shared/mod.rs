pub mod form;
pub mod poll;
pub mod state;
pub mod storage;
pub mod theme;
