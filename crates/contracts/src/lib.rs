//! Shared domain types for the poll & form builder.
//!
//! Everything here is plain data: serde-serializable entities plus the
//! identifier generators they rely on. The reactive state layer lives in
//! the `frontend` crate.

pub mod domain;
