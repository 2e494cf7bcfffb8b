//! Pure domain logic for the innkeeper hotel management backend.
//!
//! This crate has zero internal dependencies so it can be used by the
//! repository layer, the API server, and any future CLI tooling.

pub mod availability;
pub mod error;
pub mod types;
pub mod validation;
