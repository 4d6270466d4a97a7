//! HTTP request handlers for the index API.

pub mod api;
pub mod calculate;
pub mod error;
pub mod health;
