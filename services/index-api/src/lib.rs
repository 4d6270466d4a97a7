//! Spectral index HTTP service library.
//!
//! Exposes the router and handlers so they can be exercised without binding
//! a socket.

pub mod app;
pub mod config;
pub mod handlers;
pub mod state;
