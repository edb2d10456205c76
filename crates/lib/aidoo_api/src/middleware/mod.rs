//! Router middleware.

pub mod cors;
