//! Shared client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Contexts here are provided once near the root of the app and read by
//! pages and components.

pub mod auth;
