//! Networking for the admin area.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` adapts `gloo-net` to the session core's `HttpTransport` and builds
//! the login flow and admin client the pages use.

pub mod api;
