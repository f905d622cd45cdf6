//! Service-layer parameter types and the authenticated caller.

pub mod auth;
