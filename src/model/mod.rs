//! Wire types shared by every endpoint.
//!
//! Output DTOs carry the field list each resource renders; payload types carry what a
//! create or update request must send. References to other rows are nested through the
//! types in `reference`.

pub mod api;
pub mod auth;
pub mod campaign;
pub mod catalog;
pub mod reference;
