//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the data layer. They own transaction
//! boundaries: every write opens one transaction, runs the kind's hooks inside it and
//! commits only when everything resolved. Rendering happens after commit, against the pool.

pub mod auth;
pub mod resource;

#[cfg(test)]
mod test;
