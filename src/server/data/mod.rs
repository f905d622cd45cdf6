//! Database access layer.
//!
//! Repositories and query helpers that sit between the services and the SeaORM entities.
//! `filter` turns query-string parameters into SELECT conditions, `reference` batch-loads the
//! nested `{id, name}` forms a response embeds, and `link` maintains many-to-many join rows.

pub mod account;
pub mod filter;
pub mod link;
pub mod reference;

#[cfg(test)]
mod test;
