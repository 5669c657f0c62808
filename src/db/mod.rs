//! Persistence split into the connection handle and the item queries.

mod connection;
mod items;

pub use connection::{ensure_schema, Store};
pub use items::{RepoError, RepoResult};
