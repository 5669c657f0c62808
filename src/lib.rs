//! Core library surface for the store inventory console.
//!
//! The binary only wires these pieces together; tests and other tooling can
//! drive the repository or the menu loop directly with their own streams.
pub mod config;
pub mod console;
pub mod db;
pub mod input;
pub mod logging;
pub mod messages;
pub mod models;

pub use config::Config;
pub use console::{Console, Flow};
pub use db::{ensure_schema, RepoError, RepoResult, Store};
pub use input::Prompter;
pub use messages::{Catalog, Language, Msg};

/// The domain types the other layers pass around.
pub use models::{Item, ItemFields};
