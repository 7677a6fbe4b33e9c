//! SQLite backend for the FarmFlow record store.
//!
//! Every operation opens its own [`tokio_rusqlite`] connection to the store
//! file, runs one statement on the connection's background thread, and closes
//! it again. There is no pool and no long-lived handle.

mod encode;
mod schema;
mod sql;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;
