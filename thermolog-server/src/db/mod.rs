//! Database layer - connection pool, schema bootstrap and reading store
//!
//! # Design Principles
//!
//! - Connection pool, one connection per statement - no Arc<Mutex<Connection>>
//! - Every store operation is a single autonomous statement
//! - No retries; failures surface to the caller once

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, ping, DbConfig};
pub use repos::*;
