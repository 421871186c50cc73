pub mod connection;
pub mod setup;
pub mod source_tables;
pub mod tables;

pub use connection::{create_pool, get_connection, DbConn, DbPool};
