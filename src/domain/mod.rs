pub mod models;
pub mod table;

pub use models::*;
pub use table::{Cell, Table, ToTable};
