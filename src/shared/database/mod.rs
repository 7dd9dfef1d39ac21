pub mod connection;

pub use connection::{create_tables, open_database};

#[cfg(feature = "desktop")]
pub use connection::{get_database_path, initialize_database};
