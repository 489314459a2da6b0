pub mod errors;
pub mod mysql_client;
pub mod traits;

pub use errors::ProbeError;
pub use mysql_client::MySqlClient;
pub use traits::{DatabaseClient, ProbeConnection};

/// Minimal no-op query used to confirm the database answers.
pub const PROBE_QUERY: &str = "SELECT 1";
