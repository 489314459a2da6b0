use health_lib::entities::HealthStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct HealthResponse {
    /// `ok` when the database answered, `error` otherwise
    #[schema(example = "ok")]
    pub status: String,
    /// `ok`, or the database error description
    #[schema(example = "ok")]
    pub database: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

impl From<HealthStatus> for HealthResponse {
    fn from(status: HealthStatus) -> Self {
        let overall = if status.is_healthy() { "ok" } else { "error" };
        HealthResponse {
            status: overall.to_string(),
            database: status.database_message,
            version: status.version,
        }
    }
}
