use futures::FutureExt;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use crate::entities::HealthStatus;
use crate::probe::errors::ProbeError;
use crate::probe::mysql_client::MySqlClient;
use crate::probe::traits::DatabaseClient;

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "database probe panicked".to_string()
    }
}

#[derive(Clone)]
pub struct HealthService {
    pub client: Arc<dyn DatabaseClient>,
}

impl std::fmt::Debug for HealthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HealthService").finish_non_exhaustive()
    }
}

impl HealthService {
    pub fn new(client: Arc<dyn DatabaseClient>) -> Self {
        Self { client }
    }

    pub fn from_mysql(client: MySqlClient) -> Self {
        Self::new(Arc::new(client))
    }

    /// Opens a connection, runs the probe query and releases the
    /// connection. Panics raised by the client are reported as errors.
    pub async fn probe_database(&self) -> Result<(), ProbeError> {
        let probe = async {
            let mut conn = self.client.acquire().await?;
            conn.execute_probe().await
        };

        match AssertUnwindSafe(probe).catch_unwind().await {
            Ok(result) => result,
            Err(payload) => Err(ProbeError::Panicked(panic_message(payload))),
        }
    }

    pub async fn check_health(&self) -> HealthStatus {
        match self.probe_database().await {
            Ok(()) => {
                tracing::debug!("database probe succeeded");
                HealthStatus::healthy()
            }
            Err(e) => {
                tracing::warn!(error = %e, "database probe failed");
                HealthStatus::unhealthy(e.to_string())
            }
        }
    }
}
