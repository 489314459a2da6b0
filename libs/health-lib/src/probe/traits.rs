use async_trait::async_trait;

use crate::probe::errors::ProbeError;

/// A connection checked out for a single probe.
///
/// The underlying resource is released when the value is dropped, so every
/// exit path of a probe gives it back exactly once.
#[async_trait]
pub trait ProbeConnection: Send {
    /// Runs the probe query and consumes its single row.
    async fn execute_probe(&mut self) -> Result<(), ProbeError>;
}

#[async_trait]
pub trait DatabaseClient: Send + Sync {
    async fn acquire(&self) -> Result<Box<dyn ProbeConnection>, ProbeError>;
}
