/// Failure of the database probe.
///
/// Every variant displays as the bare underlying description so the text can
/// be reported to callers unchanged.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// The probe connection could not be opened.
    #[error("{0}")]
    Acquire(#[source] sqlx::Error),

    /// The probe query failed or its row could not be read.
    #[error("{0}")]
    Query(#[source] sqlx::Error),

    /// Failure known only by its message, such as a connect timeout or an unexpected row.
    #[error("{0}")]
    Unavailable(String),

    /// The probe future panicked before completing.
    #[error("{0}")]
    Panicked(String),
}

impl ProbeError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        ProbeError::Unavailable(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_description() {
        let err = ProbeError::unavailable("connection refused");
        assert_eq!(err.to_string(), "connection refused");

        let err = ProbeError::Acquire(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }
}
