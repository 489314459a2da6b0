use serde::{Deserialize, Serialize};

/// Build version reported by every health response.
pub const SERVICE_VERSION: &str = "1.0.0";

/// Database message reported when the probe succeeds.
pub const DATABASE_OK: &str = "ok";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OverallStatus {
    Ok,
    Error,
}

impl OverallStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, OverallStatus::Ok)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    #[serde(rename = "status")]
    pub overall: OverallStatus,
    #[serde(rename = "database")]
    pub database_message: String,
    pub version: String,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            overall: OverallStatus::Ok,
            database_message: DATABASE_OK.to_string(),
            version: SERVICE_VERSION.to_string(),
        }
    }

    pub fn unhealthy(message: impl Into<String>) -> Self {
        Self {
            overall: OverallStatus::Error,
            database_message: message.into(),
            version: SERVICE_VERSION.to_string(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.overall.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_healthy_serializes_to_wire_shape() {
        let body = serde_json::to_string(&HealthStatus::healthy()).unwrap();
        assert_eq!(body, r#"{"status":"ok","database":"ok","version":"1.0.0"}"#);
    }

    #[test]
    fn test_unhealthy_carries_message() {
        let status = HealthStatus::unhealthy("connection refused");
        assert!(!status.is_healthy());
        let body = serde_json::to_string(&status).unwrap();
        assert_eq!(
            body,
            r#"{"status":"error","database":"connection refused","version":"1.0.0"}"#
        );
    }
}
