use std::sync::Arc;
use health_lib::health_service::HealthService;

#[derive(Clone, Debug)]
pub struct AppState {
    pub health_service: Arc<HealthService>,
}

impl AppState {
    pub fn new(health_service: HealthService) -> Self {
        Self {
            health_service: Arc::new(health_service),
        }
    }
}
