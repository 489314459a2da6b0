pub mod entities;
pub mod probe;
pub mod util;
pub mod health_service;

pub use entities::*;
pub use health_service::*;
