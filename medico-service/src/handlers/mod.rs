pub mod health;
pub mod medicos;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use medicos::register;
