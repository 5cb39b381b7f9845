pub mod metrics;
pub mod output;

pub use metrics::{get_metrics, init_metrics, record_registration};
pub use output::{sink_for, MemorySink, RegistrationSink, StdoutSink};
