pub mod error;
pub mod event;
pub mod metrics;

pub use error::{Result, SentinelError};
pub use event::Message;
pub use metrics::{MetricsWindow, Sample};
