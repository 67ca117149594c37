//! Firewall Logger Implementations

mod json_lines;
mod tracing_logger;

pub use json_lines::JsonLinesLogger;
pub use tracing_logger::TracingLogger;
