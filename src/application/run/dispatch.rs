//! Logger fan-out.
//!
//! Every logger runs on its own scoped thread and all of them are joined
//! before returning. A logger that errors or panics only loses its own
//! record.

use std::thread;

use crate::domain::entities::RunRecord;
use crate::domain::ports::FirewallLogger;

/// Hand `record` to every logger. Returns how many loggers failed.
pub fn dispatch(loggers: &[Box<dyn FirewallLogger>], record: &RunRecord) -> usize {
    thread::scope(|scope| {
        let handles: Vec<_> = loggers
            .iter()
            .map(|logger| (logger.name(), scope.spawn(move || logger.log(record))))
            .collect();

        let mut failures = 0;
        for (name, handle) in handles {
            match handle.join() {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    tracing::debug!(logger = name, "logger failed: {e}");
                }
                Err(_) => {
                    failures += 1;
                    tracing::debug!(logger = name, "logger panicked");
                }
            }
        }
        failures
    })
}
