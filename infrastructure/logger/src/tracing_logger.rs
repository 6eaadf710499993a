use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "Recipes -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "Recipes -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "Recipes -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "Recipes -- ", "{}", message);
    }
}
