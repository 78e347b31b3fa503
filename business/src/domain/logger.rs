/// Logging port used by the domain and application layers.
///
/// Adapters decide where messages end up; the notification core only needs
/// to leave a trace of every skipped or failed step.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
