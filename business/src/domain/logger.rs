/// Logging port used by the use cases.
///
/// Kept free of any logging crate so the business layer stays I/O free;
/// the infrastructure provides the implementation.
pub trait Logger: Send + Sync {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
    fn debug(&self, message: &str);
}
