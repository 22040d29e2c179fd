/// ProgressReporter port for user-facing diagnostics
///
/// Diagnostics go to stderr so they never mix with the report on stdout.
pub trait ProgressReporter {
    /// Reports an informational message
    fn report(&self, message: &str);

    /// Reports a recoverable problem; processing continues
    fn report_warning(&self, message: &str);

    /// Reports an error message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
