/// Console adapters for stderr diagnostics
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
