/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, page location).
pub mod detail_panel_view;
pub mod formatter;
pub mod hash_change_source;
pub mod output_presenter;
pub mod payload_reader;
pub mod progress_reporter;

pub use detail_panel_view::DetailPanelView;
pub use formatter::AssessmentFormatter;
pub use hash_change_source::{HashChangeSource, HashListener, ListenerId};
pub use output_presenter::OutputPresenter;
pub use payload_reader::PayloadReader;
pub use progress_reporter::ProgressReporter;
