/// Mock implementations for testing
mod mock_panel_view;
mod mock_payload_reader;
mod mock_progress_reporter;

pub use mock_panel_view::MockPanelView;
pub use mock_payload_reader::MockPayloadReader;
pub use mock_progress_reporter::MockProgressReporter;
