/// Navigation adapters: an in-memory location and the panel state of a rendered report
mod in_memory_location;
mod report_panel_state;

pub use in_memory_location::InMemoryLocation;
pub use report_panel_state::ReportPanelState;
