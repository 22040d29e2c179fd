mod plugin_filter;
mod status_aggregator;

pub use plugin_filter::PluginFilter;
pub use status_aggregator::{OutcomeGroups, StatusAggregator};
