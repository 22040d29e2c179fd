//! Anchor-based navigation to per-plugin detail panels.
//!
//! `#plugin-<name>` expands and scrolls to one plugin's panel;
//! `#assessment-results` scrolls to the summary without expanding anything.

mod detail_navigator;
mod plugin_anchor;

pub use detail_navigator::{AttachedNavigator, DetailNavigator, NavigationEffect};
pub use plugin_anchor::{
    assessment_results_url, extract_plugin_name, plugin_anchor, plugin_detail_url,
    plugin_panel_id, AnchorTarget, ASSESSMENT_RESULTS_ID, PLUGIN_ANCHOR_PREFIX,
};
