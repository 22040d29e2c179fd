/// DetailPanelView port for the per-plugin detail panels of a results view
///
/// Lookups may fail because the panel is not rendered; implementations
/// report that through the return value and never error.
pub trait DetailPanelView {
    /// Expands the panel for `plugin_name`; false when no such panel exists
    fn expand_panel(&self, plugin_name: &str) -> bool;

    /// Collapses the panel for `plugin_name`; a missing panel is a no-op
    fn collapse_panel(&self, plugin_name: &str);

    /// Scrolls the element with `element_id` into view; false when absent
    fn scroll_into_view(&self, element_id: &str) -> bool;
}
