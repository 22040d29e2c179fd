use crate::application::dto::PanelExpansion;
use crate::ports::outbound::DetailPanelView;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashSet};
use std::rc::Rc;

#[derive(Debug, Default)]
struct PanelState {
    panels: HashSet<String>,
    expanded: BTreeSet<String>,
    scrolled_to: Option<String>,
}

/// ReportPanelState adapter recording which detail panels of a report are open
///
/// Clones share state, so one handle can drive a navigator while another
/// reads the result back when rendering.
#[derive(Debug, Clone, Default)]
pub struct ReportPanelState {
    state: Rc<RefCell<PanelState>>,
}

impl ReportPanelState {
    /// Panel state for a report rendering one panel per plugin
    pub fn new<I, S>(plugin_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let panels = plugin_names.into_iter().map(Into::into).collect();
        Self {
            state: Rc::new(RefCell::new(PanelState {
                panels,
                ..Default::default()
            })),
        }
    }

    pub fn expanded_plugins(&self) -> Vec<String> {
        self.state.borrow().expanded.iter().cloned().collect()
    }

    pub fn scrolled_to(&self) -> Option<String> {
        self.state.borrow().scrolled_to.clone()
    }

    /// Expansion for a renderer: the single open panel, or none.
    pub fn expansion(&self) -> PanelExpansion {
        let state = self.state.borrow();
        match state.expanded.iter().next() {
            Some(name) => PanelExpansion::Only(name.clone()),
            None => PanelExpansion::None,
        }
    }
}

impl DetailPanelView for ReportPanelState {
    fn expand_panel(&self, plugin_name: &str) -> bool {
        let mut state = self.state.borrow_mut();
        if !state.panels.contains(plugin_name) {
            return false;
        }
        state.expanded.insert(plugin_name.to_string());
        true
    }

    fn collapse_panel(&self, plugin_name: &str) {
        self.state.borrow_mut().expanded.remove(plugin_name);
    }

    fn scroll_into_view(&self, element_id: &str) -> bool {
        self.state.borrow_mut().scrolled_to = Some(element_id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_known_panel() {
        let state = ReportPanelState::new(["ntia", "cisa"]);
        assert!(state.expand_panel("ntia"));
        assert_eq!(state.expanded_plugins(), vec!["ntia".to_string()]);
        assert_eq!(state.expansion(), PanelExpansion::Only("ntia".to_string()));
    }

    #[test]
    fn test_expand_unknown_panel_fails() {
        let state = ReportPanelState::new(["ntia"]);
        assert!(!state.expand_panel("ghost"));
        assert_eq!(state.expansion(), PanelExpansion::None);
    }

    #[test]
    fn test_clones_share_state() {
        let state = ReportPanelState::new(vec!["ntia".to_string()]);
        let handle = state.clone();
        handle.expand_panel("ntia");
        handle.scroll_into_view("plugin-ntia");
        assert_eq!(state.expanded_plugins(), vec!["ntia".to_string()]);
        assert_eq!(state.scrolled_to().as_deref(), Some("plugin-ntia"));

        handle.collapse_panel("ntia");
        assert!(state.expanded_plugins().is_empty());
    }
}
