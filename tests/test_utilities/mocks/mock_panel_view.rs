use sbom_assess::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock DetailPanelView recording every call in order
#[derive(Default, Clone)]
pub struct MockPanelView {
    pub panels: Vec<String>,
    pub events: Rc<RefCell<Vec<String>>>,
}

impl MockPanelView {
    pub fn with_panels(panels: &[&str]) -> Self {
        Self {
            panels: panels.iter().map(|p| p.to_string()).collect(),
            events: Rc::default(),
        }
    }

    pub fn events(&self) -> Vec<String> {
        self.events.borrow().clone()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl DetailPanelView for MockPanelView {
    fn expand_panel(&self, plugin_name: &str) -> bool {
        self.events
            .borrow_mut()
            .push(format!("expand:{}", plugin_name));
        self.panels.iter().any(|p| p == plugin_name)
    }

    fn collapse_panel(&self, plugin_name: &str) {
        self.events
            .borrow_mut()
            .push(format!("collapse:{}", plugin_name));
    }

    fn scroll_into_view(&self, element_id: &str) -> bool {
        self.events
            .borrow_mut()
            .push(format!("scroll:{}", element_id));
        true
    }
}
