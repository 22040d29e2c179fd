use sbom_assess::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Mock ProgressReporter for testing that captures messages
///
/// Clones share the captured messages, so a test can hand one clone to the
/// use case and inspect the other.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    pub messages: Rc<RefCell<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|m| m.starts_with("Warning: "))
            .collect()
    }

    pub fn message_count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_warning(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Warning: {}", message));
    }

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .borrow_mut()
            .push(format!("Completed: {}", message));
    }
}
