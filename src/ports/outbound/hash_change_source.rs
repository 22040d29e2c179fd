use std::rc::Rc;

/// Callback invoked with the new location hash (including the leading `#`)
pub type HashListener = Rc<dyn Fn(&str)>;

/// Handle returned on registration, used to deregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// HashChangeSource port for the page location fragment
///
/// Single-threaded: listeners are `Rc` closures invoked synchronously.
pub trait HashChangeSource {
    /// Current fragment, e.g. `"#plugin-ntia"`, or `""` when none
    fn current_hash(&self) -> String;

    /// Registers a listener called on every subsequent hash change
    fn add_listener(&self, listener: HashListener) -> ListenerId;

    /// Deregisters a listener; unknown ids are ignored
    fn remove_listener(&self, id: ListenerId);
}
