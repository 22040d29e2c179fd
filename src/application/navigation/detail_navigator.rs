use super::plugin_anchor::{plugin_panel_id, AnchorTarget, ASSESSMENT_RESULTS_ID};
use crate::ports::outbound::{DetailPanelView, HashChangeSource, HashListener, ListenerId};
use std::cell::{Ref, RefCell};
use std::rc::Rc;

/// What handling a hash did to the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEffect {
    Expanded(String),
    AlreadyExpanded(String),
    ScrolledToResults,
    /// The hash named a plugin with no rendered panel
    TargetNotFound(String),
    /// The hash is not ours; any open panel was closed
    Cleared,
}

/// DetailNavigator owns the expansion state of the plugin detail panels.
///
/// At most one plugin panel is expanded. Leaving a plugin anchor always
/// collapses the panel it opened.
pub struct DetailNavigator<V: DetailPanelView> {
    view: V,
    expanded_plugin: Option<String>,
}

impl<V: DetailPanelView> DetailNavigator<V> {
    pub fn new(view: V) -> Self {
        Self {
            view,
            expanded_plugin: None,
        }
    }

    /// Applies a location hash (page load or hash change)
    pub fn handle_hash(&mut self, hash: &str) -> NavigationEffect {
        match AnchorTarget::parse(hash) {
            AnchorTarget::Plugin(name) => self.open_plugin(name),
            AnchorTarget::AssessmentResults => {
                self.collapse_current();
                // a missing section is a no-op
                let _ = self.view.scroll_into_view(ASSESSMENT_RESULTS_ID);
                NavigationEffect::ScrolledToResults
            }
            AnchorTarget::Other => {
                self.collapse_current();
                NavigationEffect::Cleared
            }
        }
    }

    fn open_plugin(&mut self, name: String) -> NavigationEffect {
        if self.expanded_plugin.as_deref() == Some(name.as_str()) {
            let _ = self.view.scroll_into_view(&plugin_panel_id(&name));
            return NavigationEffect::AlreadyExpanded(name);
        }

        self.collapse_current();
        if !self.view.expand_panel(&name) {
            return NavigationEffect::TargetNotFound(name);
        }
        let _ = self.view.scroll_into_view(&plugin_panel_id(&name));
        self.expanded_plugin = Some(name.clone());
        NavigationEffect::Expanded(name)
    }

    fn collapse_current(&mut self) {
        if let Some(previous) = self.expanded_plugin.take() {
            self.view.collapse_panel(&previous);
        }
    }

    pub fn expanded_plugin(&self) -> Option<&str> {
        self.expanded_plugin.as_deref()
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

/// A DetailNavigator wired to a hash source.
///
/// The initial hash is applied on attach. The listener holds only a weak
/// reference to the navigator and is deregistered on drop, so a torn-down
/// view leaves no callback behind.
///
/// A hash change that arrives while the navigator is borrowed (a caller
/// holding [`AttachedNavigator::navigator`], or a view re-entering the
/// location) is deferred, not dropped. Only the latest one is kept; it is
/// applied on the next [`AttachedNavigator::navigator`] or
/// [`AttachedNavigator::apply_deferred`] call.
pub struct AttachedNavigator<S: HashChangeSource, V: DetailPanelView + 'static> {
    navigator: Rc<RefCell<DetailNavigator<V>>>,
    deferred_hash: Rc<RefCell<Option<String>>>,
    source: Rc<S>,
    listener_id: Option<ListenerId>,
}

impl<S: HashChangeSource, V: DetailPanelView + 'static> AttachedNavigator<S, V> {
    pub fn attach(source: Rc<S>, view: V) -> Self {
        let navigator = Rc::new(RefCell::new(DetailNavigator::new(view)));
        navigator.borrow_mut().handle_hash(&source.current_hash());

        let deferred_hash: Rc<RefCell<Option<String>>> = Rc::default();
        let weak = Rc::downgrade(&navigator);
        let deferred = Rc::clone(&deferred_hash);
        let listener: HashListener = Rc::new(move |hash: &str| {
            let Some(navigator) = weak.upgrade() else {
                return;
            };
            match navigator.try_borrow_mut() {
                Ok(mut navigator) => {
                    deferred.borrow_mut().take();
                    navigator.handle_hash(hash);
                }
                Err(_) => *deferred.borrow_mut() = Some(hash.to_string()),
            };
        });
        let listener_id = source.add_listener(listener);

        Self {
            navigator,
            deferred_hash,
            source,
            listener_id: Some(listener_id),
        }
    }

    /// Current navigator state, after applying any deferred hash change
    pub fn navigator(&self) -> Ref<'_, DetailNavigator<V>> {
        self.apply_deferred();
        self.navigator.borrow()
    }

    /// Applies a deferred hash change; false when none was pending or the
    /// navigator is still borrowed
    pub fn apply_deferred(&self) -> bool {
        let Some(hash) = self.deferred_hash.borrow_mut().take() else {
            return false;
        };
        match self.navigator.try_borrow_mut() {
            Ok(mut navigator) => {
                navigator.handle_hash(&hash);
                true
            }
            Err(_) => {
                *self.deferred_hash.borrow_mut() = Some(hash);
                false
            }
        }
    }

    pub fn is_attached(&self) -> bool {
        self.listener_id.is_some()
    }

    /// Stops listening; the navigator keeps its current state
    pub fn detach(&mut self) {
        if let Some(id) = self.listener_id.take() {
            self.source.remove_listener(id);
        }
    }
}

impl<S: HashChangeSource, V: DetailPanelView + 'static> Drop for AttachedNavigator<S, V> {
    fn drop(&mut self) {
        self.detach();
    }
}
