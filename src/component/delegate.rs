//! Outbound callbacks from a component to its host.
//!
//! Components hold these as `Weak` handles. A delegate dropped by the host
//! simply stops receiving callbacks.

use super::Component;
use crate::model::{IndexPath, Item};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// One-shot continuation handed to the host.
///
/// `complete` consumes the value, so a completion can run at most once.
/// Dropping it without completing is how a host cancels; the cancel
/// callback, if any, runs then.
pub struct Completion {
    callback: Option<Box<dyn FnOnce()>>,
    on_cancel: Option<Box<dyn FnOnce()>>,
}

impl Completion {
    /// Completion running `callback`.
    pub fn new<F>(callback: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
            on_cancel: None,
        }
    }

    /// Completion that does nothing.
    pub fn noop() -> Self {
        Self {
            callback: None,
            on_cancel: None,
        }
    }

    /// Run `on_cancel` if this completion is dropped without completing.
    pub fn on_cancel<F>(mut self, on_cancel: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        self.on_cancel = Some(Box::new(on_cancel));
        self
    }

    /// Run the continuation.
    pub fn complete(mut self) {
        self.on_cancel = None;
        if let Some(callback) = self.callback.take() {
            callback();
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(on_cancel) = self.on_cancel.take() {
            on_cancel();
        }
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("pending", &self.callback.is_some())
            .finish()
    }
}

/// Handle describing a refresh in progress.
#[derive(Debug, Clone)]
pub struct RefreshHandle {
    refreshing: Rc<Cell<bool>>,
}

impl RefreshHandle {
    pub(crate) fn new(refreshing: Rc<Cell<bool>>) -> Self {
        Self { refreshing }
    }

    /// True until the refresh completion has run.
    pub fn is_refreshing(&self) -> bool {
        self.refreshing.get()
    }
}

/// Interaction callbacks.
pub trait ComponentDelegate {
    /// The user selected `item`.
    fn item_selected(&self, component: &Component, item: &Item);

    /// The user pulled to refresh.
    ///
    /// The host calls `completion.complete()` once the reload is done.
    /// Without an override the refresh resolves immediately.
    fn reload_requested(&self, refresh: RefreshHandle, completion: Completion) {
        let _ = refresh;
        completion.complete();
    }

    /// Scrolling reached the end of the content. Ignored unless overridden.
    fn did_reach_end(&self, component: &Component, completion: Completion) {
        let _ = (component, completion);
    }
}

/// Focus change callbacks.
pub trait FocusDelegate {
    /// `index_path` became the focused item of `component`.
    fn focus_changed(&self, component: &Component, index_path: IndexPath);
}

/// Paging callbacks of horizontal components.
pub trait CarouselScrollDelegate {
    /// The component scrolled to `page`.
    fn did_scroll(&self, component: &Component, page: usize);

    /// Scrolling settled on `item`. Ignored unless overridden.
    fn did_end_scrolling(&self, component: &Component, item: &Item) {
        let _ = (component, item);
    }
}
