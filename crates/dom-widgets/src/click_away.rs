//! Click-Away Tracking
//!
//! One page-wide click listener serves every open widget. This module holds
//! the bookkeeping: which widgets are open, and which of them a click landed
//! outside of. The window listener itself lives with the menu registry.

use std::rc::Rc;

/// A widget that closes when the user clicks outside of it
pub trait Dismiss {
    type Target: ?Sized;

    /// Whether the widget's root is still part of the page
    fn is_attached(&self) -> bool;

    /// Whether `target` lies inside the widget's root
    fn contains(&self, target: &Self::Target) -> bool;
}

/// Set of currently open widgets
pub struct ClickAway<T> {
    open: Vec<Rc<T>>,
}

impl<T> Default for ClickAway<T> {
    fn default() -> Self {
        Self { open: Vec::new() }
    }
}

impl<T: Dismiss> ClickAway<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking an opened widget. Tracking twice is a no-op.
    pub fn track(&mut self, widget: &Rc<T>) {
        if !self.is_tracked(widget) {
            self.open.push(Rc::clone(widget));
        }
    }

    /// Stop tracking a closed widget
    pub fn untrack(&mut self, widget: &T) {
        self.open.retain(|open| !std::ptr::eq(Rc::as_ptr(open), widget));
    }

    pub fn is_tracked(&self, widget: &T) -> bool {
        self.open.iter().any(|open| std::ptr::eq(Rc::as_ptr(open), widget))
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Forget widgets whose root left the page
    pub fn release_detached(&mut self) {
        self.open.retain(|widget| widget.is_attached());
    }

    /// Handle a click on `target`.
    ///
    /// Detached widgets are dropped without being returned. Widgets the click
    /// landed outside of are removed from the set and returned so the caller
    /// can close them once no borrow of this set is held.
    pub fn outside(&mut self, target: Option<&T::Target>) -> Vec<Rc<T>> {
        let mut outside = Vec::new();
        self.open.retain(|widget| {
            if !widget.is_attached() {
                return false;
            }
            let inside = target.is_some_and(|target| widget.contains(target));
            if !inside {
                outside.push(Rc::clone(widget));
            }
            inside
        });
        outside
    }
}
