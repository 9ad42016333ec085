//! Menu Registry
//!
//! Owns every wired overflow menu and the single window click listener
//! that closes open menus on outside clicks. Menus whose root has left the
//! page are released here, which also removes their element listeners.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, Node};

use super::state::CloseReason;
use super::widget::OverflowMenu;
use crate::click_away::{ClickAway, Dismiss};
use crate::config::WidgetConfig;
use crate::dom::{self, WiredSet};
use crate::error::{Result, WidgetError};
use crate::listener::EventListener;

struct Registry {
    wired: WiredSet,
    menus: Vec<Rc<OverflowMenu>>,
    open: ClickAway<OverflowMenu>,
    window_click: Option<EventListener>,
}

impl Registry {
    fn new() -> Self {
        Self {
            wired: WiredSet::new(),
            menus: Vec::new(),
            open: ClickAway::new(),
            window_click: None,
        }
    }

    fn release_detached(&mut self) {
        self.open.release_detached();
        let wired = &self.wired;
        self.menus.retain(|menu| {
            let attached = menu.is_attached();
            if !attached {
                wired.remove(menu.root());
                tracing::debug!("released detached overflow menu");
            }
            attached
        });
    }
}

thread_local! {
    static REGISTRY: RefCell<Registry> = RefCell::new(Registry::new());
}

/// Wire every overflow menu under `scope` that is not wired yet.
///
/// Safe to call repeatedly on overlapping subtrees: a root is wired at most
/// once. Malformed roots are logged and skipped. Returns how many were wired.
pub fn overflow_menu(scope: &Element, config: &WidgetConfig) -> usize {
    let candidates: Vec<Element> = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.release_detached();
        dom::matching(scope, &config.menu_selector)
            .into_iter()
            .filter(|root| !reg.wired.contains(root))
            .collect()
    });

    let mut bound = 0;
    for root in candidates {
        match OverflowMenu::bind(&root) {
            Ok(menu) => {
                REGISTRY.with(|reg| {
                    let mut reg = reg.borrow_mut();
                    if reg.wired.insert(&root) {
                        reg.menus.push(menu);
                    }
                });
                bound += 1;
            }
            Err(err) => tracing::warn!(%err, id = %root.id(), "skipping overflow menu"),
        }
    }

    if let Err(err) = ensure_window_listener() {
        tracing::warn!(%err, "outside clicks will not close menus");
    }
    if bound > 0 {
        tracing::debug!(bound, "overflow menus wired");
    }
    bound
}

/// Open a wired menu. Returns false if `root` is not a wired menu root.
pub fn open(root: &Element) -> bool {
    match find(root) {
        Some(menu) => {
            menu.open();
            true
        }
        None => false,
    }
}

/// Close a wired menu without moving focus. Returns false if `root` is not a wired menu root.
pub fn close(root: &Element) -> bool {
    match find(root) {
        Some(menu) => {
            menu.close(CloseReason::Programmatic);
            true
        }
        None => false,
    }
}

/// Open state of a wired menu, `None` if `root` is not wired
pub fn is_open(root: &Element) -> Option<bool> {
    find(root).map(|menu| menu.is_open())
}

/// Number of wired menus whose root is still in the page
pub fn menu_count() -> usize {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.release_detached();
        reg.menus.len()
    })
}

/// Number of menus the click-away listener is tracking as open
pub fn open_menu_count() -> usize {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.release_detached();
        reg.open.len()
    })
}

pub(crate) fn track(menu: &Rc<OverflowMenu>) {
    REGISTRY.with(|reg| reg.borrow_mut().open.track(menu));
}

pub(crate) fn untrack(menu: &OverflowMenu) {
    REGISTRY.with(|reg| reg.borrow_mut().open.untrack(menu));
}

fn find(root: &Element) -> Option<Rc<OverflowMenu>> {
    let root: &Node = root;
    REGISTRY.with(|reg| {
        reg.borrow()
            .menus
            .iter()
            .find(|menu| menu.root().is_same_node(Some(root)))
            .cloned()
    })
}

fn ensure_window_listener() -> Result<()> {
    if REGISTRY.with(|reg| reg.borrow().window_click.is_some()) {
        return Ok(());
    }
    let window = web_sys::window().ok_or(WidgetError::NoDocument)?;
    let listener = EventListener::new(&window, "click", on_window_click)?;
    REGISTRY.with(|reg| reg.borrow_mut().window_click = Some(listener));
    Ok(())
}

fn on_window_click(ev: Event) {
    let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
    // Collect first: closing a menu untracks it, which borrows the registry again.
    let outside = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.release_detached();
        reg.open.outside(target.as_ref())
    });
    for menu in outside {
        menu.close(CloseReason::Outside);
    }
}
