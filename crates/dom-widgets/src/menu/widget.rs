//! Overflow Menu Binding
//!
//! Connects one menu root's elements to a [`MenuState`]. The state is the
//! source of truth; `project` writes it onto the ARIA attributes.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, FocusEvent, HtmlElement, KeyboardEvent, Node};

use super::keys::MenuKey;
use super::registry;
use super::state::{CloseReason, Effect, MenuState};
use crate::click_away::Dismiss;
use crate::dom;
use crate::error::{Result, WidgetError};
use crate::listener::EventListener;

const TRIGGER_SELECTOR: &str = "[aria-haspopup]";
const MENU_SELECTOR: &str = "[role=menu]";
const ITEM_SELECTOR: &str = "[role=menuitem]";

pub(crate) struct OverflowMenu {
    root: Element,
    trigger: HtmlElement,
    menu: HtmlElement,
    items: Vec<HtmlElement>,
    state: RefCell<MenuState>,
    /// Pointer went down inside the root and the matching click has not landed yet
    pressed_inside: Cell<bool>,
    listeners: RefCell<Vec<EventListener>>,
}

impl OverflowMenu {
    /// Find the trigger, container and items under `root` and attach listeners.
    /// The menu starts closed.
    pub fn bind(root: &Element) -> Result<Rc<Self>> {
        let missing = |part| WidgetError::MissingPart {
            widget: "overflow menu",
            part,
        };
        let trigger = dom::first_html(root, TRIGGER_SELECTOR).ok_or_else(|| missing("trigger"))?;
        let menu = dom::first_html(root, MENU_SELECTOR).ok_or_else(|| missing("menu container"))?;
        let items = dom::all_html(&menu, ITEM_SELECTOR);
        if items.is_empty() {
            return Err(missing("menu items"));
        }

        let this = Rc::new(Self {
            root: root.clone(),
            state: RefCell::new(MenuState::new(items.len())),
            trigger,
            menu,
            items,
            pressed_inside: Cell::new(false),
            listeners: RefCell::new(Vec::new()),
        });
        this.project();

        let listeners = vec![
            this.listen(&this.trigger, "click", |menu, _| menu.toggle())?,
            this.listen(&this.root, "pointerdown", |menu, _| menu.pressed_inside.set(true))?,
            this.listen(&this.root, "mousedown", |menu, _| menu.pressed_inside.set(true))?,
            this.listen(&this.root, "click", |menu, _| menu.pressed_inside.set(false))?,
            this.listen(&this.root, "focusout", |menu, ev| menu.on_focusout(&ev))?,
            this.listen(&this.menu, "focusin", |menu, ev| menu.on_focusin(&ev))?,
            this.listen(&this.menu, "keydown", |menu, ev| menu.on_keydown(&ev))?,
        ];
        *this.listeners.borrow_mut() = listeners;
        Ok(this)
    }

    fn listen<F>(self: &Rc<Self>, target: &Element, event: &str, handler: F) -> Result<EventListener>
    where
        F: Fn(&Rc<Self>, Event) + 'static,
    {
        let weak: Weak<Self> = Rc::downgrade(self);
        EventListener::new(target, event, move |ev| {
            if let Some(menu) = weak.upgrade() {
                handler(&menu, ev);
            }
        })
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }

    pub fn open(self: &Rc<Self>) {
        let effect = self.state.borrow_mut().open();
        self.settle(effect);
    }

    pub fn close(self: &Rc<Self>, reason: CloseReason) {
        if !self.is_open() {
            return;
        }
        let effect = self.state.borrow_mut().close(reason);
        tracing::debug!(?reason, "menu closed");
        self.settle(effect);
    }

    fn toggle(self: &Rc<Self>) {
        let effect = self.state.borrow_mut().toggle();
        self.settle(effect);
    }

    /// Project state, update click-away tracking, then run the effect
    fn settle(self: &Rc<Self>, effect: Effect) {
        self.project();
        if self.is_open() {
            registry::track(self);
        } else {
            registry::untrack(self);
        }
        match effect {
            Effect::None => {}
            Effect::FocusItem(index) => {
                if let Some(item) = self.items.get(index) {
                    let _ = item.focus();
                }
            }
            Effect::FocusTrigger => {
                let _ = self.trigger.focus();
            }
            Effect::Activate(index) => {
                if let Some(item) = self.items.get(index) {
                    item.click();
                }
            }
        }
    }

    /// Write the state onto the DOM
    fn project(&self) {
        let state = *self.state.borrow();
        self.menu.set_hidden(!state.is_open());
        let expanded = if state.is_open() { "true" } else { "false" };
        let _ = self.trigger.set_attribute("aria-expanded", expanded);
        for (index, item) in self.items.iter().enumerate() {
            let _ = item.set_attribute("tabindex", state.tabindex(index));
        }
    }

    fn on_keydown(self: &Rc<Self>, ev: &Event) {
        let Some(ev) = ev.dyn_ref::<KeyboardEvent>() else { return };
        let Some(key) = MenuKey::from_key(&ev.key()) else { return };
        if !self.is_open() {
            return;
        }
        ev.prevent_default();

        let effect = self.state.borrow_mut().handle_key(key);
        self.settle(effect);
    }

    fn on_focusin(&self, ev: &Event) {
        self.pressed_inside.set(false);
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<Node>().ok()) else { return };
        if let Some(index) = self.items.iter().position(|item| item.is_same_node(Some(&target))) {
            self.state.borrow_mut().focus_item(index);
            self.project();
        }
    }

    /// Close when focus leaves the root.
    ///
    /// A press inside the root on something that does not take focus (gaps
    /// between items, labels, buttons in Safari) blurs to `<body>` with no
    /// related target. That is not leaving the menu, so it is skipped once.
    fn on_focusout(self: &Rc<Self>, ev: &Event) {
        if self.pressed_inside.replace(false) {
            return;
        }
        let next = ev
            .dyn_ref::<FocusEvent>()
            .and_then(|ev| ev.related_target())
            .and_then(|t| t.dyn_into::<Node>().ok());
        let stays_inside = next.is_some_and(|node| self.root.contains(Some(&node)));
        if !stays_inside {
            self.close(CloseReason::Blur);
        }
    }
}

impl Dismiss for OverflowMenu {
    type Target = Node;

    fn is_attached(&self) -> bool {
        self.root.is_connected()
    }

    fn contains(&self, target: &Node) -> bool {
        self.root.contains(Some(target))
    }
}
