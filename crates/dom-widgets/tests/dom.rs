//! Browser tests for the counter and overflow menu widgets.
//!
//! Run with: wasm-pack test --headless --chrome crates/dom-widgets
//!
//! Every test mounts its own container under <body> and removes it when the
//! fixture drops. Widget registries are page-global, so counts are compared
//! before and after rather than against absolute numbers.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use dom_widgets::menu;
use dom_widgets::{bind_counters, counter_count, enhance, listen_for_content, overflow_menu, WidgetConfig};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    window, CustomEvent, CustomEventInit, Document, Element, EventTarget, FocusEvent, FocusEventInit,
    HtmlElement, KeyboardEvent, KeyboardEventInit, MouseEvent, MouseEventInit, Node,
};

wasm_bindgen_test_configure!(run_in_browser);

// === Helper Functions ===

fn get_document() -> Document {
    window()
        .expect("no window")
        .document()
        .expect("no document")
}

struct Fixture {
    container: Element,
}

impl Fixture {
    fn mount(id: &str, html: &str) -> Self {
        let doc = get_document();
        let container = doc.create_element("div").expect("create div failed");
        container.set_id(id);
        container.set_inner_html(html);
        doc.body()
            .expect("no body")
            .append_child(&container)
            .expect("append failed");
        Self { container }
    }

    fn el(&self, selector: &str) -> HtmlElement {
        self.container
            .query_selector(selector)
            .expect("bad selector")
            .unwrap_or_else(|| panic!("{selector} not found"))
            .dyn_into::<HtmlElement>()
            .expect("not an HtmlElement")
    }

    fn items(&self) -> Vec<HtmlElement> {
        let list = self
            .container
            .query_selector_all("[role=menuitem]")
            .expect("bad selector");
        (0..list.length())
            .filter_map(|i| list.item(i))
            .map(|node| node.dyn_into::<HtmlElement>().expect("not an HtmlElement"))
            .collect()
    }

    fn root(&self) -> Element {
        self.el("[data-overflow-menu]").into()
    }

    fn trigger(&self) -> HtmlElement {
        self.el("[aria-haspopup]")
    }

    fn menu(&self) -> HtmlElement {
        self.el("[role=menu]")
    }

    fn outside(&self) -> HtmlElement {
        self.el("#outside")
    }

    fn expanded(&self) -> Option<String> {
        self.trigger().get_attribute("aria-expanded")
    }

    fn wire(&self) -> usize {
        overflow_menu(&self.container, &WidgetConfig::default())
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.container.remove();
    }
}

const MENU: &str = r#"
    <div data-overflow-menu>
        <button type="button" aria-haspopup="menu">Options</button>
        <div role="menu" hidden>
            <button type="button" role="menuitem">View</button>
            <button type="button" role="menuitem">Edit</button>
            <button type="button" role="menuitem">Delete</button>
        </div>
        <span class="label">Contact</span>
    </div>
    <button type="button" id="outside">Elsewhere</button>
"#;

const COUNTER: &str = r#"
    <div data-counter-js-rsjs>
        <output data-counter-output>0</output>
        <button type="button" data-counter-increment>Increment</button>
    </div>
"#;

fn is_focused(el: &HtmlElement) -> bool {
    let node: &Node = el;
    get_document()
        .active_element()
        .is_some_and(|active| active.is_same_node(Some(node)))
}

fn press(target: &HtmlElement, key: &str) {
    let init = KeyboardEventInit::new();
    init.set_key(key);
    init.set_bubbles(true);
    init.set_cancelable(true);
    let ev = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).expect("keyboard event");
    target.dispatch_event(&ev).expect("dispatch failed");
}

fn focus_out(from: &HtmlElement, to: Option<&HtmlElement>) {
    let init = FocusEventInit::new();
    init.set_bubbles(true);
    init.set_related_target(to.map(|el| {
        let target: &EventTarget = el;
        target
    }));
    let ev = FocusEvent::new_with_focus_event_init_dict("focusout", &init).expect("focus event");
    from.dispatch_event(&ev).expect("dispatch failed");
}

fn mouse_down(target: &HtmlElement) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    let ev = MouseEvent::new_with_mouse_event_init_dict("mousedown", &init).expect("mouse event");
    target.dispatch_event(&ev).expect("dispatch failed");
}

fn count_clicks(el: &HtmlElement) -> Rc<Cell<u32>> {
    let clicks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&clicks);
    let cb = Closure::<dyn FnMut()>::new(move || counter.set(counter.get() + 1));
    el.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .expect("listen failed");
    cb.forget();
    clicks
}

// === Counter Tests ===

#[wasm_bindgen_test]
fn test_counter_counts_clicks() {
    let fx = Fixture::mount("counter-clicks", COUNTER);
    assert_eq!(bind_counters(&fx.container, &WidgetConfig::default()), 1);

    let button = fx.el("[data-counter-increment]");
    for _ in 0..3 {
        button.click();
    }
    assert_eq!(fx.el("[data-counter-output]").text_content().as_deref(), Some("3"));
}

#[wasm_bindgen_test]
fn test_counter_starts_from_displayed_value() {
    let fx = Fixture::mount("counter-start", &COUNTER.replace(">0<", ">41<"));
    bind_counters(&fx.container, &WidgetConfig::default());

    fx.el("[data-counter-increment]").click();
    assert_eq!(fx.el("[data-counter-output]").text_content().as_deref(), Some("42"));
}

#[wasm_bindgen_test]
fn test_counter_leaves_text_alone() {
    let fx = Fixture::mount("counter-text", &COUNTER.replace(">0<", ">many<"));
    bind_counters(&fx.container, &WidgetConfig::default());

    fx.el("[data-counter-increment]").click();
    assert_eq!(fx.el("[data-counter-output]").text_content().as_deref(), Some("many"));
}

#[wasm_bindgen_test]
fn test_counter_rebind_is_idempotent() {
    let fx = Fixture::mount("counter-rebind", COUNTER);
    let config = WidgetConfig::default();
    assert_eq!(bind_counters(&fx.container, &config), 1);
    assert_eq!(bind_counters(&fx.container, &config), 0);

    fx.el("[data-counter-increment]").click();
    assert_eq!(fx.el("[data-counter-output]").text_content().as_deref(), Some("1"));
}

#[wasm_bindgen_test]
fn test_malformed_counter_is_skipped() {
    let html = format!(
        r#"<div data-counter-js-rsjs id="broken"><button data-counter-increment>+</button></div>{COUNTER}"#
    );
    let fx = Fixture::mount("counter-malformed", &html);
    assert_eq!(bind_counters(&fx.container, &WidgetConfig::default()), 1);

    fx.el("output ~ [data-counter-increment]").click();
    assert_eq!(fx.el("[data-counter-output]").text_content().as_deref(), Some("1"));
}

#[wasm_bindgen_test]
fn test_removed_counter_is_released() {
    let fx = Fixture::mount("counter-release", COUNTER);
    bind_counters(&fx.container, &WidgetConfig::default());
    let before = counter_count();

    fx.container.remove();
    assert_eq!(counter_count(), before - 1);
}

// === Overflow Menu Tests ===

#[wasm_bindgen_test]
fn test_menu_starts_closed() {
    let fx = Fixture::mount("menu-closed", &MENU.replace(" hidden>", ">"));
    assert_eq!(fx.wire(), 1);

    assert!(fx.menu().hidden());
    assert_eq!(fx.expanded().as_deref(), Some("false"));
    for item in fx.items() {
        assert_eq!(item.get_attribute("tabindex").as_deref(), Some("-1"));
    }
}

#[wasm_bindgen_test]
fn test_open_focuses_first_item() {
    let fx = Fixture::mount("menu-open", MENU);
    fx.wire();

    fx.trigger().click();
    let items = fx.items();
    assert!(!fx.menu().hidden());
    assert_eq!(fx.expanded().as_deref(), Some("true"));
    assert!(is_focused(&items[0]));
    assert_eq!(items[0].get_attribute("tabindex").as_deref(), Some("0"));
    assert_eq!(items[1].get_attribute("tabindex").as_deref(), Some("-1"));
}

#[wasm_bindgen_test]
fn test_trigger_toggles_closed() {
    let fx = Fixture::mount("menu-toggle", MENU);
    fx.wire();

    fx.trigger().click();
    fx.trigger().click();
    assert!(fx.menu().hidden());
    assert_eq!(fx.expanded().as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn test_escape_returns_focus_to_trigger() {
    let fx = Fixture::mount("menu-escape", MENU);
    fx.wire();

    fx.trigger().click();
    press(&fx.menu(), "Escape");
    assert!(fx.menu().hidden());
    assert_eq!(fx.expanded().as_deref(), Some("false"));
    assert!(is_focused(&fx.trigger()));
}

#[wasm_bindgen_test]
fn test_arrow_keys_do_not_wrap() {
    let fx = Fixture::mount("menu-arrows", MENU);
    fx.wire();
    let items = fx.items();
    let menu_el = fx.menu();

    fx.trigger().click();
    press(&menu_el, "ArrowUp");
    assert!(is_focused(&items[0]));

    press(&menu_el, "ArrowDown");
    assert!(is_focused(&items[1]));
    press(&menu_el, "ArrowDown");
    press(&menu_el, "ArrowDown");
    assert!(is_focused(&items[2]));

    press(&menu_el, "ArrowUp");
    assert!(is_focused(&items[1]));
}

#[wasm_bindgen_test]
fn test_home_and_end() {
    let fx = Fixture::mount("menu-home-end", MENU);
    fx.wire();
    let items = fx.items();
    let menu_el = fx.menu();

    fx.trigger().click();
    press(&menu_el, "End");
    assert!(is_focused(&items[2]));
    assert_eq!(items[2].get_attribute("tabindex").as_deref(), Some("0"));
    press(&menu_el, "Home");
    assert!(is_focused(&items[0]));
}

#[wasm_bindgen_test]
fn test_space_activates_focused_item() {
    let fx = Fixture::mount("menu-space", MENU);
    fx.wire();
    let items = fx.items();
    let edits = count_clicks(&items[1]);

    fx.trigger().click();
    press(&fx.menu(), "ArrowDown");
    press(&fx.menu(), " ");
    press(&fx.menu(), "Spacebar");
    assert_eq!(edits.get(), 2);
}

#[wasm_bindgen_test]
fn test_outside_click_closes() {
    let fx = Fixture::mount("menu-outside", MENU);
    fx.wire();

    fx.trigger().click();
    fx.el(".label").click();
    assert_eq!(fx.expanded().as_deref(), Some("true"));

    fx.outside().click();
    assert!(fx.menu().hidden());
    assert_eq!(fx.expanded().as_deref(), Some("false"));
    assert!(!is_focused(&fx.trigger()));
}

#[wasm_bindgen_test]
fn test_focus_leaving_root_closes() {
    let fx = Fixture::mount("menu-blur", MENU);
    fx.wire();
    let items = fx.items();

    fx.trigger().click();
    focus_out(&items[0], Some(&items[1]));
    assert_eq!(fx.expanded().as_deref(), Some("true"));

    focus_out(&items[1], Some(&fx.outside()));
    assert!(fx.menu().hidden());
    assert_eq!(fx.expanded().as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn test_press_on_label_inside_root_keeps_open() {
    let fx = Fixture::mount("menu-press-label", MENU);
    fx.wire();
    let items = fx.items();
    let label = fx.el(".label");

    fx.trigger().click();
    // Pressing a non-focusable element blurs to <body> with no related target.
    mouse_down(&label);
    focus_out(&items[0], None);
    assert_eq!(fx.expanded().as_deref(), Some("true"));
    assert!(!fx.menu().hidden());

    label.click();
    assert_eq!(fx.expanded().as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn test_press_between_items_keeps_open() {
    let fx = Fixture::mount("menu-press-gap", MENU);
    fx.wire();
    let items = fx.items();
    let container = fx.menu();

    fx.trigger().click();
    mouse_down(&container);
    focus_out(&items[0], None);
    container.click();
    assert_eq!(fx.expanded().as_deref(), Some("true"));
    assert!(!container.hidden());
}

#[wasm_bindgen_test]
fn test_press_on_item_still_activates() {
    let fx = Fixture::mount("menu-press-item", MENU);
    fx.wire();
    let items = fx.items();
    let edits = count_clicks(&items[1]);

    fx.trigger().click();
    // Safari does not focus buttons on click
    mouse_down(&items[1]);
    focus_out(&items[0], None);
    assert!(!fx.menu().hidden());
    items[1].click();
    assert_eq!(edits.get(), 1);
}

#[wasm_bindgen_test]
fn test_blur_after_inside_click_still_closes() {
    let fx = Fixture::mount("menu-press-then-blur", MENU);
    fx.wire();
    let items = fx.items();
    let label = fx.el(".label");

    fx.trigger().click();
    mouse_down(&label);
    label.click();
    // The press is over, so focus leaving now is a real blur.
    focus_out(&items[0], None);
    assert_eq!(fx.expanded().as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn test_removed_menu_is_left_alone() {
    let fx = Fixture::mount("menu-removed", MENU);
    fx.wire();
    let before = menu::menu_count();

    fx.trigger().click();
    let root = fx.root();
    let trigger = fx.trigger();
    root.remove();

    fx.outside().click();
    assert_eq!(trigger.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(menu::menu_count(), before - 1);
    assert_eq!(menu::is_open(&root), None);
}

#[wasm_bindgen_test]
fn test_rewiring_does_not_double_toggle() {
    let fx = Fixture::mount("menu-rewire", MENU);
    assert_eq!(fx.wire(), 1);
    assert_eq!(fx.wire(), 0);
    assert_eq!(overflow_menu(&fx.root(), &WidgetConfig::default()), 0);

    fx.trigger().click();
    assert_eq!(fx.expanded().as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn test_scope_itself_is_wired() {
    let fx = Fixture::mount("menu-scope", MENU);
    assert_eq!(overflow_menu(&fx.root(), &WidgetConfig::default()), 1);
    assert_eq!(fx.wire(), 0);
}

#[wasm_bindgen_test]
fn test_malformed_menu_is_skipped() {
    let html = format!(
        r#"<div data-overflow-menu id="empty"><button aria-haspopup="menu">Nothing</button><div role="menu"></div></div>{MENU}"#
    );
    let fx = Fixture::mount("menu-malformed", &html);
    assert_eq!(fx.wire(), 1);

    let working = fx.el("[data-overflow-menu]:not(#empty) [aria-haspopup]");
    working.click();
    assert_eq!(working.get_attribute("aria-expanded").as_deref(), Some("true"));
}

#[wasm_bindgen_test]
fn test_programmatic_open_and_close() {
    let fx = Fixture::mount("menu-api", MENU);
    let root = fx.root();
    assert!(!menu::open(&root));
    assert_eq!(menu::is_open(&root), None);

    fx.wire();
    assert!(menu::open(&root));
    assert_eq!(menu::is_open(&root), Some(true));
    assert!(is_focused(&fx.items()[0]));

    assert!(menu::close(&root));
    assert_eq!(menu::is_open(&root), Some(false));
    assert_eq!(fx.expanded().as_deref(), Some("false"));
}

#[wasm_bindgen_test]
fn test_at_most_one_menu_tracked_per_instance() {
    let fx = Fixture::mount("menu-tracked", MENU);
    fx.wire();
    let before = menu::open_menu_count();

    fx.trigger().click();
    assert!(menu::open(&fx.root()));
    assert_eq!(menu::open_menu_count(), before + 1);

    fx.outside().click();
    assert_eq!(menu::open_menu_count(), before);
}

// === Re-scan Tests ===

#[wasm_bindgen_test]
fn test_content_event_wires_inserted_subtree() {
    let config = WidgetConfig::default();
    listen_for_content(&config).expect("listener");
    let fx = Fixture::mount("rescan", "");

    let inserted = get_document().create_element("section").expect("create section failed");
    inserted.set_inner_html(&format!("{MENU}{COUNTER}"));
    fx.container.append_child(&inserted).expect("append failed");

    let init = CustomEventInit::new();
    init.set_bubbles(true);
    let ev = CustomEvent::new_with_event_init_dict(&config.rescan_event, &init).expect("custom event");
    inserted.dispatch_event(&ev).expect("dispatch failed");

    fx.trigger().click();
    assert_eq!(fx.expanded().as_deref(), Some("true"));
    fx.el("[data-counter-increment]").click();
    assert_eq!(fx.el("[data-counter-output]").text_content().as_deref(), Some("1"));

    // Already wired: a second pass over the same subtree wires nothing.
    assert_eq!(enhance(&inserted, &config), Default::default());
}
