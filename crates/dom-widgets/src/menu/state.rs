//! Menu State Machine
//!
//! Explicit open/focus state for one overflow menu. DOM attributes are a
//! projection of this state; transitions return the focus effect the DOM
//! layer has to perform afterwards.

use super::keys::MenuKey;

/// Why a menu is being closed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseReason {
    /// Trigger activated while open
    Toggle,
    /// Focus left the menu root
    Blur,
    /// Pointer click outside the menu root
    Outside,
    /// Escape key, returns focus to the trigger
    Escape,
    /// Closed through the public API
    Programmatic,
}

/// Side effect to apply after a transition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Move focus to the item at this index
    FocusItem(usize),
    /// Move focus back to the trigger
    FocusTrigger,
    /// Dispatch a click on the item at this index
    Activate(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
    len: usize,
    focused: usize,
}

impl MenuState {
    /// Closed menu over `len` items
    pub fn new(len: usize) -> Self {
        Self {
            open: false,
            len,
            focused: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the item holding focus (meaningful while open)
    pub fn focused(&self) -> usize {
        self.focused
    }

    /// Open and focus the first item
    pub fn open(&mut self) -> Effect {
        self.open = true;
        self.focused = 0;
        if self.len == 0 {
            Effect::None
        } else {
            Effect::FocusItem(0)
        }
    }

    /// Close. Only Escape moves focus.
    pub fn close(&mut self, reason: CloseReason) -> Effect {
        self.open = false;
        match reason {
            CloseReason::Escape => Effect::FocusTrigger,
            _ => Effect::None,
        }
    }

    pub fn toggle(&mut self) -> Effect {
        if self.open {
            self.close(CloseReason::Toggle)
        } else {
            self.open()
        }
    }

    /// Keyboard navigation. Keys are ignored while closed.
    pub fn handle_key(&mut self, key: MenuKey) -> Effect {
        if !self.open || self.len == 0 {
            return Effect::None;
        }
        match key {
            MenuKey::Up => {
                if self.focused == 0 {
                    return Effect::None;
                }
                self.focused -= 1;
                Effect::FocusItem(self.focused)
            }
            MenuKey::Down => {
                if self.focused + 1 >= self.len {
                    return Effect::None;
                }
                self.focused += 1;
                Effect::FocusItem(self.focused)
            }
            MenuKey::Home => {
                self.focused = 0;
                Effect::FocusItem(0)
            }
            MenuKey::End => {
                self.focused = self.len - 1;
                Effect::FocusItem(self.focused)
            }
            MenuKey::Activate => Effect::Activate(self.focused),
            MenuKey::Escape => self.close(CloseReason::Escape),
        }
    }

    /// Sync the focus index when an item gains focus by other means (pointer, script)
    pub fn focus_item(&mut self, index: usize) {
        if index < self.len {
            self.focused = index;
        }
    }

    /// Roving tabindex value for the item at `index`
    pub fn tabindex(&self, index: usize) -> &'static str {
        if self.open && index == self.focused {
            "0"
        } else {
            "-1"
        }
    }
}
