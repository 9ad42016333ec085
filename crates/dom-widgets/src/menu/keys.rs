/// Keys the overflow menu reacts to while open
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Home,
    End,
    /// Space bar, clicks the focused item
    Activate,
    Escape,
}

impl MenuKey {
    /// Map a `KeyboardEvent.key` value.
    ///
    /// Browsers report the space bar as `" "` (older ones as `"Spacebar"`).
    /// `"Space"` is its `code` value, accepted too for synthetic events.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "Up" => Some(Self::Up),
            "ArrowDown" | "Down" => Some(Self::Down),
            "Home" => Some(Self::Home),
            "End" => Some(Self::End),
            " " | "Spacebar" | "Space" => Some(Self::Activate),
            "Escape" | "Esc" => Some(Self::Escape),
            _ => None,
        }
    }
}
