//! Overflow Menu Widget
//!
//! Accessible popup menu with keyboard navigation. Markup:
//!
//! ```html
//! <div data-overflow-menu>
//!   <button type="button" aria-haspopup="menu" aria-controls="contact-menu">Options</button>
//!   <div role="menu" id="contact-menu" hidden>
//!     <button role="menuitem">Edit</button>
//!     <button role="menuitem">Delete</button>
//!   </div>
//! </div>
//! ```

mod keys;
mod registry;
mod state;
mod widget;

pub use keys::MenuKey;
pub use registry::{close, is_open, menu_count, open, open_menu_count, overflow_menu};
pub use state::{CloseReason, Effect, MenuState};
