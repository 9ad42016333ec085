//! UI Components
//!
//! Leptos components rendering the widget markup. Behaviour is attached
//! afterwards by `dom_widgets`, the same way it is for server fragments.

mod contact_row;
mod counter_card;

pub use contact_row::ContactRow;
pub use counter_card::CounterCard;
