//! Styling for the portal client

mod layout;
mod widgets;
mod window;

pub use layout::*;
pub use widgets::*;
pub use window::*;
