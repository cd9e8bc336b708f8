//! View rendering for the portal client

mod content;
mod layout;
mod sidebar;

pub use layout::main_layout;
