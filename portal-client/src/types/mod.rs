//! Type definitions for the portal client

mod content;
mod message;
mod view;

// Re-export types for convenience
pub use content::Content;
pub use message::Message;
pub use view::ViewId;
