//! Message handlers organized by category

mod forms;
mod navigation;
mod session;
