//! UI components module.
//!
//! Ratatui widgets for the tab bar, search bar, filter panel, and the
//! candidate/idea card lists.

pub mod filters;
pub mod list;
pub mod search;
pub mod tabs;

pub use filters::render_filters;
pub use list::render_list;
pub use search::render_search;
pub use tabs::render_tabs;
