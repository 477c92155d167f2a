//! Dashboard data and UI state.
//!
//! DESIGN
//! ======
//! Record types and their derived values live here, free of any Leptos types,
//! so they can be tested natively and supplied by any data source.

pub mod feed;
pub mod fleet;
pub mod insights;
pub mod nav;
