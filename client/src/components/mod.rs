//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard sections from the props they are given.
//! None of them share state with a sibling.

pub mod fleet_status_board;
pub mod hero_section;
pub mod insights_panel;
pub mod navigation_bar;
pub mod primitives;
