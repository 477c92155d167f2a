//! Utility helpers shared across dashboard UI modules.

pub mod style;
