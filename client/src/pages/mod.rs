//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns composition and delegates rendering details to
//! `components`.

pub mod index;
