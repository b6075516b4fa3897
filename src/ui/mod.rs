//! UI module - contains UI rendering components
//!
//! Widgets shared by the board views live in `components`.

pub mod components;
