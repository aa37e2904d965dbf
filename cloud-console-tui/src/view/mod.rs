//! View layer: UI rendering
//!
//! Reads the model, never mutates it.

pub mod components;
pub mod layout;
pub mod pages;
pub mod text;
pub mod theme;

pub use layout::render;
