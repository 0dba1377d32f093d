//! Presentation layer
//!
//! This module contains everything that draws:
//! - The layout selector and the nine layouts
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod animation;
pub mod components;
pub mod config;
pub mod hit_map;
pub mod layouts;
pub mod theme;
pub mod widgets;
