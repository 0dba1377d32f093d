//! Infrastructure layer
//!
//! Everything that touches the outside world:
//! - TUI foundation and terminal events
//! - CLI argument processing and configuration
//! - Testimonial loading
//! - The carousel autoplay timer
//! - The account gateway over the managed backend

pub mod autoplay;
pub mod cli;
pub mod config;
pub mod gateway;
pub mod testimonials;
pub mod tui;
