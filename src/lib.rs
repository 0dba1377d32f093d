//! # plaudit
//!
//! A terminal testimonial wall: nine layouts for customer testimonials,
//! drawn with Ratatui, plus a small account gateway for the managed backend
//! that owns them.
//!
//! ## Architecture Overview
//!
//! The viewer follows the Elm architecture:
//!
//! - **Model** ([`core::state`]): application and widget state
//! - **Message** ([`core::msg`]): events that can change the state
//! - **Update** ([`core::update`]): a pure function from message and state
//!   to new state and commands
//! - **Command** ([`core::cmd`]): side effects for the runtime to perform
//! - **View** ([`presentation`]): layouts drawn from state, returning the
//!   interactive regions of the frame
//!
//! ```rust
//! use plaudit::core::{
//!     msg::{widget::WidgetMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//! use plaudit::domain::{
//!     testimonial::Testimonial,
//!     widget::{WidgetConfig, WidgetType},
//! };
//!
//! let testimonials = vec![
//!     Testimonial::new("a", 5, "Great support", "Ann Lee"),
//!     Testimonial::new("b", 4, "Fast delivery", "Bo Chen"),
//! ];
//! let state = AppState::new(WidgetConfig::new(WidgetType::Carousel), testimonials);
//!
//! let (state, _commands) = update(Msg::Widget(WidgetMsg::Next), state);
//!
//! assert_eq!(state.widget.current_index(), 1);
//! ```
//!
//! The account gateway ([`infrastructure::gateway`]) is independent of the
//! viewer and backs the `account` subcommand.

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod test_helpers;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
