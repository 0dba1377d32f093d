//! Domain logic
//!
//! This module contains domain-specific business logic:
//! - Testimonial records and widget configuration
//! - Carousel rotation and display selection rules
//! - Text processing utilities

pub mod carousel;
pub mod rating;
pub mod selection;
pub mod testimonial;
pub mod text;
pub mod widget;
