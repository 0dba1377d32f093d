//! Reusable widgets
//!
//! Building blocks shared by the layouts and the status bar.

pub mod shrink_text;
pub mod stars;
pub mod status_bar;
pub mod testimonial_card;
