//! Loading testimonials from JSON.

use std::{collections::HashSet, fs, path::Path};

use color_eyre::eyre::{Result, WrapErr};

use crate::domain::testimonial::Testimonial;

const SAMPLE: &str = include_str!("../../.config/testimonials.json");

/// Testimonials bundled with the binary
pub fn sample() -> Result<Vec<Testimonial>> {
    parse(SAMPLE).wrap_err("Bundled sample testimonials are invalid")
}

/// Read a JSON array of testimonials from `path`
pub fn load(path: &Path) -> Result<Vec<Testimonial>> {
    let json = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read testimonials from {}", path.display()))?;
    parse(&json).wrap_err_with(|| format!("Failed to parse testimonials in {}", path.display()))
}

/// `path` when given, the bundled sample otherwise
pub fn load_or_sample(path: Option<&Path>) -> Result<Vec<Testimonial>> {
    match path {
        Some(path) => load(path),
        None => sample(),
    }
}

pub fn parse(json: &str) -> Result<Vec<Testimonial>> {
    let testimonials: Vec<Testimonial> = serde_json::from_str(json)?;
    warn_duplicate_ids(&testimonials);
    Ok(testimonials)
}

fn warn_duplicate_ids(testimonials: &[Testimonial]) {
    let mut seen = HashSet::new();
    for testimonial in testimonials {
        if !seen.insert(testimonial.id.as_str()) {
            log::warn!("Duplicate testimonial id {:?}", testimonial.id);
        }
    }
}
