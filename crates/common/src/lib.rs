//! Shared types for the relief terrain viewer.
//!
//! # Invariants
//! - One pipeline, many configurations: feature variants (wireframe,
//!   lighting) are expressed as options, never as forked programs.

pub mod options;

pub use options::ViewerOptions;

pub fn crate_info() -> &'static str {
    "relief-common v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("common"));
    }
}
