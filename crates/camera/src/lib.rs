//! Camera navigation and view pipeline for the relief terrain viewer.
//!
//! # Invariants
//! - `gaze`, `up`, and `right` remain a right-handed orthonormal basis after
//!   every mutation.
//! - Matrices are derived fresh from camera state, never patched
//!   incrementally, so numeric drift cannot accumulate.

mod camera;
mod matrices;

pub use camera::{Camera, SPEED_STEP};
pub use matrices::ViewProjection;

pub fn crate_info() -> &'static str {
    "relief-camera v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("camera"));
    }
}
