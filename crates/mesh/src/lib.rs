//! Procedural terrain mesh for the relief viewer.
//!
//! # Invariants
//! - Triangulation is pure and deterministic: same dimensions, same buffer.
//! - Vertex order fixes counter-clockwise front-face winding viewed from +Y;
//!   downstream face culling depends on it.

mod grid;

pub use grid::{TerrainVertex, build_grid};

pub fn crate_info() -> &'static str {
    "relief-mesh v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("mesh"));
    }
}
