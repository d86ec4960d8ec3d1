use serde::{Deserialize, Serialize};

/// Configuration for one viewer run.
///
/// Every rendering variant goes through this value; there is exactly one
/// pipeline, parameterized here. Consumers read it at startup — `wireframe`
/// and `lighting` fix the pipeline shape, `height_scale` only seeds the
/// runtime-adjustable scalar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewerOptions {
    /// Render triangle edges instead of filled faces.
    pub wireframe: bool,
    /// Apply diffuse lighting from the light position uniform.
    pub lighting: bool,
    /// Initial vertical exaggeration applied to heightmap samples.
    pub height_scale: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            wireframe: false,
            lighting: true,
            height_scale: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_are_lit_and_filled() {
        let opts = ViewerOptions::default();
        assert!(!opts.wireframe);
        assert!(opts.lighting);
        assert!(opts.height_scale > 0.0);
    }

    #[test]
    fn options_serde_round_trip() {
        let opts = ViewerOptions {
            wireframe: true,
            lighting: false,
            height_scale: 2.5,
        };
        let json = serde_json::to_string(&opts).unwrap();
        let back: ViewerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(opts, back);
    }
}
