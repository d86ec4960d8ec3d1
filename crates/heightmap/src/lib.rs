//! Heightmap loading for the relief viewer.
//!
//! The decoded image drives everything downstream: its pixel dimensions
//! become the terrain grid dimensions, and its pixels are forwarded
//! untouched to the shading stage as a texture.

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeightmapError {
    #[error("failed to decode heightmap image {path}: {source}")]
    Decode {
        path: String,
        source: image::ImageError,
    },
    #[error("heightmap {path} has a zero dimension ({width}x{height})")]
    EmptyImage {
        path: String,
        width: u32,
        height: u32,
    },
}

/// A decoded heightmap: rgba8 pixels plus the grid dimensions they imply.
#[derive(Debug, Clone)]
pub struct Heightmap {
    pub width: u32,
    pub height: u32,
    /// Tightly packed rgba8 rows, `width * height * 4` bytes.
    pub pixels: Vec<u8>,
}

impl Heightmap {
    /// Decode an image file into an rgba8 heightmap.
    pub fn load(path: &Path) -> Result<Self, HeightmapError> {
        let path_display = path.display().to_string();
        let decoded = image::open(path).map_err(|source| HeightmapError::Decode {
            path: path_display.clone(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        if width == 0 || height == 0 {
            return Err(HeightmapError::EmptyImage {
                path: path_display,
                width,
                height,
            });
        }
        tracing::info!("loaded heightmap {path_display}: {width}x{height}");
        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
        })
    }
}

pub fn crate_info() -> &'static str {
    "relief-heightmap v0.1.0"
}
