//! wgpu render backend for the relief terrain viewer.
//!
//! Uploads the flat grid mesh once and displaces it on the GPU: the vertex
//! stage reads the heightmap texture, scales texel luminance by the
//! height-scale uniform, and shades in eye space with the model-view and
//! normal matrices.
//!
//! # Invariants
//! - The vertex buffer is written once at startup and never mutated.
//! - The renderer never mutates camera state; it only reads the matrix
//!   bundle built for the current tick.

mod gpu;
mod shaders;

pub use gpu::TerrainRenderer;
