use bytemuck::{Pod, Zeroable};

/// One terrain vertex: a flat grid position at y = 0. Heights are applied
/// later by the shading stage, never baked into this buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
}

impl TerrainVertex {
    fn at(x: f32, z: f32) -> Self {
        Self {
            position: [x, 0.0, z],
        }
    }
}

/// Triangulate a `width` x `height` grid of unit cells at y = 0.
///
/// Each cell (j, i) yields two counter-clockwise triangles, six vertices in
/// a fixed order:
///
/// ```text
/// (j+1, i)  (j, i)  (j, i+1)          first triangle
/// (j, i+1)  (j+1, i+1)  (j+1, i)      second triangle
/// ```
///
/// The returned buffer has exactly `width * height * 6` vertices and is
/// built once at startup; it is never mutated afterwards.
pub fn build_grid(width: u32, height: u32) -> Vec<TerrainVertex> {
    let mut vertices = Vec::with_capacity((width * height * 6) as usize);
    for i in 0..height {
        for j in 0..width {
            let (x0, x1) = (j as f32, (j + 1) as f32);
            let (z0, z1) = (i as f32, (i + 1) as f32);
            vertices.push(TerrainVertex::at(x1, z0));
            vertices.push(TerrainVertex::at(x0, z0));
            vertices.push(TerrainVertex::at(x0, z1));
            vertices.push(TerrainVertex::at(x0, z1));
            vertices.push(TerrainVertex::at(x1, z1));
            vertices.push(TerrainVertex::at(x1, z0));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn triangle_area_normal(tri: &[TerrainVertex]) -> Vec3 {
        let a = Vec3::from(tri[0].position);
        let b = Vec3::from(tri[1].position);
        let c = Vec3::from(tri[2].position);
        (b - a).cross(c - a)
    }

    #[test]
    fn vertex_count_is_six_per_cell() {
        for (w, h) in [(1, 1), (2, 2), (3, 7), (100, 1)] {
            assert_eq!(build_grid(w, h).len(), (w * h * 6) as usize);
        }
    }

    #[test]
    fn two_by_two_grid_first_triangle() {
        let verts = build_grid(2, 2);
        assert_eq!(verts.len(), 24);
        assert_eq!(verts[0].position, [1.0, 0.0, 0.0]);
        assert_eq!(verts[1].position, [0.0, 0.0, 0.0]);
        assert_eq!(verts[2].position, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn all_triangles_have_positive_area() {
        let verts = build_grid(4, 3);
        for tri in verts.chunks_exact(3) {
            let cross = triangle_area_normal(tri);
            assert!(cross.length() > 0.0, "degenerate triangle {tri:?}");
        }
    }

    #[test]
    fn winding_is_counter_clockwise_from_above() {
        let verts = build_grid(5, 5);
        for tri in verts.chunks_exact(3) {
            assert!(
                triangle_area_normal(tri).y > 0.0,
                "clockwise triangle {tri:?}"
            );
        }
    }

    #[test]
    fn cells_tile_the_full_grid() {
        let (w, h) = (3, 2);
        let verts = build_grid(w, h);
        let max_x = verts
            .iter()
            .map(|v| v.position[0])
            .fold(f32::MIN, f32::max);
        let max_z = verts
            .iter()
            .map(|v| v.position[2])
            .fold(f32::MIN, f32::max);
        assert_eq!(max_x, w as f32);
        assert_eq!(max_z, h as f32);
        assert!(verts.iter().all(|v| v.position[1] == 0.0));
    }
}
