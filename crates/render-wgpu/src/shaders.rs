/// WGSL shader for the heightmap-displaced terrain grid.
///
/// The vertex stage looks up texel luminance at the vertex's integer grid
/// coordinate, displaces y by the height-scale uniform, and derives a normal
/// from central differences of the neighboring heights. Lighting runs in eye
/// space using the model-view and normal matrices.
pub const TERRAIN_SHADER: &str = r#"
struct Uniforms {
    mvp: mat4x4<f32>,
    model_view: mat4x4<f32>,
    normal: mat4x4<f32>,
    camera_pos: vec4<f32>,
    light_pos: vec4<f32>,
    grid_size: vec2<f32>,
    height_scale: f32,
    lighting: f32,
};

@group(0) @binding(0)
var<uniform> uniforms: Uniforms;

@group(0) @binding(1)
var heightmap: texture_2d<f32>;

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) view_pos: vec3<f32>,
    @location(1) view_normal: vec3<f32>,
    @location(2) relative_height: f32,
};

fn sample_height(x: i32, z: i32) -> f32 {
    let dims = vec2<i32>(uniforms.grid_size) - vec2<i32>(1, 1);
    let clamped = clamp(vec2<i32>(x, z), vec2<i32>(0, 0), dims);
    let texel = textureLoad(heightmap, clamped, 0);
    return dot(texel.rgb, vec3<f32>(0.2126, 0.7152, 0.0722));
}

@vertex
fn vs_terrain(@location(0) position: vec3<f32>) -> VertexOutput {
    let xi = i32(position.x);
    let zi = i32(position.z);

    let luminance = sample_height(xi, zi);
    let world_pos = vec3<f32>(position.x, luminance * uniforms.height_scale, position.z);

    let dx = (sample_height(xi + 1, zi) - sample_height(xi - 1, zi)) * uniforms.height_scale;
    let dz = (sample_height(xi, zi + 1) - sample_height(xi, zi - 1)) * uniforms.height_scale;
    let world_normal = normalize(vec3<f32>(-dx, 2.0, -dz));

    var out: VertexOutput;
    out.clip_position = uniforms.mvp * vec4<f32>(world_pos, 1.0);
    out.view_pos = (uniforms.model_view * vec4<f32>(world_pos, 1.0)).xyz;
    out.view_normal = (uniforms.normal * vec4<f32>(world_normal, 0.0)).xyz;
    out.relative_height = luminance;
    return out;
}

@fragment
fn fs_terrain(in: VertexOutput) -> @location(0) vec4<f32> {
    let base = mix(
        vec3<f32>(0.16, 0.32, 0.12),
        vec3<f32>(0.86, 0.82, 0.72),
        clamp(in.relative_height, 0.0, 1.0),
    );
    if (uniforms.lighting < 0.5) {
        return vec4<f32>(base, 1.0);
    }

    let light_view = (uniforms.model_view * vec4<f32>(uniforms.light_pos.xyz, 1.0)).xyz;
    let n = normalize(in.view_normal);
    let light_dir = normalize(light_view - in.view_pos);
    let eye_dir = normalize(-in.view_pos);

    let ambient = 0.25;
    let diffuse = max(dot(n, light_dir), 0.0);
    let half_dir = normalize(light_dir + eye_dir);
    let specular = pow(max(dot(n, half_dir), 0.0), 40.0) * 0.2;

    let shaded = base * (ambient + diffuse * 0.75) + vec3<f32>(specular);
    return vec4<f32>(shaded, 1.0);
}
"#;
