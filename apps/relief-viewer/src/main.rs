use anyhow::Result;
use clap::Parser;
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Fullscreen, Window, WindowId};
use relief_camera::{Camera, ViewProjection};
use relief_common::ViewerOptions;
use relief_heightmap::Heightmap;
use relief_input::{Action, Bindings, Key};
use relief_render_wgpu::TerrainRenderer;

/// Degrees of yaw/pitch applied per tick while a rotation key is held.
const ROTATE_STEP_DEGREES: f32 = 1.0;
/// Height-scale change per key press.
const HEIGHT_SCALE_STEP: f32 = 0.5;

#[derive(Parser)]
#[command(name = "relief-viewer", about = "Fly a free-look camera over a heightmap image")]
struct Cli {
    /// Heightmap image; its pixel dimensions become the terrain grid
    image: PathBuf,
}

/// Per-run viewer state: the camera, input table, and runtime scalars.
struct AppState {
    camera: Camera,
    bindings: Bindings,
    keys_held: HashSet<Key>,
    height_scale: f32,
    fullscreen: bool,
}

impl AppState {
    fn new(heightmap: &Heightmap, options: &ViewerOptions) -> Self {
        Self {
            camera: Camera::above_grid(heightmap.width),
            bindings: Bindings::default(),
            keys_held: HashSet::new(),
            height_scale: options.height_scale,
            fullscreen: false,
        }
    }

    /// One simulation tick: rotations for held keys, then forward travel.
    fn tick(&mut self) {
        for key in self.keys_held.clone() {
            match self.bindings.action(key) {
                Some(Action::YawLeft) => self.camera.yaw(ROTATE_STEP_DEGREES),
                Some(Action::YawRight) => self.camera.yaw(-ROTATE_STEP_DEGREES),
                Some(Action::PitchUp) => self.camera.pitch(-ROTATE_STEP_DEGREES),
                Some(Action::PitchDown) => self.camera.pitch(ROTATE_STEP_DEGREES),
                _ => {}
            }
        }
        // Travel is continuous: the camera always advances by its speed,
        // which starts at zero and is adjusted by discrete key presses.
        self.camera.translate(1.0);
    }

    /// Apply a discrete (press-fired) action. Fullscreen and quit are
    /// handled by the window layer.
    fn apply_discrete(&mut self, action: Action) {
        match action {
            Action::SpeedUp => self.camera.speed_up(),
            Action::SpeedDown => self.camera.speed_down(),
            Action::HeightScaleUp => self.height_scale += HEIGHT_SCALE_STEP,
            Action::HeightScaleDown => self.height_scale -= HEIGHT_SCALE_STEP,
            _ => {}
        }
    }
}

/// Map a physical key code to the viewer's logical key set.
fn logical_key(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::KeyA => Some(Key::A),
        KeyCode::KeyD => Some(Key::D),
        KeyCode::KeyW => Some(Key::W),
        KeyCode::KeyS => Some(Key::S),
        KeyCode::KeyU => Some(Key::U),
        KeyCode::KeyJ => Some(Key::J),
        KeyCode::KeyO => Some(Key::O),
        KeyCode::KeyL => Some(Key::L),
        KeyCode::KeyP => Some(Key::P),
        KeyCode::KeyQ | KeyCode::Escape => Some(Key::Q),
        _ => None,
    }
}

struct ViewerApp {
    state: AppState,
    heightmap: Heightmap,
    options: ViewerOptions,
    window: Option<Arc<Window>>,
    surface: Option<wgpu::Surface<'static>>,
    device: Option<wgpu::Device>,
    queue: Option<wgpu::Queue>,
    config: Option<wgpu::SurfaceConfiguration>,
    renderer: Option<TerrainRenderer>,
}

impl ViewerApp {
    fn new(heightmap: Heightmap, options: ViewerOptions) -> Self {
        Self {
            state: AppState::new(&heightmap, &options),
            heightmap,
            options,
            window: None,
            surface: None,
            device: None,
            queue: None,
            config: None,
            renderer: None,
        }
    }

    fn toggle_fullscreen(&mut self) {
        self.state.fullscreen = !self.state.fullscreen;
        if let Some(window) = &self.window {
            let mode = self
                .state
                .fullscreen
                .then(|| Fullscreen::Borderless(None));
            window.set_fullscreen(mode);
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("relief")
            .with_inner_size(PhysicalSize::new(600u32, 600));
        let window = Arc::new(event_loop.create_window(attrs).expect("create window"));

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("find adapter");

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("relief_device"),
                required_features: TerrainRenderer::required_features(&self.options),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .expect("create device");

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        self.state.camera.set_aspect(size.width, size.height);

        let renderer = TerrainRenderer::new(
            &device,
            &queue,
            surface_format,
            size.width,
            size.height,
            &self.heightmap,
            &self.options,
        );

        self.window = Some(window);
        self.surface = Some(surface);
        self.device = Some(device);
        self.queue = Some(queue);
        self.config = Some(config);
        self.renderer = Some(renderer);

        tracing::info!(
            "GPU initialized with {} backend",
            adapter.get_info().backend.to_str()
        );
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(surface), Some(device), Some(config)) =
                    (&self.surface, &self.device, &mut self.config)
                {
                    config.width = new_size.width.max(1);
                    config.height = new_size.height.max(1);
                    surface.configure(device, config);
                    self.state.camera.set_aspect(new_size.width, new_size.height);
                    if let Some(renderer) = &mut self.renderer {
                        renderer.resize(device, config.width, config.height);
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        repeat,
                        ..
                    },
                ..
            } => {
                let Some(key) = logical_key(code) else {
                    return;
                };
                let Some(action) = self.state.bindings.action(key) else {
                    return;
                };
                let pressed = key_state == ElementState::Pressed;

                if action.is_held() {
                    if pressed {
                        let _ = self.state.keys_held.insert(key);
                    } else {
                        let _ = self.state.keys_held.remove(&key);
                    }
                    return;
                }
                if !pressed || repeat {
                    return;
                }
                match action {
                    Action::Quit => event_loop.exit(),
                    Action::ToggleFullscreen => self.toggle_fullscreen(),
                    other => self.state.apply_discrete(other),
                }
            }
            WindowEvent::RedrawRequested => {
                self.state.tick();

                let (Some(surface), Some(device), Some(queue)) =
                    (&self.surface, &self.device, &self.queue)
                else {
                    return;
                };

                let output = match surface.get_current_texture() {
                    Ok(t) => t,
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        if let Some(config) = &self.config {
                            surface.configure(device, config);
                        }
                        return;
                    }
                    Err(e) => {
                        tracing::error!("surface error: {e}");
                        return;
                    }
                };

                let view = output
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());

                // Matrices are rebuilt from scratch every tick; nothing is
                // cached between frames.
                let matrices = ViewProjection::build(&self.state.camera);
                if let Some(renderer) = &self.renderer {
                    renderer.render(
                        device,
                        queue,
                        &view,
                        &self.state.camera,
                        &matrices,
                        self.state.height_scale,
                    );
                }

                output.present();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("relief-viewer starting");

    let heightmap = Heightmap::load(&cli.image)?;
    let options = ViewerOptions::default();

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = ViewerApp::new(heightmap, options);
    event_loop.run_app(&mut app)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logical_keys_cover_the_binding_table() {
        let bindings = Bindings::default();
        for code in [
            KeyCode::KeyA,
            KeyCode::KeyD,
            KeyCode::KeyW,
            KeyCode::KeyS,
            KeyCode::KeyU,
            KeyCode::KeyJ,
            KeyCode::KeyO,
            KeyCode::KeyL,
            KeyCode::KeyP,
            KeyCode::KeyQ,
            KeyCode::Escape,
        ] {
            let key = logical_key(code).expect("mapped key");
            assert!(bindings.action(key).is_some());
        }
        assert!(logical_key(KeyCode::KeyZ).is_none());
    }

    #[test]
    fn held_keys_rotate_once_per_tick() {
        let heightmap = Heightmap {
            width: 100,
            height: 100,
            pixels: vec![0; 100 * 100 * 4],
        };
        let options = ViewerOptions::default();
        let mut state = AppState::new(&heightmap, &options);
        let gaze_before = state.camera.gaze;

        let _ = state.keys_held.insert(Key::A);
        state.tick();
        assert_ne!(state.camera.gaze, gaze_before);
        // Speed is still zero, so position does not drift.
        assert_eq!(state.camera.position.x, 50.0);
    }

    #[test]
    fn discrete_actions_adjust_scalars() {
        let heightmap = Heightmap {
            width: 10,
            height: 10,
            pixels: vec![0; 10 * 10 * 4],
        };
        let options = ViewerOptions::default();
        let mut state = AppState::new(&heightmap, &options);

        state.apply_discrete(Action::SpeedUp);
        assert!(state.camera.speed > 0.0);
        state.apply_discrete(Action::SpeedDown);
        state.apply_discrete(Action::SpeedDown);
        assert!(state.camera.speed < 0.0, "speed is unclamped");

        let before = state.height_scale;
        state.apply_discrete(Action::HeightScaleUp);
        assert!(state.height_scale > before);
    }
}
