// Application state shared by the event handlers and the frame loop.
//
// All mutation goes through `AppState` methods so the web layer stays a
// thin adapter between browser callbacks and this struct.

use super::camera::{pointer_goal, Camera};
use super::catalog::{Track, TrackCatalog};
use super::interaction::Interaction;
use super::params::{BloomSettings, ParamKey, ShaderUniforms, VisualParams};
use super::playback::{LoadTicket, LoadTracker, PlaybackAction, PlaybackState};
use glam::{EulerRot, Mat4};

/// Output size shared by the surface and every offscreen target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Zero-sized dimensions are clamped to 1.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Half-resolution extent used by the bloom targets.
    pub fn bloom_extent(&self) -> (u32, u32) {
        ((self.width / 2).max(1), (self.height / 2).max(1))
    }
}

pub struct AppState {
    pub params: VisualParams,
    pub uniforms: ShaderUniforms,
    pub bloom: BloomSettings,
    pub interaction: Interaction,
    pub playback: PlaybackState,
    pub loads: LoadTracker,
    pub catalog: TrackCatalog,
    pub selected_track: Option<Track>,
    pub camera: Camera,
    pub viewport: Viewport,
}

impl AppState {
    pub fn new(width: u32, height: u32) -> Self {
        let params = VisualParams::default();
        let viewport = Viewport::new(width, height);
        Self {
            uniforms: ShaderUniforms::from_params(&params),
            bloom: BloomSettings::from_params(&params),
            params,
            interaction: Interaction::default(),
            playback: PlaybackState::default(),
            loads: LoadTracker::default(),
            catalog: TrackCatalog::default(),
            selected_track: None,
            camera: Camera::new(viewport.aspect()),
            viewport,
        }
    }

    /// Write a panel value into the parameter bag and the one uniform or
    /// bloom field it drives. Returns the clamped value.
    pub fn set_param(&mut self, key: ParamKey, value: f32) -> f32 {
        let v = self.params.set(key, value);
        match key {
            ParamKey::Red => self.uniforms.red = v,
            ParamKey::Green => self.uniforms.green = v,
            ParamKey::Blue => self.uniforms.blue = v,
            ParamKey::Threshold => self.bloom.threshold = v,
            ParamKey::Strength => self.bloom.strength = v,
            ParamKey::Radius => self.bloom.radius = v,
        }
        v
    }

    pub fn pointer_down(&mut self) {
        self.interaction.pointer_down();
    }

    pub fn pointer_up(&mut self) {
        self.interaction.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    pub fn pointer_move(&mut self, dx: f32, dy: f32, ndc: [f32; 2]) {
        self.interaction.pointer_move(dx, dy, ndc);
    }

    pub fn click(&mut self, now_ms: f64) -> PlaybackAction {
        self.playback.click(now_ms)
    }

    /// Per-frame update: ease the camera toward the pointer, aim it at the
    /// origin and refresh the live uniforms.
    pub fn advance_frame(&mut self, elapsed_sec: f32, dt_sec: f32, avg_frequency: f32) {
        let goal = pointer_goal(self.interaction.pointer.ndc);
        self.camera.ease_toward(goal, dt_sec);
        self.camera.look_at_origin();
        self.uniforms.time = elapsed_sec;
        self.uniforms.frequency = avg_frequency;
    }

    pub fn model_matrix(&self) -> Mat4 {
        let r = self.interaction.rotation;
        Mat4::from_euler(EulerRot::XYZ, r.pitch, r.yaw, 0.0)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Viewport {
        self.viewport = Viewport::new(width, height);
        self.camera.aspect = self.viewport.aspect();
        self.viewport
    }

    /// Select a catalog entry and open a new load for it. Any load still in
    /// flight becomes stale.
    pub fn request_track(&mut self, label: &str) -> Option<(Track, LoadTicket)> {
        let track = self.catalog.by_label(label)?;
        self.selected_track = Some(track);
        Some((track, self.loads.begin()))
    }

    /// A load finished successfully. Returns true if its buffer should be
    /// installed. Playback is left alone; the new buffer is used on the next
    /// start.
    pub fn load_succeeded(&mut self, ticket: LoadTicket) -> bool {
        if !self.loads.finish(ticket) {
            return false;
        }
        self.playback.has_buffer = true;
        true
    }

    /// A load failed. Returns true if it was the current request. The
    /// previous buffer and playback flags are kept.
    pub fn load_failed(&mut self, ticket: LoadTicket) -> bool {
        self.loads.finish(ticket)
    }
}
