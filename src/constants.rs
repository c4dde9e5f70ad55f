//! Render and DOM tuning constants for the web frontend.
//!
//! Scene/interaction defaults shared with host tests live in
//! `core/constants.rs`; these cover GPU formats, post-processing shaping and
//! element ids.

// Scene clear color (linear)
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.0, 0.0];

// Offscreen HDR format for the scene and bloom targets
pub const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

// Bloom blur: sample spacing in texels grows from 1 to 1 + SPREAD as radius goes 0 -> 1
pub const BLOOM_RADIUS_SPREAD: f32 = 3.0;
// Width of the soft knee above the luminance threshold
pub const BLOOM_KNEE: f32 = 0.1;

// DOM
pub const CANVAS_ID: &str = "app-canvas";
pub const PANEL_ID: &str = "control-panel";
pub const PANEL_STATUS_ID: &str = "panel-status";
pub const PANEL_HIDE_KEY: &str = "h";
