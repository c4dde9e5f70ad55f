// Scene, interaction and audio defaults shared by the web frontend and host tests.

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START: [f32; 3] = [0.0, -2.0, 14.0];

// Mesh
pub const CUBE_SIDE: f32 = 4.0;

// Drag rotation (radians per pixel of pointer movement)
pub const DRAG_SENSITIVITY: f32 = 0.01;
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2;

// Two clicks closer than this are a double click
pub const DOUBLE_CLICK_WINDOW_MS: f64 = 300.0;

// Camera easing: fraction of the remaining distance covered per reference frame
pub const CAMERA_EASE_X: f32 = 0.05;
pub const CAMERA_EASE_Y: f32 = 0.5;
pub const EASE_REFERENCE_HZ: f32 = 60.0;
// World-space offset of the camera target when the pointer sits on the viewport edge
pub const POINTER_CAMERA_RANGE: f32 = 4.0;

// Analyser
pub const ANALYSER_FFT_SIZE: u32 = 32;

// Visual parameter defaults
pub const DEFAULT_RED: f32 = 1.0;
pub const DEFAULT_GREEN: f32 = 1.0;
pub const DEFAULT_BLUE: f32 = 1.0;
pub const DEFAULT_BLOOM_THRESHOLD: f32 = 0.5;
pub const DEFAULT_BLOOM_STRENGTH: f32 = 0.5;
pub const DEFAULT_BLOOM_RADIUS: f32 = 0.8;

// Panel slider ranges
pub const COLOR_RANGE: (f32, f32) = (0.0, 1.0);
pub const THRESHOLD_RANGE: (f32, f32) = (0.0, 1.0);
pub const STRENGTH_RANGE: (f32, f32) = (0.0, 3.0);
pub const RADIUS_RANGE: (f32, f32) = (0.0, 1.0);

// Track catalog (label, asset path); the first entry is loaded at startup
pub const TRACKS: [(&str, &str); 3] = [
    ("Beat1", "./assets/Beat1.mp3"),
    ("Beat2", "./assets/Beat2.mp3"),
    ("Beat3", "./assets/Beat3.mp3"),
];
