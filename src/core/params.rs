// Parameter bags edited from the control panel and read every frame.

use super::constants::*;

/// Every panel-editable value, used as the key of the panel bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParamKey {
    Red,
    Green,
    Blue,
    Threshold,
    Strength,
    Radius,
}

impl ParamKey {
    pub const ALL: [ParamKey; 6] = [
        ParamKey::Red,
        ParamKey::Green,
        ParamKey::Blue,
        ParamKey::Threshold,
        ParamKey::Strength,
        ParamKey::Radius,
    ];

    /// Inclusive `(min, max)` slider range.
    pub fn range(self) -> (f32, f32) {
        match self {
            ParamKey::Red | ParamKey::Green | ParamKey::Blue => COLOR_RANGE,
            ParamKey::Threshold => THRESHOLD_RANGE,
            ParamKey::Strength => STRENGTH_RANGE,
            ParamKey::Radius => RADIUS_RANGE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ParamKey::Red => "red",
            ParamKey::Green => "green",
            ParamKey::Blue => "blue",
            ParamKey::Threshold => "threshold",
            ParamKey::Strength => "strength",
            ParamKey::Radius => "radius",
        }
    }

    /// Panel folder the control lives in.
    pub fn folder(self) -> PanelFolder {
        match self {
            ParamKey::Red | ParamKey::Green | ParamKey::Blue => PanelFolder::Colors,
            ParamKey::Threshold | ParamKey::Strength | ParamKey::Radius => PanelFolder::Bloom,
        }
    }

    pub fn clamp(self, value: f32) -> f32 {
        let (lo, hi) = self.range();
        if value.is_nan() {
            return lo;
        }
        value.clamp(lo, hi)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelFolder {
    Colors,
    Bloom,
    Music,
}

impl PanelFolder {
    pub fn title(self) -> &'static str {
        match self {
            PanelFolder::Colors => "Colors",
            PanelFolder::Bloom => "Bloom",
            PanelFolder::Music => "Music",
        }
    }
}

/// Values shown in the panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualParams {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub threshold: f32,
    pub strength: f32,
    pub radius: f32,
}

impl Default for VisualParams {
    fn default() -> Self {
        Self {
            red: DEFAULT_RED,
            green: DEFAULT_GREEN,
            blue: DEFAULT_BLUE,
            threshold: DEFAULT_BLOOM_THRESHOLD,
            strength: DEFAULT_BLOOM_STRENGTH,
            radius: DEFAULT_BLOOM_RADIUS,
        }
    }
}

impl VisualParams {
    pub fn get(&self, key: ParamKey) -> f32 {
        match key {
            ParamKey::Red => self.red,
            ParamKey::Green => self.green,
            ParamKey::Blue => self.blue,
            ParamKey::Threshold => self.threshold,
            ParamKey::Strength => self.strength,
            ParamKey::Radius => self.radius,
        }
    }

    /// Store `value` clamped to the key's range and return what was stored.
    pub fn set(&mut self, key: ParamKey, value: f32) -> f32 {
        let v = key.clamp(value);
        let slot = match key {
            ParamKey::Red => &mut self.red,
            ParamKey::Green => &mut self.green,
            ParamKey::Blue => &mut self.blue,
            ParamKey::Threshold => &mut self.threshold,
            ParamKey::Strength => &mut self.strength,
            ParamKey::Radius => &mut self.radius,
        };
        *slot = v;
        v
    }
}

/// Inputs of the cube shader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShaderUniforms {
    pub time: f32,
    pub frequency: f32,
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl ShaderUniforms {
    pub fn from_params(params: &VisualParams) -> Self {
        Self {
            time: 0.0,
            frequency: 0.0,
            red: params.red,
            green: params.green,
            blue: params.blue,
        }
    }

    pub fn color(&self) -> [f32; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Bloom pass configuration. Changes apply on the next rendered frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomSettings {
    pub threshold: f32,
    pub strength: f32,
    pub radius: f32,
}

impl BloomSettings {
    pub fn from_params(params: &VisualParams) -> Self {
        Self {
            threshold: params.threshold,
            strength: params.strength,
            radius: params.radius,
        }
    }
}

impl Default for BloomSettings {
    fn default() -> Self {
        Self::from_params(&VisualParams::default())
    }
}
