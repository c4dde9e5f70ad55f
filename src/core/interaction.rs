use super::constants::{DRAG_SENSITIVITY, PITCH_LIMIT};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Last known pointer position in normalized device coordinates
/// (x right, y up, both in [-1, 1]).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub ndc: [f32; 2],
}

/// Mesh orientation driven by pointer drags. No roll.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshRotation {
    pub pitch: f32,
    pub yaw: f32,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Interaction {
    pub phase: DragPhase,
    pub pointer: PointerState,
    pub rotation: MeshRotation,
}

impl Interaction {
    pub fn pointer_down(&mut self) {
        self.phase = DragPhase::Dragging;
    }

    pub fn pointer_up(&mut self) {
        self.phase = DragPhase::Idle;
    }

    /// Pointer left the window; ends any drag.
    pub fn pointer_leave(&mut self) {
        self.phase = DragPhase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Apply a pointer move. `dx`/`dy` are screen-space pixel deltas
    /// (y down); `ndc` is the new pointer position.
    pub fn pointer_move(&mut self, dx: f32, dy: f32, ndc: [f32; 2]) {
        self.pointer.ndc = [ndc[0].clamp(-1.0, 1.0), ndc[1].clamp(-1.0, 1.0)];
        if !self.is_dragging() {
            return;
        }
        self.rotation.yaw -= dx * DRAG_SENSITIVITY;
        self.rotation.pitch =
            (self.rotation.pitch - dy * DRAG_SENSITIVITY).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Convert a pixel position inside a `width` x `height` viewport to NDC.
#[inline]
pub fn pixel_to_ndc(x: f32, y: f32, width: f32, height: f32) -> [f32; 2] {
    if width <= 0.0 || height <= 0.0 {
        return [0.0, 0.0];
    }
    let nx = (x / width) * 2.0 - 1.0;
    let ny = 1.0 - (y / height) * 2.0;
    [nx.clamp(-1.0, 1.0), ny.clamp(-1.0, 1.0)]
}
