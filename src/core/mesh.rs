use glam::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// Axis-aligned cube centered at the origin, drawn as a line list.
///
/// Each face owns four vertices carrying the face normal, so displacing
/// along the normal in the shader pulls the faces apart. Every face shows its
/// four border edges plus the diagonal splitting it into two triangles.
pub struct CubeMesh {
    pub vertices: Vec<MeshVertex>,
    pub line_indices: Vec<u16>,
}

// (normal, u, v) with u x v == normal
const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
    ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

const CORNERS: [(f32, f32); 4] = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
const FACE_EDGES: [(u16, u16); 5] = [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)];

impl CubeMesh {
    pub fn new(side: f32) -> Self {
        let h = side * 0.5;
        let mut vertices = Vec::with_capacity(FACES.len() * CORNERS.len());
        let mut line_indices = Vec::with_capacity(FACES.len() * FACE_EDGES.len() * 2);
        for (n, u, v) in FACES {
            let (n, u, v) = (Vec3::from(n), Vec3::from(u), Vec3::from(v));
            let base = vertices.len() as u16;
            for (su, sv) in CORNERS {
                let p = (n + u * su + v * sv) * h;
                vertices.push(MeshVertex {
                    position: p.to_array(),
                    normal: n.to_array(),
                });
            }
            for (a, b) in FACE_EDGES {
                line_indices.push(base + a);
                line_indices.push(base + b);
            }
        }
        Self {
            vertices,
            line_indices,
        }
    }

    pub fn edge_count(&self) -> usize {
        self.line_indices.len() / 2
    }
}
