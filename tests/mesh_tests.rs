// Host-side tests for the wireframe cube geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod mesh {
        include!("../src/core/mesh.rs");
    }
}

use crate::core::constants::CUBE_SIDE;
use crate::core::mesh::*;
use glam::Vec3;

#[test]
fn cube_has_four_vertices_per_face() {
    let mesh = CubeMesh::new(CUBE_SIDE);
    assert_eq!(mesh.vertices.len(), 24);
}

#[test]
fn each_face_draws_borders_and_one_diagonal() {
    let mesh = CubeMesh::new(CUBE_SIDE);
    assert_eq!(mesh.edge_count(), 30);
    assert_eq!(mesh.line_indices.len() % 2, 0);
    assert!(mesh
        .line_indices
        .iter()
        .all(|&i| (i as usize) < mesh.vertices.len()));
}

#[test]
fn vertices_sit_on_cube_corners() {
    let side = CUBE_SIDE;
    let mesh = CubeMesh::new(side);
    for v in &mesh.vertices {
        for c in v.position {
            assert!((c.abs() - side * 0.5).abs() < 1e-6, "{:?}", v.position);
        }
    }
}

#[test]
fn normals_are_unit_axes_pointing_outward() {
    let mesh = CubeMesh::new(CUBE_SIDE);
    for v in &mesh.vertices {
        let n = Vec3::from(v.normal);
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert_eq!(n.abs().max_element(), 1.0);
        assert!(Vec3::from(v.position).dot(n) > 0.0);
    }
}

#[test]
fn edges_stay_on_one_face() {
    let mesh = CubeMesh::new(CUBE_SIDE);
    for pair in mesh.line_indices.chunks_exact(2) {
        let a = &mesh.vertices[pair[0] as usize];
        let b = &mesh.vertices[pair[1] as usize];
        assert_eq!(a.normal, b.normal);
        assert_ne!(a.position, b.position);
    }
}

#[test]
fn vertex_layout_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<MeshVertex>(), 24);
    let mesh = CubeMesh::new(1.0);
    assert_eq!(bytemuck::cast_slice::<MeshVertex, u8>(&mesh.vertices).len(), 24 * 24);
}
