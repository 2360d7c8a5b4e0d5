//! Unit cube (side 2, centred on the origin) as 36 non-indexed vertices,
//! counter-clockwise when seen from outside.

use crate::engine::components::MeshData;

pub const POSITIONS: [f32; 108] = [
    // +X
     1.0, -1.0,  1.0,  1.0, -1.0, -1.0,  1.0,  1.0, -1.0,
     1.0, -1.0,  1.0,  1.0,  1.0, -1.0,  1.0,  1.0,  1.0,
    // -X
    -1.0, -1.0, -1.0, -1.0, -1.0,  1.0, -1.0,  1.0,  1.0,
    -1.0, -1.0, -1.0, -1.0,  1.0,  1.0, -1.0,  1.0, -1.0,
    // +Y
    -1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0,  1.0, -1.0,
    -1.0,  1.0,  1.0,  1.0,  1.0, -1.0, -1.0,  1.0, -1.0,
    // -Y
    -1.0, -1.0, -1.0,  1.0, -1.0, -1.0,  1.0, -1.0,  1.0,
    -1.0, -1.0, -1.0,  1.0, -1.0,  1.0, -1.0, -1.0,  1.0,
    // +Z
    -1.0, -1.0,  1.0,  1.0, -1.0,  1.0,  1.0,  1.0,  1.0,
    -1.0, -1.0,  1.0,  1.0,  1.0,  1.0, -1.0,  1.0,  1.0,
    // -Z
     1.0, -1.0, -1.0, -1.0, -1.0, -1.0, -1.0,  1.0, -1.0,
     1.0, -1.0, -1.0, -1.0,  1.0, -1.0,  1.0,  1.0, -1.0,
];

pub const NORMALS: [f32; 108] = [
     1.0,  0.0,  0.0,  1.0,  0.0,  0.0,  1.0,  0.0,  0.0,
     1.0,  0.0,  0.0,  1.0,  0.0,  0.0,  1.0,  0.0,  0.0,
    -1.0,  0.0,  0.0, -1.0,  0.0,  0.0, -1.0,  0.0,  0.0,
    -1.0,  0.0,  0.0, -1.0,  0.0,  0.0, -1.0,  0.0,  0.0,
     0.0,  1.0,  0.0,  0.0,  1.0,  0.0,  0.0,  1.0,  0.0,
     0.0,  1.0,  0.0,  0.0,  1.0,  0.0,  0.0,  1.0,  0.0,
     0.0, -1.0,  0.0,  0.0, -1.0,  0.0,  0.0, -1.0,  0.0,
     0.0, -1.0,  0.0,  0.0, -1.0,  0.0,  0.0, -1.0,  0.0,
     0.0,  0.0,  1.0,  0.0,  0.0,  1.0,  0.0,  0.0,  1.0,
     0.0,  0.0,  1.0,  0.0,  0.0,  1.0,  0.0,  0.0,  1.0,
     0.0,  0.0, -1.0,  0.0,  0.0, -1.0,  0.0,  0.0, -1.0,
     0.0,  0.0, -1.0,  0.0,  0.0, -1.0,  0.0,  0.0, -1.0,
];

pub const UVS: [f32; 72] = [
     0.0,  0.0,  1.0,  0.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0,  0.0,  1.0,
     0.0,  0.0,  1.0,  0.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0,  0.0,  1.0,
     0.0,  0.0,  1.0,  0.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0,  0.0,  1.0,
     0.0,  0.0,  1.0,  0.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0,  0.0,  1.0,
     0.0,  0.0,  1.0,  0.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0,  0.0,  1.0,
     0.0,  0.0,  1.0,  0.0,  1.0,  1.0,  0.0,  0.0,  1.0,  1.0,  0.0,  1.0,
];

pub fn mesh_data() -> MeshData<'static> {
    MeshData {
        positions: &POSITIONS,
        normals: &NORMALS,
        uvs: &UVS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::utils::math::{ vec3_cross, vec3_dot, vec3_sub, Vec3 };

    fn vec3_at(data: &[f32], vertex: usize) -> Vec3 {
        [data[vertex * 3], data[vertex * 3 + 1], data[vertex * 3 + 2]]
    }

    #[test]
    fn has_36_vertices() {
        assert_eq!(mesh_data().vertex_count(), 36);
        assert_eq!(UVS.len() / 2, 36);
        assert_eq!(NORMALS.len() / 3, 36);
    }

    #[test]
    fn triangles_wind_towards_their_normals() {
        for tri in 0..12 {
            let a = vec3_at(&POSITIONS, tri * 3);
            let b = vec3_at(&POSITIONS, tri * 3 + 1);
            let c = vec3_at(&POSITIONS, tri * 3 + 2);
            let face_normal = vec3_cross(vec3_sub(b, a), vec3_sub(c, a));
            assert!(vec3_dot(face_normal, vec3_at(&NORMALS, tri * 3)) > 0.0, "triangle {}", tri);
        }
    }

    #[test]
    fn vertices_lie_on_the_surface() {
        for v in 0..36 {
            let p = vec3_at(&POSITIONS, v);
            let n = vec3_at(&NORMALS, v);
            // The component along the normal is the face plane
            assert_eq!(vec3_dot(p, n), 1.0);
        }
    }
}
