// Row-major 4x4 matrices. Upload to GL with `transpose = true`.
pub type Mat4x4 = [f32; 16];
pub type Vec3 = [f32; 3];

pub const X_AXIS: Vec3 = [1.0, 0.0, 0.0];
pub const Y_AXIS: Vec3 = [0.0, 1.0, 0.0];
pub const Z_AXIS: Vec3 = [0.0, 0.0, 1.0];

pub fn mat4x4_identity() -> Mat4x4 {
    [
      1.0, 0.0, 0.0, 0.0,
      0.0, 1.0, 0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_translate(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
      1.0, 0.0, 0.0,  x,
      0.0, 1.0, 0.0,  y,
      0.0, 0.0, 1.0,  z,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_rot_x(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
      1.0, 0.0, 0.0, 0.0,
      0.0,  c,  -s,  0.0,
      0.0,  s,   c,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_rot_y(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
       c,  0.0,  s,  0.0,
      0.0, 1.0, 0.0, 0.0,
      -s,  0.0,  c,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_rot_z(angle: f32) -> Mat4x4 {
    let c = angle.cos();
    let s = angle.sin();

    [
       c,  -s,  0.0, 0.0,
       s,   c,  0.0, 0.0,
      0.0, 0.0, 1.0, 0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_scale(x: f32, y: f32, z: f32) -> Mat4x4 {
    [
       x,  0.0, 0.0, 0.0,
      0.0,  y,  0.0, 0.0,
      0.0, 0.0,  z,  0.0,
      0.0, 0.0, 0.0, 1.0
    ]
}

pub fn mat4x4_transpose(matrix: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for i in 0..16 {
        let row = i / 4;
        let col = i % 4;
        ret[col * 4 + row] = matrix[row * 4 + col];
    }
    ret
}

pub fn vec4_dot(a: [f32; 4], b: [f32; 4]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

pub fn mat4x4_row(mat: &Mat4x4, row: usize) -> [f32; 4] {
    let start_idx = row * 4;
    [mat[start_idx], mat[start_idx + 1], mat[start_idx + 2], mat[start_idx + 3]]
}

pub fn mat4x4_col(mat: &Mat4x4, col: usize) -> [f32; 4] {
    [mat[col], mat[4 + col], mat[8 + col], mat[12 + col]]
}

pub fn mat4x4_mul(a: Mat4x4, b: Mat4x4) -> Mat4x4 {
    let mut ret = [0.0; 16];
    for (i, cell) in ret.iter_mut().enumerate() {
        let a_row = mat4x4_row(&a, i / 4);
        let b_col = mat4x4_col(&b, i % 4);
        *cell = vec4_dot(a_row, b_col);
    }
    ret
}

// Running-matrix helpers: each one right-multiplies, so the step applied
// last is the one closest to the vertex.

/// `m · R(angle, axis)` for one of the three principal axes.
pub fn mat4x4_rotate(m: Mat4x4, angle: f32, axis: Vec3) -> Mat4x4 {
    let rotation = if axis == X_AXIS {
        mat4x4_rot_x(angle)
    } else if axis == Y_AXIS {
        mat4x4_rot_y(angle)
    } else if axis == Z_AXIS {
        mat4x4_rot_z(angle)
    } else {
        mat4x4_axis_angle(angle, axis)
    };
    mat4x4_mul(m, rotation)
}

pub fn mat4x4_then_translate(m: Mat4x4, offset: Vec3) -> Mat4x4 {
    mat4x4_mul(m, mat4x4_translate(offset[0], offset[1], offset[2]))
}

pub fn mat4x4_then_scale(m: Mat4x4, factor: Vec3) -> Mat4x4 {
    mat4x4_mul(m, mat4x4_scale(factor[0], factor[1], factor[2]))
}

// Rodrigues rotation about an arbitrary axis
fn mat4x4_axis_angle(angle: f32, axis: Vec3) -> Mat4x4 {
    let [x, y, z] = vec3_normalize(axis);
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    [
        t * x * x + c,      t * x * y - s * z,  t * x * z + s * y,  0.0,
        t * x * y + s * z,  t * y * y + c,      t * y * z - s * x,  0.0,
        t * x * z - s * y,  t * y * z + s * x,  t * z * z + c,      0.0,
        0.0,                0.0,                0.0,                1.0,
    ]
}

/// Right-handed perspective projection with clip-space depth in -1..1.
pub fn mat4x4_perspective(fov_y_radians: f32, aspect_ratio: f32, near: f32, far: f32) -> Mat4x4 {
    let f = 1.0 / (fov_y_radians * 0.5).tan();
    let range_inv = 1.0 / (near - far);

    [
        f / aspect_ratio, 0.0, 0.0,                          0.0,
        0.0,              f,   0.0,                          0.0,
        0.0,              0.0, (near + far) * range_inv,     (2.0 * near * far) * range_inv,
        0.0,              0.0, -1.0,                         0.0,
    ]
}

/// Right-handed view matrix looking from `eye` towards `target`.
pub fn mat4x4_look_at(eye: Vec3, target: Vec3, up: Vec3) -> Mat4x4 {
    let forward = vec3_normalize(vec3_sub(target, eye));
    let side = vec3_normalize(vec3_cross(forward, up));
    let true_up = vec3_cross(side, forward);

    [
        side[0],     side[1],     side[2],     -vec3_dot(side, eye),
        true_up[0],  true_up[1],  true_up[2],  -vec3_dot(true_up, eye),
        -forward[0], -forward[1], -forward[2], vec3_dot(forward, eye),
        0.0,         0.0,         0.0,         1.0,
    ]
}

pub fn mat4x4_transform_point(m: &Mat4x4, p: Vec3) -> Vec3 {
    let v = [p[0], p[1], p[2], 1.0];
    let x = vec4_dot(mat4x4_row(m, 0), v);
    let y = vec4_dot(mat4x4_row(m, 1), v);
    let z = vec4_dot(mat4x4_row(m, 2), v);
    let w = vec4_dot(mat4x4_row(m, 3), v);
    if w != 0.0 && w != 1.0 {
        [x / w, y / w, z / w]
    } else {
        [x, y, z]
    }
}

pub fn vec3_sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn vec3_dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn vec3_cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn vec3_normalize(v: Vec3) -> Vec3 {
    let len = vec3_dot(v, v).sqrt();
    if len == 0.0 {
        return v;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}
