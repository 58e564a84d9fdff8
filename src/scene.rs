//! The fixed content drawn by the demo: one shader pair and two triangles.

use std::mem;

use crate::math::prelude::Color;

pub const VS: &str = "#version 330 core\n\
                      layout (location = 0) in vec3 aPos;\n\
                      void main()\n\
                      {\n\
                      \x20  gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);\n\
                      }";

pub const FS: &str = "#version 330 core\n\
                      out vec4 FragColor;\n\
                      void main()\n\
                      {\n\
                      \x20  FragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);\n\
                      }\n";

/// Number of floats describing one vertex position.
pub const COMPONENTS: usize = 3;

/// Two triangles side by side, three positions each.
#[rustfmt::skip]
pub const VERTICES: [f32; 18] = [
    // first triangle
    -0.9, -0.5, 0.0,  // left
    -0.0, -0.5, 0.0,  // right
    -0.45, 0.5, 0.0,  // top
    // second triangle
    0.0, -0.5, 0.0,   // left
    0.9, -0.5, 0.0,   // right
    0.45, 0.5, 0.0,   // top
];

pub const CLEAR_COLOR: Color<f32> = Color {
    r: 0.2,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// Number of vertices submitted per draw call.
///
/// This is the byte size of a `usize`, not the number of vertices in `VERTICES`. With a
/// triangle list the trailing incomplete primitive is discarded, so the two triangles are
/// drawn either way.
pub const DRAW_COUNT: u32 = mem::size_of::<usize>() as u32;

/// Returns the number of whole triangles described by a flat position array.
#[inline]
pub fn triangles(vertices: &[f32]) -> usize {
    vertices.len() / (COMPONENTS * 3)
}
