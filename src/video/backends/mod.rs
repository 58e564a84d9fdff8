//! The backend of renderer, which should be responsible for only one thing:
//! submitting draw-calls using low-level OpenGL video APIs.

pub mod headless;

use crate::math::prelude::Color;

use super::mesh::VertexAttribute;
use super::shader::ShaderStage;
use super::{ProgramHandle, ShaderHandle, Status, VertexArrayHandle};

/// A GPU device. Implementations assume the context they were created for stays
/// current on the calling thread.
pub trait Visitor {
    fn compile_shader(&mut self, stage: ShaderStage, src: &str) -> Status<ShaderHandle>;

    fn link_program(&mut self, shaders: &[ShaderHandle]) -> Status<ProgramHandle>;

    fn delete_shader(&mut self, handle: ShaderHandle);

    /// Creates a vertex array backed by a new buffer holding `bytes` as static data.
    fn create_vertex_array(&mut self, bytes: &[u8], attribute: VertexAttribute)
        -> VertexArrayHandle;

    /// Clears the color buffer of the default framebuffer.
    fn clear(&mut self, color: Color<f32>);

    /// Draws `count` vertices as a triangle list.
    fn draw(&mut self, program: ProgramHandle, vao: VertexArrayHandle, count: u32);
}

pub mod gl;

pub use self::gl::new;
