use std::ffi::CString;
use std::os::raw::c_void;

use gl::types::*;

use crate::errors::*;
use crate::math::prelude::Color;
use crate::window::backends::Visitor as WindowVisitor;

use super::super::super::mesh::VertexAttribute;
use super::super::super::shader::ShaderStage;
use super::super::super::{ProgramHandle, ShaderHandle, Status, VertexArrayHandle};
use super::super::Visitor;
use super::capabilities::Capabilities;

macro_rules! require_entry_points {
    ($($name:ident,)+) => {
        $(
            if !gl::$name::is_loaded() {
                bail!("[GL] Failed to load entry point gl{}.", stringify!($name));
            }
        )+
    };
}

pub struct GLVisitor {}

impl GLVisitor {
    /// Resolves every OpenGL entry point through `window` and creates the device.
    ///
    /// # Unsafe
    ///
    /// The context of `window` must be current on this thread.
    pub unsafe fn load(window: &dyn WindowVisitor) -> Result<Self> {
        gl::load_with(|symbol| window.get_proc_address(symbol));
        Self::new()
    }

    pub unsafe fn new() -> Result<Self> {
        require_entry_points! {
            GetError,
            GetString,
            GetIntegerv,
            CreateShader,
            ShaderSource,
            CompileShader,
            GetShaderiv,
            GetShaderInfoLog,
            DeleteShader,
            CreateProgram,
            AttachShader,
            LinkProgram,
            GetProgramiv,
            GetProgramInfoLog,
            UseProgram,
            GenBuffers,
            BindBuffer,
            BufferData,
            GenVertexArrays,
            BindVertexArray,
            VertexAttribPointer,
            EnableVertexAttribArray,
            ClearColor,
            Clear,
            DrawArrays,
        }

        let capabilities = Capabilities::parse()?;
        debug!("GLVisitor {:#?}", capabilities);
        capabilities.check()?;

        if !capabilities.is_core() {
            warn!(
                "Requested a core profile context, got {:?}.",
                capabilities.profile
            );
        }

        info!("Status: Using OpenGL {}", capabilities.version_desc);
        Ok(GLVisitor {})
    }
}

impl Visitor for GLVisitor {
    fn compile_shader(&mut self, stage: ShaderStage, src: &str) -> Status<ShaderHandle> {
        unsafe {
            let handle = ShaderHandle(gl::CreateShader(stage.into()));

            // The driver reads sources as C strings.
            let src = match CString::new(src.as_bytes()) {
                Ok(v) => v,
                Err(err) => {
                    let pos = err.nul_position();
                    return Status::failed(
                        handle,
                        format!("Source contains an interior nul byte at {}.", pos),
                    );
                }
            };

            gl::ShaderSource(handle.0, 1, &src.as_ptr(), std::ptr::null());
            gl::CompileShader(handle.0);

            // Get the compile status
            let mut status = GLint::from(gl::FALSE);
            gl::GetShaderiv(handle.0, gl::COMPILE_STATUS, &mut status);

            if status != GLint::from(gl::TRUE) {
                Status::failed(handle, shader_info_log(handle.0))
            } else {
                Status::ok(handle)
            }
        }
    }

    fn link_program(&mut self, shaders: &[ShaderHandle]) -> Status<ProgramHandle> {
        unsafe {
            let handle = ProgramHandle(gl::CreateProgram());
            for shader in shaders {
                gl::AttachShader(handle.0, shader.0);
            }

            gl::LinkProgram(handle.0);

            // Get the link status
            let mut status = GLint::from(gl::FALSE);
            gl::GetProgramiv(handle.0, gl::LINK_STATUS, &mut status);

            if status != GLint::from(gl::TRUE) {
                Status::failed(handle, program_info_log(handle.0))
            } else {
                Status::ok(handle)
            }
        }
    }

    fn delete_shader(&mut self, handle: ShaderHandle) {
        unsafe {
            gl::DeleteShader(handle.0);
        }
    }

    fn create_vertex_array(
        &mut self,
        bytes: &[u8],
        attribute: VertexAttribute,
    ) -> VertexArrayHandle {
        unsafe {
            let mut vao = 0;
            let mut vbo = 0;
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);

            gl::BindVertexArray(vao);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);

            let value = if bytes.is_empty() {
                std::ptr::null()
            } else {
                bytes.as_ptr() as *const c_void
            };

            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                value,
                gl::STATIC_DRAW,
            );

            gl::VertexAttribPointer(
                attribute.location,
                GLint::from(attribute.size),
                gl::FLOAT,
                attribute.normalized as GLboolean,
                GLsizei::from(attribute.stride),
                usize::from(attribute.offset) as *const c_void,
            );

            gl::EnableVertexAttribArray(attribute.location);

            gl::BindBuffer(gl::ARRAY_BUFFER, 0);
            gl::BindVertexArray(0);

            if let Err(err) = check() {
                warn!("Failed to create vertex array {}. {}", vao, err);
            }

            VertexArrayHandle(vao)
        }
    }

    fn clear(&mut self, color: Color<f32>) {
        let color = color.clip();
        unsafe {
            gl::ClearColor(color.r, color.g, color.b, color.a);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn draw(&mut self, program: ProgramHandle, vao: VertexArrayHandle, count: u32) {
        unsafe {
            gl::UseProgram(program.0);
            gl::BindVertexArray(vao.0);
            gl::DrawArrays(gl::TRIANGLES, 0, count as GLsizei);
        }
    }
}

unsafe fn shader_info_log(shader: GLuint) -> String {
    let mut len = 0;
    gl::GetShaderiv(shader, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written = 0;
    gl::GetShaderInfoLog(
        shader,
        len,
        &mut written,
        buf.as_mut_ptr() as *mut GLchar,
    );

    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

unsafe fn program_info_log(program: GLuint) -> String {
    let mut len = 0;
    gl::GetProgramiv(program, gl::INFO_LOG_LENGTH, &mut len);
    if len <= 0 {
        return String::new();
    }

    let mut buf = vec![0u8; len as usize];
    let mut written = 0;
    gl::GetProgramInfoLog(
        program,
        len,
        &mut written,
        buf.as_mut_ptr() as *mut GLchar,
    );

    buf.truncate(written.max(0) as usize);
    String::from_utf8_lossy(&buf).into_owned()
}

unsafe fn check() -> Result<()> {
    match gl::GetError() {
        gl::NO_ERROR => Ok(()),

        gl::INVALID_ENUM => {
            bail!("[GL] An unacceptable value is specified for an enumerated argument.")
        }

        gl::INVALID_VALUE => bail!("[GL] A numeric argument is out of range."),

        gl::INVALID_OPERATION => {
            bail!("[GL] The specified operation is not allowed in the current state.")
        }

        gl::OUT_OF_MEMORY => bail!("[GL] There is not enough memory left to execute the command."),
        _ => bail!("[GL] Oops, Unknown OpenGL error."),
    }
}
