//! GPU-side resources and the backends that create them.
//!
//! The two builders in this module, `shader::build` and `mesh::build`, are the only
//! places that allocate GPU objects. Both run once at startup and hand back plain
//! integer handles that stay valid for the rest of the process.

pub mod backends;
pub mod mesh;
pub mod shader;

pub mod prelude {
    pub use super::backends::Visitor;
    pub use super::mesh::VertexAttribute;
    pub use super::shader::{ShaderProgram, ShaderStage, Stage};
    pub use super::{ProgramHandle, ShaderHandle, Status, VertexArrayHandle};
}

macro_rules! impl_gl_handle {
    ($name: ident) => {
        /// An opaque name of a GPU object. Zero is never a valid name.
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub(crate) u32);

        impl $name {
            #[inline]
            pub fn id(&self) -> u32 {
                self.0
            }

            #[inline]
            pub fn is_valid(&self) -> bool {
                self.0 != 0
            }
        }
    };
}

impl_gl_handle!(ShaderHandle);
impl_gl_handle!(ProgramHandle);
impl_gl_handle!(VertexArrayHandle);

/// The result of a compile or link step. The handle is always returned, even if the
/// driver rejected the object, in which case `info_log` carries its complaint.
#[derive(Debug, Clone, PartialEq)]
pub struct Status<H> {
    pub handle: H,
    pub info_log: Option<String>,
}

impl<H> Status<H> {
    #[inline]
    pub fn ok(handle: H) -> Self {
        Status {
            handle,
            info_log: None,
        }
    }

    #[inline]
    pub fn failed<T: Into<String>>(handle: H, info_log: T) -> Self {
        Status {
            handle,
            info_log: Some(info_log.into()),
        }
    }
}
