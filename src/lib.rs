//! Opens a window, compiles a fixed shader pair, uploads two triangles and draws them
//! every frame until the window is closed.
//!
//! The platform sits behind two traits, `window::backends::Visitor` for the window and
//! its context and `video::backends::Visitor` for the GPU, so the whole program can run
//! against the headless backends as well as against `glutin` and OpenGL.

#[macro_use]
extern crate failure;
#[macro_use]
extern crate log;

pub mod errors;

pub mod application;
pub mod math;
pub mod scene;
pub mod video;
pub mod window;

pub mod prelude {
    pub use crate::application::{launch, Engine, NativePlatform, Platform, Resources};
    pub use crate::math::prelude::*;
    pub use crate::window::WindowParams;
}
