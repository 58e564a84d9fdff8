//! Startup, the frame loop and shutdown.
//!
//! `launch` runs the three stages in order: it creates the window, context and device
//! through a `Platform`, builds the shader program and vertex array, then drives frames
//! until the window is closed. Any failure during the first stage is fatal and turns into
//! a non-zero exit code; everything after it only logs.

pub mod lifecycle;

mod engine;
pub use self::engine::{Engine, Resources};
pub use self::lifecycle::{FrameLoop, LoopState};

use crate::errors::*;
use crate::video::backends::Visitor as VideoVisitor;
use crate::window::backends::Visitor as WindowVisitor;
use crate::window::WindowParams;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Creates the platform objects the engine runs on.
pub trait Platform {
    /// Opens a window with a rendering context attached to it.
    fn create_window(&mut self, params: &WindowParams) -> Result<Box<dyn WindowVisitor>>;

    /// Loads the graphics entry points of the context owned by `window`, which is current.
    fn create_device(&mut self, window: &dyn WindowVisitor) -> Result<Box<dyn VideoVisitor>>;
}

/// Desktop windows from `glutin` and a device talking OpenGL through `gl`.
#[derive(Debug, Default, Clone, Copy)]
pub struct NativePlatform;

impl Platform for NativePlatform {
    fn create_window(&mut self, params: &WindowParams) -> Result<Box<dyn WindowVisitor>> {
        crate::window::backends::glutin::new(params)
    }

    fn create_device(&mut self, window: &dyn WindowVisitor) -> Result<Box<dyn VideoVisitor>> {
        crate::video::backends::new(window)
    }
}

/// Runs the whole program and returns the process exit code.
pub fn launch<P: Platform>(platform: &mut P, params: &WindowParams) -> i32 {
    let mut engine = match Engine::new(platform, params) {
        Ok(engine) => engine,
        Err(err) => {
            error!("{}", err);
            return EXIT_FAILURE;
        }
    };

    let resources = engine.build();
    let frames = engine.run(&resources);
    info!("Window closed after {} frames.", frames);

    EXIT_SUCCESS
}
