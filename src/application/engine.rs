use crate::errors::*;
use crate::scene;
use crate::video::backends::Visitor as VideoVisitor;
use crate::video::prelude::{ShaderProgram, VertexArrayHandle};
use crate::video::{mesh, shader};
use crate::window::backends::Visitor as WindowVisitor;
use crate::window::events::Event;
use crate::window::WindowParams;

use super::lifecycle::FrameLoop;
use super::Platform;

/// GPU objects created once at startup and used by every frame.
#[derive(Debug, Clone)]
pub struct Resources {
    pub program: ShaderProgram,
    pub vertex_array: VertexArrayHandle,
}

/// `Engine` owns the window and the device, and drives frames on the thread that
/// created them.
pub struct Engine {
    // Fields drop in declaration order, the device must go before its context.
    video: Box<dyn VideoVisitor>,
    window: Box<dyn WindowVisitor>,
    events: Vec<Event>,
}

impl Engine {
    /// Creates the window, binds its context to this thread and loads the device.
    pub fn new<P: Platform + ?Sized>(platform: &mut P, params: &WindowParams) -> Result<Self> {
        let window = platform.create_window(params)?;
        window.make_current()?;
        let video = platform.create_device(&*window)?;
        Ok(Engine::from_visitors(window, video))
    }

    pub fn from_visitors(window: Box<dyn WindowVisitor>, video: Box<dyn VideoVisitor>) -> Self {
        Engine {
            video,
            window,
            events: Vec::new(),
        }
    }

    /// Compiles the shader program and uploads the vertex data.
    pub fn build(&mut self) -> Resources {
        let program = shader::build(&mut *self.video, scene::VS, scene::FS);
        let size = scene::VERTICES.len() * std::mem::size_of::<f32>();
        let vertex_array = mesh::build(&mut *self.video, &scene::VERTICES, size);

        debug!(
            "Built program {} and vertex array {}.",
            program.handle.id(),
            vertex_array.id()
        );

        Resources {
            program,
            vertex_array,
        }
    }

    /// Runs the main loop until the window is closed, and returns the number of
    /// presented frames. The frame in which the close request arrives is still drawn.
    pub fn run(&mut self, resources: &Resources) -> u64 {
        let mut lifecycle = FrameLoop::new();
        let mut frames = 0;

        while lifecycle.is_running() {
            self.events.clear();
            self.window.poll_events(&mut self.events);
            for v in &self.events {
                lifecycle.on(v);
            }

            self.video.clear(scene::CLEAR_COLOR);
            self.video.draw(
                resources.program.handle,
                resources.vertex_array,
                scene::DRAW_COUNT,
            );

            if let Err(err) = self.window.swap_buffers() {
                warn!("Failed to swap buffers. {}", err);
            }

            frames += 1;
        }

        frames
    }
}
