use std::os::raw::c_void;

use glutin::GlContext;

use crate::errors::*;

use super::super::super::events::Event;
use super::super::super::WindowParams;
use super::super::Visitor;
use super::types;

pub struct GlutinVisitor {
    window: glutin::GlWindow,
    events_loop: glutin::EventsLoop,
}

impl GlutinVisitor {
    /// Opens a window with an OpenGL context attached. The context is not made current
    /// here; `Visitor::make_current` does that.
    pub fn from(params: &WindowParams) -> Result<Self> {
        let builder = glutin::WindowBuilder::new()
            .with_title(params.title.clone())
            .with_dimensions(glutin::dpi::LogicalSize::new(
                f64::from(params.size.x),
                f64::from(params.size.y),
            ))
            .with_resizable(params.resizable);

        let (major, minor) = params.gl_version;
        let context = glutin::ContextBuilder::new()
            .with_multisampling(params.multisample)
            .with_gl_profile(glutin::GlProfile::Core)
            .with_gl(glutin::GlRequest::Specific(glutin::Api::OpenGl, (major, minor)))
            .with_vsync(params.vsync);

        let events_loop = glutin::EventsLoop::new();
        let window = glutin::GlWindow::new(builder, context, &events_loop)
            .map_err(|err| format_err!("Unable to create window: {}", err))?;

        window.set_position(glutin::dpi::LogicalPosition::new(
            f64::from(params.position.x),
            f64::from(params.position.y),
        ));

        debug!(
            "Created window {:?} with {}x{} points.",
            params.title, params.size.x, params.size.y
        );

        Ok(GlutinVisitor {
            window,
            events_loop,
        })
    }
}

impl Visitor for GlutinVisitor {
    #[inline]
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        self.events_loop.poll_events(|v| {
            if let Some(e) = types::from_event(v) {
                events.push(e);
            }
        });
    }

    #[inline]
    fn is_current(&self) -> bool {
        self.window.is_current()
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        unsafe {
            self.window
                .make_current()
                .map_err(|err| format_err!("Unable to make context current: {}", err))?;
            Ok(())
        }
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.window.swap_buffers()?;
        Ok(())
    }

    #[inline]
    fn get_proc_address(&self, symbol: &str) -> *const c_void {
        self.window.get_proc_address(symbol) as *const _
    }
}
