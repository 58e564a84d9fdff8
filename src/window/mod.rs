//! Represents an OpenGL context and the window or environment around it.
pub mod backends;
pub mod events;

pub mod prelude {
    pub use super::backends::Visitor;
    pub use super::events::{Event, WindowEvent};
    pub use super::WindowParams;
}

use crate::math::prelude::Vector2;

#[derive(Debug, Clone)]
pub struct WindowParams {
    /// Sets the title of window.
    pub title: String,
    /// Sets the size in *points* of the client area of the window.
    pub size: Vector2<u32>,
    /// Sets the position of the window's top-left corner on the desktop.
    pub position: Vector2<i32>,
    /// Sets the OpenGL version to request, the core profile is always used.
    pub gl_version: (u8, u8),
    /// Sets the multisampling level to request. A value of 0 indicates that
    /// multisampling must not be enabled.
    pub multisample: u16,
    /// Specifies whether should we have vsync.
    pub vsync: bool,
    /// Specifies whether the user can resize the window.
    pub resizable: bool,
}

impl Default for WindowParams {
    fn default() -> Self {
        WindowParams {
            title: "A window".to_owned(),
            size: Vector2::new(800, 600),
            position: Vector2::new(0, 0),
            gl_version: (3, 3),
            multisample: 0,
            vsync: false,
            resizable: false,
        }
    }
}
