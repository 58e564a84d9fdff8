/// The status of the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowEvent {
    /// The window has been woken up by another thread.
    Awakened,
    /// The window has been resumed.
    Resumed,
    /// The window has been suspended.
    Suspended,
    /// The window has been closed.
    Closed,
    /// The window gained focus of user input.
    GainFocus,
    /// The window lost focus of user input.
    LostFocus,
    /// The size of window has changed.
    Resized(u32, u32),
    /// The position of window has changed.
    Moved(i32, i32),
}

/// The enumerations of all events that come from the window.
///
/// Keyboard, mouse and touch input is drained with everything else but never
/// acted upon, so it is kept as an opaque `Input` marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    Window(WindowEvent),
    Input,
}

impl Event {
    /// Returns true if this event asks the application to quit.
    #[inline]
    pub fn is_close(&self) -> bool {
        *self == Event::Window(WindowEvent::Closed)
    }
}
