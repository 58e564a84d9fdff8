use super::super::super::events::{Event, WindowEvent};

pub fn from_event(source: glutin::Event) -> Option<Event> {
    match source {
        glutin::Event::WindowEvent { event, .. } => from_window_event(&event),

        glutin::Event::Awakened => Some(Event::Window(WindowEvent::Awakened)),

        glutin::Event::Suspended(v) => if v {
            Some(Event::Window(WindowEvent::Suspended))
        } else {
            Some(Event::Window(WindowEvent::Resumed))
        },

        glutin::Event::DeviceEvent { .. } => None,
    }
}

fn from_window_event(source: &glutin::WindowEvent) -> Option<Event> {
    match *source {
        glutin::WindowEvent::CloseRequested => Some(Event::Window(WindowEvent::Closed)),

        glutin::WindowEvent::Focused(v) => if v {
            Some(Event::Window(WindowEvent::GainFocus))
        } else {
            Some(Event::Window(WindowEvent::LostFocus))
        },

        glutin::WindowEvent::Resized(glutin::dpi::LogicalSize { width, height }) => Some(
            Event::Window(WindowEvent::Resized(width as u32, height as u32)),
        ),

        glutin::WindowEvent::Moved(glutin::dpi::LogicalPosition { x, y }) => {
            Some(Event::Window(WindowEvent::Moved(x as i32, y as i32)))
        }

        glutin::WindowEvent::CursorMoved { .. }
        | glutin::WindowEvent::MouseWheel { .. }
        | glutin::WindowEvent::MouseInput { .. }
        | glutin::WindowEvent::KeyboardInput { .. }
        | glutin::WindowEvent::ReceivedCharacter(_)
        | glutin::WindowEvent::Touch(_) => Some(Event::Input),

        _ => None,
    }
}
