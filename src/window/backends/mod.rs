pub mod headless;

use std::os::raw::c_void;

use crate::errors::*;

use super::events::Event;

pub trait Visitor {
    fn poll_events(&mut self, events: &mut Vec<Event>);
    fn is_current(&self) -> bool;
    fn make_current(&self) -> Result<()>;
    fn swap_buffers(&self) -> Result<()>;
    /// Returns the address of an OpenGL function, or null if the symbol is unknown.
    fn get_proc_address(&self, symbol: &str) -> *const c_void;
}

pub mod glutin;
