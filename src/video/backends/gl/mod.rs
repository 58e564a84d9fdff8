pub mod capabilities;
pub mod types;
pub mod visitor;

use crate::errors::*;
use crate::window::backends::Visitor as WindowVisitor;

use super::Visitor;

/// Loads the OpenGL entry points through `window` and creates a device on top of them.
///
/// The context of `window` must be current on this thread.
pub fn new(window: &dyn WindowVisitor) -> Result<Box<dyn Visitor>> {
    if !window.is_current() {
        bail!("[GL] The context is not current on this thread.");
    }

    let visitor = unsafe { self::visitor::GLVisitor::load(window)? };
    Ok(Box::new(visitor))
}
