//! A window without a screen. Events are scripted up front, one batch per
//! `poll_events` call, and the number of presented frames is recorded.

use std::cell::Cell;
use std::collections::VecDeque;
use std::os::raw::c_void;
use std::rc::Rc;

use crate::errors::*;

use super::super::events::{Event, WindowEvent};
use super::Visitor;

pub struct HeadlessVisitor {
    frames: VecDeque<Vec<Event>>,
    presented: Rc<Cell<u32>>,
    broken_context: bool,
}

impl HeadlessVisitor {
    /// Creates a headless window that delivers `frames` in order. Once the script
    /// runs out a `Closed` event is delivered so loops always terminate.
    pub fn new<T>(frames: T) -> Self
    where
        T: IntoIterator<Item = Vec<Event>>,
    {
        HeadlessVisitor {
            frames: frames.into_iter().collect(),
            presented: Rc::new(Cell::new(0)),
            broken_context: false,
        }
    }

    /// Makes `make_current` fail, as if the context could not be bound.
    pub fn with_broken_context(mut self) -> Self {
        self.broken_context = true;
        self
    }

    /// Returns a shared counter of swapped frames.
    pub fn presented(&self) -> Rc<Cell<u32>> {
        self.presented.clone()
    }
}

impl Visitor for HeadlessVisitor {
    fn poll_events(&mut self, events: &mut Vec<Event>) {
        match self.frames.pop_front() {
            Some(batch) => events.extend(batch),
            None => events.push(Event::Window(WindowEvent::Closed)),
        }
    }

    #[inline]
    fn is_current(&self) -> bool {
        !self.broken_context
    }

    #[inline]
    fn make_current(&self) -> Result<()> {
        if self.broken_context {
            bail!("Unable to make context current: headless context is broken.");
        }

        Ok(())
    }

    #[inline]
    fn swap_buffers(&self) -> Result<()> {
        self.presented.set(self.presented.get() + 1);
        Ok(())
    }

    #[inline]
    fn get_proc_address(&self, _: &str) -> *const c_void {
        std::ptr::null()
    }
}
