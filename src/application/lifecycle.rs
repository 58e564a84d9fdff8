use crate::window::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Tracks whether the frame loop should keep going. The only transition is
/// `Running` to `Stopped`, taken when the window is closed.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    state: LoopState,
}

impl Default for FrameLoop {
    fn default() -> Self {
        FrameLoop::new()
    }
}

impl FrameLoop {
    pub fn new() -> Self {
        FrameLoop {
            state: LoopState::Running,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Feeds one polled event. Everything but a close request is ignored.
    pub fn on(&mut self, v: &Event) -> LoopState {
        if v.is_close() && self.state == LoopState::Running {
            debug!("Close requested, stopping after this frame.");
            self.state = LoopState::Stopped;
        }

        self.state
    }
}
