//! Immediate-mode plumbing shared by the widgets.
//!
//! A [`Host`] owns the [`EventSource`] and runs one frame at a time: it
//! routes queued input, lays out the root widget into a fresh [`Ops`] sink,
//! copies the drawn cells into the caller's buffer, and keeps the registered
//! hit regions for routing the next frame's input.

pub mod events;
pub mod flex;
pub mod frame;
pub mod gesture;
pub mod grid;

use crossterm::event::Event;
use ratatui::{buffer::Buffer, layout::Size};
use tracing::trace;

use self::{
    events::EventSource,
    frame::{Constraints, FrameContext, Ops},
};

#[derive(Debug, Default)]
pub struct Host {
    source: EventSource,
}

impl Host {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a terminal event for the next frame.
    pub fn push(&mut self, event: Event) {
        self.source.push(event);
    }

    /// Runs one interactive frame covering `target`.
    pub fn frame(&mut self, target: &mut Buffer, root: impl FnOnce(&mut FrameContext<'_>) -> Size) -> Size {
        self.source.begin_frame();
        let mut ops = Ops::new(target.area);
        let size = {
            let mut ctx = FrameContext::new(Constraints::loose(target.area.as_size()), Some(&mut self.source), &mut ops);
            root(&mut ctx)
        };
        ops.flush(target);
        let regions = ops.take_regions();
        trace!(regions = regions.len(), ?size, "frame finished");
        self.source.end_frame(regions);
        size
    }

    /// Runs a frame without an event source; widgets render disabled.
    pub fn inert_frame(target: &mut Buffer, root: impl FnOnce(&mut FrameContext<'_>) -> Size) -> Size {
        let mut ops = Ops::new(target.area);
        let size = {
            let mut ctx = FrameContext::new(Constraints::loose(target.area.as_size()), None, &mut ops);
            root(&mut ctx)
        };
        ops.flush(target);
        size
    }
}
