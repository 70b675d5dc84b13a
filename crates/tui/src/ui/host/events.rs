//! Input accumulation and routing between frames.
//!
//! The host pushes raw crossterm events into an [`EventSource`] as they
//! arrive. At the start of each frame [`EventSource::begin_frame`] routes the
//! queued pointer events to every tag whose hit region, registered during the
//! previous frame, contains the pointer. Regions never swallow events: a press
//! over a nested button is delivered to the button and to its container.
//! Key events go to whichever tag holds focus when they are drained.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use tracing::trace;

use crate::ui::focus::FocusStore;

static NEXT_TAG: AtomicU64 = AtomicU64::new(1);

/// Opaque identity used to subscribe to events and focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(u64);

impl Tag {
    /// Allocates a process-unique tag.
    pub fn next() -> Self {
        Self(NEXT_TAG.fetch_add(1, Ordering::Relaxed))
    }
}

/// A rectangle in absolute buffer coordinates bound to a tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRegion {
    pub tag: Tag,
    pub area: Rect,
}

/// Events accumulated by the host since the previous frame.
#[derive(Debug, Default)]
pub struct EventSource {
    pending: Vec<Event>,
    pointer_queue: Vec<(Tag, MouseEvent)>,
    key_queue: VecDeque<KeyEvent>,
    regions: Vec<HitRegion>,
    pointer: Option<Position>,
    focus: FocusStore,
}

impl EventSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw terminal event for the next frame.
    pub fn push(&mut self, event: Event) {
        self.pending.push(event);
    }

    pub fn focus(&self) -> &FocusStore {
        &self.focus
    }

    pub fn focus_mut(&mut self) -> &mut FocusStore {
        &mut self.focus
    }

    /// Routes everything pushed since the last frame.
    ///
    /// Routed events that were not drained during the previous frame are
    /// dropped here, so nothing is replayed across frames.
    pub fn begin_frame(&mut self) {
        self.pointer_queue.clear();
        self.key_queue.clear();

        for event in std::mem::take(&mut self.pending) {
            match event {
                Event::Mouse(mouse) => self.route_mouse(mouse),
                Event::Key(key) if key.kind != KeyEventKind::Release => self.key_queue.push_back(key),
                _ => {}
            }
        }
    }

    /// Installs the regions registered during the frame that just ended.
    pub fn end_frame(&mut self, regions: Vec<HitRegion>) {
        self.regions = regions;
    }

    fn route_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        self.pointer = Some(position);

        if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
            && let Some(focused) = self.focus.current()
            && !self.tag_contains(focused, position)
        {
            self.focus.clear();
        }

        let mut delivered: Vec<Tag> = Vec::new();
        for region in &self.regions {
            if region.area.contains(position) && !delivered.contains(&region.tag) {
                delivered.push(region.tag);
                self.pointer_queue.push((region.tag, mouse));
            }
        }
        trace!(?position, kind = ?mouse.kind, recipients = delivered.len(), "pointer event routed");
    }

    fn tag_contains(&self, tag: Tag, position: Position) -> bool {
        self.regions
            .iter()
            .any(|region| region.tag == tag && region.area.contains(position))
    }

    /// Takes the pointer events routed to `tag`, in arrival order.
    pub fn drain_pointer(&mut self, tag: Tag) -> Vec<MouseEvent> {
        let mut drained = Vec::new();
        self.pointer_queue.retain(|(target, event)| {
            if *target == tag {
                drained.push(*event);
                false
            } else {
                true
            }
        });
        drained
    }

    /// Takes the queued key events if `tag` holds focus.
    pub fn drain_keys(&mut self, tag: Tag) -> Vec<KeyEvent> {
        if !self.focus.is_focused(tag) {
            return Vec::new();
        }
        self.key_queue.drain(..).collect()
    }

    /// Whether the pointer currently rests over any region of `tag`.
    pub fn is_hovered(&self, tag: Tag) -> bool {
        self.pointer.is_some_and(|position| self.tag_contains(tag, position))
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn pointer_events_pass_through_nested_regions() {
        let outer = Tag::next();
        let inner = Tag::next();
        let mut source = EventSource::new();
        source.end_frame(vec![
            HitRegion {
                tag: outer,
                area: Rect::new(0, 0, 10, 3),
            },
            HitRegion {
                tag: inner,
                area: Rect::new(8, 1, 1, 1),
            },
        ]);

        source.push(mouse(MouseEventKind::Down(MouseButton::Left), 8, 1));
        source.begin_frame();

        assert_eq!(source.drain_pointer(outer).len(), 1);
        assert_eq!(source.drain_pointer(inner).len(), 1);
        assert!(source.drain_pointer(outer).is_empty(), "events are consumed once");
    }

    #[test]
    fn undrained_events_do_not_survive_the_next_frame() {
        let tag = Tag::next();
        let mut source = EventSource::new();
        source.end_frame(vec![HitRegion {
            tag,
            area: Rect::new(0, 0, 4, 1),
        }]);
        source.push(mouse(MouseEventKind::Down(MouseButton::Left), 1, 0));
        source.begin_frame();
        source.begin_frame();

        assert!(source.drain_pointer(tag).is_empty());
    }

    #[test]
    fn hover_is_a_current_predicate() {
        let tag = Tag::next();
        let mut source = EventSource::new();
        source.end_frame(vec![HitRegion {
            tag,
            area: Rect::new(2, 2, 3, 1),
        }]);

        assert!(!source.is_hovered(tag));
        source.push(mouse(MouseEventKind::Moved, 3, 2));
        source.begin_frame();
        assert!(source.is_hovered(tag));
        assert!(source.is_hovered(tag));

        source.push(mouse(MouseEventKind::Moved, 9, 9));
        source.begin_frame();
        assert!(!source.is_hovered(tag));
    }

    #[test]
    fn keys_reach_only_the_focused_tag() {
        let focused = Tag::next();
        let other = Tag::next();
        let mut source = EventSource::new();
        source.focus_mut().request(focused);
        source.push(Event::Key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        source.begin_frame();

        assert!(source.drain_keys(other).is_empty());
        assert_eq!(source.drain_keys(focused).len(), 1);
    }

    #[test]
    fn press_outside_focused_region_blurs() {
        let tag = Tag::next();
        let mut source = EventSource::new();
        source.end_frame(vec![HitRegion {
            tag,
            area: Rect::new(0, 0, 5, 1),
        }]);
        source.focus_mut().request(tag);

        source.push(mouse(MouseEventKind::Down(MouseButton::Left), 2, 0));
        source.begin_frame();
        assert!(source.focus().is_focused(tag));

        source.push(mouse(MouseEventKind::Down(MouseButton::Left), 20, 5));
        source.begin_frame();
        assert_eq!(source.focus().current(), None);
    }
}
