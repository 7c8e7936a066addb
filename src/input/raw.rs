//! Low-level input collection: crossterm polling, mouse-wheel swipe coalescing, and
//! translation into primitive events that the higher-level input service can consume.

use crate::error::Result;
use ratatui::crossterm::event::{
    self, Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind,
};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default coalescing window in milliseconds for wheel bursts. A trackpad flick emits many
/// wheel ticks; everything inside one window counts as a single swipe.
const DEFAULT_COALESCE_WINDOW_MS: u64 = 120;
/// Poll timeout used when the caller does not provide one.
const DEFAULT_POLL_TIMEOUT_MS: u64 = 50;

/// Direction of a swipe gesture, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Backward,
    Forward,
}

/// Low-level events surfaced by the raw input collector.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Swipe { direction: SwipeDirection, ticks: u32 },
    Click { column: u16, row: u16 },
}

/// Aggregates bursts of wheel ticks into single swipes.
#[derive(Debug, Clone)]
pub struct InputCoalescer {
    window: Duration,
    pending: Option<PendingSwipe>,
}

#[derive(Debug, Clone)]
struct PendingSwipe {
    direction: SwipeDirection,
    ticks: u32,
    last_event: Instant,
}

impl InputCoalescer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    pub fn with_default_window() -> Self {
        Self::new(Duration::from_millis(DEFAULT_COALESCE_WINDOW_MS))
    }

    /// Register a wheel tick, returning any previously queued swipe that should be flushed.
    pub fn push(&mut self, direction: SwipeDirection, now: Instant) -> Option<(SwipeDirection, u32)> {
        match self.pending {
            None => {
                self.pending = Some(PendingSwipe {
                    direction,
                    ticks: 1,
                    last_event: now,
                });
                None
            }
            Some(ref mut pending) if pending.direction == direction => {
                pending.ticks = pending.ticks.saturating_add(1);
                pending.last_event = now;
                None
            }
            Some(_) => {
                let flushed = self.flush();
                self.pending = Some(PendingSwipe {
                    direction,
                    ticks: 1,
                    last_event: now,
                });
                flushed
            }
        }
    }

    /// Flush the accumulated swipe if the coalescing window has expired.
    pub fn flush_if_stale(&mut self, now: Instant) -> Option<(SwipeDirection, u32)> {
        if let Some(pending) = &self.pending {
            if now.duration_since(pending.last_event) >= self.window {
                return self.flush();
            }
        }
        None
    }

    /// Flush the accumulated swipe immediately.
    pub fn flush(&mut self) -> Option<(SwipeDirection, u32)> {
        self.pending
            .take()
            .map(|pending| (pending.direction, pending.ticks))
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

/// Collector that polls crossterm for events and applies swipe coalescing.
#[derive(Debug)]
pub struct RawInputCollector {
    coalescer: InputCoalescer,
    pending_events: VecDeque<RawInputEvent>,
}

impl RawInputCollector {
    /// Create a collector with the default coalescing window.
    pub fn new() -> Self {
        Self::with_window(Duration::from_millis(DEFAULT_COALESCE_WINDOW_MS))
    }

    /// Create a collector with a custom coalescing window (useful for tests).
    pub fn with_window(window: Duration) -> Self {
        Self {
            coalescer: InputCoalescer::new(window),
            pending_events: VecDeque::new(),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.pending_events.is_empty() && self.coalescer.is_empty()
    }

    /// Process a synthetic event (primarily used by unit tests).
    pub fn process_event(&mut self, event: Event) {
        self.enqueue_event(event, Instant::now());
    }

    /// Return the next ready event without polling crossterm.
    pub fn try_flush(&mut self) -> Option<RawInputEvent> {
        self.try_flush_at(Instant::now())
    }

    fn try_flush_at(&mut self, now: Instant) -> Option<RawInputEvent> {
        self.pop_pending().or_else(|| {
            self.coalescer
                .flush_if_stale(now)
                .map(|(direction, ticks)| RawInputEvent::Swipe { direction, ticks })
        })
    }

    /// Retrieve the next raw input event, blocking up to `timeout`.
    pub fn poll_event(&mut self, timeout: Option<Duration>) -> Result<Option<RawInputEvent>> {
        if let Some(event) = self.try_flush() {
            return Ok(Some(event));
        }

        let poll_timeout = timeout.unwrap_or(Duration::from_millis(DEFAULT_POLL_TIMEOUT_MS));

        if !event::poll(poll_timeout)? {
            return Ok(self.try_flush());
        }

        let event = event::read()?;
        self.enqueue_event(event, Instant::now());
        Ok(self.pop_pending())
    }

    fn enqueue_event(&mut self, event: Event, now: Instant) {
        match event {
            Event::Key(key_event) => {
                self.flush_pending_swipe();
                self.pending_events.push_back(RawInputEvent::Key(key_event));
            }
            Event::Resize(width, height) => {
                self.flush_pending_swipe();
                self.pending_events
                    .push_back(RawInputEvent::Resize { width, height });
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event, now),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent, now: Instant) {
        let direction = match mouse_event.kind {
            MouseEventKind::ScrollUp => SwipeDirection::Backward,
            MouseEventKind::ScrollDown => SwipeDirection::Forward,
            MouseEventKind::Down(MouseButton::Left) => {
                self.flush_pending_swipe();
                self.pending_events.push_back(RawInputEvent::Click {
                    column: mouse_event.column,
                    row: mouse_event.row,
                });
                return;
            }
            _ => return,
        };

        if let Some((direction, ticks)) = self.coalescer.push(direction, now) {
            self.pending_events
                .push_back(RawInputEvent::Swipe { direction, ticks });
        }
    }

    fn flush_pending_swipe(&mut self) {
        if let Some((direction, ticks)) = self.coalescer.flush() {
            self.pending_events
                .push_back(RawInputEvent::Swipe { direction, ticks });
        }
    }

    /// Pop the next pending raw event without touching the coalescer.
    pub fn pop_pending(&mut self) -> Option<RawInputEvent> {
        self.pending_events.pop_front()
    }
}

impl Default for RawInputCollector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn wheel(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn burst_of_ticks_becomes_one_swipe() {
        let mut collector = RawInputCollector::with_window(Duration::from_millis(10));
        let now = Instant::now();

        for offset in 0..4 {
            collector.handle_mouse_event(
                wheel(MouseEventKind::ScrollDown),
                now + Duration::from_millis(offset * 2),
            );
        }
        assert!(collector.try_flush_at(now + Duration::from_millis(8)).is_none());

        let event = collector.try_flush_at(now + Duration::from_millis(30));
        assert_eq!(
            event,
            Some(RawInputEvent::Swipe {
                direction: SwipeDirection::Forward,
                ticks: 4
            })
        );
        assert!(collector.is_idle());
    }

    #[test]
    fn flushes_on_direction_change() {
        let mut coalescer = InputCoalescer::new(Duration::from_millis(10));
        let now = Instant::now();

        assert!(coalescer.push(SwipeDirection::Backward, now).is_none());
        let flushed = coalescer
            .push(SwipeDirection::Forward, now + Duration::from_millis(3))
            .unwrap();
        assert_eq!(flushed, (SwipeDirection::Backward, 1));
        assert_eq!(
            coalescer.flush_if_stale(now + Duration::from_millis(20)),
            Some((SwipeDirection::Forward, 1))
        );
    }

    #[test]
    fn key_press_flushes_pending_swipe_first() {
        let mut collector = RawInputCollector::new();

        collector.handle_mouse_event(wheel(MouseEventKind::ScrollUp), Instant::now());
        collector.process_event(Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));

        assert_eq!(
            collector.try_flush(),
            Some(RawInputEvent::Swipe {
                direction: SwipeDirection::Backward,
                ticks: 1
            })
        );
        match collector.try_flush() {
            Some(RawInputEvent::Key(key)) => assert_eq!(key.code, KeyCode::Enter),
            other => panic!("expected key event, got {other:?}"),
        }
    }

    #[test]
    fn left_click_is_forwarded_with_position() {
        let mut collector = RawInputCollector::new();
        collector.process_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 30,
            modifiers: KeyModifiers::NONE,
        }));
        collector.process_event(Event::Resize(80, 40));

        assert_eq!(
            collector.try_flush(),
            Some(RawInputEvent::Click { column: 12, row: 30 })
        );
        assert_eq!(
            collector.try_flush(),
            Some(RawInputEvent::Resize {
                width: 80,
                height: 40
            })
        );
    }
}
