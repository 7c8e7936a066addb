//! High-level input service.
//!
//! Consumes coalesced raw events, applies the tour key bindings, and yields domain-level
//! `InputAction`s that the application loop feeds into the paging coordinator.

use crate::catalog::MAX_PAGES;
use crate::error::Result;
use crate::input::raw::{RawInputCollector, RawInputEvent, SwipeDirection};
use log::debug;
use ratatui::crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// High-level input actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Swipe toward the following page.
    NextPage,
    /// Swipe toward the preceding page.
    PreviousPage,
    /// Indicator tap on a zero-based page index. Not range checked here.
    SelectPage(usize),
    /// Mouse click at a screen position, resolved against the layout by the application.
    Click { column: u16, row: u16 },
    /// The dismiss button.
    Dismiss,
    Quit,
    Resize { width: u16, height: u16 },
    NoAction,
    InvalidInput,
}

/// Map a key press to an action.
pub fn translate_key(key_event: KeyEvent) -> InputAction {
    if key_event.kind != KeyEventKind::Press {
        return InputAction::NoAction;
    }

    match (key_event.code, key_event.modifiers) {
        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            InputAction::Quit
        }
        (_, modifiers) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            InputAction::InvalidInput
        }
        (KeyCode::Right | KeyCode::PageDown | KeyCode::Tab, _)
        | (KeyCode::Char('l') | KeyCode::Char(' '), _) => InputAction::NextPage,
        (KeyCode::Left | KeyCode::PageUp | KeyCode::BackTab, _) | (KeyCode::Char('h'), _) => {
            InputAction::PreviousPage
        }
        (KeyCode::Char(digit @ '1'..='9'), _) => {
            let index = digit as usize - '1' as usize;
            if index < MAX_PAGES {
                InputAction::SelectPage(index)
            } else {
                InputAction::InvalidInput
            }
        }
        (KeyCode::Enter, _) => InputAction::Dismiss,
        (KeyCode::Char('q') | KeyCode::Esc, _) => InputAction::Quit,
        _ => InputAction::InvalidInput,
    }
}

/// Service responsible for producing high-level `InputAction`s from terminal events.
pub struct InputService {
    raw_input: RawInputCollector,
}

impl InputService {
    pub fn new() -> Self {
        Self {
            raw_input: RawInputCollector::new(),
        }
    }

    pub fn poll_actions(&mut self, timeout: Option<Duration>) -> Result<Vec<InputAction>> {
        let mut actions = Vec::new();

        if let Some(raw_event) = self.raw_input.poll_event(timeout)? {
            if let Some(action) = Self::process_raw_event(raw_event) {
                actions.push(action);
            }

            while let Some(extra_event) = self.raw_input.try_flush() {
                if let Some(action) = Self::process_raw_event(extra_event) {
                    actions.push(action);
                }
            }
        }

        Ok(actions)
    }

    pub fn process_event(&mut self, event: Event) -> Vec<InputAction> {
        let mut actions = Vec::new();
        self.raw_input.process_event(event);
        while let Some(raw_event) = self.raw_input.try_flush() {
            if let Some(action) = Self::process_raw_event(raw_event) {
                actions.push(action);
            }
        }
        actions
    }

    fn process_raw_event(event: RawInputEvent) -> Option<InputAction> {
        let action = match event {
            RawInputEvent::Key(key_event) => translate_key(key_event),
            RawInputEvent::Resize { width, height } => InputAction::Resize { width, height },
            RawInputEvent::Swipe { direction, ticks } => {
                debug!("input: {direction:?} swipe from {ticks} wheel ticks");
                match direction {
                    SwipeDirection::Forward => InputAction::NextPage,
                    SwipeDirection::Backward => InputAction::PreviousPage,
                }
            }
            RawInputEvent::Click { column, row } => InputAction::Click { column, row },
        };

        match action {
            InputAction::NoAction | InputAction::InvalidInput => None,
            _ => Some(action),
        }
    }
}

impl Default for InputService {
    fn default() -> Self {
        Self::new()
    }
}

/// Spawn a blocking thread that polls for terminal events and forwards actions to the app loop.
pub fn spawn_input_thread(
    tx: UnboundedSender<InputAction>,
    shutdown: Arc<AtomicBool>,
    poll_interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut service = InputService::new();
        while !shutdown.load(Ordering::SeqCst) {
            match service.poll_actions(Some(poll_interval)) {
                Ok(actions) => {
                    for action in actions {
                        if tx.send(action).is_err() {
                            return;
                        }
                    }
                }
                Err(err) => {
                    log::error!("input thread error: {}", err);
                    break;
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn swipe_keys_map_to_page_steps() {
        assert_eq!(translate_key(key(KeyCode::Right)), InputAction::NextPage);
        assert_eq!(translate_key(key(KeyCode::Char('l'))), InputAction::NextPage);
        assert_eq!(translate_key(key(KeyCode::Char(' '))), InputAction::NextPage);
        assert_eq!(translate_key(key(KeyCode::Left)), InputAction::PreviousPage);
        assert_eq!(translate_key(key(KeyCode::Char('h'))), InputAction::PreviousPage);
        assert_eq!(translate_key(key(KeyCode::Tab)), InputAction::NextPage);
        assert_eq!(translate_key(key(KeyCode::BackTab)), InputAction::PreviousPage);
        assert_eq!(translate_key(key(KeyCode::PageDown)), InputAction::NextPage);
        assert_eq!(translate_key(key(KeyCode::PageUp)), InputAction::PreviousPage);
    }

    #[test]
    fn wheel_burst_is_a_single_page_step() {
        let burst = RawInputEvent::Swipe {
            direction: SwipeDirection::Forward,
            ticks: 5,
        };
        assert_eq!(
            InputService::process_raw_event(burst),
            Some(InputAction::NextPage)
        );

        let back = RawInputEvent::Swipe {
            direction: SwipeDirection::Backward,
            ticks: 1,
        };
        assert_eq!(
            InputService::process_raw_event(back),
            Some(InputAction::PreviousPage)
        );
    }

    #[test]
    fn digits_select_zero_based_pages() {
        assert_eq!(
            translate_key(key(KeyCode::Char('1'))),
            InputAction::SelectPage(0)
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('9'))),
            InputAction::SelectPage(8)
        );
        assert_eq!(
            translate_key(key(KeyCode::Char('0'))),
            InputAction::InvalidInput
        );
    }

    #[test]
    fn dismiss_and_quit_bindings() {
        assert_eq!(translate_key(key(KeyCode::Enter)), InputAction::Dismiss);
        assert_eq!(translate_key(key(KeyCode::Esc)), InputAction::Quit);
        assert_eq!(translate_key(key(KeyCode::Char('q'))), InputAction::Quit);
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            InputAction::Quit
        );
        assert_eq!(
            translate_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::ALT)),
            InputAction::InvalidInput
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut release = key(KeyCode::Right);
        release.kind = KeyEventKind::Release;
        assert_eq!(translate_key(release), InputAction::NoAction);
    }

    #[test]
    fn events_pass_through_service_in_order() {
        let mut service = InputService::new();

        let click = service.process_event(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        }));
        assert_eq!(click, vec![InputAction::Click { column: 4, row: 9 }]);

        // Unmapped keys are dropped rather than forwarded.
        assert!(service.process_event(Event::Key(key(KeyCode::Char('z')))).is_empty());

        let resize = service.process_event(Event::Resize(100, 30));
        assert_eq!(
            resize,
            vec![InputAction::Resize {
                width: 100,
                height: 30
            }]
        );
    }
}
