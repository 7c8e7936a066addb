//! Application orchestration layer
//!
//! Wires the input thread, the paging coordinator, the terminal animation host and the renderer
//! together. Every input action maps to at most one coordinator request; every frame tick steps
//! the host's animations and reports finished slides back to the coordinator.

use crate::config::TourConfig;
use crate::error::{Result, TourError};
use crate::input::{spawn_input_thread, InputAction};
use crate::paging::PagingCoordinator;
use crate::render::ui::{HitTarget, TextPageRenderer, TourLayout, UIRenderer, ViewState};
use crate::render::TerminalHost;
use log::{debug, info};
use ratatui::layout::Rect;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::{Interval, MissedTickBehavior};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(25);

/// How the tour ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The user pressed the dismiss button.
    Dismissed,
    /// The user quit without dismissing.
    Quit,
}

/// Application orchestrator - owns the coordinator and its host surface
pub struct Application {
    coordinator: PagingCoordinator<TextPageRenderer>,
    host: TerminalHost,
    ui_renderer: Box<dyn UIRenderer>,
    config: TourConfig,
    layout: TourLayout,
}

impl Application {
    /// Build the catalog from config and start the coordinator on the first page
    pub fn new(config: TourConfig, ui_renderer: Box<dyn UIRenderer>) -> Result<Self> {
        let catalog = config.catalog()?;
        let mut host = TerminalHost::new(config.transition());
        let coordinator = PagingCoordinator::initialize(
            catalog,
            TextPageRenderer::default(),
            config.paging_options(),
            &mut host,
        );

        let (width, height) = ui_renderer.get_terminal_size()?;
        let layout = TourLayout::new(Rect::new(0, 0, width, height));

        Ok(Self {
            coordinator,
            host,
            ui_renderer,
            config,
            layout,
        })
    }

    /// Run the tour until it is dismissed or quit
    pub async fn run(&mut self) -> Result<Outcome> {
        self.ui_renderer.initialize()?;

        let (tx, mut rx) = mpsc::unbounded_channel();
        let shutdown = Arc::new(AtomicBool::new(false));
        let input_thread = spawn_input_thread(tx, Arc::clone(&shutdown), INPUT_POLL_INTERVAL);

        let mut ticker = tokio::time::interval(self.config.tick());
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let outcome = self.event_loop(&mut rx, &mut ticker).await;

        shutdown.store(true, Ordering::SeqCst);
        let joined = input_thread.join();
        self.ui_renderer.cleanup()?;

        if joined.is_err() {
            return Err(TourError::ui("input thread panicked"));
        }
        let outcome = outcome?;
        info!("tour ended: {:?}", outcome);
        Ok(outcome)
    }

    async fn event_loop(
        &mut self,
        rx: &mut mpsc::UnboundedReceiver<InputAction>,
        ticker: &mut Interval,
    ) -> Result<Outcome> {
        loop {
            tokio::select! {
                action = rx.recv() => match action {
                    Some(action) => {
                        if let Some(outcome) = self.handle_action(action) {
                            return Ok(outcome);
                        }
                    }
                    // Input thread is gone; nothing can drive the tour anymore.
                    None => return Ok(Outcome::Quit),
                },
                _ = ticker.tick() => {
                    self.tick(Instant::now());
                    self.render()?;
                }
            }
        }
    }

    /// Apply one input action. Returns an outcome when the tour should end.
    pub fn handle_action(&mut self, action: InputAction) -> Option<Outcome> {
        match action {
            InputAction::NextPage => {
                let target = self
                    .coordinator
                    .neighbor_after(self.coordinator.selected_index());
                self.coordinator.request_page(target, &mut self.host);
                None
            }
            InputAction::PreviousPage => {
                let target = self
                    .coordinator
                    .neighbor_before(self.coordinator.selected_index());
                self.coordinator.request_page(target, &mut self.host);
                None
            }
            InputAction::SelectPage(index) => {
                self.coordinator.request_page(index, &mut self.host);
                None
            }
            InputAction::Click { column, row } => {
                match self
                    .layout
                    .hit_test(column, row, self.coordinator.page_count())
                {
                    Some(HitTarget::IndicatorDot(index)) => {
                        self.coordinator.request_page(index, &mut self.host);
                        None
                    }
                    Some(HitTarget::DismissButton) => Some(Outcome::Dismissed),
                    None => None,
                }
            }
            InputAction::Dismiss => Some(Outcome::Dismissed),
            InputAction::Quit => Some(Outcome::Quit),
            InputAction::Resize { width, height } => {
                debug!("resize to {width}x{height}");
                self.layout = TourLayout::new(Rect::new(0, 0, width, height));
                None
            }
            InputAction::NoAction | InputAction::InvalidInput => None,
        }
    }

    /// Step animations to `now`, reporting a finished slide to the coordinator
    pub fn tick(&mut self, now: Instant) {
        if let Some(transition) = self.host.advance(now) {
            self.coordinator
                .finish_transition(transition, &mut self.host);
        }
    }

    pub fn render(&mut self) -> Result<()> {
        let view_state = self.host.view_state(&self.config.button_label);
        self.ui_renderer.render(&view_state)
    }

    pub fn view_state(&self) -> ViewState<'_> {
        self.host.view_state(&self.config.button_label)
    }

    pub fn coordinator(&self) -> &PagingCoordinator<TextPageRenderer> {
        &self.coordinator
    }

    pub fn host(&self) -> &TerminalHost {
        &self.host
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ui::{MockUIRenderer, PageView};

    fn app() -> Application {
        Application::new(TourConfig::default(), Box::new(MockUIRenderer::new())).unwrap()
    }

    /// Tick far enough past the transition length to finish whatever slide is running.
    fn settle(app: &mut Application, now: &mut Instant) {
        app.tick(*now);
        *now += Duration::from_secs(1);
        app.tick(*now);
    }

    #[test]
    fn starts_on_first_page() {
        let app = app();
        assert_eq!(app.coordinator().current_index(), 0);
        let view = app.view_state();
        assert_eq!(view.indicator, 0);
        assert_eq!(view.indicator_count, 2);
        assert_eq!(view.button_label, "What a technology!");
        assert!(matches!(view.page, PageView::Static(_)));
    }

    #[test]
    fn swipe_forward_wraps_around() {
        let mut app = app();
        let mut now = Instant::now();

        app.handle_action(InputAction::NextPage);
        assert!(app.coordinator().is_transitioning());
        assert_eq!(app.view_state().indicator, 1);
        settle(&mut app, &mut now);
        assert_eq!(app.coordinator().current_index(), 1);

        app.handle_action(InputAction::NextPage);
        settle(&mut app, &mut now);
        assert_eq!(app.coordinator().current_index(), 0);
    }

    #[test]
    fn swipes_during_a_slide_step_from_the_selected_page() {
        let mut app = app();
        let mut now = Instant::now();

        app.handle_action(InputAction::NextPage);
        app.tick(now);
        // Second swipe lands back on page 0 before the first slide finishes.
        app.handle_action(InputAction::NextPage);
        assert_eq!(app.coordinator().selected_index(), 0);
        assert_eq!(app.view_state().indicator, 0);

        // First slide settles on 1, then a new slide heads back to 0.
        now += Duration::from_secs(1);
        app.tick(now);
        assert_eq!(app.coordinator().current_index(), 1);
        assert!(app.coordinator().is_transitioning());

        settle(&mut app, &mut now);
        assert_eq!(app.coordinator().current_index(), 0);
        assert!(!app.coordinator().is_transitioning());
    }

    #[test]
    fn indicator_click_selects_page() {
        let mut app = app();
        // Default mock terminal is 40x20: indicator row 13, dots at columns 18 and 20.
        assert_eq!(app.handle_action(InputAction::Click { column: 20, row: 13 }), None);
        assert_eq!(app.coordinator().selected_index(), 1);

        assert_eq!(app.handle_action(InputAction::Click { column: 3, row: 2 }), None);
        assert_eq!(app.coordinator().selected_index(), 1);
    }

    #[test]
    fn dismiss_and_quit_end_the_tour() {
        let mut app = app();
        assert_eq!(
            app.handle_action(InputAction::Click { column: 10, row: 17 }),
            Some(Outcome::Dismissed)
        );
        assert_eq!(
            app.handle_action(InputAction::Dismiss),
            Some(Outcome::Dismissed)
        );
        assert_eq!(app.handle_action(InputAction::Quit), Some(Outcome::Quit));
    }

    #[test]
    fn out_of_range_selection_is_ignored() {
        let mut app = app();
        app.handle_action(InputAction::SelectPage(7));
        assert_eq!(app.coordinator().selected_index(), 0);
        assert!(!app.coordinator().is_transitioning());
    }

    #[test]
    fn resize_moves_click_targets() {
        let mut app = app();
        app.handle_action(InputAction::Resize {
            width: 80,
            height: 30,
        });
        // 80x30: indicator row 23, two dots centered at columns 38 and 40.
        app.handle_action(InputAction::Click { column: 40, row: 23 });
        assert_eq!(app.coordinator().selected_index(), 1);
    }

    #[test]
    fn render_draws_through_renderer() {
        let mut app = app();
        assert!(app.render().is_ok());
    }
}
