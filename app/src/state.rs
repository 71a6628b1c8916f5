//! Shared page handle
//!
//! One [`Page`] lives in a signal provided at the app root. Components call
//! into it through [`PageHandle`], which also runs the two background loops
//! the page needs: an animation-frame loop while a render pass or card
//! animation is in flight, and a timeout chain while any timer is pending.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local as spawn;

use zenith_core::PageConfig;
use zenith_core::animation::{Activation, CardEvent};
use zenith_core::page::{Page, TimerOutcome};

use crate::api;

/// DOM id of a card's expansion region.
pub fn expanded_id(card_key: &str) -> String {
    format!("expanded-{card_key}")
}

/// DOM id of a series row's inner variant list.
pub fn series_inner_id(card_key: &str, row: usize) -> String {
    format!("series-inner-{card_key}-{row}")
}

#[derive(Clone, Copy)]
pub struct PageHandle {
    pub page: Signal<Page>,
    frame_loop: Signal<bool>,
    /// Deadline the current timeout sleeper will wake at
    timer_at: Signal<Option<f64>>,
}

impl PageHandle {
    fn new(config: PageConfig) -> Self {
        Self {
            page: Signal::new(Page::new(config, api::now())),
            frame_loop: Signal::new(false),
            timer_at: Signal::new(None),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Background loops
    // ─────────────────────────────────────────────────────────────────────────

    /// Make sure the frame loop runs. It stops by itself once the page has
    /// no render pass and no card animation left.
    pub fn kick_frames(self) {
        let mut running = self.frame_loop;
        if *running.peek() {
            return;
        }
        running.set(true);

        let mut page = self.page;
        spawn(async move {
            loop {
                let ts = api::next_frame().await;
                self.measure_pending(ts);
                let busy = match page.try_write() {
                    Ok(mut p) => {
                        p.on_frame(ts);
                        p.needs_frame()
                    }
                    Err(_) => false,
                };
                if !busy {
                    break;
                }
            }
            let _ = running.try_write().map(|mut w| *w = false);
        });
    }

    /// Arm a timeout for the page's earliest pending deadline. A sleeper
    /// already armed for an earlier or equal time is left alone; each sleeper
    /// re-arms for whatever is pending after it fires.
    pub fn kick_timers(self) {
        let mut armed = self.timer_at;
        let Some(deadline) = self.page.try_peek().ok().and_then(|p| p.next_deadline()) else {
            return;
        };
        if (*armed.peek()).is_some_and(|at| at <= deadline) {
            return;
        }
        armed.set(Some(deadline));

        let mut page = self.page;
        spawn(async move {
            let wait = (deadline - api::now()).max(0.0).ceil() as u32;
            TimeoutFuture::new(wait).await;

            if armed.try_peek().ok().and_then(|at| *at) == Some(deadline) {
                let _ = armed.try_write().map(|mut w| *w = None);
            }
            let outcome = match page.try_write() {
                Ok(mut p) => p.poll_timers(api::now()),
                Err(_) => return,
            };
            self.after_timers(outcome);
            self.kick_timers();
        });
    }

    fn after_timers(self, outcome: TimerOutcome) {
        if outcome.search.is_some() {
            self.kick_frames();
        }
        if outcome.page_loader_hidden {
            api::set_body_class("loaded", true);
        }
    }

    /// Feed natural heights to cards that accepted a toggle since the last
    /// frame. The region exists in the DOM by now, with its content built.
    fn measure_pending(self, now: f64) {
        let mut page = self.page;
        let pending: Vec<(usize, String)> = match page.try_peek() {
            Ok(p) => p
                .renderer()
                .cards()
                .iter()
                .enumerate()
                .filter(|(_, c)| c.controller.needs_measure())
                .map(|(idx, c)| (idx, c.view.key.clone()))
                .collect(),
            Err(_) => return,
        };

        for (idx, key) in pending {
            let height = api::scroll_height(&expanded_id(&key));
            if let Ok(mut p) = page.try_write()
                && let Some(card) = p.renderer_mut().card_mut(idx)
            {
                card.controller
                    .advance(CardEvent::Measured { height, now });
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Input
    // ─────────────────────────────────────────────────────────────────────────

    /// Pointer or keyboard activation of a card's chevron.
    pub fn toggle_card(self, index: usize, activation: Activation) {
        let mut page = self.page;
        if let Ok(mut p) = page.try_write()
            && let Some(card) = p.renderer_mut().card_mut(index)
        {
            card.controller.advance(activation.into());
        }
        self.kick_frames();
    }

    /// Pointer or keyboard activation of a series row header.
    pub fn toggle_series(self, card_index: usize, card_key: &str, row: usize) {
        let inner_height = api::scroll_height(&series_inner_id(card_key, row));
        let mut page = self.page;
        if let Ok(mut p) = page.try_write()
            && let Some(card) = p.renderer_mut().card_mut(card_index)
        {
            card.controller.toggle_series(row, inner_height);
        }
    }

    pub fn select_role(self, id: &str) {
        let mut page = self.page;
        let started = page
            .try_write()
            .ok()
            .and_then(|mut p| p.select_role(id))
            .is_some();
        if started {
            self.kick_frames();
        }
    }

    pub fn search_input(self, text: String) {
        let mut page = self.page;
        if let Ok(mut p) = page.try_write() {
            p.on_search_input(api::now(), text);
        }
        self.kick_timers();
    }

    pub fn window_loaded(self) {
        let mut page = self.page;
        if let Ok(mut p) = page.try_write() {
            p.on_window_load(api::now());
        }
        self.kick_timers();
    }

    pub fn scrolled(self) {
        let mut page = self.page;
        if let Ok(mut p) = page.try_write() {
            p.on_scroll(api::now());
        }
    }

    pub fn teardown(self) {
        let mut page = self.page;
        if let Ok(mut p) = page.try_write() {
            p.teardown();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bootstrap
    // ─────────────────────────────────────────────────────────────────────────

    /// Load the collection once, then hand off to the renderer or the error
    /// presenter.
    pub async fn bootstrap(self) {
        // page loader fallback is armed from page creation
        self.kick_timers();

        let url = match self.page.try_peek() {
            Ok(p) => p.config().data_url.clone(),
            Err(_) => return,
        };
        let result = api::fetch_heroes(&url).await;

        let mut page = self.page;
        match result {
            Ok(heroes) => {
                if let Ok(mut p) = page.try_write() {
                    p.on_load_success(heroes, api::now());
                }
                self.kick_frames();
            }
            Err(err) => {
                if let Ok(mut p) = page.try_write() {
                    p.on_load_failure(&err);
                }
            }
        }
        self.kick_timers();
    }
}

/// Initialize the page handle at app root.
pub fn use_page_provider(config: PageConfig) -> PageHandle {
    use_context_provider(|| PageHandle::new(config))
}

/// Get the page handle from context.
pub fn use_page() -> PageHandle {
    use_context::<PageHandle>()
}
