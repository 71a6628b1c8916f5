//! Page-level state and bootstrapping.
//!
//! [`Page`] is the single owner of everything the hero page mutates: the
//! loaded collection, the filter inputs, the renderer, and the chrome around
//! the list (loading skeleton, empty/error state, page loader). The web
//! frontend keeps one `Page` in a signal and forwards DOM events, frames and
//! timer ticks into it.

use zenith_types::{HeroRecord, PageConfig};

use crate::filter::{self, Role};
use crate::loader::{HeroCollection, LoadError};
use crate::render::{FrameOutcome, RenderOutcome, Renderer, Visibility};
use crate::timing::{Debounce, Millis, Throttle};

/// Heading shown above the error message when the initial load fails.
pub const LOAD_FAILED_HEADING: &str = "Failed to load data";

/// Content of the empty-state element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EmptyContent {
    /// Stock "no heroes match" markup
    #[default]
    NoResults,
    /// Error icon, heading and message
    Error { message: String },
}

/// The empty/error state element.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmptyState {
    pub content: EmptyContent,
    /// Forced visible by an error, independent of the renderer
    pub forced: bool,
}

impl EmptyState {
    /// Replace the content with an error. Calling it again with the same
    /// message changes nothing.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.content = EmptyContent::Error {
            message: message.into(),
        };
        self.forced = true;
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.content {
            EmptyContent::Error { message } => Some(message),
            EmptyContent::NoResults => None,
        }
    }
}

/// Loading skeleton shown until the collection arrives.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LoadingIndicator {
    #[default]
    Visible,
    /// Opacity transition running until the given time
    Fading { until: Millis },
    Hidden,
}

impl LoadingIndicator {
    pub fn is_displayed(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Opacity the skeleton should have.
    pub fn opacity(self) -> f64 {
        match self {
            Self::Visible => 1.0,
            Self::Fading { .. } | Self::Hidden => 0.0,
        }
    }
}

/// Full-page loader covering the page until the window has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageLoader {
    #[default]
    Visible,
    HidePending { at: Millis },
    Hidden,
}

impl PageLoader {
    /// True once the loader is gone, which is also when `body.loaded` applies.
    pub fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Whether a keydown should focus the search box (Ctrl+K or Cmd+K).
pub fn is_search_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    (ctrl || meta) && key == "k"
}

/// What a timer poll changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerOutcome {
    /// The debounced search fired and a render was requested
    pub search: Option<RenderOutcome>,
    pub loading_hidden: bool,
    pub page_loader_hidden: bool,
}

/// Application state for one page session.
#[derive(Debug)]
pub struct Page {
    config: PageConfig,
    heroes: Option<HeroCollection>,
    role: Role,
    query: String,
    renderer: Renderer,
    search: Debounce<String>,
    scroll: Throttle,
    last_scroll: Option<Millis>,
    empty_state: EmptyState,
    loading: LoadingIndicator,
    page_loader: PageLoader,
    page_loader_fallback_at: Millis,
    controls_wired: bool,
}

impl Page {
    /// Create the page at time `now` (page start), arming the loader fallback.
    pub fn new(config: PageConfig, now: Millis) -> Self {
        let config = config.validated();
        Self {
            renderer: Renderer::new(&config),
            search: Debounce::new(config.search_debounce_ms),
            scroll: Throttle::new(config.scroll_throttle_ms),
            page_loader_fallback_at: now + config.page_loader_fallback_ms as Millis,
            config,
            heroes: None,
            role: Role::All,
            query: String::new(),
            last_scroll: None,
            empty_state: EmptyState::default(),
            loading: LoadingIndicator::Visible,
            page_loader: PageLoader::Visible,
            controls_wired: false,
        }
    }

    // --- Bootstrap ---

    /// Install the loaded collection, render it and wire the filter controls.
    ///
    /// The collection is set once per session; a second call is ignored and
    /// returns `None`.
    pub fn on_load_success(
        &mut self,
        heroes: HeroCollection,
        now: Millis,
    ) -> Option<RenderOutcome> {
        if self.heroes.is_some() {
            tracing::warn!("Hero collection already loaded, ignoring reload");
            return None;
        }
        tracing::info!(count = heroes.len(), "Hero page ready");
        let initial: Vec<HeroRecord> = heroes.to_vec();
        self.heroes = Some(heroes);
        let outcome = self.renderer.render(initial);
        self.controls_wired = true;
        self.loading = LoadingIndicator::Fading {
            until: now + self.config.loading_fade_ms as Millis,
        };
        Some(outcome)
    }

    /// Surface a load failure. The loading indicator goes away regardless.
    pub fn on_load_failure(&mut self, error: &LoadError) {
        tracing::warn!(error = %error, "Error loading data");
        self.show_error(error.to_string());
        self.loading = LoadingIndicator::Hidden;
    }

    /// Error presenter: swap the empty state to an error and show it.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.empty_state.show_error(message);
    }

    /// The `window` load event fired.
    pub fn on_window_load(&mut self, now: Millis) {
        if self.page_loader == PageLoader::Visible {
            self.page_loader = PageLoader::HidePending {
                at: now + self.config.page_loader_delay_ms as Millis,
            };
        }
    }

    // --- Input ---

    /// Select a role button and re-filter immediately.
    ///
    /// Before the collection has loaded the controls are not wired and the
    /// call does nothing.
    pub fn select_role(&mut self, id: &str) -> Option<RenderOutcome> {
        if !self.controls_wired {
            return None;
        }
        self.role = Role::parse(id);
        Some(self.apply_filters())
    }

    /// Raw search box input; filtering happens once typing pauses.
    pub fn on_search_input(&mut self, now: Millis, text: impl Into<String>) {
        self.search.call(now, text.into());
    }

    /// Scroll events pass through a throttle. Returns whether this one was
    /// accepted.
    pub fn on_scroll(&mut self, now: Millis) -> bool {
        let accepted = self.scroll.try_call(now);
        if accepted {
            self.last_scroll = Some(now);
        }
        accepted
    }

    /// Filter the collection with the current role and query and render it.
    pub fn apply_filters(&mut self) -> RenderOutcome {
        let Some(heroes) = &self.heroes else {
            return RenderOutcome::Dropped;
        };
        let filtered = filter::filter(heroes, &self.role, &self.query);
        tracing::debug!(
            role = %self.role,
            query = %self.query,
            matches = filtered.len(),
            "Applying filters"
        );
        self.renderer.render(filtered)
    }

    // --- Scheduling ---

    /// Fire whatever timers are due at `now`.
    pub fn poll_timers(&mut self, now: Millis) -> TimerOutcome {
        let mut outcome = TimerOutcome::default();

        if let Some(text) = self.search.poll(now) {
            self.query = text;
            if self.controls_wired {
                outcome.search = Some(self.apply_filters());
            }
        }

        if let LoadingIndicator::Fading { until } = self.loading
            && now >= until
        {
            self.loading = LoadingIndicator::Hidden;
            outcome.loading_hidden = true;
        }

        let due = match self.page_loader {
            PageLoader::Hidden => false,
            PageLoader::HidePending { at } => now >= at || now >= self.page_loader_fallback_at,
            PageLoader::Visible => now >= self.page_loader_fallback_at,
        };
        if due {
            self.page_loader = PageLoader::Hidden;
            outcome.page_loader_hidden = true;
        }

        outcome
    }

    /// Earliest time a pending timer needs [`Page::poll_timers`].
    pub fn next_deadline(&self) -> Option<Millis> {
        let loading = match self.loading {
            LoadingIndicator::Fading { until } => Some(until),
            _ => None,
        };
        let loader = match self.page_loader {
            PageLoader::Visible => Some(self.page_loader_fallback_at),
            PageLoader::HidePending { at } => Some(at.min(self.page_loader_fallback_at)),
            PageLoader::Hidden => None,
        };
        [self.search.deadline(), loading, loader]
            .into_iter()
            .flatten()
            .reduce(f64::min)
    }

    /// One animation frame: advance the render pass and every card animation.
    pub fn on_frame(&mut self, now: Millis) -> FrameOutcome {
        let outcome = self.renderer.on_frame();
        for index in 0..self.renderer.cards().len() {
            if let Some(card) = self.renderer.card_mut(index)
                && card.controller.is_animating()
            {
                card.controller
                    .advance(crate::animation::CardEvent::Frame { now });
            }
        }
        outcome
    }

    /// Whether the frame loop has work to do.
    pub fn needs_frame(&self) -> bool {
        self.renderer.is_rendering() || self.renderer.any_animating()
    }

    /// Drop pending timers on page teardown.
    pub fn teardown(&mut self) {
        self.search.cancel();
    }

    // --- Accessors ---

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    pub fn heroes(&self) -> Option<&HeroCollection> {
        self.heroes.as_ref()
    }

    pub fn role(&self) -> &Role {
        &self.role
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    pub fn empty_state(&self) -> &EmptyState {
        &self.empty_state
    }

    /// List/empty-state visibility, with an error forcing the empty state on.
    pub fn visibility(&self) -> Visibility {
        if self.empty_state.forced {
            Visibility {
                list: false,
                empty_state: true,
            }
        } else {
            self.renderer.visibility()
        }
    }

    pub fn loading(&self) -> LoadingIndicator {
        self.loading
    }

    pub fn page_loader(&self) -> PageLoader {
        self.page_loader
    }

    pub fn controls_wired(&self) -> bool {
        self.controls_wired
    }

    pub fn last_scroll(&self) -> Option<Millis> {
        self.last_scroll
    }
}
