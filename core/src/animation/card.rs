//! Per-card expand/collapse state machine.
//!
//! ```text
//!             Toggle                Measured + Frames
//! Collapsed ─────────▶ Expanding ─────────────────────▶ Expanded
//!     ▲                                                     │
//!     │        Measured + Frames                Toggle      │
//!     └──────────────────────── Collapsing ◀────────────────┘
//! ```
//!
//! Only `Collapsed` and `Expanded` accept a toggle. While a height tween is
//! running every toggle is dropped, which keeps completion exactly-once
//! without needing to cancel anything.

use std::sync::Arc;

use zenith_types::HeroRecord;

use super::Activation;
use super::series::SeriesRow;
use super::tween::HeightTween;
use crate::timing::Millis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardState {
    #[default]
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

impl CardState {
    /// Whether a height animation owns the card right now.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Expanding | Self::Collapsing)
    }
}

/// Input to [`CardController::advance`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardEvent {
    /// Pointer click or keyboard activation of the chevron
    Toggle,
    /// Natural height of the expansion region, measured after a toggle
    Measured { height: f64, now: Millis },
    /// Animation frame tick
    Frame { now: Millis },
}

impl From<Activation> for CardEvent {
    fn from(_: Activation) -> Self {
        Self::Toggle
    }
}

/// What an event did to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Event not applicable in the current state
    Ignored,
    /// A toggle was accepted and a transition began
    Started(CardState),
    /// Animation progressed
    Updated,
    /// Animation finished; the card rests in the given state
    Settled(CardState),
}

/// Height of the expansion region as it should be written to the element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RegionHeight {
    /// No inline height
    #[default]
    Unset,
    Px(f64),
    /// Size to content
    Auto,
}

/// Inline style and classes of the expansion region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionStyle {
    pub displayed: bool,
    pub height: RegionHeight,
    /// `overflow: hidden` while animating
    pub clipped: bool,
    /// The `.show` class
    pub show: bool,
}

/// Expand/collapse controller owned by one rendered card.
#[derive(Debug, Clone)]
pub struct CardController {
    hero: Arc<HeroRecord>,
    state: CardState,
    duration_ms: u32,
    series_stagger_ms: u32,
    series: Option<Vec<SeriesRow>>,
    build_count: u32,
    tween: Option<HeightTween>,
    region: RegionStyle,
    chevron_active: bool,
}

impl CardController {
    pub fn new(hero: Arc<HeroRecord>, duration_ms: u32, series_stagger_ms: u32) -> Self {
        Self {
            hero,
            state: CardState::Collapsed,
            duration_ms,
            series_stagger_ms,
            series: None,
            build_count: 0,
            tween: None,
            region: RegionStyle::default(),
            chevron_active: false,
        }
    }

    /// Single entry point for all card input.
    pub fn advance(&mut self, event: CardEvent) -> Advance {
        match (self.state, event) {
            (CardState::Collapsed, CardEvent::Toggle) => {
                self.ensure_series();
                self.state = CardState::Expanding;
                self.region = RegionStyle {
                    displayed: true,
                    height: RegionHeight::Px(0.0),
                    clipped: true,
                    show: false,
                };
                Advance::Started(CardState::Expanding)
            }
            (CardState::Expanded, CardEvent::Toggle) => {
                self.state = CardState::Collapsing;
                self.region.clipped = true;
                Advance::Started(CardState::Collapsing)
            }
            (CardState::Expanding | CardState::Collapsing, CardEvent::Toggle) => Advance::Ignored,

            (CardState::Expanding, CardEvent::Measured { height, now }) if self.tween.is_none() => {
                self.tween = Some(HeightTween::new(0.0, height, self.duration_ms, now));
                self.region.show = true;
                Advance::Updated
            }
            (CardState::Collapsing, CardEvent::Measured { height, now })
                if self.tween.is_none() =>
            {
                self.tween = Some(HeightTween::new(height, 0.0, self.duration_ms, now));
                self.region.height = RegionHeight::Px(height);
                self.region.show = false;
                Advance::Updated
            }

            (CardState::Expanding | CardState::Collapsing, CardEvent::Frame { now }) => {
                self.chevron_active = self.is_open();
                let Some(tween) = self.tween.as_mut() else {
                    return Advance::Ignored;
                };
                let frame = tween.sample(now);
                self.region.height = RegionHeight::Px(frame.height);
                if frame.completed {
                    self.finish()
                } else {
                    Advance::Updated
                }
            }

            _ => Advance::Ignored,
        }
    }

    fn finish(&mut self) -> Advance {
        self.tween = None;
        match self.state {
            CardState::Expanding => {
                self.state = CardState::Expanded;
                self.region = RegionStyle {
                    displayed: true,
                    height: RegionHeight::Auto,
                    clipped: false,
                    show: true,
                };
            }
            CardState::Collapsing => {
                self.state = CardState::Collapsed;
                self.region = RegionStyle::default();
            }
            CardState::Collapsed | CardState::Expanded => {}
        }
        Advance::Settled(self.state)
    }

    /// Build the series rows the first time the card opens.
    fn ensure_series(&mut self) {
        if self.series.is_some() {
            return;
        }
        let rows = self
            .hero
            .series
            .iter()
            .enumerate()
            .map(|(idx, group)| SeriesRow::new(idx, group, self.series_stagger_ms))
            .collect();
        self.series = Some(rows);
        self.build_count += 1;
    }

    /// Toggle one series row. Returns false if the card has no such row yet.
    pub fn toggle_series(&mut self, index: usize, inner_height: f64) -> bool {
        match self.series.as_mut().and_then(|rows| rows.get_mut(index)) {
            Some(row) => {
                row.toggle(inner_height);
                true
            }
            None => false,
        }
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Logical open flag.
    pub fn is_open(&self) -> bool {
        matches!(self.state, CardState::Expanding | CardState::Expanded)
    }

    /// The chevron's `active` class. Follows [`Self::is_open`] one frame
    /// behind a toggle.
    pub fn chevron_active(&self) -> bool {
        self.chevron_active
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// A toggle was accepted but the region has not been measured yet.
    pub fn needs_measure(&self) -> bool {
        self.state.is_animating() && self.tween.is_none()
    }

    pub fn region(&self) -> RegionStyle {
        self.region
    }

    /// Series rows, `None` until the first expand.
    pub fn series(&self) -> Option<&[SeriesRow]> {
        self.series.as_deref()
    }

    /// How many times the series content has been built.
    pub fn build_count(&self) -> u32 {
        self.build_count
    }
}
